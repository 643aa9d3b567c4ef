pub mod produto_repo;
pub use produto_repo::ProdutoRepository;
pub mod reposicao_repo;
pub use reposicao_repo::ReposicaoRepository;
