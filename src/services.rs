pub mod produto_service;
pub use produto_service::ProdutoService;
pub mod reposicao_service;
pub use reposicao_service::ReposicaoService;
