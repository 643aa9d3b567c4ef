pub mod produto;
pub mod reposicao;
