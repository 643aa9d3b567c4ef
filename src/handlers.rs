pub mod produtos;
pub mod reposicao;
