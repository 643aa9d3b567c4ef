// src/services/produto_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::ProdutoRepository,
    models::produto::{NivelEstoque, Produto, ProdutoComEstoque},
};

#[derive(Clone)]
pub struct ProdutoService {
    produto_repo: ProdutoRepository,
}

impl ProdutoService {
    pub fn new(produto_repo: ProdutoRepository) -> Self {
        Self { produto_repo }
    }

    pub async fn listar_com_estoque(&self) -> Result<Vec<ProdutoComEstoque>, AppError> {
        self.produto_repo.find_all_com_estoque().await
    }

    pub async fn buscar(&self, id: Uuid) -> Result<Produto, AppError> {
        self.produto_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ProdutoNotFound)
    }

    pub async fn niveis_de_estoque(&self, id: Uuid) -> Result<Vec<NivelEstoque>, AppError> {
        // 404 para produto inexistente; produto sem linhas de saldo é lista vazia.
        self.buscar(id).await?;
        self.produto_repo.niveis_por_produto(id).await
    }
}
