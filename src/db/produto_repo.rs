// src/db/produto_repo.rs

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::produto::{NivelEstoque, Produto, ProdutoComEstoque, VendaAgregada},
};

// Linha auxiliar do saldo consolidado por local.
#[derive(FromRow)]
struct SaldoRow {
    estoque_local: i64,
    estoque_full: i64,
}

// O repositório de produtos: catálogo, saldos e vendas agregadas.
// Tudo aqui é leitura; as movimentações de estoque acontecem fora deste serviço.
#[derive(Clone)]
pub struct ProdutoRepository {
    pool: PgPool,
}

impl ProdutoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Busca um produto pelo seu ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Produto>, AppError> {
        let produto = sqlx::query_as::<_, Produto>("SELECT * FROM produtos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(produto)
    }

    // Catálogo completo, ordenado por nome
    pub async fn find_all(&self) -> Result<Vec<Produto>, AppError> {
        let produtos = sqlx::query_as::<_, Produto>("SELECT * FROM produtos ORDER BY nome")
            .fetch_all(&self.pool)
            .await?;
        Ok(produtos)
    }

    // Listagem com o saldo consolidado por local (LOCAL x FULL)
    pub async fn find_all_com_estoque(&self) -> Result<Vec<ProdutoComEstoque>, AppError> {
        let produtos = sqlx::query_as::<_, ProdutoComEstoque>(
            r#"
            SELECT
                p.id,
                p.sku,
                p.nome,
                p.tipo_anuncio,
                COALESCE(SUM(n.quantidade) FILTER (WHERE n.local = 'LOCAL'), 0)::BIGINT AS estoque_local,
                COALESCE(SUM(n.quantidade) FILTER (WHERE n.local = 'FULL'), 0)::BIGINT AS estoque_full
            FROM produtos p
            LEFT JOIN niveis_estoque n ON n.produto_id = p.id
            GROUP BY p.id, p.sku, p.nome, p.tipo_anuncio
            ORDER BY p.nome
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(produtos)
    }

    // Saldo de um produto somado por local. Produto sem linha de estoque
    // retorna (0, 0) — ausência não é erro para o cálculo de reposição.
    pub async fn saldo_por_local(&self, produto_id: Uuid) -> Result<(i64, i64), AppError> {
        let saldo = sqlx::query_as::<_, SaldoRow>(
            r#"
            SELECT
                COALESCE(SUM(quantidade) FILTER (WHERE local = 'LOCAL'), 0)::BIGINT AS estoque_local,
                COALESCE(SUM(quantidade) FILTER (WHERE local = 'FULL'), 0)::BIGINT AS estoque_full
            FROM niveis_estoque
            WHERE produto_id = $1
            "#,
        )
        .bind(produto_id)
        .fetch_one(&self.pool)
        .await?;
        Ok((saldo.estoque_local, saldo.estoque_full))
    }

    // Níveis de estoque de um produto, um por local
    pub async fn niveis_por_produto(&self, produto_id: Uuid) -> Result<Vec<NivelEstoque>, AppError> {
        let niveis = sqlx::query_as::<_, NivelEstoque>(
            "SELECT * FROM niveis_estoque WHERE produto_id = $1 ORDER BY local",
        )
        .bind(produto_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(niveis)
    }

    // Total vendido na janela móvel, pré-agregado pela sincronização de vendas
    pub async fn vendas_agregadas(
        &self,
        produto_id: Uuid,
    ) -> Result<Option<VendaAgregada>, AppError> {
        let vendas = sqlx::query_as::<_, VendaAgregada>(
            "SELECT * FROM vendas_agregadas WHERE produto_id = $1",
        )
        .bind(produto_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(vendas)
    }
}
