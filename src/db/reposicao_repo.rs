// src/db/reposicao_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::reposicao::ConfiguracaoReposicao};

// Repositório da configuração de reposição. A linha específica do produto tem
// precedência sobre a linha global (produto_id NULL); sem nenhuma das duas,
// valem os padrões do sistema.
#[derive(Clone)]
pub struct ReposicaoRepository {
    pool: PgPool,
}

impl ReposicaoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Configuração efetiva: específica > global > padrão
    pub async fn config_efetiva(
        &self,
        produto_id: Uuid,
    ) -> Result<ConfiguracaoReposicao, AppError> {
        let config = sqlx::query_as::<_, ConfiguracaoReposicao>(
            r#"
            SELECT produto_id, lead_time_fornecedor_dias, lead_time_liberacao_full_dias,
                   estoque_seguranca, cobertura_minima_dias, janela_vendas_dias
            FROM configuracoes_reposicao
            WHERE produto_id = $1 OR produto_id IS NULL
            ORDER BY produto_id NULLS LAST
            LIMIT 1
            "#,
        )
        .bind(produto_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(config.unwrap_or_default())
    }

    // Grava (ou substitui) a configuração específica de um produto
    pub async fn upsert_config(
        &self,
        produto_id: Uuid,
        config: &ConfiguracaoReposicao,
    ) -> Result<ConfiguracaoReposicao, AppError> {
        let salvo = sqlx::query_as::<_, ConfiguracaoReposicao>(
            r#"
            INSERT INTO configuracoes_reposicao
                (produto_id, lead_time_fornecedor_dias, lead_time_liberacao_full_dias,
                 estoque_seguranca, cobertura_minima_dias, janela_vendas_dias)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (produto_id) DO UPDATE SET
                lead_time_fornecedor_dias = EXCLUDED.lead_time_fornecedor_dias,
                lead_time_liberacao_full_dias = EXCLUDED.lead_time_liberacao_full_dias,
                estoque_seguranca = EXCLUDED.estoque_seguranca,
                cobertura_minima_dias = EXCLUDED.cobertura_minima_dias,
                janela_vendas_dias = EXCLUDED.janela_vendas_dias,
                updated_at = NOW()
            RETURNING produto_id, lead_time_fornecedor_dias, lead_time_liberacao_full_dias,
                      estoque_seguranca, cobertura_minima_dias, janela_vendas_dias
            "#,
        )
        .bind(produto_id)
        .bind(config.lead_time_fornecedor_dias)
        .bind(config.lead_time_liberacao_full_dias)
        .bind(config.estoque_seguranca)
        .bind(config.cobertura_minima_dias)
        .bind(config.janela_vendas_dias)
        .fetch_one(&self.pool)
        .await?;

        Ok(salvo)
    }
}
