// src/config.rs

use crate::{
    db::{ProdutoRepository, ReposicaoRepository},
    services::{ProdutoService, ReposicaoService},
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub produto_service: ProdutoService,
    pub reposicao_service: ReposicaoService,
}

impl AppState {
    // A assinatura retorna um Result: configuração quebrada impede o boot.
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")?;

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let produto_repo = ProdutoRepository::new(db_pool.clone());
        let reposicao_repo = ReposicaoRepository::new(db_pool.clone());

        let produto_service = ProdutoService::new(produto_repo.clone());
        let reposicao_service = ReposicaoService::new(produto_repo, reposicao_repo);

        Ok(Self {
            db_pool,
            produto_service,
            reposicao_service,
        })
    }
}
