//src/main.rs

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::config::AppState;

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Catálogo + sugestão de reposição por produto
    let produto_routes = Router::new()
        .route("/", get(handlers::produtos::listar_produtos))
        .route("/{id}", get(handlers::produtos::buscar_produto))
        .route("/{id}/estoque", get(handlers::produtos::niveis_de_estoque))
        .route("/{id}/reposicao", get(handlers::produtos::sugestao_reposicao))
        .route(
            "/{id}/reposicao/config",
            get(handlers::produtos::buscar_config_reposicao)
                .put(handlers::produtos::atualizar_config_reposicao),
        );

    // Visões agregadas e simulação sem banco
    let reposicao_routes = Router::new()
        .route("/painel", get(handlers::reposicao::painel))
        .route("/simular", post(handlers::reposicao::simular));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/produtos", produto_routes)
        .nest("/api/reposicao", reposicao_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
