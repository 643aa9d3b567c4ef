// src/handlers/produtos.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        produto::{NivelEstoque, Produto, ProdutoComEstoque},
        reposicao::{ConfiguracaoReposicao, SugestaoReposicao},
    },
};

// GET /api/produtos
#[utoipa::path(
    get,
    path = "/api/produtos",
    tag = "Produtos",
    responses(
        (status = 200, description = "Catálogo com saldo por local (LOCAL x FULL)", body = Vec<ProdutoComEstoque>)
    )
)]
pub async fn listar_produtos(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let produtos = app_state.produto_service.listar_com_estoque().await?;
    Ok((StatusCode::OK, Json(produtos)))
}

// GET /api/produtos/{id}
#[utoipa::path(
    get,
    path = "/api/produtos/{id}",
    tag = "Produtos",
    responses(
        (status = 200, description = "Detalhe do produto", body = Produto),
        (status = 404, description = "Produto não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do produto")
    )
)]
pub async fn buscar_produto(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let produto = app_state.produto_service.buscar(id).await?;
    Ok((StatusCode::OK, Json(produto)))
}

// GET /api/produtos/{id}/estoque
#[utoipa::path(
    get,
    path = "/api/produtos/{id}/estoque",
    tag = "Produtos",
    responses(
        (status = 200, description = "Níveis de estoque do produto, um por local", body = Vec<NivelEstoque>),
        (status = 404, description = "Produto não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do produto")
    )
)]
pub async fn niveis_de_estoque(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let niveis = app_state.produto_service.niveis_de_estoque(id).await?;
    Ok((StatusCode::OK, Json(niveis)))
}

// GET /api/produtos/{id}/reposicao
#[utoipa::path(
    get,
    path = "/api/produtos/{id}/reposicao",
    tag = "Reposição",
    responses(
        (status = 200, description = "Sugestão de reposição calculada sob demanda", body = SugestaoReposicao),
        (status = 404, description = "Produto não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do produto")
    )
)]
pub async fn sugestao_reposicao(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let sugestao = app_state.reposicao_service.sugestao_para_produto(id).await?;
    Ok((StatusCode::OK, Json(sugestao)))
}

// ---
// Payload: AtualizarConfigPayload
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AtualizarConfigPayload {
    #[validate(range(min = 0, message = "O lead time do fornecedor não pode ser negativo."))]
    pub lead_time_fornecedor_dias: i32,

    #[validate(range(min = 0, message = "O lead time de liberação do Full não pode ser negativo."))]
    pub lead_time_liberacao_full_dias: i32,

    #[validate(range(min = 0, message = "O estoque de segurança não pode ser negativo."))]
    pub estoque_seguranca: i64,

    #[validate(range(min = 1, message = "A cobertura mínima deve ser de pelo menos 1 dia."))]
    pub cobertura_minima_dias: i32,

    #[validate(range(min = 1, message = "A janela de vendas deve ser de pelo menos 1 dia."))]
    pub janela_vendas_dias: i32,
}

// GET /api/produtos/{id}/reposicao/config
#[utoipa::path(
    get,
    path = "/api/produtos/{id}/reposicao/config",
    tag = "Reposição",
    responses(
        (status = 200, description = "Configuração efetiva (específica do produto ou padrão global)", body = ConfiguracaoReposicao),
        (status = 404, description = "Produto não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do produto")
    )
)]
pub async fn buscar_config_reposicao(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    // Garante o 404 antes de cair no fallback global
    app_state.produto_service.buscar(id).await?;

    let config = app_state.reposicao_service.config_efetiva(id).await?;
    Ok((StatusCode::OK, Json(config)))
}

// PUT /api/produtos/{id}/reposicao/config
#[utoipa::path(
    put,
    path = "/api/produtos/{id}/reposicao/config",
    tag = "Reposição",
    request_body = AtualizarConfigPayload,
    responses(
        (status = 200, description = "Configuração salva", body = ConfiguracaoReposicao),
        (status = 400, description = "Parâmetros inválidos"),
        (status = 404, description = "Produto não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do produto")
    )
)]
pub async fn atualizar_config_reposicao(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AtualizarConfigPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state.produto_service.buscar(id).await?;

    let config = ConfiguracaoReposicao {
        produto_id: Some(id),
        lead_time_fornecedor_dias: payload.lead_time_fornecedor_dias,
        lead_time_liberacao_full_dias: payload.lead_time_liberacao_full_dias,
        estoque_seguranca: payload.estoque_seguranca,
        cobertura_minima_dias: payload.cobertura_minima_dias,
        janela_vendas_dias: payload.janela_vendas_dias,
    };

    let salvo = app_state.reposicao_service.salvar_config(id, &config).await?;
    Ok((StatusCode::OK, Json(salvo)))
}
