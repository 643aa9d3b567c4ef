// src/handlers/reposicao.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        produto::TipoAnuncio,
        reposicao::{PainelReposicao, ParametrosReposicao, SugestaoReposicao},
    },
    services::reposicao_service::calcular_sugestao,
};

// GET /api/reposicao/painel
#[utoipa::path(
    get,
    path = "/api/reposicao/painel",
    tag = "Reposição",
    responses(
        (status = 200, description = "Sugestões de todo o catálogo, dos críticos para os saudáveis", body = PainelReposicao)
    )
)]
pub async fn painel(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let painel = app_state.reposicao_service.painel().await?;
    Ok((StatusCode::OK, Json(painel)))
}

// ---
// Payload: SimularPayload
// ---
// Contrato de entrada do cálculo, sem tocar o banco: útil para o frontend
// testar cenários ("e se eu vendesse o dobro?") antes de mexer no estoque real.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimularPayload {
    #[serde(default = "padrao_tipo_anuncio")]
    pub tipo_anuncio: TipoAnuncio,

    #[serde(default)]
    #[validate(range(min = 0, message = "O estoque local não pode ser negativo."))]
    pub estoque_local: i64,

    #[serde(default)]
    #[validate(range(min = 0, message = "O estoque Full não pode ser negativo."))]
    pub estoque_full: i64,

    #[serde(default)]
    #[validate(range(min = 0, message = "O total vendido não pode ser negativo."))]
    pub total_vendido_janela: i64,

    #[serde(default = "padrao_janela_dias")]
    #[validate(range(min = 1, message = "A janela de vendas deve ser de pelo menos 1 dia."))]
    pub janela_dias: i32,

    #[serde(default = "padrao_lead_fornecedor")]
    #[validate(range(min = 0, message = "O lead time do fornecedor não pode ser negativo."))]
    pub lead_time_fornecedor_dias: i32,

    #[serde(default = "padrao_lead_full")]
    #[validate(range(min = 0, message = "O lead time de liberação do Full não pode ser negativo."))]
    pub lead_time_liberacao_full_dias: i32,

    #[serde(default = "padrao_estoque_seguranca")]
    #[validate(range(min = 0, message = "O estoque de segurança não pode ser negativo."))]
    pub estoque_seguranca: i64,

    #[serde(default = "padrao_cobertura_minima")]
    #[validate(range(min = 1, message = "A cobertura mínima deve ser de pelo menos 1 dia."))]
    pub cobertura_minima_dias: i32,
}

fn padrao_tipo_anuncio() -> TipoAnuncio {
    TipoAnuncio::Ambos
}
fn padrao_janela_dias() -> i32 {
    90
}
fn padrao_lead_fornecedor() -> i32 {
    7
}
fn padrao_lead_full() -> i32 {
    3
}
fn padrao_estoque_seguranca() -> i64 {
    10
}
fn padrao_cobertura_minima() -> i32 {
    30
}

// POST /api/reposicao/simular
#[utoipa::path(
    post,
    path = "/api/reposicao/simular",
    tag = "Reposição",
    request_body = SimularPayload,
    responses(
        (status = 200, description = "Sugestão calculada para o cenário informado", body = SugestaoReposicao),
        (status = 400, description = "Parâmetros inválidos")
    )
)]
pub async fn simular(
    Json(payload): Json<SimularPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let params = ParametrosReposicao {
        tipo_anuncio: payload.tipo_anuncio,
        estoque_local: payload.estoque_local,
        estoque_full: payload.estoque_full,
        total_vendido_janela: payload.total_vendido_janela,
        janela_dias: payload.janela_dias,
        lead_time_fornecedor_dias: payload.lead_time_fornecedor_dias,
        lead_time_liberacao_full_dias: payload.lead_time_liberacao_full_dias,
        estoque_seguranca: payload.estoque_seguranca,
        cobertura_minima_dias: payload.cobertura_minima_dias,
    };

    Ok((StatusCode::OK, Json(calcular_sugestao(&params))))
}
