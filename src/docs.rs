// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Produtos ---
        handlers::produtos::listar_produtos,
        handlers::produtos::buscar_produto,
        handlers::produtos::niveis_de_estoque,

        // --- Reposição ---
        handlers::produtos::sugestao_reposicao,
        handlers::produtos::buscar_config_reposicao,
        handlers::produtos::atualizar_config_reposicao,
        handlers::reposicao::painel,
        handlers::reposicao::simular,
    ),
    components(
        schemas(
            // --- Produtos ---
            models::produto::LocalEstoque,
            models::produto::TipoAnuncio,
            models::produto::Produto,
            models::produto::NivelEstoque,
            models::produto::VendaAgregada,
            models::produto::ProdutoComEstoque,

            // --- Reposição ---
            models::reposicao::ConfiguracaoReposicao,
            models::reposicao::StatusReposicao,
            models::reposicao::AcaoRecomendada,
            models::reposicao::TipoAcao,
            models::reposicao::LocalAcao,
            models::reposicao::Prioridade,
            models::reposicao::ReposicaoFull,
            models::reposicao::ReposicaoLocal,
            models::reposicao::AcaoPrioritaria,
            models::reposicao::SugestaoReposicao,
            models::reposicao::ItemPainel,
            models::reposicao::PainelReposicao,

            // --- Payloads ---
            handlers::produtos::AtualizarConfigPayload,
            handlers::reposicao::SimularPayload,
        )
    ),
    tags(
        (name = "Produtos", description = "Catálogo e Saldos de Estoque"),
        (name = "Reposição", description = "Sugestões de Transferência e Compra")
    )
)]
pub struct ApiDoc;
