// src/models/reposicao.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::produto::TipoAnuncio;

// --- 1. Configuração de Reposição ---
// Parâmetros editáveis pelo usuário. Existe uma linha global (produto_id NULL)
// e, opcionalmente, uma linha específica por produto que tem precedência.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfiguracaoReposicao {
    pub produto_id: Option<Uuid>,
    pub lead_time_fornecedor_dias: i32,
    pub lead_time_liberacao_full_dias: i32,
    pub estoque_seguranca: i64,
    pub cobertura_minima_dias: i32,
    pub janela_vendas_dias: i32,
}

impl Default for ConfiguracaoReposicao {
    fn default() -> Self {
        Self {
            produto_id: None,
            lead_time_fornecedor_dias: 7,
            lead_time_liberacao_full_dias: 3,
            estoque_seguranca: 10,
            cobertura_minima_dias: 30,
            janela_vendas_dias: 90,
        }
    }
}

// --- 2. Entrada do cálculo ---
// Snapshot consistente montado pelo chamador (repositórios ou o endpoint de
// simulação). O cálculo em si nunca toca o banco.
#[derive(Debug, Clone, PartialEq)]
pub struct ParametrosReposicao {
    pub tipo_anuncio: TipoAnuncio,
    pub estoque_local: i64,
    pub estoque_full: i64,
    pub total_vendido_janela: i64,
    pub janela_dias: i32,
    pub lead_time_fornecedor_dias: i32,
    pub lead_time_liberacao_full_dias: i32,
    pub estoque_seguranca: i64,
    pub cobertura_minima_dias: i32,
}

// --- 3. Dias restantes de cobertura ---
// Demanda zero significa que o estoque nunca acaba: variante explícita em vez
// de número mágico (999 truncaria silenciosamente na exibição).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiasRestantes {
    Dias(i64),
    Ilimitado,
}

// Serializa como número ou como "∞", que é o que a tela exibe.
impl Serialize for DiasRestantes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DiasRestantes::Dias(d) => serializer.serialize_i64(*d),
            DiasRestantes::Ilimitado => serializer.serialize_str("∞"),
        }
    }
}

// --- 4. Status e ações ---
// A ordem das variantes define a severidade: critico > atencao > ok.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusReposicao {
    Ok,
    Atencao,
    Critico,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AcaoRecomendada {
    Nenhuma,
    Transferir,
    AguardarCompra,
    Comprar,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TipoAcao {
    Transferencia,
    Compra,
}

// Pontas de uma ação: de onde sai e para onde vai a mercadoria.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LocalAcao {
    Local,
    Full,
    Fornecedor,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Prioridade {
    Normal,
    Importante,
    Urgente,
}

// --- 5. Resultado por caminho ---

// Caminho Full: transferência do depósito local para o centro do marketplace.
#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReposicaoFull {
    pub necessaria: bool,
    pub ponto_reposicao: i64,
    #[schema(value_type = String, example = "12")]
    pub dias_restantes: DiasRestantes,
    pub quantidade_sugerida: i64,
    pub tem_estoque_local: bool,
    pub status: StatusReposicao,
    pub acao_recomendada: AcaoRecomendada,
}

// Caminho Local: compra junto ao fornecedor, com a quantidade repartida entre
// o que segue direto para o Full e o que fica no depósito.
#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReposicaoLocal {
    pub necessaria: bool,
    pub ponto_reposicao: i64,
    #[schema(value_type = String, example = "45")]
    pub dias_restantes: DiasRestantes,
    pub quantidade_sugerida: i64,
    pub quantidade_para_full: i64,
    pub quantidade_para_local: i64,
    pub status: StatusReposicao,
    pub acao_recomendada: AcaoRecomendada,
}

#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcaoPrioritaria {
    pub tipo: TipoAcao,
    pub quantidade: i64,
    pub origem: LocalAcao,
    pub destino: LocalAcao,
    pub prazo: String,
    pub prioridade: Prioridade,
}

// --- 6. Sugestão completa (saída, nunca persistida) ---
#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SugestaoReposicao {
    pub tipo_anuncio: TipoAnuncio,
    pub estoque_local: i64,
    pub estoque_full: i64,
    pub estoque_total: i64,
    pub media_vendas_90d: i64,
    pub media_diaria: Decimal,
    pub reposicao_full: Option<ReposicaoFull>,
    pub reposicao_local: ReposicaoLocal,
    pub acoes_prioritarias: Vec<AcaoPrioritaria>,
    pub status_geral: StatusReposicao,
}

// --- 7. Painel (visão agregada do catálogo) ---
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemPainel {
    pub produto_id: Uuid,
    pub sku: String,
    pub nome: String,
    pub sugestao: SugestaoReposicao,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PainelReposicao {
    pub total_produtos: usize,
    pub criticos: usize,
    pub atencao: usize,
    pub ok: usize,
    pub itens: Vec<ItemPainel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dias_restantes_serializa_numero_ou_infinito() {
        let limitado = serde_json::to_value(DiasRestantes::Dias(12)).unwrap();
        assert_eq!(limitado, serde_json::json!(12));

        let ilimitado = serde_json::to_value(DiasRestantes::Ilimitado).unwrap();
        assert_eq!(ilimitado, serde_json::json!("∞"));
    }

    #[test]
    fn severidade_ordena_critico_acima_de_tudo() {
        assert!(StatusReposicao::Critico > StatusReposicao::Atencao);
        assert!(StatusReposicao::Atencao > StatusReposicao::Ok);
        assert_eq!(
            StatusReposicao::Ok.max(StatusReposicao::Critico),
            StatusReposicao::Critico
        );
    }

    #[test]
    fn acao_recomendada_usa_snake_case_no_json() {
        let v = serde_json::to_value(AcaoRecomendada::AguardarCompra).unwrap();
        assert_eq!(v, serde_json::json!("aguardar_compra"));
    }

    #[test]
    fn tipo_anuncio_usa_minusculas_no_json() {
        let v = serde_json::to_value(TipoAnuncio::Ambos).unwrap();
        assert_eq!(v, serde_json::json!("ambos"));
    }
}
