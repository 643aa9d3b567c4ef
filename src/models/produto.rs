// src/models/produto.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- 1. Local de Estoque ---
// O estoque de cada produto vive em dois lugares: o depósito próprio (LOCAL)
// e o centro de distribuição do marketplace (FULL).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "local_estoque", rename_all = "SCREAMING_SNAKE_CASE")] // Banco
#[serde(rename_all = "SCREAMING_SNAKE_CASE")] // JSON
pub enum LocalEstoque {
    Local, // Vira "LOCAL"
    Full,  // Vira "FULL"
}

// --- 2. Tipo de Anúncio ---
// Onde o produto está anunciado no marketplace. Um anúncio só-local não tem
// caminho de reposição Full.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "tipo_anuncio", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "lowercase")]
pub enum TipoAnuncio {
    Full,
    Local,
    Ambos,
}

impl TipoAnuncio {
    pub fn tem_full(&self) -> bool {
        matches!(self, TipoAnuncio::Full | TipoAnuncio::Ambos)
    }
}

// --- 3. Produto (catálogo) ---
// Apenas identidade e atributos de catálogo; o saldo fica em 'niveis_estoque'.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Produto {
    pub id: Uuid,
    pub sku: String,
    pub nome: String,
    pub tipo_anuncio: TipoAnuncio,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- 4. Nível de Estoque ---
// Saldo físico de um produto em um local. Alimentado pelas movimentações
// (compras, vendas, transferências) fora deste serviço; aqui é só leitura.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NivelEstoque {
    pub id: Uuid,
    pub produto_id: Uuid,
    pub local: LocalEstoque,
    pub quantidade: i64,
    pub updated_at: DateTime<Utc>,
}

// --- 5. Venda Agregada ---
// Total vendido na janela móvel (padrão 90 dias), pré-agregado pelo processo
// de sincronização de vendas. Este serviço nunca recalcula a partir dos pedidos.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VendaAgregada {
    pub produto_id: Uuid,
    pub total_unidades: i64,
    pub janela_dias: i32,
    pub atualizado_em: DateTime<Utc>,
}

// --- 6. Produto com saldo consolidado (listagem) ---
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoComEstoque {
    pub id: Uuid,
    pub sku: String,
    pub nome: String,
    pub tipo_anuncio: TipoAnuncio,
    pub estoque_local: i64,
    pub estoque_full: i64,
}
