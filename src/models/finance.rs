// src/models/finance.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "title_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TitleStatus {
    Pending,   // Aguardando aprovação
    Approved,  // Aprovado para pagamento/recebimento
    Paid,      // Quitado
    Cancelled, // Cancelado
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "category_kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryKind {
    Payable,    // Despesa
    Receivable, // Receita
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialCategory {
    pub id: i32,

    #[schema(example = "Cachês")]
    pub name: String,

    pub kind: CategoryKind,

    pub is_active: bool,
}

// Conta a pagar. O vínculo com evento pode ficar órfão (evento removido);
// lançamentos sem evento nunca aparecem para perfis restritos.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountPayable {
    pub id: i32,

    pub event_id: Option<i32>,
    pub category_id: Option<i32>,
    pub supplier_id: Option<i32>,

    #[schema(example = "Aluguel de palco - Festival de Inverno")]
    pub description: String,

    #[schema(example = "3500.00")]
    pub amount: Decimal,

    #[schema(value_type = String, format = Date, example = "2026-07-05")]
    pub due_date: NaiveDate,

    pub status: TitleStatus,

    pub approved_by: Option<i32>,

    #[schema(value_type = Option<String>, format = Date)]
    pub paid_on: Option<NaiveDate>,

    pub created_by: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountReceivable {
    pub id: i32,

    pub event_id: Option<i32>,
    pub category_id: Option<i32>,
    pub client_id: Option<i32>,

    #[schema(example = "Patrocínio - cota ouro")]
    pub description: String,

    #[schema(example = "12000.00")]
    pub amount: Decimal,

    #[schema(value_type = String, format = Date, example = "2026-07-15")]
    pub due_date: NaiveDate,

    pub status: TitleStatus,

    pub approved_by: Option<i32>,

    #[schema(value_type = Option<String>, format = Date)]
    pub paid_on: Option<NaiveDate>,

    pub created_by: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Movimento diário de caixa de um evento.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyRevenue {
    pub id: i32,

    pub event_id: Option<i32>,

    #[schema(value_type = String, format = Date, example = "2026-07-11")]
    pub revenue_date: NaiveDate,

    #[schema(example = "8420.00")]
    pub amount: Decimal,

    #[schema(example = "Bilheteria + bar")]
    pub description: Option<String>,

    pub created_by: i32,

    pub created_at: DateTime<Utc>,
}

// --- Payloads ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTitlePayload {
    pub event_id: i32,
    pub category_id: Option<i32>,

    // supplier_id em contas a pagar, client_id em contas a receber
    pub partner_id: Option<i32>,

    #[validate(length(min = 3, message = "A descrição deve ter no mínimo 3 caracteres."))]
    #[schema(example = "Aluguel de palco - Festival de Inverno")]
    pub description: String,

    #[schema(example = "3500.00")]
    pub amount: Decimal,

    #[schema(value_type = String, format = Date, example = "2026-07-05")]
    pub due_date: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTitlePayload {
    #[validate(length(min = 3, message = "A descrição deve ter no mínimo 3 caracteres."))]
    pub description: Option<String>,

    pub amount: Option<Decimal>,

    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<NaiveDate>,

    pub category_id: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettleTitlePayload {
    #[schema(value_type = String, format = Date, example = "2026-07-05")]
    pub paid_on: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDailyRevenuePayload {
    pub event_id: i32,

    #[schema(value_type = String, format = Date, example = "2026-07-11")]
    pub revenue_date: NaiveDate,

    #[schema(example = "8420.00")]
    pub amount: Decimal,

    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres."))]
    #[schema(example = "Cachês")]
    pub name: String,

    pub kind: CategoryKind,
}
