// src/models/company.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i32,

    #[schema(example = "Produtora Horizonte Ltda")]
    pub name: String,

    #[schema(example = "12.345.678/0001-90")]
    pub cnpj: Option<String>,

    #[schema(example = "Belo Horizonte")]
    pub city: Option<String>,

    #[schema(example = "MG")]
    pub state: Option<String>,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres."))]
    #[schema(example = "Produtora Horizonte Ltda")]
    pub name: String,

    #[schema(example = "12.345.678/0001-90")]
    pub cnpj: Option<String>,

    pub city: Option<String>,

    #[validate(length(equal = 2, message = "A UF deve ter 2 caracteres."))]
    #[schema(example = "MG")]
    pub state: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres."))]
    pub name: Option<String>,

    pub cnpj: Option<String>,
    pub city: Option<String>,

    #[validate(length(equal = 2, message = "A UF deve ter 2 caracteres."))]
    pub state: Option<String>,

    pub is_active: Option<bool>,
}
