// src/models/partner.rs
//
// Cadastros de fornecedores e clientes, sempre vinculados a uma empresa.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: i32,

    pub company_id: i32,

    #[schema(example = "Som & Luz Produções")]
    pub name: String,

    #[schema(example = "98.765.432/0001-10")]
    pub cnpj: Option<String>,

    #[schema(example = "contato@someluz.com.br")]
    pub email: Option<String>,

    #[schema(example = "(31) 99999-0000")]
    pub phone: Option<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i32,

    pub company_id: i32,

    #[schema(example = "Prefeitura de Ouro Preto")]
    pub name: String,

    #[schema(example = "12.345.678/0001-90")]
    pub document: Option<String>,

    pub email: Option<String>,
    pub phone: Option<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupplierPayload {
    pub company_id: i32,

    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres."))]
    #[schema(example = "Som & Luz Produções")]
    pub name: String,

    pub cnpj: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientPayload {
    pub company_id: i32,

    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres."))]
    #[schema(example = "Prefeitura de Ouro Preto")]
    pub name: String,

    pub document: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    pub phone: Option<String>,
}
