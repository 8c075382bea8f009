// src/models/event.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Evento = centro de custo de uma empresa.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i32,

    pub company_id: i32,

    #[schema(example = "Festival de Inverno 2026")]
    pub name: String,

    #[schema(value_type = Option<String>, format = Date, example = "2026-07-10")]
    pub starts_on: Option<NaiveDate>,

    #[schema(value_type = Option<String>, format = Date, example = "2026-07-20")]
    pub ends_on: Option<NaiveDate>,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventPayload {
    pub company_id: i32,

    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres."))]
    #[schema(example = "Festival de Inverno 2026")]
    pub name: String,

    #[schema(value_type = Option<String>, format = Date)]
    pub starts_on: Option<NaiveDate>,

    #[schema(value_type = Option<String>, format = Date)]
    pub ends_on: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres."))]
    pub name: Option<String>,

    #[schema(value_type = Option<String>, format = Date)]
    pub starts_on: Option<NaiveDate>,

    #[schema(value_type = Option<String>, format = Date)]
    pub ends_on: Option<NaiveDate>,

    pub is_active: Option<bool>,
}
