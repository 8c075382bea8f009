// src/handlers/partners.rs
//
// Fornecedores e clientes: cadastros de empresa, visíveis conforme o recorte
// de empresas do solicitante.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::partner::{Client, CreateClientPayload, CreateSupplierPayload, Supplier},
};

// POST /api/suppliers
#[utoipa::path(
    post,
    path = "/api/suppliers",
    tag = "Fornecedores",
    request_body = CreateSupplierPayload,
    responses(
        (status = 201, description = "Fornecedor criado", body = Supplier),
        (status = 403, description = "Acesso negado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_supplier(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateSupplierPayload>,
) -> Result<impl IntoResponse, AppError> {
    if !user.role.can_manage_financials() {
        return Err(AppError::Forbidden(
            "Seu perfil não permite gerenciar cadastros.".into(),
        ));
    }

    // Só se cadastra fornecedor em empresa à qual se tem acesso.
    if !app_state
        .authorization
        .can_access_company(user.id, user.role, payload.company_id)
        .await
    {
        return Err(AppError::Forbidden(
            "Você não tem acesso a esta empresa.".into(),
        ));
    }

    payload.validate().map_err(AppError::ValidationError)?;

    let supplier = app_state
        .partner_repo
        .create_supplier(
            payload.company_id,
            &payload.name,
            payload.cnpj.as_deref(),
            payload.email.as_deref(),
            payload.phone.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(supplier)))
}

// GET /api/suppliers
#[utoipa::path(
    get,
    path = "/api/suppliers",
    tag = "Fornecedores",
    responses(
        (status = 200, description = "Fornecedores visíveis ao solicitante", body = Vec<Supplier>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_suppliers(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let suppliers = app_state.partner_repo.get_all_suppliers().await?;

    let suppliers = app_state
        .authorization
        .filter_partners_by_permission(suppliers, user.id, user.role)
        .await;

    Ok((StatusCode::OK, Json(suppliers)))
}

// POST /api/clients
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = "Clientes",
    request_body = CreateClientPayload,
    responses(
        (status = 201, description = "Cliente criado", body = Client),
        (status = 403, description = "Acesso negado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_client(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    if !user.role.can_manage_financials() {
        return Err(AppError::Forbidden(
            "Seu perfil não permite gerenciar cadastros.".into(),
        ));
    }

    if !app_state
        .authorization
        .can_access_company(user.id, user.role, payload.company_id)
        .await
    {
        return Err(AppError::Forbidden(
            "Você não tem acesso a esta empresa.".into(),
        ));
    }

    payload.validate().map_err(AppError::ValidationError)?;

    let client = app_state
        .partner_repo
        .create_client(
            payload.company_id,
            &payload.name,
            payload.document.as_deref(),
            payload.email.as_deref(),
            payload.phone.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(client)))
}

// GET /api/clients
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = "Clientes",
    responses(
        (status = 200, description = "Clientes visíveis ao solicitante", body = Vec<Client>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_clients(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let clients = app_state.partner_repo.get_all_clients().await?;

    let clients = app_state
        .authorization
        .filter_partners_by_permission(clients, user.id, user.role)
        .await;

    Ok((StatusCode::OK, Json(clients)))
}
