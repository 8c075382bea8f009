// src/handlers/companies.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::company::{Company, CreateCompanyPayload, UpdateCompanyPayload},
};

// POST /api/companies
#[utoipa::path(
    post,
    path = "/api/companies",
    tag = "Empresas",
    request_body = CreateCompanyPayload,
    responses(
        (status = 201, description = "Empresa criada", body = Company),
        (status = 403, description = "Acesso negado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_company(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateCompanyPayload>,
) -> Result<impl IntoResponse, AppError> {
    if !user.role.can_manage_users() {
        return Err(AppError::Forbidden(
            "Seu perfil não permite administrar empresas.".into(),
        ));
    }

    payload.validate().map_err(AppError::ValidationError)?;

    let company = app_state
        .company_repo
        .create(
            &payload.name,
            payload.cnpj.as_deref(),
            payload.city.as_deref(),
            payload.state.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(company)))
}

// GET /api/companies
#[utoipa::path(
    get,
    path = "/api/companies",
    tag = "Empresas",
    responses(
        (status = 200, description = "Empresas visíveis ao solicitante", body = Vec<Company>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_companies(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let companies = app_state.company_repo.get_all().await?;

    // Busca tudo e recorta pelo escopo do perfil antes de responder.
    let companies = app_state
        .authorization
        .filter_companies_by_permission(companies, user.id, user.role)
        .await;

    Ok((StatusCode::OK, Json(companies)))
}

// GET /api/companies/{id}
#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    tag = "Empresas",
    params(("id" = i32, Path, description = "ID da empresa")),
    responses(
        (status = 200, description = "Empresa", body = Company),
        (status = 403, description = "Acesso negado"),
        (status = 404, description = "Empresa não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_company(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    // Acesso pontual negado vira 403 explícito, nunca resposta vazia.
    if !app_state
        .authorization
        .can_access_company(user.id, user.role, id)
        .await
    {
        return Err(AppError::Forbidden(
            "Você não tem acesso a esta empresa.".into(),
        ));
    }

    let company = app_state
        .company_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Empresa não encontrada.".into()))?;

    Ok((StatusCode::OK, Json(company)))
}

// PUT /api/companies/{id}
#[utoipa::path(
    put,
    path = "/api/companies/{id}",
    tag = "Empresas",
    params(("id" = i32, Path, description = "ID da empresa")),
    request_body = UpdateCompanyPayload,
    responses(
        (status = 200, description = "Empresa atualizada", body = Company),
        (status = 403, description = "Acesso negado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_company(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCompanyPayload>,
) -> Result<impl IntoResponse, AppError> {
    if !user.role.can_manage_users() {
        return Err(AppError::Forbidden(
            "Seu perfil não permite administrar empresas.".into(),
        ));
    }

    payload.validate().map_err(AppError::ValidationError)?;

    let company = app_state
        .company_repo
        .update(
            id,
            payload.name.as_deref(),
            payload.cnpj.as_deref(),
            payload.city.as_deref(),
            payload.state.as_deref(),
            payload.is_active,
        )
        .await?;

    Ok((StatusCode::OK, Json(company)))
}
