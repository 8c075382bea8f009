// src/handlers/users.rs
//
// Administração de usuários: todas as rotas exigem a capacidade
// can_manage_users (somente o administrador).

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
    models::auth::{CreateUserPayload, UpdateUserPayload, User, UserWithLinks},
};

fn ensure_admin(user: &User) -> Result<(), AppError> {
    if !user.role.can_manage_users() {
        return Err(AppError::Forbidden(
            "Somente o administrador gerencia usuários.".into(),
        ));
    }
    Ok(())
}

// POST /api/users
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Usuários",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "Usuário criado", body = UserWithLinks),
        (status = 403, description = "Acesso negado"),
        (status = 409, description = "E-mail já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    ensure_admin(&user)?;

    payload.validate().map_err(AppError::ValidationError)?;

    let created = app_state.user_service.create_user(payload).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

// GET /api/users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Usuários",
    responses(
        (status = 200, description = "Todos os usuários com seus vínculos", body = Vec<UserWithLinks>),
        (status = 403, description = "Acesso negado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_users(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    ensure_admin(&user)?;

    let users = app_state.user_service.list_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

// GET /api/users/{id}
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Usuários",
    params(("id" = i32, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário com seus vínculos", body = UserWithLinks),
        (status = 403, description = "Acesso negado"),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_user(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ensure_admin(&user)?;

    let found = app_state.user_service.get_user(id).await?;

    Ok((StatusCode::OK, Json(found)))
}

// PUT /api/users/{id}
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Usuários",
    params(("id" = i32, Path, description = "ID do usuário")),
    request_body = UpdateUserPayload,
    responses(
        (status = 200, description = "Usuário atualizado", body = UserWithLinks),
        (status = 403, description = "Acesso negado"),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_user(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    ensure_admin(&user)?;

    payload.validate().map_err(AppError::ValidationError)?;

    let updated = app_state.user_service.update_user(id, payload).await?;

    Ok((StatusCode::OK, Json(updated)))
}
