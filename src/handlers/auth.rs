// src/handlers/auth.rs

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::auth::{AuthResponse, LoginPayload, User},
};

// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Autenticado", body = AuthResponse),
        (status = 401, description = "Credenciais inválidas"),
        (status = 429, description = "Muitas tentativas de login")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    if app_state.login_throttle.is_blocked(&payload.email) {
        return Err(AppError::TooManyLoginAttempts);
    }

    match app_state
        .auth_service
        .login_user(&payload.email, &payload.password)
        .await
    {
        Ok((token, user)) => {
            app_state.login_throttle.clear(&payload.email);
            Ok(Json(AuthResponse { token, user }))
        }
        Err(AppError::InvalidCredentials) => {
            app_state.login_throttle.register_failure(&payload.email);
            Err(AppError::InvalidCredentials)
        }
        Err(e) => Err(e),
    }
}

// GET /api/auth/me
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Usuário autenticado", body = User)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_me(AuthenticatedUser(user): AuthenticatedUser) -> Json<User> {
    Json(user)
}
