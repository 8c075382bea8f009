// src/handlers/events.rs

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
    models::event::{CreateEventPayload, Event, UpdateEventPayload},
};

// POST /api/events
#[utoipa::path(
    post,
    path = "/api/events",
    tag = "Eventos",
    request_body = CreateEventPayload,
    responses(
        (status = 201, description = "Evento criado", body = Event),
        (status = 403, description = "Acesso negado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_event(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateEventPayload>,
) -> Result<impl IntoResponse, AppError> {
    if !user.role.can_manage_users() {
        return Err(AppError::Forbidden(
            "Seu perfil não permite administrar eventos.".into(),
        ));
    }

    payload.validate().map_err(AppError::ValidationError)?;

    let event = app_state
        .event_repo
        .create(
            payload.company_id,
            &payload.name,
            payload.starts_on,
            payload.ends_on,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(event)))
}

// GET /api/events
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "Eventos",
    responses(
        (status = 200, description = "Eventos visíveis ao solicitante", body = Vec<Event>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_events(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let events = app_state.event_repo.get_all().await?;

    let events = app_state
        .authorization
        .filter_events_by_permission(events, user.id, user.role)
        .await;

    Ok((StatusCode::OK, Json(events)))
}

// GET /api/events/{id}
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = "Eventos",
    params(("id" = i32, Path, description = "ID do evento")),
    responses(
        (status = 200, description = "Evento", body = Event),
        (status = 403, description = "Acesso negado"),
        (status = 404, description = "Evento não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_event(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !app_state
        .authorization
        .can_access_event(user.id, user.role, id)
        .await
    {
        return Err(AppError::Forbidden(
            "Você não tem acesso a este evento.".into(),
        ));
    }

    let event = app_state
        .event_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Evento não encontrado.".into()))?;

    Ok((StatusCode::OK, Json(event)))
}

// PUT /api/events/{id}
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = "Eventos",
    params(("id" = i32, Path, description = "ID do evento")),
    request_body = UpdateEventPayload,
    responses(
        (status = 200, description = "Evento atualizado", body = Event),
        (status = 403, description = "Acesso negado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_event(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEventPayload>,
) -> Result<impl IntoResponse, AppError> {
    if !user.role.can_manage_users() {
        return Err(AppError::Forbidden(
            "Seu perfil não permite administrar eventos.".into(),
        ));
    }

    payload.validate().map_err(AppError::ValidationError)?;

    let event = app_state
        .event_repo
        .update(
            id,
            payload.name.as_deref(),
            payload.starts_on,
            payload.ends_on,
            payload.is_active,
        )
        .await?;

    Ok((StatusCode::OK, Json(event)))
}
