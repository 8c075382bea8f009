// src/handlers/finance.rs

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
    models::{
        auth::User,
        finance::{
            AccountPayable, AccountReceivable, CreateCategoryPayload, CreateDailyRevenuePayload,
            CreateTitlePayload, DailyRevenue, FinancialCategory, SettleTitlePayload,
            UpdateTitlePayload,
        },
    },
};

// Lançamento órfão (evento removido) só é alcançável por perfil global.
async fn ensure_event_access(
    app_state: &AppState,
    user: &User,
    event_id: Option<i32>,
) -> Result<(), AppError> {
    let allowed = match event_id {
        Some(event_id) => {
            app_state
                .authorization
                .can_access_event(user.id, user.role, event_id)
                .await
        }
        None => user.role.has_global_access(),
    };

    if !allowed {
        return Err(AppError::Forbidden(
            "Você não tem acesso ao evento deste lançamento.".into(),
        ));
    }

    Ok(())
}

fn ensure_can_manage(user: &User) -> Result<(), AppError> {
    if !user.role.can_manage_financials() {
        return Err(AppError::Forbidden(
            "Seu perfil não permite lançamentos financeiros.".into(),
        ));
    }
    Ok(())
}

fn ensure_can_approve(user: &User) -> Result<(), AppError> {
    if !user.role.can_approve_financials() {
        return Err(AppError::Forbidden(
            "Seu perfil não permite aprovar lançamentos.".into(),
        ));
    }
    Ok(())
}

// =============================================================================
//  CONTAS A PAGAR
// =============================================================================

// POST /api/payables
#[utoipa::path(
    post,
    path = "/api/payables",
    tag = "Contas a Pagar",
    request_body = CreateTitlePayload,
    responses(
        (status = 201, description = "Conta a pagar criada", body = AccountPayable),
        (status = 403, description = "Acesso negado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_payable(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateTitlePayload>,
) -> Result<impl IntoResponse, AppError> {
    ensure_can_manage(&user)?;

    payload.validate().map_err(AppError::ValidationError)?;

    let title = app_state
        .finance_repo
        .create_payable(
            payload.event_id,
            payload.category_id,
            payload.partner_id,
            &payload.description,
            payload.amount,
            payload.due_date,
            user.id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(title)))
}

// GET /api/payables
#[utoipa::path(
    get,
    path = "/api/payables",
    tag = "Contas a Pagar",
    responses(
        (status = 200, description = "Contas a pagar visíveis ao solicitante", body = Vec<AccountPayable>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_payables(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let titles = app_state.finance_repo.get_all_payables().await?;

    let titles = app_state
        .authorization
        .filter_financials_by_permission(titles, user.id, user.role)
        .await?;

    Ok((StatusCode::OK, Json(titles)))
}

// GET /api/payables/{id}
#[utoipa::path(
    get,
    path = "/api/payables/{id}",
    tag = "Contas a Pagar",
    params(("id" = i32, Path, description = "ID da conta a pagar")),
    responses(
        (status = 200, description = "Conta a pagar", body = AccountPayable),
        (status = 403, description = "Acesso negado"),
        (status = 404, description = "Conta a pagar não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_payable(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let title = app_state
        .finance_repo
        .find_payable(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Conta a pagar não encontrada.".into()))?;

    ensure_event_access(&app_state, &user, title.event_id).await?;

    Ok((StatusCode::OK, Json(title)))
}

// PUT /api/payables/{id}
#[utoipa::path(
    put,
    path = "/api/payables/{id}",
    tag = "Contas a Pagar",
    params(("id" = i32, Path, description = "ID da conta a pagar")),
    request_body = UpdateTitlePayload,
    responses(
        (status = 200, description = "Conta a pagar atualizada", body = AccountPayable),
        (status = 403, description = "Acesso negado"),
        (status = 409, description = "Título não está mais pendente")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_payable(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTitlePayload>,
) -> Result<impl IntoResponse, AppError> {
    ensure_can_manage(&user)?;

    payload.validate().map_err(AppError::ValidationError)?;

    let title = app_state.finance_service.update_payable(id, payload).await?;

    Ok((StatusCode::OK, Json(title)))
}

// POST /api/payables/{id}/approve
#[utoipa::path(
    post,
    path = "/api/payables/{id}/approve",
    tag = "Contas a Pagar",
    params(("id" = i32, Path, description = "ID da conta a pagar")),
    responses(
        (status = 200, description = "Conta a pagar aprovada", body = AccountPayable),
        (status = 403, description = "Acesso negado"),
        (status = 409, description = "Transição de status inválida")
    ),
    security(("api_jwt" = []))
)]
pub async fn approve_payable(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ensure_can_approve(&user)?;

    let title = app_state.finance_service.approve_payable(id, user.id).await?;

    Ok((StatusCode::OK, Json(title)))
}

// POST /api/payables/{id}/settle
#[utoipa::path(
    post,
    path = "/api/payables/{id}/settle",
    tag = "Contas a Pagar",
    params(("id" = i32, Path, description = "ID da conta a pagar")),
    request_body = SettleTitlePayload,
    responses(
        (status = 200, description = "Conta a pagar quitada", body = AccountPayable),
        (status = 403, description = "Acesso negado"),
        (status = 409, description = "Transição de status inválida")
    ),
    security(("api_jwt" = []))
)]
pub async fn settle_payable(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(payload): Json<SettleTitlePayload>,
) -> Result<impl IntoResponse, AppError> {
    ensure_can_manage(&user)?;

    let title = app_state
        .finance_service
        .settle_payable(id, payload.paid_on)
        .await?;

    Ok((StatusCode::OK, Json(title)))
}

// POST /api/payables/{id}/cancel
#[utoipa::path(
    post,
    path = "/api/payables/{id}/cancel",
    tag = "Contas a Pagar",
    params(("id" = i32, Path, description = "ID da conta a pagar")),
    responses(
        (status = 200, description = "Conta a pagar cancelada", body = AccountPayable),
        (status = 403, description = "Acesso negado"),
        (status = 409, description = "Transição de status inválida")
    ),
    security(("api_jwt" = []))
)]
pub async fn cancel_payable(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ensure_can_approve(&user)?;

    let title = app_state.finance_service.cancel_payable(id).await?;

    Ok((StatusCode::OK, Json(title)))
}

// =============================================================================
//  CONTAS A RECEBER
// =============================================================================

// POST /api/receivables
#[utoipa::path(
    post,
    path = "/api/receivables",
    tag = "Contas a Receber",
    request_body = CreateTitlePayload,
    responses(
        (status = 201, description = "Conta a receber criada", body = AccountReceivable),
        (status = 403, description = "Acesso negado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_receivable(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateTitlePayload>,
) -> Result<impl IntoResponse, AppError> {
    ensure_can_manage(&user)?;

    payload.validate().map_err(AppError::ValidationError)?;

    let title = app_state
        .finance_repo
        .create_receivable(
            payload.event_id,
            payload.category_id,
            payload.partner_id,
            &payload.description,
            payload.amount,
            payload.due_date,
            user.id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(title)))
}

// GET /api/receivables
#[utoipa::path(
    get,
    path = "/api/receivables",
    tag = "Contas a Receber",
    responses(
        (status = 200, description = "Contas a receber visíveis ao solicitante", body = Vec<AccountReceivable>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_receivables(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let titles = app_state.finance_repo.get_all_receivables().await?;

    let titles = app_state
        .authorization
        .filter_financials_by_permission(titles, user.id, user.role)
        .await?;

    Ok((StatusCode::OK, Json(titles)))
}

// GET /api/receivables/{id}
#[utoipa::path(
    get,
    path = "/api/receivables/{id}",
    tag = "Contas a Receber",
    params(("id" = i32, Path, description = "ID da conta a receber")),
    responses(
        (status = 200, description = "Conta a receber", body = AccountReceivable),
        (status = 403, description = "Acesso negado"),
        (status = 404, description = "Conta a receber não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_receivable(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let title = app_state
        .finance_repo
        .find_receivable(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Conta a receber não encontrada.".into()))?;

    ensure_event_access(&app_state, &user, title.event_id).await?;

    Ok((StatusCode::OK, Json(title)))
}

// PUT /api/receivables/{id}
#[utoipa::path(
    put,
    path = "/api/receivables/{id}",
    tag = "Contas a Receber",
    params(("id" = i32, Path, description = "ID da conta a receber")),
    request_body = UpdateTitlePayload,
    responses(
        (status = 200, description = "Conta a receber atualizada", body = AccountReceivable),
        (status = 403, description = "Acesso negado"),
        (status = 409, description = "Título não está mais pendente")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_receivable(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTitlePayload>,
) -> Result<impl IntoResponse, AppError> {
    ensure_can_manage(&user)?;

    payload.validate().map_err(AppError::ValidationError)?;

    let title = app_state.finance_service.update_receivable(id, payload).await?;

    Ok((StatusCode::OK, Json(title)))
}

// POST /api/receivables/{id}/approve
#[utoipa::path(
    post,
    path = "/api/receivables/{id}/approve",
    tag = "Contas a Receber",
    params(("id" = i32, Path, description = "ID da conta a receber")),
    responses(
        (status = 200, description = "Conta a receber aprovada", body = AccountReceivable),
        (status = 403, description = "Acesso negado"),
        (status = 409, description = "Transição de status inválida")
    ),
    security(("api_jwt" = []))
)]
pub async fn approve_receivable(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ensure_can_approve(&user)?;

    let title = app_state
        .finance_service
        .approve_receivable(id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(title)))
}

// POST /api/receivables/{id}/settle
#[utoipa::path(
    post,
    path = "/api/receivables/{id}/settle",
    tag = "Contas a Receber",
    params(("id" = i32, Path, description = "ID da conta a receber")),
    request_body = SettleTitlePayload,
    responses(
        (status = 200, description = "Conta a receber quitada", body = AccountReceivable),
        (status = 403, description = "Acesso negado"),
        (status = 409, description = "Transição de status inválida")
    ),
    security(("api_jwt" = []))
)]
pub async fn settle_receivable(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(payload): Json<SettleTitlePayload>,
) -> Result<impl IntoResponse, AppError> {
    ensure_can_manage(&user)?;

    let title = app_state
        .finance_service
        .settle_receivable(id, payload.paid_on)
        .await?;

    Ok((StatusCode::OK, Json(title)))
}

// POST /api/receivables/{id}/cancel
#[utoipa::path(
    post,
    path = "/api/receivables/{id}/cancel",
    tag = "Contas a Receber",
    params(("id" = i32, Path, description = "ID da conta a receber")),
    responses(
        (status = 200, description = "Conta a receber cancelada", body = AccountReceivable),
        (status = 403, description = "Acesso negado"),
        (status = 409, description = "Transição de status inválida")
    ),
    security(("api_jwt" = []))
)]
pub async fn cancel_receivable(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ensure_can_approve(&user)?;

    let title = app_state.finance_service.cancel_receivable(id).await?;

    Ok((StatusCode::OK, Json(title)))
}

// =============================================================================
//  RECEITAS DIÁRIAS
// =============================================================================

// POST /api/daily-revenues
#[utoipa::path(
    post,
    path = "/api/daily-revenues",
    tag = "Receitas Diárias",
    request_body = CreateDailyRevenuePayload,
    responses(
        (status = 201, description = "Receita diária registrada", body = DailyRevenue),
        (status = 403, description = "Acesso negado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_daily_revenue(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateDailyRevenuePayload>,
) -> Result<impl IntoResponse, AppError> {
    ensure_can_manage(&user)?;

    payload.validate().map_err(AppError::ValidationError)?;

    let revenue = app_state
        .finance_repo
        .create_daily_revenue(
            payload.event_id,
            payload.revenue_date,
            payload.amount,
            payload.description.as_deref(),
            user.id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(revenue)))
}

// GET /api/daily-revenues
#[utoipa::path(
    get,
    path = "/api/daily-revenues",
    tag = "Receitas Diárias",
    responses(
        (status = 200, description = "Receitas diárias visíveis ao solicitante", body = Vec<DailyRevenue>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_daily_revenues(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let revenues = app_state.finance_repo.get_all_daily_revenues().await?;

    let revenues = app_state
        .authorization
        .filter_financials_by_permission(revenues, user.id, user.role)
        .await?;

    Ok((StatusCode::OK, Json(revenues)))
}

// DELETE /api/daily-revenues/{id}
#[utoipa::path(
    delete,
    path = "/api/daily-revenues/{id}",
    tag = "Receitas Diárias",
    params(("id" = i32, Path, description = "ID da receita diária")),
    responses(
        (status = 204, description = "Receita diária removida"),
        (status = 403, description = "Acesso negado"),
        (status = 404, description = "Receita diária não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_daily_revenue(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ensure_can_manage(&user)?;

    app_state.finance_repo.delete_daily_revenue(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  CATEGORIAS
// =============================================================================

// POST /api/categories
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Categorias",
    request_body = CreateCategoryPayload,
    responses(
        (status = 201, description = "Categoria criada", body = FinancialCategory),
        (status = 403, description = "Acesso negado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_category(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateCategoryPayload>,
) -> Result<impl IntoResponse, AppError> {
    if !user.role.can_manage_categories() {
        return Err(AppError::Forbidden(
            "Seu perfil não permite gerenciar categorias.".into(),
        ));
    }

    payload.validate().map_err(AppError::ValidationError)?;

    let category = app_state
        .finance_repo
        .create_category(&payload.name, payload.kind)
        .await?;

    Ok((StatusCode::CREATED, Json(category)))
}

// GET /api/categories
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categorias",
    responses(
        (status = 200, description = "Plano de contas", body = Vec<FinancialCategory>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_categories(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    // Plano de contas é cadastro global: qualquer perfil autenticado lê.
    let categories = app_state.finance_repo.get_all_categories().await?;

    Ok((StatusCode::OK, Json(categories)))
}
