// src/handlers/reports.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError, config::AppState, middleware::auth::AuthenticatedUser,
    models::report::FinancialSummary,
};

// GET /api/reports/summary
#[utoipa::path(
    get,
    path = "/api/reports/summary",
    tag = "Relatórios",
    responses(
        (status = 200, description = "Resumo financeiro do que o solicitante enxerga", body = FinancialSummary)
    ),
    security(("api_jwt" = []))
)]
pub async fn financial_summary(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    // A agregação roda sempre DEPOIS do recorte de permissão: o resumo de
    // cada usuário cobre exatamente o que as listagens dele mostram.
    let payables = app_state.finance_repo.get_all_payables().await?;
    let payables = app_state
        .authorization
        .filter_financials_by_permission(payables, user.id, user.role)
        .await?;

    let receivables = app_state.finance_repo.get_all_receivables().await?;
    let receivables = app_state
        .authorization
        .filter_financials_by_permission(receivables, user.id, user.role)
        .await?;

    let revenues = app_state.finance_repo.get_all_daily_revenues().await?;
    let revenues = app_state
        .authorization
        .filter_financials_by_permission(revenues, user.id, user.role)
        .await?;

    let summary = app_state
        .report_service
        .financial_summary(&payables, &receivables, &revenues);

    Ok((StatusCode::OK, Json(summary)))
}
