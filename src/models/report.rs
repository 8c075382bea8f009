// src/models/report.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

// Resumo financeiro calculado sobre os lançamentos visíveis ao solicitante
// (a agregação roda depois da filtragem por permissão).
#[derive(Debug, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    #[schema(example = "45200.00")]
    pub total_payable: Decimal,

    #[schema(example = "88000.00")]
    pub total_receivable: Decimal,

    #[schema(example = "61340.00")]
    pub total_daily_revenue: Decimal,

    pub payables_pending: i64,
    pub payables_approved: i64,
    pub payables_paid: i64,

    pub receivables_pending: i64,
    pub receivables_approved: i64,
    pub receivables_paid: i64,
}
