// src/services/report_service.rs
//
// Agregação do resumo financeiro. Recebe coleções JÁ filtradas pelo recorte
// de permissão; este serviço nunca consulta vínculos.

use rust_decimal::Decimal;

use crate::models::{
    finance::{AccountPayable, AccountReceivable, DailyRevenue, TitleStatus},
    report::FinancialSummary,
};

#[derive(Clone)]
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    pub fn financial_summary(
        &self,
        payables: &[AccountPayable],
        receivables: &[AccountReceivable],
        revenues: &[DailyRevenue],
    ) -> FinancialSummary {
        let mut summary = FinancialSummary::default();

        for title in payables {
            // Cancelados ficam fora dos totais.
            if title.status != TitleStatus::Cancelled {
                summary.total_payable += title.amount;
            }
            match title.status {
                TitleStatus::Pending => summary.payables_pending += 1,
                TitleStatus::Approved => summary.payables_approved += 1,
                TitleStatus::Paid => summary.payables_paid += 1,
                TitleStatus::Cancelled => {}
            }
        }

        for title in receivables {
            if title.status != TitleStatus::Cancelled {
                summary.total_receivable += title.amount;
            }
            match title.status {
                TitleStatus::Pending => summary.receivables_pending += 1,
                TitleStatus::Approved => summary.receivables_approved += 1,
                TitleStatus::Paid => summary.receivables_paid += 1,
                TitleStatus::Cancelled => {}
            }
        }

        summary.total_daily_revenue = revenues.iter().map(|r| r.amount).sum::<Decimal>();

        summary
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;

    fn payable(amount: i64, status: TitleStatus) -> AccountPayable {
        AccountPayable {
            id: 1,
            event_id: Some(10),
            category_id: None,
            supplier_id: None,
            description: "teste".into(),
            amount: Decimal::from(amount),
            due_date: NaiveDate::from_ymd_opt(2026, 7, 5).unwrap(),
            status,
            approved_by: None,
            paid_on: None,
            created_by: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn revenue(amount: i64) -> DailyRevenue {
        DailyRevenue {
            id: 1,
            event_id: Some(10),
            revenue_date: NaiveDate::from_ymd_opt(2026, 7, 11).unwrap(),
            amount: Decimal::from(amount),
            description: None,
            created_by: 1,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn soma_titulos_e_conta_por_status() {
        let payables = vec![
            payable(100, TitleStatus::Pending),
            payable(250, TitleStatus::Approved),
            payable(50, TitleStatus::Paid),
        ];
        let revenues = vec![revenue(30), revenue(70)];

        let summary = ReportService::new().financial_summary(&payables, &[], &revenues);

        assert_eq!(summary.total_payable, Decimal::from(400));
        assert_eq!(summary.payables_pending, 1);
        assert_eq!(summary.payables_approved, 1);
        assert_eq!(summary.payables_paid, 1);
        assert_eq!(summary.total_daily_revenue, Decimal::from(100));
    }

    #[test]
    fn titulo_cancelado_fica_fora_dos_totais() {
        let payables = vec![
            payable(100, TitleStatus::Pending),
            payable(999, TitleStatus::Cancelled),
        ];

        let summary = ReportService::new().financial_summary(&payables, &[], &[]);

        assert_eq!(summary.total_payable, Decimal::from(100));
    }

    #[test]
    fn resumo_de_colecoes_vazias_e_zerado() {
        let summary = ReportService::new().financial_summary(&[], &[], &[]);

        assert_eq!(summary.total_payable, Decimal::ZERO);
        assert_eq!(summary.total_receivable, Decimal::ZERO);
        assert_eq!(summary.total_daily_revenue, Decimal::ZERO);
    }
}
