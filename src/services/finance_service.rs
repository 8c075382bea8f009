// src/services/finance_service.rs
//
// Regras de transição dos títulos: PENDING → APPROVED → PAID, com
// cancelamento possível enquanto não quitado. Edição só enquanto pendente.

use chrono::NaiveDate;

use crate::{
    common::error::AppError,
    db::FinanceRepository,
    models::finance::{AccountPayable, AccountReceivable, TitleStatus, UpdateTitlePayload},
};

#[derive(Clone)]
pub struct FinanceService {
    repo: FinanceRepository,
}

impl FinanceService {
    pub fn new(repo: FinanceRepository) -> Self {
        Self { repo }
    }

    // =========================================================================
    //  CONTAS A PAGAR
    // =========================================================================

    pub async fn update_payable(
        &self,
        id: i32,
        payload: UpdateTitlePayload,
    ) -> Result<AccountPayable, AppError> {
        let title = self
            .repo
            .find_payable(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Conta a pagar não encontrada.".into()))?;

        ensure_editable(title.status)?;

        self.repo
            .update_payable(
                id,
                payload.description.as_deref(),
                payload.amount,
                payload.due_date,
                payload.category_id,
            )
            .await
    }

    pub async fn approve_payable(
        &self,
        id: i32,
        approver_id: i32,
    ) -> Result<AccountPayable, AppError> {
        let title = self
            .repo
            .find_payable(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Conta a pagar não encontrada.".into()))?;

        ensure_transition(title.status, TitleStatus::Approved)?;

        self.repo
            .set_payable_status(id, TitleStatus::Approved, Some(approver_id), None)
            .await
    }

    pub async fn settle_payable(
        &self,
        id: i32,
        paid_on: NaiveDate,
    ) -> Result<AccountPayable, AppError> {
        let title = self
            .repo
            .find_payable(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Conta a pagar não encontrada.".into()))?;

        ensure_transition(title.status, TitleStatus::Paid)?;

        self.repo
            .set_payable_status(id, TitleStatus::Paid, None, Some(paid_on))
            .await
    }

    pub async fn cancel_payable(&self, id: i32) -> Result<AccountPayable, AppError> {
        let title = self
            .repo
            .find_payable(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Conta a pagar não encontrada.".into()))?;

        ensure_transition(title.status, TitleStatus::Cancelled)?;

        self.repo
            .set_payable_status(id, TitleStatus::Cancelled, None, None)
            .await
    }

    // =========================================================================
    //  CONTAS A RECEBER
    // =========================================================================

    pub async fn update_receivable(
        &self,
        id: i32,
        payload: UpdateTitlePayload,
    ) -> Result<AccountReceivable, AppError> {
        let title = self
            .repo
            .find_receivable(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Conta a receber não encontrada.".into()))?;

        ensure_editable(title.status)?;

        self.repo
            .update_receivable(
                id,
                payload.description.as_deref(),
                payload.amount,
                payload.due_date,
                payload.category_id,
            )
            .await
    }

    pub async fn approve_receivable(
        &self,
        id: i32,
        approver_id: i32,
    ) -> Result<AccountReceivable, AppError> {
        let title = self
            .repo
            .find_receivable(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Conta a receber não encontrada.".into()))?;

        ensure_transition(title.status, TitleStatus::Approved)?;

        self.repo
            .set_receivable_status(id, TitleStatus::Approved, Some(approver_id), None)
            .await
    }

    pub async fn settle_receivable(
        &self,
        id: i32,
        paid_on: NaiveDate,
    ) -> Result<AccountReceivable, AppError> {
        let title = self
            .repo
            .find_receivable(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Conta a receber não encontrada.".into()))?;

        ensure_transition(title.status, TitleStatus::Paid)?;

        self.repo
            .set_receivable_status(id, TitleStatus::Paid, None, Some(paid_on))
            .await
    }

    pub async fn cancel_receivable(&self, id: i32) -> Result<AccountReceivable, AppError> {
        let title = self
            .repo
            .find_receivable(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Conta a receber não encontrada.".into()))?;

        ensure_transition(title.status, TitleStatus::Cancelled)?;

        self.repo
            .set_receivable_status(id, TitleStatus::Cancelled, None, None)
            .await
    }
}

fn ensure_editable(status: TitleStatus) -> Result<(), AppError> {
    if status != TitleStatus::Pending {
        return Err(AppError::Conflict(
            "Somente títulos pendentes podem ser editados.".into(),
        ));
    }
    Ok(())
}

fn ensure_transition(from: TitleStatus, to: TitleStatus) -> Result<(), AppError> {
    let allowed = matches!(
        (from, to),
        (TitleStatus::Pending, TitleStatus::Approved)
            | (TitleStatus::Approved, TitleStatus::Paid)
            | (TitleStatus::Pending, TitleStatus::Cancelled)
            | (TitleStatus::Approved, TitleStatus::Cancelled)
    );

    if !allowed {
        return Err(AppError::Conflict(format!(
            "Transição de status inválida: {:?} → {:?}.",
            from, to
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transicoes_validas_do_ciclo_de_vida() {
        assert!(ensure_transition(TitleStatus::Pending, TitleStatus::Approved).is_ok());
        assert!(ensure_transition(TitleStatus::Approved, TitleStatus::Paid).is_ok());
        assert!(ensure_transition(TitleStatus::Pending, TitleStatus::Cancelled).is_ok());
        assert!(ensure_transition(TitleStatus::Approved, TitleStatus::Cancelled).is_ok());
    }

    #[test]
    fn titulo_quitado_ou_cancelado_e_terminal() {
        assert!(ensure_transition(TitleStatus::Paid, TitleStatus::Cancelled).is_err());
        assert!(ensure_transition(TitleStatus::Paid, TitleStatus::Approved).is_err());
        assert!(ensure_transition(TitleStatus::Cancelled, TitleStatus::Approved).is_err());
        assert!(ensure_transition(TitleStatus::Cancelled, TitleStatus::Paid).is_err());
    }

    #[test]
    fn quitacao_exige_aprovacao_previa() {
        assert!(ensure_transition(TitleStatus::Pending, TitleStatus::Paid).is_err());
    }

    #[test]
    fn edicao_somente_enquanto_pendente() {
        assert!(ensure_editable(TitleStatus::Pending).is_ok());
        assert!(ensure_editable(TitleStatus::Approved).is_err());
        assert!(ensure_editable(TitleStatus::Paid).is_err());
        assert!(ensure_editable(TitleStatus::Cancelled).is_err());
    }
}
