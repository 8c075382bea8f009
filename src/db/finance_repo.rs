// src/db/finance_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::finance::{
        AccountPayable, AccountReceivable, CategoryKind, DailyRevenue, FinancialCategory,
        TitleStatus,
    },
};

const PAYABLE_COLUMNS: &str = "id, event_id, category_id, supplier_id, description, amount, \
                               due_date, status, approved_by, paid_on, created_by, created_at, \
                               updated_at";

const RECEIVABLE_COLUMNS: &str = "id, event_id, category_id, client_id, description, amount, \
                                  due_date, status, approved_by, paid_on, created_by, created_at, \
                                  updated_at";

#[derive(Clone)]
pub struct FinanceRepository {
    pool: PgPool,
}

impl FinanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  CATEGORIAS (Plano de Contas)
    // =========================================================================

    pub async fn create_category(
        &self,
        name: &str,
        kind: CategoryKind,
    ) -> Result<FinancialCategory, AppError> {
        let category = sqlx::query_as::<_, FinancialCategory>(
            r#"
            INSERT INTO financial_categories (name, kind)
            VALUES ($1, $2)
            RETURNING id, name, kind, is_active
            "#,
        )
        .bind(name)
        .bind(kind)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::UniqueConstraintViolation(
                        "Já existe uma categoria com esse nome.".into(),
                    );
                }
            }
            e.into()
        })?;

        Ok(category)
    }

    pub async fn get_all_categories(&self) -> Result<Vec<FinancialCategory>, AppError> {
        let categories = sqlx::query_as::<_, FinancialCategory>(
            "SELECT id, name, kind, is_active
             FROM financial_categories
             ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    // =========================================================================
    //  CONTAS A PAGAR
    // =========================================================================

    pub async fn create_payable(
        &self,
        event_id: i32,
        category_id: Option<i32>,
        supplier_id: Option<i32>,
        description: &str,
        amount: Decimal,
        due_date: NaiveDate,
        created_by: i32,
    ) -> Result<AccountPayable, AppError> {
        let title = sqlx::query_as::<_, AccountPayable>(&format!(
            "INSERT INTO accounts_payable \
                 (event_id, category_id, supplier_id, description, amount, due_date, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {PAYABLE_COLUMNS}"
        ))
        .bind(event_id)
        .bind(category_id)
        .bind(supplier_id)
        .bind(description)
        .bind(amount)
        .bind(due_date)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(title)
    }

    pub async fn get_all_payables(&self) -> Result<Vec<AccountPayable>, AppError> {
        let titles = sqlx::query_as::<_, AccountPayable>(&format!(
            "SELECT {PAYABLE_COLUMNS} FROM accounts_payable ORDER BY due_date ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(titles)
    }

    pub async fn find_payable(&self, id: i32) -> Result<Option<AccountPayable>, AppError> {
        let title = sqlx::query_as::<_, AccountPayable>(&format!(
            "SELECT {PAYABLE_COLUMNS} FROM accounts_payable WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(title)
    }

    pub async fn update_payable(
        &self,
        id: i32,
        description: Option<&str>,
        amount: Option<Decimal>,
        due_date: Option<NaiveDate>,
        category_id: Option<i32>,
    ) -> Result<AccountPayable, AppError> {
        let title = sqlx::query_as::<_, AccountPayable>(&format!(
            "UPDATE accounts_payable \
             SET description = COALESCE($2, description), \
                 amount      = COALESCE($3, amount), \
                 due_date    = COALESCE($4, due_date), \
                 category_id = COALESCE($5, category_id), \
                 updated_at  = now() \
             WHERE id = $1 \
             RETURNING {PAYABLE_COLUMNS}"
        ))
        .bind(id)
        .bind(description)
        .bind(amount)
        .bind(due_date)
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Conta a pagar não encontrada.".into()))?;

        Ok(title)
    }

    pub async fn set_payable_status(
        &self,
        id: i32,
        status: TitleStatus,
        approved_by: Option<i32>,
        paid_on: Option<NaiveDate>,
    ) -> Result<AccountPayable, AppError> {
        let title = sqlx::query_as::<_, AccountPayable>(&format!(
            "UPDATE accounts_payable \
             SET status      = $2, \
                 approved_by = COALESCE($3, approved_by), \
                 paid_on     = COALESCE($4, paid_on), \
                 updated_at  = now() \
             WHERE id = $1 \
             RETURNING {PAYABLE_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .bind(approved_by)
        .bind(paid_on)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Conta a pagar não encontrada.".into()))?;

        Ok(title)
    }

    // =========================================================================
    //  CONTAS A RECEBER
    // =========================================================================

    pub async fn create_receivable(
        &self,
        event_id: i32,
        category_id: Option<i32>,
        client_id: Option<i32>,
        description: &str,
        amount: Decimal,
        due_date: NaiveDate,
        created_by: i32,
    ) -> Result<AccountReceivable, AppError> {
        let title = sqlx::query_as::<_, AccountReceivable>(&format!(
            "INSERT INTO accounts_receivable \
                 (event_id, category_id, client_id, description, amount, due_date, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {RECEIVABLE_COLUMNS}"
        ))
        .bind(event_id)
        .bind(category_id)
        .bind(client_id)
        .bind(description)
        .bind(amount)
        .bind(due_date)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(title)
    }

    pub async fn get_all_receivables(&self) -> Result<Vec<AccountReceivable>, AppError> {
        let titles = sqlx::query_as::<_, AccountReceivable>(&format!(
            "SELECT {RECEIVABLE_COLUMNS} FROM accounts_receivable ORDER BY due_date ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(titles)
    }

    pub async fn find_receivable(&self, id: i32) -> Result<Option<AccountReceivable>, AppError> {
        let title = sqlx::query_as::<_, AccountReceivable>(&format!(
            "SELECT {RECEIVABLE_COLUMNS} FROM accounts_receivable WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(title)
    }

    pub async fn update_receivable(
        &self,
        id: i32,
        description: Option<&str>,
        amount: Option<Decimal>,
        due_date: Option<NaiveDate>,
        category_id: Option<i32>,
    ) -> Result<AccountReceivable, AppError> {
        let title = sqlx::query_as::<_, AccountReceivable>(&format!(
            "UPDATE accounts_receivable \
             SET description = COALESCE($2, description), \
                 amount      = COALESCE($3, amount), \
                 due_date    = COALESCE($4, due_date), \
                 category_id = COALESCE($5, category_id), \
                 updated_at  = now() \
             WHERE id = $1 \
             RETURNING {RECEIVABLE_COLUMNS}"
        ))
        .bind(id)
        .bind(description)
        .bind(amount)
        .bind(due_date)
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Conta a receber não encontrada.".into()))?;

        Ok(title)
    }

    pub async fn set_receivable_status(
        &self,
        id: i32,
        status: TitleStatus,
        approved_by: Option<i32>,
        paid_on: Option<NaiveDate>,
    ) -> Result<AccountReceivable, AppError> {
        let title = sqlx::query_as::<_, AccountReceivable>(&format!(
            "UPDATE accounts_receivable \
             SET status      = $2, \
                 approved_by = COALESCE($3, approved_by), \
                 paid_on     = COALESCE($4, paid_on), \
                 updated_at  = now() \
             WHERE id = $1 \
             RETURNING {RECEIVABLE_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .bind(approved_by)
        .bind(paid_on)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Conta a receber não encontrada.".into()))?;

        Ok(title)
    }

    // =========================================================================
    //  RECEITAS DIÁRIAS
    // =========================================================================

    pub async fn create_daily_revenue(
        &self,
        event_id: i32,
        revenue_date: NaiveDate,
        amount: Decimal,
        description: Option<&str>,
        created_by: i32,
    ) -> Result<DailyRevenue, AppError> {
        let revenue = sqlx::query_as::<_, DailyRevenue>(
            r#"
            INSERT INTO daily_revenues (event_id, revenue_date, amount, description, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, event_id, revenue_date, amount, description, created_by, created_at
            "#,
        )
        .bind(event_id)
        .bind(revenue_date)
        .bind(amount)
        .bind(description)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(revenue)
    }

    pub async fn get_all_daily_revenues(&self) -> Result<Vec<DailyRevenue>, AppError> {
        let revenues = sqlx::query_as::<_, DailyRevenue>(
            "SELECT id, event_id, revenue_date, amount, description, created_by, created_at
             FROM daily_revenues
             ORDER BY revenue_date DESC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(revenues)
    }

    pub async fn delete_daily_revenue(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM daily_revenues WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Receita diária não encontrada.".into()));
        }

        Ok(())
    }
}
