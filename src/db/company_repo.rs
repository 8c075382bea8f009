// src/db/company_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, models::company::Company};

#[derive(Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        cnpj: Option<&str>,
        city: Option<&str>,
        state: Option<&str>,
    ) -> Result<Company, AppError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (name, cnpj, city, state)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, cnpj, city, state, is_active, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(cnpj)
        .bind(city)
        .bind(state)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::UniqueConstraintViolation(
                        "Já existe uma empresa com esse CNPJ.".into(),
                    );
                }
            }
            e.into()
        })?;

        Ok(company)
    }

    pub async fn get_all(&self) -> Result<Vec<Company>, AppError> {
        let companies = sqlx::query_as::<_, Company>(
            "SELECT id, name, cnpj, city, state, is_active, created_at, updated_at
             FROM companies
             ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(companies)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Company>, AppError> {
        let company = sqlx::query_as::<_, Company>(
            "SELECT id, name, cnpj, city, state, is_active, created_at, updated_at
             FROM companies
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(company)
    }

    pub async fn update(
        &self,
        id: i32,
        name: Option<&str>,
        cnpj: Option<&str>,
        city: Option<&str>,
        state: Option<&str>,
        is_active: Option<bool>,
    ) -> Result<Company, AppError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies
            SET name       = COALESCE($2, name),
                cnpj       = COALESCE($3, cnpj),
                city       = COALESCE($4, city),
                state      = COALESCE($5, state),
                is_active  = COALESCE($6, is_active),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, cnpj, city, state, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(cnpj)
        .bind(city)
        .bind(state)
        .bind(is_active)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Empresa não encontrada.".into()))?;

        Ok(company)
    }
}
