// src/db/partner_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::partner::{Client, Supplier},
};

#[derive(Clone)]
pub struct PartnerRepository {
    pool: PgPool,
}

impl PartnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  FORNECEDORES
    // =========================================================================

    pub async fn create_supplier(
        &self,
        company_id: i32,
        name: &str,
        cnpj: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Supplier, AppError> {
        let supplier = sqlx::query_as::<_, Supplier>(
            r#"
            INSERT INTO suppliers (company_id, name, cnpj, email, phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, company_id, name, cnpj, email, phone, created_at
            "#,
        )
        .bind(company_id)
        .bind(name)
        .bind(cnpj)
        .bind(email)
        .bind(phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(supplier)
    }

    pub async fn get_all_suppliers(&self) -> Result<Vec<Supplier>, AppError> {
        let suppliers = sqlx::query_as::<_, Supplier>(
            "SELECT id, company_id, name, cnpj, email, phone, created_at
             FROM suppliers
             ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(suppliers)
    }

    // =========================================================================
    //  CLIENTES
    // =========================================================================

    pub async fn create_client(
        &self,
        company_id: i32,
        name: &str,
        document: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Client, AppError> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (company_id, name, document, email, phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, company_id, name, document, email, phone, created_at
            "#,
        )
        .bind(company_id)
        .bind(name)
        .bind(document)
        .bind(email)
        .bind(phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn get_all_clients(&self) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT id, company_id, name, document, email, phone, created_at
             FROM clients
             ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }
}
