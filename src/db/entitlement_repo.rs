// src/db/entitlement_repo.rs
//
// Tabelas de vínculo usuário↔empresa e usuário↔evento. São a fonte concreta
// dos conjuntos de IDs que um usuário restrito pode enxergar.

use sqlx::{PgConnection, PgPool};

use crate::common::error::AppError;

#[derive(Clone)]
pub struct EntitlementRepository {
    pool: PgPool,
}

impl EntitlementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn company_ids_for_user(&self, user_id: i32) -> Result<Vec<i32>, AppError> {
        let ids = sqlx::query_scalar::<_, i32>(
            "SELECT company_id FROM user_companies WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    pub async fn event_ids_for_user(&self, user_id: i32) -> Result<Vec<i32>, AppError> {
        let ids =
            sqlx::query_scalar::<_, i32>("SELECT event_id FROM user_events WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(ids)
    }

    // Junção secundária usada pela filtragem de lançamentos: todos os eventos
    // pertencentes às empresas informadas.
    pub async fn event_ids_for_companies(
        &self,
        company_ids: &[i32],
    ) -> Result<Vec<i32>, AppError> {
        if company_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = sqlx::query_scalar::<_, i32>(
            "SELECT id FROM events WHERE company_id = ANY($1)",
        )
        .bind(company_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    // -------------------------------------------------------------------------
    //  SUBSTITUIÇÃO EM BLOCO (remove tudo e reinsere, dentro da transação)
    // -------------------------------------------------------------------------

    pub async fn replace_company_links(
        &self,
        conn: &mut PgConnection,
        user_id: i32,
        company_ids: &[i32],
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM user_companies WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *conn)
            .await?;

        if !company_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO user_companies (user_id, company_id)
                SELECT $1, unnest($2::int4[])
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(user_id)
            .bind(company_ids)
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }

    pub async fn replace_event_links(
        &self,
        conn: &mut PgConnection,
        user_id: i32,
        event_ids: &[i32],
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM user_events WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *conn)
            .await?;

        if !event_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO user_events (user_id, event_id)
                SELECT $1, unnest($2::int4[])
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(user_id)
            .bind(event_ids)
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }
}
