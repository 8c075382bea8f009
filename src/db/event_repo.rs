// src/db/event_repo.rs

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{common::error::AppError, models::event::Event};

#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        company_id: i32,
        name: &str,
        starts_on: Option<NaiveDate>,
        ends_on: Option<NaiveDate>,
    ) -> Result<Event, AppError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (company_id, name, starts_on, ends_on)
            VALUES ($1, $2, $3, $4)
            RETURNING id, company_id, name, starts_on, ends_on, is_active, created_at, updated_at
            "#,
        )
        .bind(company_id)
        .bind(name)
        .bind(starts_on)
        .bind(ends_on)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    pub async fn get_all(&self) -> Result<Vec<Event>, AppError> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT id, company_id, name, starts_on, ends_on, is_active, created_at, updated_at
             FROM events
             ORDER BY starts_on DESC NULLS LAST, name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, AppError> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, company_id, name, starts_on, ends_on, is_active, created_at, updated_at
             FROM events
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    pub async fn update(
        &self,
        id: i32,
        name: Option<&str>,
        starts_on: Option<NaiveDate>,
        ends_on: Option<NaiveDate>,
        is_active: Option<bool>,
    ) -> Result<Event, AppError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET name       = COALESCE($2, name),
                starts_on  = COALESCE($3, starts_on),
                ends_on    = COALESCE($4, ends_on),
                is_active  = COALESCE($5, is_active),
                updated_at = now()
            WHERE id = $1
            RETURNING id, company_id, name, starts_on, ends_on, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(starts_on)
        .bind(ends_on)
        .bind(is_active)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Evento não encontrado.".into()))?;

        Ok(event)
    }
}
