// src/services/user_service.rs
//
// Administração de usuários e de seus vínculos de permissão. Os vínculos
// empresa/evento são substituídos em bloco (remove tudo e reinsere) dentro
// de uma transação, junto com a própria alteração do usuário.

use bcrypt::hash;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{EntitlementRepository, UserRepository},
    models::auth::{CreateUserPayload, UpdateUserPayload, User, UserWithLinks},
};

#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
    entitlement_repo: EntitlementRepository,
    pool: PgPool,
}

impl UserService {
    pub fn new(
        user_repo: UserRepository,
        entitlement_repo: EntitlementRepository,
        pool: PgPool,
    ) -> Self {
        Self { user_repo, entitlement_repo, pool }
    }

    pub async fn create_user(&self, payload: CreateUserPayload) -> Result<UserWithLinks, AppError> {
        let hashed_password = hash_password(payload.password).await?;

        let mut tx = self.pool.begin().await?;

        let user = self
            .user_repo
            .create_user(
                &mut *tx,
                &payload.name,
                &payload.email,
                &hashed_password,
                payload.role,
            )
            .await?;

        self.entitlement_repo
            .replace_company_links(&mut *tx, user.id, &payload.company_ids)
            .await?;
        self.entitlement_repo
            .replace_event_links(&mut *tx, user.id, &payload.event_ids)
            .await?;

        tx.commit().await?;

        Ok(UserWithLinks {
            user,
            company_ids: payload.company_ids,
            event_ids: payload.event_ids,
        })
    }

    pub async fn update_user(
        &self,
        id: i32,
        payload: UpdateUserPayload,
    ) -> Result<UserWithLinks, AppError> {
        let hashed_password = match payload.password {
            Some(password) => Some(hash_password(password).await?),
            None => None,
        };

        let mut tx = self.pool.begin().await?;

        let user = self
            .user_repo
            .update_user(
                &mut *tx,
                id,
                payload.name.as_deref(),
                payload.email.as_deref(),
                hashed_password.as_deref(),
                payload.role,
                payload.is_active,
            )
            .await?;

        // Vínculos ausentes no payload ficam como estão; presentes, são
        // substituídos por inteiro.
        if let Some(company_ids) = &payload.company_ids {
            self.entitlement_repo
                .replace_company_links(&mut *tx, user.id, company_ids)
                .await?;
        }
        if let Some(event_ids) = &payload.event_ids {
            self.entitlement_repo
                .replace_event_links(&mut *tx, user.id, event_ids)
                .await?;
        }

        tx.commit().await?;

        self.with_links(user).await
    }

    pub async fn get_user(&self, id: i32) -> Result<UserWithLinks, AppError> {
        let user = self.user_repo.find_by_id(id).await?.ok_or(AppError::UserNotFound)?;
        self.with_links(user).await
    }

    pub async fn list_users(&self) -> Result<Vec<UserWithLinks>, AppError> {
        let users = self.user_repo.get_all().await?;

        let mut result = Vec::with_capacity(users.len());
        for user in users {
            result.push(self.with_links(user).await?);
        }

        Ok(result)
    }

    async fn with_links(&self, user: User) -> Result<UserWithLinks, AppError> {
        let company_ids = self.entitlement_repo.company_ids_for_user(user.id).await?;
        let event_ids = self.entitlement_repo.event_ids_for_user(user.id).await?;

        Ok(UserWithLinks { user, company_ids, event_ids })
    }
}

async fn hash_password(password: String) -> Result<String, AppError> {
    // Hashing fora do runtime async, como no login.
    tokio::task::spawn_blocking(move || hash(&password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))?
        .map_err(AppError::from)
}
