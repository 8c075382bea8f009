// src/config.rs

use std::{env, sync::Arc, time::Duration};

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    common::throttle::LoginThrottle,
    db::{
        CompanyRepository, EntitlementRepository, EventRepository, FinanceRepository,
        PartnerRepository, UserRepository,
    },
    services::{
        auth::AuthService, authorization::AuthorizationService, finance_service::FinanceService,
        report_service::ReportService, user_service::UserService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,

    pub company_repo: CompanyRepository,
    pub event_repo: EventRepository,
    pub partner_repo: PartnerRepository,
    pub finance_repo: FinanceRepository,

    pub auth_service: AuthService,
    pub authorization: AuthorizationService,
    pub user_service: UserService,
    pub finance_service: FinanceService,
    pub report_service: ReportService,

    // Janela de tentativas de login, injetada nos handlers (nunca singleton
    // de módulo).
    pub login_throttle: Arc<LoginThrottle>,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let entitlement_repo = EntitlementRepository::new(db_pool.clone());
        let company_repo = CompanyRepository::new(db_pool.clone());
        let event_repo = EventRepository::new(db_pool.clone());
        let partner_repo = PartnerRepository::new(db_pool.clone());
        let finance_repo = FinanceRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo.clone(), jwt_secret);
        let authorization = AuthorizationService::new(entitlement_repo.clone());
        let user_service = UserService::new(user_repo, entitlement_repo, db_pool.clone());
        let finance_service = FinanceService::new(finance_repo.clone());
        let report_service = ReportService::new();

        Ok(Self {
            db_pool,
            company_repo,
            event_repo,
            partner_repo,
            finance_repo,
            auth_service,
            authorization,
            user_service,
            finance_service,
            report_service,
            login_throttle: Arc::new(LoginThrottle::new()),
        })
    }
}
