// src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas públicas de autenticação
    let auth_routes = Router::new().route("/login", post(handlers::auth::login));

    // Tudo daqui para baixo exige Bearer token válido.
    let protected_routes = Router::new()
        .route("/auth/me", get(handlers::auth::get_me))
        // Administração de usuários (somente administrador)
        .route(
            "/users",
            post(handlers::users::create_user).get(handlers::users::list_users),
        )
        .route(
            "/users/{id}",
            get(handlers::users::get_user).put(handlers::users::update_user),
        )
        // Empresas
        .route(
            "/companies",
            post(handlers::companies::create_company).get(handlers::companies::list_companies),
        )
        .route(
            "/companies/{id}",
            get(handlers::companies::get_company).put(handlers::companies::update_company),
        )
        // Eventos (centros de custo)
        .route(
            "/events",
            post(handlers::events::create_event).get(handlers::events::list_events),
        )
        .route(
            "/events/{id}",
            get(handlers::events::get_event).put(handlers::events::update_event),
        )
        // Fornecedores e clientes
        .route(
            "/suppliers",
            post(handlers::partners::create_supplier).get(handlers::partners::list_suppliers),
        )
        .route(
            "/clients",
            post(handlers::partners::create_client).get(handlers::partners::list_clients),
        )
        // Contas a pagar
        .route(
            "/payables",
            post(handlers::finance::create_payable).get(handlers::finance::list_payables),
        )
        .route(
            "/payables/{id}",
            get(handlers::finance::get_payable).put(handlers::finance::update_payable),
        )
        .route("/payables/{id}/approve", post(handlers::finance::approve_payable))
        .route("/payables/{id}/settle", post(handlers::finance::settle_payable))
        .route("/payables/{id}/cancel", post(handlers::finance::cancel_payable))
        // Contas a receber
        .route(
            "/receivables",
            post(handlers::finance::create_receivable).get(handlers::finance::list_receivables),
        )
        .route(
            "/receivables/{id}",
            get(handlers::finance::get_receivable).put(handlers::finance::update_receivable),
        )
        .route(
            "/receivables/{id}/approve",
            post(handlers::finance::approve_receivable),
        )
        .route(
            "/receivables/{id}/settle",
            post(handlers::finance::settle_receivable),
        )
        .route(
            "/receivables/{id}/cancel",
            post(handlers::finance::cancel_receivable),
        )
        // Receitas diárias
        .route(
            "/daily-revenues",
            post(handlers::finance::create_daily_revenue)
                .get(handlers::finance::list_daily_revenues),
        )
        .route(
            "/daily-revenues/{id}",
            delete(handlers::finance::delete_daily_revenue),
        )
        // Plano de contas
        .route(
            "/categories",
            post(handlers::finance::create_category).get(handlers::finance::list_categories),
        )
        // Relatórios
        .route("/reports/summary", get(handlers::reports::financial_summary))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api", protected_routes)
        .with_state(app_state);

    // Inicia o servidor
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
