// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Usuários ---
        handlers::users::create_user,
        handlers::users::list_users,
        handlers::users::get_user,
        handlers::users::update_user,

        // --- Empresas ---
        handlers::companies::create_company,
        handlers::companies::list_companies,
        handlers::companies::get_company,
        handlers::companies::update_company,

        // --- Eventos ---
        handlers::events::create_event,
        handlers::events::list_events,
        handlers::events::get_event,
        handlers::events::update_event,

        // --- Fornecedores / Clientes ---
        handlers::partners::create_supplier,
        handlers::partners::list_suppliers,
        handlers::partners::create_client,
        handlers::partners::list_clients,

        // --- Contas a Pagar ---
        handlers::finance::create_payable,
        handlers::finance::list_payables,
        handlers::finance::get_payable,
        handlers::finance::update_payable,
        handlers::finance::approve_payable,
        handlers::finance::settle_payable,
        handlers::finance::cancel_payable,

        // --- Contas a Receber ---
        handlers::finance::create_receivable,
        handlers::finance::list_receivables,
        handlers::finance::get_receivable,
        handlers::finance::update_receivable,
        handlers::finance::approve_receivable,
        handlers::finance::settle_receivable,
        handlers::finance::cancel_receivable,

        // --- Receitas Diárias ---
        handlers::finance::create_daily_revenue,
        handlers::finance::list_daily_revenues,
        handlers::finance::delete_daily_revenue,

        // --- Categorias ---
        handlers::finance::create_category,
        handlers::finance::list_categories,

        // --- Relatórios ---
        handlers::reports::financial_summary,
    ),
    components(
        schemas(
            // --- Auth ---
            models::role::Role,
            models::auth::User,
            models::auth::LoginPayload,
            models::auth::AuthResponse,
            models::auth::CreateUserPayload,
            models::auth::UpdateUserPayload,
            models::auth::UserWithLinks,

            // --- Empresas / Eventos ---
            models::company::Company,
            models::company::CreateCompanyPayload,
            models::company::UpdateCompanyPayload,
            models::event::Event,
            models::event::CreateEventPayload,
            models::event::UpdateEventPayload,

            // --- Fornecedores / Clientes ---
            models::partner::Supplier,
            models::partner::Client,
            models::partner::CreateSupplierPayload,
            models::partner::CreateClientPayload,

            // --- Financeiro ---
            models::finance::TitleStatus,
            models::finance::CategoryKind,
            models::finance::FinancialCategory,
            models::finance::AccountPayable,
            models::finance::AccountReceivable,
            models::finance::DailyRevenue,
            models::finance::CreateTitlePayload,
            models::finance::UpdateTitlePayload,
            models::finance::SettleTitlePayload,
            models::finance::CreateDailyRevenuePayload,
            models::finance::CreateCategoryPayload,

            // --- Relatórios ---
            models::report::FinancialSummary,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação"),
        (name = "Usuários", description = "Administração de usuários e vínculos de permissão"),
        (name = "Empresas", description = "Cadastro de empresas"),
        (name = "Eventos", description = "Eventos (centros de custo)"),
        (name = "Fornecedores", description = "Cadastro de fornecedores"),
        (name = "Clientes", description = "Cadastro de clientes"),
        (name = "Contas a Pagar", description = "Títulos a pagar"),
        (name = "Contas a Receber", description = "Títulos a receber"),
        (name = "Receitas Diárias", description = "Movimento diário de caixa dos eventos"),
        (name = "Categorias", description = "Plano de contas"),
        (name = "Relatórios", description = "Resumos financeiros")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
