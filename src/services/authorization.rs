// src/services/authorization.rs
//
// Núcleo de autorização e recorte de dados. Toda rota de listagem busca a
// coleção completa no banco e a repassa por um dos filtros daqui antes de
// responder; rotas de mutação consultam as capacidades do perfil (models/role).
//
// Convenção herdada das tabelas de vínculo: para perfis globais os conjuntos
// de IDs retornam vazios e significam "sem restrição": todo consumidor
// verifica `has_global_access()` antes de interpretar um conjunto vazio.

use std::collections::HashSet;

use crate::{
    common::error::AppError,
    db::EntitlementRepository,
    models::{
        company::Company,
        event::Event,
        finance::{AccountPayable, AccountReceivable, DailyRevenue},
        partner::{Client, Supplier},
        role::Role,
    },
};

// Contratos estruturais dos filtros: o recorte só precisa saber qual ID de
// empresa/evento cada registro carrega.
pub trait HasId {
    fn id(&self) -> i32;
}

pub trait HasCompanyId {
    fn company_id(&self) -> Option<i32>;
}

pub trait HasEventId {
    fn event_id(&self) -> Option<i32>;
}

impl HasId for Company {
    fn id(&self) -> i32 {
        self.id
    }
}

impl HasId for Event {
    fn id(&self) -> i32 {
        self.id
    }
}

impl HasCompanyId for Event {
    fn company_id(&self) -> Option<i32> {
        Some(self.company_id)
    }
}

impl HasCompanyId for Supplier {
    fn company_id(&self) -> Option<i32> {
        Some(self.company_id)
    }
}

impl HasCompanyId for Client {
    fn company_id(&self) -> Option<i32> {
        Some(self.company_id)
    }
}

impl HasEventId for AccountPayable {
    fn event_id(&self) -> Option<i32> {
        self.event_id
    }
}

impl HasEventId for AccountReceivable {
    fn event_id(&self) -> Option<i32> {
        self.event_id
    }
}

impl HasEventId for DailyRevenue {
    fn event_id(&self) -> Option<i32> {
        self.event_id
    }
}

#[derive(Clone)]
pub struct AuthorizationService {
    repo: EntitlementRepository,
}

impl AuthorizationService {
    pub fn new(repo: EntitlementRepository) -> Self {
        Self { repo }
    }

    // -------------------------------------------------------------------------
    //  RESOLUÇÃO DE VÍNCULOS
    // -------------------------------------------------------------------------

    /// IDs de empresa vinculados ao usuário. Vazio para perfis globais.
    /// Falha de banco degrada para vazio: durante uma indisponibilidade um
    /// usuário restrito perde acesso, nunca ganha.
    pub async fn user_company_ids(&self, user_id: i32, role: Role) -> HashSet<i32> {
        if role.has_global_access() {
            return HashSet::new();
        }

        match self.repo.company_ids_for_user(user_id).await {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                tracing::error!("Falha ao resolver vínculos de empresa do usuário {user_id}: {e}");
                HashSet::new()
            }
        }
    }

    /// IDs de evento vinculados ao usuário. Mesmas convenções acima.
    pub async fn user_event_ids(&self, user_id: i32, role: Role) -> HashSet<i32> {
        if role.has_global_access() {
            return HashSet::new();
        }

        match self.repo.event_ids_for_user(user_id).await {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                tracing::error!("Falha ao resolver vínculos de evento do usuário {user_id}: {e}");
                HashSet::new()
            }
        }
    }

    // -------------------------------------------------------------------------
    //  CONSULTAS PONTUAIS
    // -------------------------------------------------------------------------

    pub async fn can_access_company(&self, user_id: i32, role: Role, company_id: i32) -> bool {
        if role.has_global_access() {
            return true;
        }
        self.user_company_ids(user_id, role).await.contains(&company_id)
    }

    // Simétrico ao de empresa: consulta pontual sobre o vínculo direto com o
    // evento. A visibilidade transitiva empresa→evento vale só nas listagens.
    pub async fn can_access_event(&self, user_id: i32, role: Role, event_id: i32) -> bool {
        if role.has_global_access() {
            return true;
        }
        self.user_event_ids(user_id, role).await.contains(&event_id)
    }

    // -------------------------------------------------------------------------
    //  FILTROS DE COLEÇÃO (estáveis: preservam a ordem de entrada)
    // -------------------------------------------------------------------------

    pub async fn filter_companies_by_permission<T: HasId>(
        &self,
        companies: Vec<T>,
        user_id: i32,
        role: Role,
    ) -> Vec<T> {
        let allowed = self.user_company_ids(user_id, role).await;
        scope_companies(companies, role, &allowed)
    }

    pub async fn filter_events_by_permission<T: HasId + HasCompanyId>(
        &self,
        events: Vec<T>,
        user_id: i32,
        role: Role,
    ) -> Vec<T> {
        let allowed_companies = self.user_company_ids(user_id, role).await;
        let allowed_events = self.user_event_ids(user_id, role).await;
        scope_events(events, role, &allowed_companies, &allowed_events)
    }

    /// Lançamentos financeiros visíveis. Lançamentos só carregam `event_id`;
    /// para perfis por empresa é preciso a junção secundária empresa→eventos.
    /// A falha dessa junção propaga (diferente da resolução de vínculos, que
    /// degrada para vazio).
    pub async fn filter_financials_by_permission<T: HasEventId>(
        &self,
        financials: Vec<T>,
        user_id: i32,
        role: Role,
    ) -> Result<Vec<T>, AppError> {
        if role.has_global_access() {
            return Ok(financials);
        }

        let allowed_events: HashSet<i32> = if role.is_company_scoped() {
            let companies: Vec<i32> =
                self.user_company_ids(user_id, role).await.into_iter().collect();
            self.repo
                .event_ids_for_companies(&companies)
                .await?
                .into_iter()
                .collect()
        } else {
            self.user_event_ids(user_id, role).await
        };

        Ok(retain_by_event(financials, &allowed_events))
    }

    /// Cadastros pertencentes a empresas (fornecedores, clientes). Perfis por
    /// evento não enxergam cadastros de empresa.
    pub async fn filter_partners_by_permission<T: HasCompanyId>(
        &self,
        partners: Vec<T>,
        user_id: i32,
        role: Role,
    ) -> Vec<T> {
        let allowed = self.user_company_ids(user_id, role).await;
        scope_partners(partners, role, &allowed)
    }
}

// -----------------------------------------------------------------------------
//  NÚCLEO PURO DOS FILTROS
// -----------------------------------------------------------------------------
// As funções abaixo recebem os conjuntos de vínculos já resolvidos e aplicam
// o ramo do escopo. Registros sem vínculo (company_id/event_id nulos) nunca
// passam para perfis restritos.

/// Empresas visíveis. Perfis por evento não têm vínculo direto com empresa e
/// recebem lista vazia (eles navegam por evento).
fn scope_companies<T: HasId>(companies: Vec<T>, role: Role, allowed: &HashSet<i32>) -> Vec<T> {
    if role.has_global_access() {
        return companies;
    }
    retain_by_id(companies, allowed)
}

/// Eventos visíveis: por empresa vinculada (perfis por empresa, sem exigir
/// vínculo direto com o evento) ou por vínculo direto (demais restritos).
fn scope_events<T: HasId + HasCompanyId>(
    events: Vec<T>,
    role: Role,
    allowed_companies: &HashSet<i32>,
    allowed_events: &HashSet<i32>,
) -> Vec<T> {
    if role.has_global_access() {
        return events;
    }

    if role.is_company_scoped() {
        return retain_by_company(events, allowed_companies);
    }

    retain_by_id(events, allowed_events)
}

fn scope_partners<T: HasCompanyId>(
    partners: Vec<T>,
    role: Role,
    allowed_companies: &HashSet<i32>,
) -> Vec<T> {
    if role.has_global_access() {
        return partners;
    }

    if role.is_company_scoped() {
        return retain_by_company(partners, allowed_companies);
    }

    Vec::new()
}

fn retain_by_id<T: HasId>(items: Vec<T>, allowed: &HashSet<i32>) -> Vec<T> {
    items.into_iter().filter(|item| allowed.contains(&item.id())).collect()
}

fn retain_by_company<T: HasCompanyId>(items: Vec<T>, allowed: &HashSet<i32>) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| item.company_id().is_some_and(|id| allowed.contains(&id)))
        .collect()
}

fn retain_by_event<T: HasEventId>(items: Vec<T>, allowed: &HashSet<i32>) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| item.event_id().is_some_and(|id| allowed.contains(&id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::role::Role;

    // Réplicas mínimas das entidades, só com os campos que o recorte enxerga.
    #[derive(Debug, Clone, PartialEq)]
    struct TestCompany {
        id: i32,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct TestEvent {
        id: i32,
        company_id: i32,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct TestFinancial {
        id: i32,
        event_id: Option<i32>,
    }

    impl HasId for TestCompany {
        fn id(&self) -> i32 {
            self.id
        }
    }

    impl HasId for TestEvent {
        fn id(&self) -> i32 {
            self.id
        }
    }

    impl HasCompanyId for TestEvent {
        fn company_id(&self) -> Option<i32> {
            Some(self.company_id)
        }
    }

    impl HasEventId for TestFinancial {
        fn event_id(&self) -> Option<i32> {
            self.event_id
        }
    }

    // Mundo de exemplo usado nos cenários: a empresa 1 possui os eventos
    // 10 e 11; a empresa 2 possui o evento 20.
    fn companies() -> Vec<TestCompany> {
        vec![TestCompany { id: 1 }, TestCompany { id: 2 }]
    }

    fn events() -> Vec<TestEvent> {
        vec![
            TestEvent { id: 10, company_id: 1 },
            TestEvent { id: 11, company_id: 1 },
            TestEvent { id: 20, company_id: 2 },
        ]
    }

    fn financials() -> Vec<TestFinancial> {
        vec![
            TestFinancial { id: 100, event_id: Some(10) },
            TestFinancial { id: 101, event_id: Some(20) },
            TestFinancial { id: 102, event_id: None },
        ]
    }

    // Junção secundária empresa→eventos sobre o mundo de exemplo.
    fn event_ids_of_companies(allowed: &HashSet<i32>) -> HashSet<i32> {
        events()
            .into_iter()
            .filter(|e| allowed.contains(&e.company_id))
            .map(|e| e.id)
            .collect()
    }

    fn ids<T: HasId>(items: &[T]) -> Vec<i32> {
        items.iter().map(|i| i.id()).collect()
    }

    #[test]
    fn perfil_global_recebe_a_colecao_intacta() {
        let empty = HashSet::new();

        for role in Role::ALL.into_iter().filter(|r| r.has_global_access()) {
            // Conjuntos de vínculo vazios significam "sem restrição" aqui.
            let kept = scope_companies(companies(), role, &empty);
            assert_eq!(ids(&kept), vec![1, 2], "perfil: {}", role.as_str());

            let kept = scope_events(events(), role, &empty, &empty);
            assert_eq!(ids(&kept), vec![10, 11, 20], "perfil: {}", role.as_str());
        }
    }

    #[test]
    fn perfil_por_empresa_ve_somente_empresas_vinculadas() {
        let allowed: HashSet<i32> = [1].into_iter().collect();
        let kept = scope_companies(companies(), Role::GerenteRegional, &allowed);

        assert_eq!(kept, vec![TestCompany { id: 1 }]);
    }

    #[test]
    fn perfil_por_evento_nao_ve_empresa_alguma() {
        // Mesmo com vínculos de evento, empresas não são navegáveis.
        let allowed = HashSet::new();
        let kept = scope_companies(companies(), Role::LiderEvento, &allowed);

        assert!(kept.is_empty());
    }

    #[test]
    fn perfil_por_empresa_ve_eventos_sem_vinculo_direto() {
        // Vínculo apenas com a empresa 1; nenhum vínculo em user_events.
        let allowed_companies: HashSet<i32> = [1].into_iter().collect();
        let no_events = HashSet::new();

        let kept = scope_events(events(), Role::GerenteRegional, &allowed_companies, &no_events);
        assert_eq!(ids(&kept), vec![10, 11]);
    }

    #[test]
    fn perfil_por_evento_ve_somente_eventos_vinculados() {
        let no_companies = HashSet::new();
        let allowed_events: HashSet<i32> = [20].into_iter().collect();

        let kept = scope_events(events(), Role::Monitor, &no_companies, &allowed_events);
        assert_eq!(ids(&kept), vec![20]);
    }

    #[test]
    fn perfil_por_evento_ve_somente_lancamentos_dos_seus_eventos() {
        let allowed: HashSet<i32> = [10].into_iter().collect();
        let kept = retain_by_event(financials(), &allowed);

        let kept_ids: Vec<i32> = kept.iter().map(|f| f.id).collect();
        assert_eq!(kept_ids, vec![100]);
    }

    #[test]
    fn visibilidade_transitiva_empresa_evento_lancamento() {
        // Empresa 1 → eventos {10, 11} → lançamento 100, sem vínculo direto
        // do usuário com evento algum.
        let linked_companies: HashSet<i32> = [1].into_iter().collect();
        let visible_events = event_ids_of_companies(&linked_companies);
        let kept = retain_by_event(financials(), &visible_events);

        let kept_ids: Vec<i32> = kept.iter().map(|f| f.id).collect();
        assert_eq!(kept_ids, vec![100]);
    }

    #[test]
    fn lancamento_sem_evento_nunca_aparece_para_perfil_restrito() {
        let todos_os_eventos: HashSet<i32> = [10, 11, 20].into_iter().collect();
        let kept = retain_by_event(financials(), &todos_os_eventos);

        assert!(kept.iter().all(|f| f.event_id.is_some()));
    }

    #[test]
    fn filtragem_preserva_a_ordem_de_entrada() {
        let allowed: HashSet<i32> = [20, 10].into_iter().collect();
        let kept = retain_by_id(events(), &allowed);

        assert_eq!(ids(&kept), vec![10, 20]);
    }

    #[test]
    fn filtragem_e_idempotente() {
        let allowed: HashSet<i32> = [10, 20].into_iter().collect();

        let once = retain_by_event(financials(), &allowed);
        let twice = retain_by_event(once.clone(), &allowed);

        assert_eq!(once, twice);
    }

    #[test]
    fn conjunto_vazio_recorta_tudo_para_perfil_restrito() {
        // Fail-closed: a degradação por indisponibilidade de banco resolve
        // para conjunto vazio, que nega tudo a um perfil restrito.
        let empty = HashSet::new();

        assert!(scope_companies(companies(), Role::GerenteRegional, &empty).is_empty());
        assert!(scope_events(events(), Role::LiderEvento, &empty, &empty).is_empty());
        assert!(retain_by_event(financials(), &empty).is_empty());
    }

    #[test]
    fn fornecedores_seguem_o_recorte_da_empresa() {
        #[derive(Debug, PartialEq)]
        struct TestSupplier {
            company_id: i32,
        }

        impl HasCompanyId for TestSupplier {
            fn company_id(&self) -> Option<i32> {
                Some(self.company_id)
            }
        }

        let suppliers = vec![TestSupplier { company_id: 1 }, TestSupplier { company_id: 2 }];
        let allowed: HashSet<i32> = [2].into_iter().collect();

        let kept = scope_partners(suppliers, Role::SupervisorComercial, &allowed);
        assert_eq!(kept, vec![TestSupplier { company_id: 2 }]);

        // Perfis por evento não enxergam cadastros de empresa.
        let suppliers = vec![TestSupplier { company_id: 1 }];
        let kept = scope_partners(suppliers, Role::OperadorCaixa, &allowed);
        assert!(kept.is_empty());
    }

    // -------------------------------------------------------------------------
    //  CENÁRIOS PONTA A PONTA (vínculos em memória)
    // -------------------------------------------------------------------------

    #[test]
    fn cenario_gerente_regional_vinculado_a_uma_empresa() {
        let role = Role::GerenteRegional;

        // U1 vinculado à empresa 1 via user_companies. A empresa 2 e o
        // evento 20 existem mas não têm vínculo com U1.
        let linked_companies: HashSet<i32> = [1].into_iter().collect();
        let linked_events = HashSet::new();

        let my_companies = scope_companies(companies(), role, &linked_companies);
        assert_eq!(my_companies, vec![TestCompany { id: 1 }]);

        let my_events = scope_events(events(), role, &linked_companies, &linked_events);
        assert_eq!(ids(&my_events), vec![10, 11]);

        // A criação posterior de empresa/evento sem vínculo não muda nada:
        // o mundo de exemplo já contém a empresa 2 e o evento 20.
        let my_financials = retain_by_event(
            financials(),
            &event_ids_of_companies(&linked_companies),
        );
        let kept_ids: Vec<i32> = my_financials.iter().map(|f| f.id).collect();
        assert_eq!(kept_ids, vec![100]);
    }

    #[test]
    fn cenario_lider_evento_nao_ve_empresas() {
        let role = Role::LiderEvento;

        // U2 vinculado apenas ao evento 10, sem vínculo com empresa alguma.
        let linked_companies = HashSet::new();
        let linked_events: HashSet<i32> = [10].into_iter().collect();

        assert!(scope_companies(companies(), role, &linked_companies).is_empty());

        let my_events = scope_events(events(), role, &linked_companies, &linked_events);
        assert_eq!(ids(&my_events), vec![10]);
    }
}
