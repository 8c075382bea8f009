// src/models/role.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Catálogo fixo de perfis de acesso. Cada perfil pertence a exatamente um
/// escopo de visibilidade: global, por empresa ou por evento.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    // --- Escopo global ---
    Administrador,
    GerenteGeral,
    LiderFinanceiro,
    AnalistaFinanceiro,

    // --- Escopo por empresa ---
    GerenteRegional,
    SupervisorComercial,
    CoordenadorAdministrativo,

    // --- Escopo por evento ---
    LiderEvento,
    CoordenadorEvento,
    SupervisorCaixa,
    OperadorCaixa,
    Monitor,
}

impl Role {
    pub const ALL: [Role; 12] = [
        Role::Administrador,
        Role::GerenteGeral,
        Role::LiderFinanceiro,
        Role::AnalistaFinanceiro,
        Role::GerenteRegional,
        Role::SupervisorComercial,
        Role::CoordenadorAdministrativo,
        Role::LiderEvento,
        Role::CoordenadorEvento,
        Role::SupervisorCaixa,
        Role::OperadorCaixa,
        Role::Monitor,
    ];

    /// Vê todas as empresas, eventos e lançamentos sem restrição.
    pub fn has_global_access(&self) -> bool {
        matches!(
            self,
            Role::Administrador
                | Role::GerenteGeral
                | Role::LiderFinanceiro
                | Role::AnalistaFinanceiro
        )
    }

    /// Restrito às empresas vinculadas em `user_companies` (e, por extensão,
    /// a tudo que pertence a elas).
    pub fn is_company_scoped(&self) -> bool {
        matches!(
            self,
            Role::GerenteRegional | Role::SupervisorComercial | Role::CoordenadorAdministrativo
        )
    }

    /// Restrito aos eventos vinculados em `user_events`. Não enxerga empresas.
    pub fn is_event_scoped(&self) -> bool {
        matches!(
            self,
            Role::LiderEvento
                | Role::CoordenadorEvento
                | Role::SupervisorCaixa
                | Role::OperadorCaixa
                | Role::Monitor
        )
    }

    /// Nível hierárquico do perfil. Mantido como dado informativo: nenhuma
    /// regra de autorização compara níveis.
    pub fn hierarchy_level(&self) -> u8 {
        match self {
            Role::Administrador => 12,
            Role::GerenteGeral => 11,
            Role::LiderFinanceiro => 10,
            Role::AnalistaFinanceiro => 9,
            Role::GerenteRegional => 8,
            Role::SupervisorComercial => 7,
            Role::CoordenadorAdministrativo => 6,
            Role::LiderEvento => 5,
            Role::CoordenadorEvento => 4,
            Role::SupervisorCaixa => 3,
            Role::OperadorCaixa => 2,
            Role::Monitor => 1,
        }
    }

    // -------------------------------------------------------------------------
    //  CAPACIDADES (independem de dados; reavaliadas a cada requisição)
    // -------------------------------------------------------------------------

    /// Administração de usuários e de seus vínculos de permissão.
    pub fn can_manage_users(&self) -> bool {
        matches!(self, Role::Administrador)
    }

    pub fn can_manage_categories(&self) -> bool {
        matches!(
            self,
            Role::Administrador | Role::GerenteGeral | Role::LiderFinanceiro
        )
    }

    /// Única capacidade definida por exclusão: todo perfil lança no
    /// financeiro, exceto o monitor.
    pub fn can_manage_financials(&self) -> bool {
        !matches!(self, Role::Monitor)
    }

    pub fn can_approve_financials(&self) -> bool {
        matches!(
            self,
            Role::Administrador | Role::GerenteGeral | Role::GerenteRegional | Role::LiderFinanceiro
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrador => "administrador",
            Role::GerenteGeral => "gerente_geral",
            Role::LiderFinanceiro => "lider_financeiro",
            Role::AnalistaFinanceiro => "analista_financeiro",
            Role::GerenteRegional => "gerente_regional",
            Role::SupervisorComercial => "supervisor_comercial",
            Role::CoordenadorAdministrativo => "coordenador_administrativo",
            Role::LiderEvento => "lider_evento",
            Role::CoordenadorEvento => "coordenador_evento",
            Role::SupervisorCaixa => "supervisor_caixa",
            Role::OperadorCaixa => "operador_caixa",
            Role::Monitor => "monitor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escopos_particionam_o_catalogo() {
        // Cada perfil cai em exatamente um dos três escopos.
        for role in Role::ALL {
            let buckets = [
                role.has_global_access(),
                role.is_company_scoped(),
                role.is_event_scoped(),
            ];
            let count = buckets.iter().filter(|b| **b).count();
            assert_eq!(count, 1, "perfil {} em {} escopos", role.as_str(), count);
        }
    }

    #[test]
    fn niveis_hierarquicos_sao_unicos() {
        let mut levels: Vec<u8> = Role::ALL.iter().map(|r| r.hierarchy_level()).collect();
        levels.sort_unstable();
        levels.dedup();
        assert_eq!(levels.len(), Role::ALL.len());
    }

    #[test]
    fn somente_administrador_gerencia_usuarios() {
        for role in Role::ALL {
            assert_eq!(
                role.can_manage_users(),
                role == Role::Administrador,
                "perfil: {}",
                role.as_str()
            );
        }
    }

    #[test]
    fn monitor_e_o_unico_sem_lancamento_financeiro() {
        for role in Role::ALL {
            assert_eq!(
                role.can_manage_financials(),
                role != Role::Monitor,
                "perfil: {}",
                role.as_str()
            );
        }
    }

    #[test]
    fn aprovacao_financeira_restrita_a_quatro_perfis() {
        let aprovadores = [
            Role::Administrador,
            Role::GerenteGeral,
            Role::GerenteRegional,
            Role::LiderFinanceiro,
        ];
        for role in Role::ALL {
            assert_eq!(
                role.can_approve_financials(),
                aprovadores.contains(&role),
                "perfil: {}",
                role.as_str()
            );
        }
    }

    #[test]
    fn categorias_somente_para_gestao_financeira() {
        let gestores = [Role::Administrador, Role::GerenteGeral, Role::LiderFinanceiro];
        for role in Role::ALL {
            assert_eq!(
                role.can_manage_categories(),
                gestores.contains(&role),
                "perfil: {}",
                role.as_str()
            );
        }
    }

    #[test]
    fn serializacao_usa_os_nomes_canonicos() {
        let json = serde_json::to_string(&Role::GerenteRegional).unwrap();
        assert_eq!(json, "\"gerente_regional\"");

        let parsed: Role = serde_json::from_str("\"lider_evento\"").unwrap();
        assert_eq!(parsed, Role::LiderEvento);
    }
}
