// src/common/throttle.rs
//
// Janela de tentativas de login por e-mail. Estado vive dentro do AppState
// (injetado nos handlers), nunca em um singleton de módulo.

use std::time::{Duration, Instant};

use dashmap::DashMap;

const MAX_ATTEMPTS: u32 = 5;
const WINDOW: Duration = Duration::from_secs(15 * 60);

#[derive(Debug)]
struct AttemptWindow {
    count: u32,
    started_at: Instant,
}

/// Mapa concorrente indexado por e-mail com expiração por janela fixa.
/// Entradas vencidas são varridas de forma oportunista a cada consulta.
#[derive(Debug, Default)]
pub struct LoginThrottle {
    attempts: DashMap<String, AttemptWindow>,
}

impl LoginThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// O e-mail está bloqueado nesta janela?
    pub fn is_blocked(&self, email: &str) -> bool {
        self.sweep();

        match self.attempts.get(email) {
            Some(entry) => {
                entry.started_at.elapsed() < WINDOW && entry.count >= MAX_ATTEMPTS
            }
            None => false,
        }
    }

    /// Registra uma tentativa frustrada de login.
    pub fn register_failure(&self, email: &str) {
        let now = Instant::now();
        let mut entry = self.attempts.entry(email.to_owned()).or_insert(AttemptWindow {
            count: 0,
            started_at: now,
        });

        // Janela vencida recomeça do zero.
        if entry.started_at.elapsed() >= WINDOW {
            entry.count = 0;
            entry.started_at = now;
        }

        entry.count += 1;
    }

    /// Login bem-sucedido limpa o histórico do e-mail.
    pub fn clear(&self, email: &str) {
        self.attempts.remove(email);
    }

    fn sweep(&self) {
        self.attempts
            .retain(|_, window| window.started_at.elapsed() < WINDOW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bloqueia_apos_o_limite_de_tentativas() {
        let throttle = LoginThrottle::new();

        for _ in 0..MAX_ATTEMPTS {
            assert!(!throttle.is_blocked("ana@empresa.com.br"));
            throttle.register_failure("ana@empresa.com.br");
        }

        assert!(throttle.is_blocked("ana@empresa.com.br"));
    }

    #[test]
    fn emails_distintos_nao_interferem() {
        let throttle = LoginThrottle::new();

        for _ in 0..MAX_ATTEMPTS {
            throttle.register_failure("ana@empresa.com.br");
        }

        assert!(throttle.is_blocked("ana@empresa.com.br"));
        assert!(!throttle.is_blocked("bruno@empresa.com.br"));
    }

    #[test]
    fn sucesso_limpa_o_historico() {
        let throttle = LoginThrottle::new();

        for _ in 0..MAX_ATTEMPTS {
            throttle.register_failure("ana@empresa.com.br");
        }
        throttle.clear("ana@empresa.com.br");

        assert!(!throttle.is_blocked("ana@empresa.com.br"));
    }
}
