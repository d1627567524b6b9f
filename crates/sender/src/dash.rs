//! Envio de dados nomeados para o dashboard.

use crate::client::DashClient;
use crate::heartbeat;
use dash_core::config::DashConfig;
use dash_core::message::data_message;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Erros de inicialização do binding.
#[derive(Debug, thiserror::Error)]
pub enum DashError {
    #[error("dash.enable=true mas dash.server não está configurado")]
    ServerNotSet,
}

/// Sender de telemetria para o dashboard.
///
/// Sem estado além da referência ao cliente: cada [`Dash::send`] monta
/// a mensagem, faz exatamente uma chamada pela fronteira e descarta.
pub struct Dash {
    client: Arc<dyn DashClient>,
}

impl Dash {
    /// Cria um sender sobre um cliente já pronto.
    pub fn new(client: Arc<dyn DashClient>) -> Self {
        Self { client }
    }

    /// Inicializa o binding a partir da configuração.
    ///
    /// - `enable=false` → `Ok(None)`, nada acontece
    /// - `enable=true` sem `server` → [`DashError::ServerNotSet`]
    /// - com `heartbeat_interval_secs > 0` inicia a thread de heartbeat
    pub fn init(config: &DashConfig, client: Arc<dyn DashClient>) -> Result<Option<Dash>, DashError> {
        if !config.enable {
            return Ok(None);
        }
        if config.server.is_empty() {
            return Err(DashError::ServerNotSet);
        }

        info!("Dashboard habilitado – servidor: {}", config.server);

        if config.heartbeat_interval_secs > 0 {
            heartbeat::spawn_heartbeat(
                Arc::clone(&client),
                Duration::from_secs(u64::from(config.heartbeat_interval_secs)),
            );
            info!("Iniciando heartbeat de {}s", config.heartbeat_interval_secs);
        }

        Ok(Some(Dash::new(client)))
    }

    /// Envia um valor numérico nomeado para o dashboard.
    ///
    /// Monta o template `{<name>: %lf}` e faz uma única chamada pela
    /// fronteira nativa; a substituição do placeholder e a entrega são
    /// responsabilidade do cliente. `name` não é validado nem escapado,
    /// e `value` (inclusive NaN/infinito) passa sem modificação.
    ///
    /// ```no_run
    /// # use dash_sender::{ConsoleClient, Dash};
    /// # use std::sync::Arc;
    /// # let dash = Dash::new(Arc::new(ConsoleClient));
    /// dash.send("temperature", 22.45);
    /// ```
    pub fn send(&self, name: &str, value: f64) {
        self.client.send_data(&data_message(name), value);
    }
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MemoryClient;

    fn dash_with_memory() -> (Dash, Arc<MemoryClient>) {
        let client = Arc::new(MemoryClient::new());
        (Dash::new(Arc::clone(&client) as Arc<dyn DashClient>), client)
    }

    #[test]
    fn send_makes_exactly_one_call() {
        let (dash, client) = dash_with_memory();
        dash.send("temperature", 22.45);

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], ("{temperature: %lf}".to_string(), 22.45));
    }

    #[test]
    fn empty_name_sends_empty_template() {
        let (dash, client) = dash_with_memory();
        dash.send("", 0.0);
        assert_eq!(client.calls()[0], ("{: %lf}".to_string(), 0.0));
    }

    #[test]
    fn non_finite_values_pass_through() {
        let (dash, client) = dash_with_memory();
        dash.send("x", f64::NAN);
        dash.send("y", f64::INFINITY);

        let calls = client.calls();
        assert!(calls[0].1.is_nan());
        assert_eq!(calls[1].1, f64::INFINITY);
    }

    #[test]
    fn structural_characters_are_not_escaped() {
        let (dash, client) = dash_with_memory();
        dash.send("a{b}:c", 1.0);
        assert_eq!(client.calls()[0].0, "{a{b}:c: %lf}");
    }

    #[test]
    fn init_disabled_returns_none() {
        let config = DashConfig::default();
        let client = Arc::new(MemoryClient::new());
        let dash = Dash::init(&config, client).unwrap();
        assert!(dash.is_none());
    }

    #[test]
    fn init_without_server_fails() {
        let config = DashConfig {
            enable: true,
            ..Default::default()
        };
        let client = Arc::new(MemoryClient::new());
        assert!(matches!(
            Dash::init(&config, client),
            Err(DashError::ServerNotSet)
        ));
    }

    #[test]
    fn init_enabled_returns_sender() {
        let config = DashConfig {
            enable: true,
            server: "ws://10.0.0.1/rpc".into(),
            ..Default::default()
        };
        let client = Arc::new(MemoryClient::new());
        let dash = Dash::init(&config, Arc::clone(&client) as Arc<dyn DashClient>)
            .unwrap()
            .expect("deveria retornar sender");

        dash.send("boot", 1.0);
        assert_eq!(client.calls().len(), 1);
    }
}
