//! Encaminhamento de logs para o dashboard.
//!
//! Camada do `tracing-subscriber` que manda cada evento de log como uma
//! mensagem `{log: <linha>, seq: %lf}`, com um número de sequência
//! crescente viajando como o valor numérico da chamada.

use crate::client::DashClient;
use dash_core::message::log_message;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Camada que encaminha eventos de log para o dashboard.
pub struct DashLogLayer {
    client: Arc<dyn DashClient>,
    seq: AtomicU64,
}

impl DashLogLayer {
    pub fn new(client: Arc<dyn DashClient>) -> Self {
        Self {
            client,
            seq: AtomicU64::new(0),
        }
    }

    fn forward(&self, level: &tracing::Level, text: &str) {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let line = format!("[{level}] {text}");
        self.client.send_data(&log_message(&line), seq as f64);
    }
}

impl<S: Subscriber> Layer<S> for DashLogLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        // Logs da própria fronteira não são encaminhados (realimentação)
        if event.metadata().target().starts_with("dash_sender::client") {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.forward(event.metadata().level(), &visitor.message);
    }
}

/// Extrai o campo `message` de um evento.
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MemoryClient;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn events_are_forwarded_with_sequence() {
        let client = Arc::new(MemoryClient::new());
        let layer = DashLogLayer::new(Arc::clone(&client) as Arc<dyn DashClient>);
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("sensor ok");
            tracing::warn!("sensor lento");
        });

        let calls = client.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "{log: [INFO] sensor ok, seq: %lf}");
        assert_eq!(calls[0].1, 0.0);
        assert_eq!(calls[1].0, "{log: [WARN] sensor lento, seq: %lf}");
        assert_eq!(calls[1].1, 1.0);
    }

    #[test]
    fn client_target_is_not_forwarded() {
        let client = Arc::new(MemoryClient::new());
        let layer = DashLogLayer::new(Arc::clone(&client) as Arc<dyn DashClient>);
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(target: "dash_sender::client", "descartada");
        });

        assert!(client.calls().is_empty());
    }
}
