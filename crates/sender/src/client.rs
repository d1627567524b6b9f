//! Fronteira com o cliente nativo de dashboard.
//!
//! O sender depende apenas do trait [`DashClient`] – uma única função
//! `send_data(message, value)`. Implementações:
//! - [`NativeClient`] – chama o símbolo C `mgos_dash_send_data`
//!   (requer a feature `native` e o link contra o cliente embarcado)
//! - [`ConsoleClient`] – imprime no stdout, para desenvolvimento
//! - [`MemoryClient`] – grava as chamadas em memória, para testes

use std::sync::Mutex;

/// Fronteira de função estrangeira para o cliente de dashboard.
///
/// `message` é o template textual (ex: `{temperature: %lf}`) e `value`
/// o número substituído no placeholder pelo lado nativo. Sem retorno:
/// sucesso ou falha de entrega pertencem ao colaborador nativo.
pub trait DashClient: Send + Sync {
    fn send_data(&self, message: &str, value: f64);
}

// ──────────────────────────────────────────────
// Cliente nativo (FFI)
// ──────────────────────────────────────────────

#[cfg(feature = "native")]
unsafe extern "C" {
    /// Implementada pelo cliente de dashboard embarcado.
    unsafe fn mgos_dash_send_data(message: *const std::ffi::c_char, value: std::ffi::c_double);
}

/// Cliente que encaminha para o símbolo nativo `mgos_dash_send_data`.
#[cfg(feature = "native")]
pub struct NativeClient;

#[cfg(feature = "native")]
impl DashClient for NativeClient {
    fn send_data(&self, message: &str, value: f64) {
        match std::ffi::CString::new(message) {
            Ok(c_msg) => unsafe { mgos_dash_send_data(c_msg.as_ptr(), value) },
            // NUL interno não atravessa a fronteira C
            Err(e) => tracing::warn!("Mensagem descartada (NUL interno): {e}"),
        }
    }
}

// ──────────────────────────────────────────────
// Cliente de console (desenvolvimento)
// ──────────────────────────────────────────────

/// Cliente que imprime as chamadas no stdout.
///
/// Usa `println!` em vez de `tracing` de propósito: com o encaminhamento
/// de logs ativo, logar aqui realimentaria a própria fronteira.
pub struct ConsoleClient;

impl DashClient for ConsoleClient {
    fn send_data(&self, message: &str, value: f64) {
        println!("dash → {message} | {value}");
    }
}

// ──────────────────────────────────────────────
// Cliente em memória (testes)
// ──────────────────────────────────────────────

/// Cliente que grava cada chamada `(message, value)` em memória.
#[derive(Default)]
pub struct MemoryClient {
    calls: Mutex<Vec<(String, f64)>>,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retorna uma cópia das chamadas registradas até agora.
    pub fn calls(&self) -> Vec<(String, f64)> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl DashClient for MemoryClient {
    fn send_data(&self, message: &str, value: f64) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((message.to_string(), value));
    }
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────
