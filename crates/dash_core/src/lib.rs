//! # Dash Core
//!
//! Crate compartilhada que define o formato das mensagens de telemetria
//! e a configuração TOML do binding de dashboard.
//!
//! ## Módulos
//! - [`message`] – Construção das mensagens `{nome: %lf}` enviadas ao cliente nativo
//! - [`config`] – Configuração unificada via TOML (seção `[dash]`)

pub mod message;
pub mod config;

// Re-exports convenientes
pub use message::{FLOAT_PLACEHOLDER, data_message, log_message};
pub use config::{AppConfig, DashConfig};
