//! # Dash Sender
//!
//! Binding que expõe o envio de dados numéricos nomeados para o cliente
//! nativo de dashboard. O trabalho pesado (transporte, autenticação,
//! fila offline, reconexão) vive inteiramente do lado nativo; aqui só
//! existe a montagem da mensagem e uma chamada pela fronteira
//! [`client::DashClient`].
//!
//! ## Uso
//! ```no_run
//! use dash_sender::{ConsoleClient, Dash};
//! use std::sync::Arc;
//!
//! let dash = Dash::new(Arc::new(ConsoleClient));
//! dash.send("temperature", 22.45);
//! ```

pub mod client;
pub mod dash;
pub mod heartbeat;
pub mod log_forward;

// Re-exports convenientes
pub use client::{ConsoleClient, DashClient, MemoryClient};
pub use dash::{Dash, DashError};
pub use log_forward::DashLogLayer;

#[cfg(feature = "native")]
pub use client::NativeClient;
