//! Construção das mensagens de telemetria.
//!
//! O cliente nativo recebe um template de texto e o valor numérico em
//! separado; a substituição do placeholder acontece do lado nativo, não
//! aqui. Formato de uma mensagem de dados:
//!
//! ```text
//! {temperature: %lf}
//! ```
//!
//! O `name` entra no template sem validação nem escape – nomes contendo
//! `{`, `}` ou `:` produzem uma mensagem malformada silenciosamente
//! (comportamento herdado do cliente original, ver DESIGN.md).

/// Placeholder de ponto flutuante substituído pelo lado nativo.
pub const FLOAT_PLACEHOLDER: &str = "%lf";

/// Monta o template de uma mensagem de dados: `{<name>: %lf}`.
///
/// O valor correspondente viaja em separado pela fronteira nativa.
pub fn data_message(name: &str) -> String {
    format!("{{{name}: {FLOAT_PLACEHOLDER}}}")
}

/// Monta o template de uma mensagem de log: `{log: <line>, seq: %lf}`.
///
/// O número de sequência viaja como o valor numérico da chamada.
pub fn log_message(line: &str) -> String {
    format!("{{log: {line}, seq: {FLOAT_PLACEHOLDER}}}")
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────
