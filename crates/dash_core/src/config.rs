//! Configuração unificada via TOML.
//!
//! A seção `[dash]` espelha a configuração do cliente nativo de dashboard:
//! `server`, `token` e `ca_file` são consumidos pelo transporte nativo,
//! este lado apenas valida e reporta.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuração do binding de dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    /// Habilita o envio para o dashboard
    pub enable: bool,
    /// Endereço do servidor (ex: "wss://dashboard.example.com/api/rpc")
    pub server: String,
    /// Token de acesso do dispositivo
    pub token: String,
    /// Arquivo CA para conexões wss:// (vazio = padrão do sistema)
    pub ca_file: String,
    /// Encaminha logs locais para o dashboard
    pub send_logs: bool,
    /// Intervalo do heartbeat em segundos (0 = desligado)
    pub heartbeat_interval_secs: u32,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            enable: false,
            server: String::new(),
            token: String::new(),
            ca_file: String::new(),
            send_logs: false,
            heartbeat_interval_secs: 0,
        }
    }
}

/// Configuração raiz do aplicativo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub dash: DashConfig,
}

impl AppConfig {
    /// Carrega configuração de um arquivo TOML.
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match toml::from_str::<AppConfig>(&content) {
                    Ok(config) => {
                        info!("Configuração carregada de {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        warn!("Erro ao parsear {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    warn!("Erro ao ler {}: {}", path.display(), e);
                }
            }
        }

        info!("Usando configuração padrão");
        AppConfig::default()
    }

    /// Salva configuração em arquivo TOML.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content = toml::to_string_pretty(self).map_err(|e| e.to_string())?;
        std::fs::write(path, content).map_err(|e| e.to_string())?;
        info!("Configuração salva em {}", path.display());
        Ok(())
    }

    /// Retorna o caminho padrão do config.toml.
    pub fn default_path() -> PathBuf {
        let exe_dir = std::env::current_exe()
            .map(|p| p.parent().unwrap_or(Path::new(".")).to_path_buf())
            .unwrap_or_else(|_| PathBuf::from("."));
        exe_dir.join("config.toml")
    }

    /// Valida a configuração e retorna lista de erros.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.dash.enable && self.dash.server.is_empty() {
            errors.push("dash.enable=true mas dash.server não está configurado".into());
        }
        if !self.dash.ca_file.is_empty() && !self.dash.server.starts_with("wss://") {
            errors.push(format!(
                "dash.ca_file configurado mas o servidor não usa wss://: {}",
                self.dash.server
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        let errors = config.validate();
        assert!(errors.is_empty(), "Erros: {:?}", errors);
    }

    #[test]
    fn enabled_without_server_is_invalid() {
        let mut config = AppConfig::default();
        config.dash.enable = true;
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("dash.server"));
    }

    #[test]
    fn roundtrip_toml() {
        let mut config = AppConfig::default();
        config.dash.enable = true;
        config.dash.server = "wss://dash.example.com/rpc".into();
        config.dash.heartbeat_interval_secs = 30;

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.dash.server, parsed.dash.server);
        assert_eq!(config.dash.heartbeat_interval_secs, parsed.dash.heartbeat_interval_secs);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let partial = r#"
[dash]
enable = true
server = "ws://10.0.0.1/rpc"
"#;
        let config: AppConfig = toml::from_str(partial).unwrap();
        assert!(config.dash.enable);
        assert_eq!(config.dash.server, "ws://10.0.0.1/rpc");
        // Outros campos devem ter valor padrão
        assert!(!config.dash.send_logs);
        assert_eq!(config.dash.heartbeat_interval_secs, 0);
    }
}
