//! # Dash Sender (demo)
//!
//! Binário de demonstração: carrega a configuração, inicializa o binding
//! e envia leituras de CPU/RAM para o dashboard em loop.
//!
//! ## Uso
//! ```bash
//! dash_sender                      # Cliente console (sem link nativo)
//! cargo run --features native      # Cliente nativo mgos_dash_send_data
//! ```

use dash_sender::{Dash, DashClient, DashLogLayer};
use std::sync::Arc;
use std::time::{Duration, Instant};
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Intervalo entre leituras do demo.
const DATA_INTERVAL: Duration = Duration::from_secs(1);

fn main() {
    // ── Carregar config ──
    let config_path = dash_core::AppConfig::default_path();
    let config = dash_core::AppConfig::load(&config_path);

    // ── Cliente da fronteira nativa ──
    #[cfg(feature = "native")]
    let client: Arc<dyn DashClient> = Arc::new(dash_sender::NativeClient);
    #[cfg(not(feature = "native"))]
    let client: Arc<dyn DashClient> = Arc::new(dash_sender::ConsoleClient);

    // ── Logging (com encaminhamento opcional para o dashboard) ──
    let registry = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer());
    if config.dash.enable && config.dash.send_logs {
        registry.with(DashLogLayer::new(Arc::clone(&client))).init();
    } else {
        registry.init();
    }

    // Salva config padrão se não existir
    if !config_path.exists() {
        if let Err(e) = config.save(&config_path) {
            tracing::warn!("Não foi possível salvar config padrão: {e}");
        }
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            error!("Config inválida: {e}");
        }
        std::process::exit(1);
    }

    // ── Inicializar binding ──
    let dash = match Dash::init(&config.dash, client) {
        Ok(Some(dash)) => dash,
        Ok(None) => {
            info!("Dashboard desabilitado (dash.enable=false)");
            return;
        }
        Err(e) => {
            error!("Falha ao inicializar dashboard: {e}");
            std::process::exit(1);
        }
    };

    // ── Banner ──
    println!();
    println!("══════════════════════════════════════════════");
    println!("   ⚡ DASH SENDER – ATIVO (Rust)");
    println!("══════════════════════════════════════════════");
    println!("  Servidor:  {}", config.dash.server);
    println!("  Intervalo: {:.1}s", DATA_INTERVAL.as_secs_f64());
    println!("  Heartbeat: {}s", config.dash.heartbeat_interval_secs);
    println!("══════════════════════════════════════════════");
    println!();

    // ── Loop principal ──
    let mut sys = System::new_with_specifics(
        RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything()),
    );

    // Primeira leitura para inicializar contadores de CPU
    sys.refresh_cpu_all();

    loop {
        let cycle_start = Instant::now();

        sys.refresh_cpu_all();
        sys.refresh_memory();

        let cpu_usage = f64::from(sys.global_cpu_usage());
        let total = sys.total_memory() as f64;
        let ram_percent = if total > 0.0 {
            sys.used_memory() as f64 / total * 100.0
        } else {
            0.0
        };

        dash.send("cpu_usage", cpu_usage);
        dash.send("ram_percent", ram_percent);
        info!("→ cpu {cpu_usage:.1}% | ram {ram_percent:.1}%");

        // Dormir pelo tempo restante do intervalo
        let elapsed = cycle_start.elapsed();
        if elapsed < DATA_INTERVAL {
            std::thread::sleep(DATA_INTERVAL - elapsed);
        }
    }
}
