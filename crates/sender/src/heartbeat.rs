//! Thread de heartbeat – sinais de vida periódicos para o dashboard.
//!
//! O cliente original envia um resumo de sistema por timer; aqui os
//! mesmos vitais viajam como pontos de dados comuns pela fronteira
//! estreita: uptime do processo e RAM livre (via `sysinfo`).

use crate::client::DashClient;
use dash_core::message::data_message;
use std::sync::Arc;
use std::time::{Duration, Instant};
use sysinfo::{MemoryRefreshKind, RefreshKind, System};

/// Inicia a thread de heartbeat. Roda até o processo terminar.
pub fn spawn_heartbeat(client: Arc<dyn DashClient>, interval: Duration) {
    std::thread::Builder::new()
        .name("dash-heartbeat".into())
        .spawn(move || {
            heartbeat_loop(client.as_ref(), interval);
        })
        .expect("Falha ao criar thread de heartbeat");
}

fn heartbeat_loop(client: &dyn DashClient, interval: Duration) {
    let started = Instant::now();
    let mut sys = System::new_with_specifics(
        RefreshKind::nothing().with_memory(MemoryRefreshKind::everything()),
    );

    loop {
        let cycle_start = Instant::now();

        heartbeat_tick(client, &mut sys, started);

        // Dormir pelo tempo restante do intervalo
        let elapsed = cycle_start.elapsed();
        if elapsed < interval {
            std::thread::sleep(interval - elapsed);
        }
    }
}

/// Um ciclo de heartbeat: envia uptime e RAM livre.
fn heartbeat_tick(client: &dyn DashClient, sys: &mut System, started: Instant) {
    sys.refresh_memory();

    client.send_data(&data_message("uptime"), started.elapsed().as_secs_f64());
    client.send_data(
        &data_message("free_ram_mb"),
        sys.free_memory() as f64 / (1024.0 * 1024.0),
    );
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────
