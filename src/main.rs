//! # sisesp — Demonstração
//!
//! Monta a base "Vehicles", aplica os fatos, roda a estratégia escolhida
//! e imprime o dump das regras e das variáveis.
//!
//! ```bash
//! # Encadeamento para frente, trace visível
//! RUST_LOG=sisesp::trace=info cargo run
//!
//! # Encadeamento para trás sobre outro objetivo
//! SISESP_MODE=backward SISESP_GOAL=vehicleType cargo run
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use sisesp::config::{Config, Mode};
use sisesp::trace::TracingTrace;
use sisesp::{demo, render};

fn main() -> Result<()> {
    let config = Config::from_env().context("Configuração inválida")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(mode = ?config.mode, "sisesp — Starting...");

    let mut rb =
        demo::vehicles(Box::new(TracingTrace)).context("Falha ao montar a base Vehicles")?;
    rb.reset();
    rb.initialize_facts();

    match config.mode {
        Mode::Forward => {
            let fired = rb.forward_chain();
            tracing::info!(fired = fired.len(), "Encadeamento para frente concluído");
        }
        Mode::Backward => {
            let value = rb
                .backward_chain(&config.goal)
                .with_context(|| format!("Objetivo inválido: {}", config.goal))?;
            tracing::info!(goal = %config.goal, value = %value, "Encadeamento para trás concluído");
        }
    }

    print!("{}", render::render_rules(&rb));
    println!();
    print!("{}", render::render_variables(&rb));
    println!();
    println!(
        "{}",
        serde_json::to_string_pretty(&rb.variables()).context("Falha ao serializar variáveis")?
    );
    Ok(())
}
