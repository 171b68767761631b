//! Command-line runner for card grid scenarios.

#[macro_use]
mod telemetry;

use anyhow::{Context, Result};
use cardgrid_board::GridSimulator;
use cardgrid_core::{LogConfig, ScenarioConfig};
use std::io::Write;
use tracing::info;

fn main() -> Result<()> {
    telemetry::init_telemetry(&LogConfig::default())?;

    // Optional scenario path, built-in example otherwise
    let scenario = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading scenario from {}", path);
            ScenarioConfig::load(&path)
                .with_context(|| format!("failed to load scenario from {}", path))?
        }
        None => {
            info!("No scenario given, running built-in example");
            ScenarioConfig::default()
        }
    };

    let result = GridSimulator::run_scenario(&scenario).context("simulation failed")?;

    record_gauge!("cards_on_grid", result.final_positions.len());

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", result.position.compact())?;

    Ok(())
}
