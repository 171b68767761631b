//! Validation for scenario input.

use cardgrid_core::{Cell, Error, Result, ScenarioConfig};

/// Validate that a scenario is well-formed before it is simulated.
///
/// Scenarios are restricted to non-negative rows and columns; the simulator
/// itself accepts any cell. Duplicate ids and shared cells are caught when the
/// position index is built.
pub fn validate_scenario(scenario: &ScenarioConfig) -> Result<()> {
    for card in &scenario.cards {
        check_cell(card.cell(), &format!("card {}", card.id))?;
    }

    for (idx, mv) in scenario.moves.iter().enumerate() {
        check_cell(mv.from, &format!("move {} source", idx))?;
        check_cell(mv.to, &format!("move {} destination", idx))?;
    }

    Ok(())
}

fn check_cell(cell: Cell, what: &str) -> Result<()> {
    if cell.row < 0 || cell.col < 0 {
        return Err(Error::Validation(format!(
            "{} has negative coordinate {}",
            what, cell
        )));
    }
    Ok(())
}
