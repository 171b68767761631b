//! Configuration types for the simulation.

use crate::error::Result;
use crate::types::{Card, CardId, Move};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete simulation input: starting layout, moves, and the card to report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Starting layout
    pub cards: Vec<Card>,
    /// Moves applied in order
    #[serde(default)]
    pub moves: Vec<Move>,
    /// Card whose final cell is reported
    pub query: CardId,
}

impl ScenarioConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scenario from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            cards: vec![
                Card::new(1, 1, 0),
                Card::new(3, 0, 0),
                Card::new(6, 0, 1),
                Card::new(4, 0, 2),
                Card::new(5, 2, 0),
                Card::new(7, 1, 1),
                Card::new(2, 1, 2),
            ],
            moves: vec![Move::new(6, (0, 1), (2, 0))],
            query: CardId(6),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset
    pub default_filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_filter: "info,cardgrid_board=debug".to_string(),
        }
    }
}
