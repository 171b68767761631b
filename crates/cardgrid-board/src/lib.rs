//! Grid simulation engine.
//!
//! This module implements the position index and the move simulator that
//! cascades cards up and down grid columns.

pub mod index;
pub mod simulator;
pub mod validation;

pub use index::PositionIndex;
pub use simulator::{GridSimulator, MoveReport, SimulationResult};
pub use validation::validate_scenario;
