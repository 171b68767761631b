//! Error types for the simulation.

use crate::types::{CardId, Cell};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Card not found: {0}")]
    CardNotFound(CardId),

    #[error("Card {0} appears more than once in the layout")]
    DuplicateCard(CardId),

    #[error("Cell {0} is occupied by more than one card")]
    DuplicateCell(Cell),

    #[error("Cell {cell} already holds card {occupant}, cannot place card {incoming}")]
    CellCollision {
        cell: Cell,
        occupant: CardId,
        incoming: CardId,
    },

    #[error("Card {card} is at {actual}, not at move source {expected}")]
    SourceMismatch {
        card: CardId,
        expected: Cell,
        actual: Cell,
    },

    #[error("Shifting card {card} from {cell} would overflow the row coordinate")]
    CoordinateOverflow { card: CardId, cell: Cell },

    #[error("Inconsistent position index: {0}")]
    InconsistentIndex(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
