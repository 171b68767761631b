//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub i32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A grid coordinate.
///
/// Field order matters: the derived `Ord` sorts row-major, which the
/// position index relies on when it walks a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Same column, `delta` rows further down (negative moves up).
    /// `None` if the row would overflow.
    pub fn shifted(&self, delta: i32) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(delta)?,
            col: self.col,
        })
    }

    /// Render as the row and column concatenated, e.g. `20` for (2, 0)
    pub fn compact(&self) -> String {
        format!("{}{}", self.row, self.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// A card and its starting cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub row: i32,
    pub col: i32,
}

impl Card {
    pub fn new(id: i32, row: i32, col: i32) -> Self {
        Self {
            id: CardId(id),
            row,
            col,
        }
    }

    pub fn cell(&self) -> Cell {
        Cell::new(self.row, self.col)
    }
}

/// Relocate one card from `from` to `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub card: CardId,
    pub from: Cell,
    pub to: Cell,
}

impl Move {
    pub fn new(card: i32, from: impl Into<Cell>, to: impl Into<Cell>) -> Self {
        Self {
            card: CardId(card),
            from: from.into(),
            to: to.into(),
        }
    }

    /// True when source and destination are the same cell
    pub fn is_in_place(&self) -> bool {
        self.from == self.to
    }
}
