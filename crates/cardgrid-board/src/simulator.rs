//! Simulation engine for applying card moves.

use crate::index::PositionIndex;
use crate::validation::validate_scenario;
use cardgrid_core::{Card, CardId, Cell, Error, Move, Result, ScenarioConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, event, info, instrument, trace, Level};

/// Applies moves to a grid of cards.
///
/// A move that fails part-way leaves the index in whatever state it reached;
/// callers should discard the simulator after an error.
#[derive(Debug, Clone)]
pub struct GridSimulator {
    index: PositionIndex,
    moves_applied: usize,
}

impl GridSimulator {
    pub fn new(cards: &[Card]) -> Result<Self> {
        let index = PositionIndex::from_cards(cards)?;
        debug!(cards = index.len(), "Position index built");
        Ok(Self {
            index,
            moves_applied: 0,
        })
    }

    /// Apply `moves` to `cards` and return where `query` ends up
    pub fn apply(cards: &[Card], moves: &[Move], query: CardId) -> Result<Cell> {
        let mut sim = Self::new(cards)?;
        sim.run(moves)?;
        sim.query(query)
    }

    /// Validate and run a whole scenario
    #[instrument(skip(scenario), fields(cards = scenario.cards.len(), moves = scenario.moves.len()))]
    pub fn run_scenario(scenario: &ScenarioConfig) -> Result<SimulationResult> {
        validate_scenario(scenario)?;

        let mut sim = Self::new(&scenario.cards)?;
        let reports = sim.run(&scenario.moves)?;
        let position = sim.query(scenario.query)?;

        info!(
            query = %scenario.query,
            row = position.row,
            col = position.col,
            "Scenario complete"
        );

        Ok(SimulationResult {
            query: scenario.query,
            position,
            moves_applied: sim.moves_applied,
            reports,
            final_positions: sim.index.snapshot(),
        })
    }

    /// Apply every move in order
    pub fn run(&mut self, moves: &[Move]) -> Result<Vec<MoveReport>> {
        info!("Applying {} moves", moves.len());

        let reports = moves
            .iter()
            .map(|mv| self.step(mv))
            .collect::<Result<Vec<_>>>()?;

        event!(
            Level::INFO,
            counter_name = "moves_applied",
            counter_value = reports.len(),
            "Moves applied metric"
        );

        Ok(reports)
    }

    /// Apply a single move.
    ///
    /// The card is lifted from its source, cards at or below the destination
    /// row are pushed down one row (bottom-most first), the card is placed,
    /// and cards below the vacated source cell are pulled up one row
    /// (top-most first). A move whose source equals its destination only
    /// re-places the card.
    #[instrument(skip(self), fields(card = %mv.card, from = %mv.from, to = %mv.to))]
    pub fn step(&mut self, mv: &Move) -> Result<MoveReport> {
        let actual = self.index.position(mv.card)?;
        if actual != mv.from {
            return Err(Error::SourceMismatch {
                card: mv.card,
                expected: mv.from,
                actual,
            });
        }

        self.index.lift(mv.card)?;

        if mv.is_in_place() {
            self.index.place(mv.card, mv.to)?;
            self.moves_applied += 1;
            debug!("In-place move, nothing shifted");
            return Ok(MoveReport::new(mv, 0, 0));
        }

        let shifted_down = self.shift_column(mv.to.col, |row| row >= mv.to.row, 1)?;
        self.index.place(mv.card, mv.to)?;
        let shifted_up = self.shift_column(mv.from.col, |row| row > mv.from.row, -1)?;

        self.moves_applied += 1;
        debug!(shifted_down, shifted_up, "Move applied");

        Ok(MoveReport::new(mv, shifted_down, shifted_up))
    }

    /// Shift every card in `col` whose row matches by `delta` rows.
    ///
    /// Cards are visited from the far end of the shift so each target cell
    /// has already been vacated.
    fn shift_column<F>(&mut self, col: i32, keep: F, delta: i32) -> Result<usize>
    where
        F: Fn(i32) -> bool,
    {
        let mut selected = self.index.column_where(col, keep);
        if delta > 0 {
            selected.reverse();
        }

        for &(row, id) in &selected {
            let cell = Cell::new(row, col);
            let target = cell
                .shifted(delta)
                .ok_or(Error::CoordinateOverflow { card: id, cell })?;
            trace!(card = %id, from = row, to = target.row, col, "Shifting card");
            self.index.relocate(id, target)?;
        }

        Ok(selected.len())
    }

    /// Final cell of a card
    pub fn query(&self, id: CardId) -> Result<Cell> {
        self.index.position(id)
    }

    pub fn index(&self) -> &PositionIndex {
        &self.index
    }

    pub fn moves_applied(&self) -> usize {
        self.moves_applied
    }
}

/// What a single move did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub card: CardId,
    pub from: Cell,
    pub to: Cell,
    pub shifted_down: usize,
    pub shifted_up: usize,
}

impl MoveReport {
    fn new(mv: &Move, shifted_down: usize, shifted_up: usize) -> Self {
        Self {
            card: mv.card,
            from: mv.from,
            to: mv.to,
            shifted_down,
            shifted_up,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub query: CardId,
    pub position: Cell,
    pub moves_applied: usize,
    pub reports: Vec<MoveReport>,
    pub final_positions: BTreeMap<CardId, Cell>,
}
