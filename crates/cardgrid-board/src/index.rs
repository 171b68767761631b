//! Bidirectional card/cell index.

use cardgrid_core::{Card, CardId, Cell, Error, Result};
use std::collections::BTreeMap;

/// Card → cell and cell → card views kept as exact inverses.
///
/// All mutation goes through `lift`, `place`, and `relocate`, each of which
/// updates both maps together.
#[derive(Debug, Clone, Default)]
pub struct PositionIndex {
    by_card: BTreeMap<CardId, Cell>,
    by_cell: BTreeMap<Cell, CardId>,
}

impl PositionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from a starting layout
    pub fn from_cards(cards: &[Card]) -> Result<Self> {
        let mut index = Self::new();
        for card in cards {
            if index.by_card.contains_key(&card.id) {
                return Err(Error::DuplicateCard(card.id));
            }
            let cell = card.cell();
            if index.by_cell.contains_key(&cell) {
                return Err(Error::DuplicateCell(cell));
            }
            index.by_card.insert(card.id, cell);
            index.by_cell.insert(cell, card.id);
        }
        Ok(index)
    }

    pub fn position(&self, id: CardId) -> Result<Cell> {
        self.by_card.get(&id).copied().ok_or(Error::CardNotFound(id))
    }

    pub fn occupant(&self, cell: Cell) -> Option<CardId> {
        self.by_cell.get(&cell).copied()
    }

    /// Remove a card from the grid, returning the cell it held
    pub fn lift(&mut self, id: CardId) -> Result<Cell> {
        let cell = self.by_card.remove(&id).ok_or(Error::CardNotFound(id))?;
        self.by_cell.remove(&cell);
        Ok(cell)
    }

    /// Put a card that is not currently indexed onto an empty cell
    pub fn place(&mut self, id: CardId, cell: Cell) -> Result<()> {
        if let Some(current) = self.by_card.get(&id) {
            return Err(Error::InconsistentIndex(format!(
                "card {} is already placed at {}",
                id, current
            )));
        }
        self.ensure_vacant(id, cell)?;
        self.by_card.insert(id, cell);
        self.by_cell.insert(cell, id);
        Ok(())
    }

    /// Move an indexed card to another cell
    pub fn relocate(&mut self, id: CardId, cell: Cell) -> Result<()> {
        let from = self.position(id)?;
        if from == cell {
            return Ok(());
        }
        self.ensure_vacant(id, cell)?;
        self.by_cell.remove(&from);
        self.by_cell.insert(cell, id);
        self.by_card.insert(id, cell);
        Ok(())
    }

    fn ensure_vacant(&self, incoming: CardId, cell: Cell) -> Result<()> {
        match self.occupant(cell) {
            Some(occupant) if occupant != incoming => Err(Error::CellCollision {
                cell,
                occupant,
                incoming,
            }),
            _ => Ok(()),
        }
    }

    /// Cards in `col` whose row satisfies `keep`, ascending by row
    pub fn column_where<F>(&self, col: i32, keep: F) -> Vec<(i32, CardId)>
    where
        F: Fn(i32) -> bool,
    {
        // Row-major ordering puts a column's cells out of sequence, so filter
        // the whole map rather than taking a range.
        self.by_cell
            .iter()
            .filter(|(cell, _)| cell.col == col && keep(cell.row))
            .map(|(cell, id)| (cell.row, *id))
            .collect()
    }

    /// Verify that the two views are exact inverses
    pub fn check_consistency(&self) -> Result<()> {
        if self.by_card.len() != self.by_cell.len() {
            return Err(Error::InconsistentIndex(format!(
                "{} cards but {} occupied cells",
                self.by_card.len(),
                self.by_cell.len()
            )));
        }
        for (id, cell) in &self.by_card {
            match self.by_cell.get(cell) {
                Some(occupant) if occupant == id => {}
                Some(occupant) => {
                    return Err(Error::InconsistentIndex(format!(
                        "card {} maps to {} but that cell holds card {}",
                        id, cell, occupant
                    )))
                }
                None => {
                    return Err(Error::InconsistentIndex(format!(
                        "card {} maps to {} but that cell is empty",
                        id, cell
                    )))
                }
            }
        }
        Ok(())
    }

    /// Copy of the card → cell view
    pub fn snapshot(&self) -> BTreeMap<CardId, Cell> {
        self.by_card.clone()
    }

    pub fn len(&self) -> usize {
        self.by_card.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PositionIndex {
        PositionIndex::from_cards(&[
            Card::new(1, 0, 0),
            Card::new(2, 1, 0),
            Card::new(3, 0, 1),
            Card::new(4, 3, 0),
        ])
        .unwrap()
    }

    #[test]
    fn test_index_creation() {
        let index = sample();
        assert_eq!(index.len(), 4);
        assert_eq!(index.position(CardId(2)).unwrap(), Cell::new(1, 0));
        assert_eq!(index.occupant(Cell::new(0, 1)), Some(CardId(3)));
        assert_eq!(index.occupant(Cell::new(2, 0)), None);
        index.check_consistency().unwrap();
    }

    #[test]
    fn test_duplicate_card_rejected() {
        let err = PositionIndex::from_cards(&[Card::new(1, 0, 0), Card::new(1, 1, 0)]).unwrap_err();
        assert!(matches!(err, Error::DuplicateCard(CardId(1))));
    }

    #[test]
    fn test_duplicate_cell_rejected() {
        let err = PositionIndex::from_cards(&[Card::new(1, 0, 0), Card::new(2, 0, 0)]).unwrap_err();
        assert!(matches!(err, Error::DuplicateCell(cell) if cell == Cell::new(0, 0)));
    }

    #[test]
    fn test_lift_and_place() {
        let mut index = sample();
        let cell = index.lift(CardId(3)).unwrap();
        assert_eq!(cell, Cell::new(0, 1));
        assert!(index.position(CardId(3)).is_err());
        assert_eq!(index.occupant(cell), None);
        index.check_consistency().unwrap();

        index.place(CardId(3), Cell::new(5, 5)).unwrap();
        assert_eq!(index.position(CardId(3)).unwrap(), Cell::new(5, 5));
        index.check_consistency().unwrap();
    }

    #[test]
    fn test_place_onto_occupied_cell() {
        let mut index = sample();
        index.lift(CardId(3)).unwrap();
        let err = index.place(CardId(3), Cell::new(0, 0)).unwrap_err();
        assert!(matches!(
            err,
            Error::CellCollision { occupant: CardId(1), incoming: CardId(3), .. }
        ));
    }

    #[test]
    fn test_relocate() {
        let mut index = sample();
        index.relocate(CardId(2), Cell::new(2, 0)).unwrap();
        assert_eq!(index.occupant(Cell::new(1, 0)), None);
        assert_eq!(index.occupant(Cell::new(2, 0)), Some(CardId(2)));
        index.check_consistency().unwrap();

        let err = index.relocate(CardId(2), Cell::new(3, 0)).unwrap_err();
        assert!(matches!(err, Error::CellCollision { .. }));
        // Failed relocation leaves the index untouched
        assert_eq!(index.position(CardId(2)).unwrap(), Cell::new(2, 0));
        index.check_consistency().unwrap();
    }

    #[test]
    fn test_missing_card() {
        let mut index = sample();
        assert!(matches!(index.position(CardId(9)), Err(Error::CardNotFound(CardId(9)))));
        assert!(matches!(index.lift(CardId(9)), Err(Error::CardNotFound(CardId(9)))));
        assert!(matches!(
            index.relocate(CardId(9), Cell::new(0, 0)),
            Err(Error::CardNotFound(CardId(9)))
        ));
    }

    #[test]
    fn test_column_where() {
        let index = sample();
        let below = index.column_where(0, |row| row >= 1);
        assert_eq!(below, vec![(1, CardId(2)), (3, CardId(4))]);

        let other = index.column_where(1, |_| true);
        assert_eq!(other, vec![(0, CardId(3))]);
    }
}
