use alloc::vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Revealed,
    Flagged,
}

impl CellState {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub state: CellState,
    pub adjacent_mine_count: u8,
}

/// The grid of cells for one round.
///
/// Mines are fixed by [`Board::arm`]; after that only cell states change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    size: Coord2,
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// An all-hidden board without mines.
    pub fn new(size: Coord2) -> Self {
        Self {
            size,
            cells: Array2::default(size.to_nd_index()),
            mine_count: 0,
        }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn cell(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// Copies the mines in and computes every adjacency count once.
    pub fn arm(&mut self, layout: &MineLayout) {
        debug_assert_eq!(layout.size(), self.size);

        for ((x, y), cell) in self.cells.indexed_iter_mut() {
            let coords = (x as Coord, y as Coord);
            cell.is_mine = layout.contains_mine(coords);
            cell.adjacent_mine_count = if cell.is_mine {
                0
            } else {
                layout.adjacent_mine_count(coords)
            };
        }
        self.mine_count = layout.mine_count();
    }

    /// Uncovers `coords`, flooding through zero-count cells.
    ///
    /// Only hidden cells are touched. Hitting a mine reveals every mine and
    /// stops; other hidden cells stay hidden.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        match self.cell(coords) {
            Some(cell) if cell.state == CellState::Hidden => {}
            _ => return RevealOutcome::NoChange,
        }

        let mut to_visit = vec![coords];
        while let Some(visit_coords) = to_visit.pop() {
            let cell = &mut self.cells[visit_coords.to_nd_index()];
            if cell.state != CellState::Hidden {
                continue;
            }
            cell.state = CellState::Revealed;

            if cell.is_mine {
                self.reveal_all_mines();
                return RevealOutcome::HitMine;
            }

            if cell.adjacent_mine_count == 0 {
                to_visit.extend(NeighborIter::new(visit_coords, self.size));
            }
        }

        RevealOutcome::Revealed
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        let Some(cell) = self.cells.get_mut(coords.to_nd_index()) else {
            return MarkOutcome::NoChange;
        };

        match cell.state {
            CellState::Hidden => {
                cell.state = CellState::Flagged;
                MarkOutcome::Flagged
            }
            CellState::Flagged => {
                cell.state = CellState::Hidden;
                MarkOutcome::Unflagged
            }
            CellState::Revealed => MarkOutcome::NoChange,
        }
    }

    /// Cells that are still hidden or flagged.
    pub fn unrevealed_count(&self) -> CellCount {
        let count = self
            .cells
            .iter()
            .filter(|cell| cell.state.is_unrevealed())
            .count();
        // bounded by the cell count, which fits in CellCount
        count as CellCount
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((x, y), cell)| ((x as Coord, y as Coord), cell))
    }

    fn reveal_all_mines(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_mine) {
            cell.state = CellState::Revealed;
        }
    }
}
