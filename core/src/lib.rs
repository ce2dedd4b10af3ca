//! Board engine for a single-player Minesweeper round.
//!
//! The engine owns every rule of the game and nothing else: it knows nothing
//! about pixels, fonts or input devices. A presentation layer reads the state
//! through [`GameState`] accessors (or a [`Snapshot`]) once per frame and calls
//! [`GameState::handle_reveal_request`] / [`GameState::handle_flag_request`]
//! with grid coordinates.
#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod snapshot;
mod types;

/// Width of the standard board.
pub const BOARD_WIDTH: Coord = 16;
/// Height of the standard board.
pub const BOARD_HEIGHT: Coord = 16;
/// Mines on the standard board.
pub const MINE_COUNT: CellCount = 40;

/// A validated board configuration.
///
/// Only [`GameConfig::new`] builds one, so every config in circulation leaves
/// at least one cell free of mines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    size: Coord2,
    mines: CellCount,
}

impl GameConfig {
    /// Validates a board configuration.
    ///
    /// Mine placement keeps the first revealed cell free, so at least one cell
    /// must stay mine-free; anything denser would never finish placing mines.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }

        let cells = mult(size.0, size.1);
        if mines >= cells {
            return Err(GameError::TooManyMines { mines, cells });
        }

        Ok(Self { size, mines })
    }

    /// The fixed 16x16 board with 40 mines.
    pub fn standard() -> Result<Self> {
        Self::new((BOARD_WIDTH, BOARD_HEIGHT), MINE_COUNT)
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn contains(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size)
    }
}

/// Where the mines are, independent of what the player has uncovered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    size: Coord2,
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn empty(size: Coord2) -> Self {
        Self {
            size,
            mine_mask: Array2::default(size.to_nd_index()),
            mine_count: 0,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut layout = Self::empty(size);

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::InvalidCoords);
            }
            layout.insert(coords);
        }

        Ok(layout)
    }

    /// Marks `coords` as a mine, returning `false` if it already was one.
    pub(crate) fn insert(&mut self, coords: Coord2) -> bool {
        let slot = &mut self.mine_mask[coords.to_nd_index()];
        if *slot {
            return false;
        }
        *slot = true;
        self.mine_count += 1;
        true
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size) && self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        let count = NeighborIter::new(coords, self.size)
            .filter(|&pos| self[pos])
            .count();
        // at most eight neighbors
        count as u8
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((x, y), _)| (x as Coord, y as Coord))
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// Result of a flag request, as seen by the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl MarkOutcome {
    /// Whether the frame needs redrawing.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Result of a reveal request, as seen by the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// Nothing was uncovered.
    NoChange,
    /// At least one safe cell was uncovered and the round goes on.
    Revealed,
    HitMine,
    /// The last safe cell was uncovered.
    Won,
}

impl RevealOutcome {
    /// Whether the frame needs redrawing.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}
