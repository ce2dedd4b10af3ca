use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must be at least one cell wide and tall")]
    EmptyBoard,
    #[error("Too many mines, {mines} requested but the board only has {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Mine layout does not match the board configuration")]
    LayoutMismatch,
}

pub type Result<T> = core::result::Result<T, GameError>;
