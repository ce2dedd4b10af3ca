use alloc::string::String;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a presentation layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub status: GameStatus,
    pub flags_remaining: i32,
    pub cells: Array2<CellView>,
}

impl Snapshot {
    pub fn from_game<P: MinePlacer>(game: &GameState<P>) -> Self {
        let size = game.size();
        let mut cells = Array2::from_elem(size.to_nd_index(), CellView::Hidden);
        for (coords, &cell) in game.board().iter_cells() {
            cells[coords.to_nd_index()] = cell.into();
        }

        Self {
            size,
            status: game.status(),
            flags_remaining: game.flags_remaining(),
            cells,
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_game_hides_unrevealed_mines() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        let mut game = GameState::from_layout(layout).unwrap();

        game.handle_reveal_request((1, 1));
        game.handle_flag_request((0, 1));

        let snapshot = Snapshot::from_game(&game);

        assert_eq!(snapshot.status, GameStatus::Playing);
        assert_eq!(snapshot.flags_remaining, 0);
        assert_eq!(snapshot.cell_at((0, 0)), Some(CellView::Hidden));
        assert_eq!(snapshot.cell_at((1, 1)), Some(CellView::Revealed(1)));
        assert_eq!(snapshot.cell_at((0, 1)), Some(CellView::Flagged));
        assert_eq!(snapshot.cell_at((2, 2)), None);
    }

    #[test]
    fn json_round_trip_preserves_snapshot() {
        let layout = MineLayout::from_mine_coords((3, 2), &[(2, 1)]).unwrap();
        let mut game = GameState::from_layout(layout).unwrap();
        game.handle_reveal_request((2, 1));

        let snapshot = Snapshot::from_game(&game);
        let json = snapshot.to_json().unwrap();

        assert!(json.contains("\"Lost\""));
        let parsed: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
