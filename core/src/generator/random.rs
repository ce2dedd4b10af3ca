use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Draws uniform coordinate pairs until enough distinct sites are accepted.
///
/// Expected work grows sharply as the mine density approaches the cell count;
/// use [`ShufflePlacer`] for dense boards.
#[derive(Clone, Debug)]
pub struct RejectionPlacer {
    rng: SmallRng,
}

impl RejectionPlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MinePlacer for RejectionPlacer {
    fn place(&mut self, config: &GameConfig, avoid: Coord2) -> MineLayout {
        let (size_x, size_y) = config.size();
        let mut layout = MineLayout::empty(config.size());
        let mut draws: u32 = 0;

        while layout.mine_count() < config.mines() {
            let coords = (
                self.rng.random_range(0..size_x),
                self.rng.random_range(0..size_y),
            );
            draws += 1;
            if coords == avoid {
                continue;
            }
            layout.insert(coords);
        }

        log::debug!(
            "Placed {} mines avoiding {:?} after {} draws",
            layout.mine_count(),
            avoid,
            draws
        );
        layout
    }
}

/// Partial Fisher-Yates selection over every cell except the avoided one.
#[derive(Clone, Debug)]
pub struct ShufflePlacer {
    rng: SmallRng,
}

impl ShufflePlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MinePlacer for ShufflePlacer {
    fn place(&mut self, config: &GameConfig, avoid: Coord2) -> MineLayout {
        let (size_x, size_y) = config.size();
        let mut candidates: Vec<Coord2> = (0..size_y)
            .flat_map(|y| (0..size_x).map(move |x| (x, y)))
            .filter(|&coords| coords != avoid)
            .collect();

        let (chosen, _) = candidates.partial_shuffle(&mut self.rng, config.mines().into());
        let mut layout = MineLayout::empty(config.size());
        for &coords in chosen.iter() {
            layout.insert(coords);
        }

        log::debug!(
            "Placed {} mines avoiding {:?} by shuffle",
            layout.mine_count(),
            avoid
        );
        layout
    }
}
