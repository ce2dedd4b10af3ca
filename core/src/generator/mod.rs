use crate::*;
pub use random::*;

mod random;

/// Strategy for choosing mine sites once the first reveal is known.
pub trait MinePlacer {
    /// Chooses exactly `config.mines()` distinct sites, never `avoid`.
    fn place(&mut self, config: &GameConfig, avoid: Coord2) -> MineLayout;

    /// Rejects configs this placer cannot serve.
    fn check(&self, _config: &GameConfig) -> Result<()> {
        Ok(())
    }
}
