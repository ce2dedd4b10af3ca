use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What the player is allowed to see of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
}

impl From<Cell> for CellView {
    fn from(cell: Cell) -> Self {
        match (cell.state, cell.is_mine) {
            (CellState::Hidden, _) => Self::Hidden,
            (CellState::Flagged, _) => Self::Flagged,
            (CellState::Revealed, true) => Self::Mine,
            (CellState::Revealed, false) => Self::Revealed(cell.adjacent_mine_count),
        }
    }
}

/// One round of play and everything needed to start the next.
///
/// All mutation goes through [`GameState::handle_reveal_request`],
/// [`GameState::handle_flag_request`] and [`GameState::new_game`]. Calls are
/// expected to come from a single dispatch loop.
#[derive(Clone, Debug)]
pub struct GameState<P = RejectionPlacer> {
    config: GameConfig,
    placer: P,
    board: Board,
    status: GameStatus,
    flags_remaining: i32,
    first_click_pending: bool,
}

impl GameState<RejectionPlacer> {
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::build(config, RejectionPlacer::new(seed))
    }
}

impl GameState<FixedLayout> {
    /// Starts with `layout` already in place, so the first click can hit a mine.
    pub fn from_layout(layout: MineLayout) -> Result<Self> {
        let config = GameConfig::new(layout.size(), layout.mine_count())?;
        let mut game = Self::build(config, FixedLayout(layout));
        game.place_mines((0, 0));
        Ok(game)
    }
}

impl<P: MinePlacer> GameState<P> {
    /// Pairs a config with a placer, refusing combinations that cannot be played.
    pub fn new(config: GameConfig, placer: P) -> Result<Self> {
        placer.check(&config)?;
        Ok(Self::build(config, placer))
    }

    fn build(config: GameConfig, placer: P) -> Self {
        Self {
            config,
            placer,
            board: Board::new(config.size()),
            status: GameStatus::Playing,
            flags_remaining: config.mines().into(),
            first_click_pending: true,
        }
    }

    /// Throws away the current round and starts over with no mines placed.
    pub fn new_game(&mut self) {
        let (width, height) = self.config.size();
        self.board = Board::new((width, height));
        self.status = GameStatus::Playing;
        self.flags_remaining = self.config.mines().into();
        self.first_click_pending = true;
        log::info!(
            "New game on {width}x{height} board with {} mines",
            self.config.mines()
        );
    }

    /// Primary click on a cell.
    ///
    /// The first request of a round places the mines, keeping `coords` safe.
    /// Flagged and already revealed cells are left alone.
    pub fn handle_reveal_request(&mut self, coords: Coord2) -> RevealOutcome {
        log::trace!("Reveal request at {coords:?}");
        if !self.status.is_playing() || !self.config.contains(coords) {
            return RevealOutcome::NoChange;
        }

        if self.first_click_pending {
            self.place_mines(coords);
        }

        if self.board.cell(coords).map(|cell| cell.state) != Some(CellState::Hidden) {
            return RevealOutcome::NoChange;
        }

        match self.board.reveal(coords) {
            RevealOutcome::HitMine => {
                self.status = GameStatus::Lost;
                log::info!("Mine hit at {coords:?}, game lost");
                RevealOutcome::HitMine
            }
            RevealOutcome::Revealed if self.check_win() => RevealOutcome::Won,
            outcome => outcome,
        }
    }

    /// Secondary click on a cell.
    pub fn handle_flag_request(&mut self, coords: Coord2) -> MarkOutcome {
        log::trace!("Flag request at {coords:?}");
        if !self.status.is_playing() || !self.config.contains(coords) {
            return MarkOutcome::NoChange;
        }

        let outcome = self.board.toggle_flag(coords);
        match outcome {
            MarkOutcome::Flagged => self.flags_remaining -= 1,
            MarkOutcome::Unflagged => self.flags_remaining += 1,
            MarkOutcome::NoChange => {}
        }
        outcome
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn flags_remaining(&self) -> i32 {
        self.flags_remaining
    }

    pub fn first_click_pending(&self) -> bool {
        self.first_click_pending
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<CellView> {
        self.board.cell(coords).map(CellView::from)
    }

    fn place_mines(&mut self, avoid: Coord2) {
        let layout = self.placer.place(&self.config, avoid);
        self.board.arm(&layout);
        self.first_click_pending = false;
    }

    /// Declares the round won once only the mines are left unrevealed.
    fn check_win(&mut self) -> bool {
        if !self.status.is_playing() || self.board.unrevealed_count() != self.config.mines() {
            return false;
        }
        self.status = GameStatus::Won;
        log::info!("All safe cells revealed, game won");
        true
    }
}

/// Placer that hands out the same layout every round.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedLayout(pub MineLayout);

impl MinePlacer for FixedLayout {
    fn place(&mut self, _config: &GameConfig, _avoid: Coord2) -> MineLayout {
        self.0.clone()
    }

    fn check(&self, config: &GameConfig) -> Result<()> {
        if self.0.size() == config.size() && self.0.mine_count() == config.mines() {
            Ok(())
        } else {
            Err(GameError::LayoutMismatch)
        }
    }
}
