use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use sapper_core::{Coord, Coord2, GameState, MinePlacer, Snapshot};

use crate::input::{Button, Command};
use crate::render::{Format, render};
use crate::viewport::Viewport;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    /// The game changed and the frame is stale.
    Redraw,
    /// Nothing changed.
    Idle,
    Quit,
}

/// The single dispatch loop between player input and the board engine.
///
/// Every command runs to completion; a frame is drawn only when it changed
/// something.
pub struct Session<P> {
    game: GameState<P>,
    viewport: Viewport,
    format: Format,
}

impl<P: MinePlacer> Session<P> {
    pub fn new(game: GameState<P>, format: Format) -> Self {
        let viewport = Viewport::new(game.size());
        Self {
            game,
            viewport,
            format,
        }
    }

    pub fn game(&self) -> &GameState<P> {
        &self.game
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Reads commands until `quit` or end of input, redrawing after each change.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        self.draw(&mut output)?;

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    log::warn!("Ignoring input {line:?}: {err}");
                    writeln!(output, "error: {err}")?;
                    continue;
                }
            };

            match self.dispatch(command) {
                Flow::Quit => break,
                Flow::Redraw => self.draw(&mut output)?,
                Flow::Idle => {}
            }
        }

        output.flush()?;
        Ok(())
    }

    /// Applies one command to the game.
    ///
    /// Any grid interaction after the round has ended starts a new round
    /// instead.
    pub fn dispatch(&mut self, command: Command) -> Flow {
        log::debug!("Dispatching {command:?}");
        let updated = match command {
            Command::Quit => return Flow::Quit,
            Command::NewGame => {
                self.game.new_game();
                true
            }
            _ if self.game.status().is_finished() => {
                self.game.new_game();
                true
            }
            Command::Reveal { x, y } => self.reveal(grid_coords(x, y)),
            Command::Flag { x, y } => self.flag(grid_coords(x, y)),
            Command::Click { button, px, py } => {
                let coords = self.viewport.cell_at(px, py);
                match button {
                    Button::Left => self.reveal(coords),
                    Button::Right => self.flag(coords),
                }
            }
        };

        if updated { Flow::Redraw } else { Flow::Idle }
    }

    fn reveal(&mut self, coords: Option<Coord2>) -> bool {
        let Some(coords) = coords else {
            log::debug!("Reveal outside the board ignored");
            return false;
        };
        let outcome = self.game.handle_reveal_request(coords);
        log::debug!("Reveal at {coords:?}: {outcome:?}");
        outcome.has_update()
    }

    fn flag(&mut self, coords: Option<Coord2>) -> bool {
        let Some(coords) = coords else {
            log::debug!("Flag outside the board ignored");
            return false;
        };
        let outcome = self.game.handle_flag_request(coords);
        log::debug!("Flag at {coords:?}: {outcome:?}");
        outcome.has_update()
    }

    fn draw(&self, output: &mut impl Write) -> Result<()> {
        render(output, &Snapshot::from_game(&self.game), self.format)
            .context("failed to draw frame")
    }
}

fn grid_coords(x: i32, y: i32) -> Option<Coord2> {
    Some((Coord::try_from(x).ok()?, Coord::try_from(y).ok()?))
}
