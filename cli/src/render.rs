use std::io::{self, Write};

use clap::ValueEnum;
use sapper_core::{CellView, GameStatus, Snapshot};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human readable grid
    #[default]
    Text,
    /// One JSON snapshot per line
    Json,
}

pub const fn glyph(cell: CellView) -> char {
    match cell {
        CellView::Hidden => '#',
        CellView::Flagged => 'F',
        CellView::Mine => '*',
        CellView::Revealed(0) => '.',
        CellView::Revealed(count) => (b'0' + count) as char,
    }
}

const fn status_line(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Playing => "Playing",
        GameStatus::Won => "You won! Click anywhere to play again",
        GameStatus::Lost => "Game over! Click anywhere to play again",
    }
}

pub fn render(out: &mut impl Write, snapshot: &Snapshot, format: Format) -> io::Result<()> {
    match format {
        Format::Text => render_text(out, snapshot),
        Format::Json => {
            let json = snapshot.to_json().map_err(io::Error::other)?;
            writeln!(out, "{json}")
        }
    }
}

fn render_text(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    let (size_x, size_y) = snapshot.size;

    writeln!(
        out,
        "Flags: {}  {}",
        snapshot.flags_remaining,
        status_line(snapshot.status)
    )?;

    write!(out, "   ")?;
    for x in 0..size_x {
        write!(out, "{x:>3}")?;
    }
    writeln!(out)?;

    for y in 0..size_y {
        write!(out, "{y:>3}")?;
        for x in 0..size_x {
            let cell = snapshot.cell_at((x, y)).unwrap_or(CellView::Hidden);
            write!(out, "{:>3}", glyph(cell))?;
        }
        writeln!(out)?;
    }

    Ok(())
}
