use sapper_core::{Coord, Coord2};

/// Pixel size of one grid cell in the reference window.
pub const CELL_SIZE: i32 = 30;
/// Left and right margin around the grid.
pub const MARGIN_X: i32 = 20;
/// Space above the grid, used for the flag counter and status line.
pub const MARGIN_TOP: i32 = 80;
/// Space below the grid.
pub const MARGIN_BOTTOM: i32 = 20;

/// Affine map between window pixels and grid cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub origin: (i32, i32),
    pub cell_size: i32,
    pub size: Coord2,
}

impl Viewport {
    pub const fn new(size: Coord2) -> Self {
        Self {
            origin: (MARGIN_X, MARGIN_TOP),
            cell_size: CELL_SIZE,
            size,
        }
    }

    /// Grid cell under the pixel `(px, py)`, if any.
    pub fn cell_at(&self, px: i32, py: i32) -> Option<Coord2> {
        let x = self.axis(px.saturating_sub(self.origin.0), self.size.0)?;
        let y = self.axis(py.saturating_sub(self.origin.1), self.size.1)?;
        Some((x, y))
    }

    pub fn window_size(&self) -> (i32, i32) {
        (
            i32::from(self.size.0) * self.cell_size + 2 * self.origin.0,
            i32::from(self.size.1) * self.cell_size + self.origin.1 + MARGIN_BOTTOM,
        )
    }

    fn axis(&self, offset: i32, len: Coord) -> Option<Coord> {
        if offset < 0 {
            return None;
        }
        Coord::try_from(offset / self.cell_size)
            .ok()
            .filter(|&index| index < len)
    }
}
