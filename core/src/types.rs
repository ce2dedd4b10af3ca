/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Whether `coords` lies within `[0, size.0) x [0, size.1)`.
pub const fn in_bounds(coords: Coord2, size: Coord2) -> bool {
    coords.0 < size.0 && coords.1 < size.1
}

/// Moore neighborhood of a cell, clipped at the board edges.
///
/// Walks the clipped 3x3 square around `center` row by row, skipping the
/// center itself. Yields nothing for a center off the board.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    left: Coord,
    corner: Coord2,
    cursor: Option<Coord2>,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        let (x, y) = center;
        let top_left = (x.saturating_sub(1), y.saturating_sub(1));
        Self {
            center,
            left: top_left.0,
            corner: (
                x.saturating_add(1).min(bounds.0.saturating_sub(1)),
                y.saturating_add(1).min(bounds.1.saturating_sub(1)),
            ),
            cursor: in_bounds(center, bounds).then_some(top_left),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let pos = self.cursor?;
            self.cursor = if pos.0 < self.corner.0 {
                Some((pos.0 + 1, pos.1))
            } else if pos.1 < self.corner.1 {
                Some((self.left, pos.1 + 1))
            } else {
                None
            };

            if pos != self.center {
                return Some(pos);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (3, 3)).collect();
        assert_eq!(neighbors, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn center_has_eight_neighbors() {
        assert_eq!(NeighborIter::new((1, 1), (3, 3)).count(), 8);
    }

    #[test]
    fn edge_of_max_sized_board_does_not_overflow() {
        let size = (Coord::MAX, Coord::MAX);
        let neighbors: Vec<_> = NeighborIter::new((Coord::MAX - 1, 0), size).collect();
        assert_eq!(neighbors, [(Coord::MAX - 2, 0), (Coord::MAX - 2, 1), (Coord::MAX - 1, 1)]);
        assert!(neighbors.iter().all(|&pos| in_bounds(pos, size)));
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn off_board_center_has_no_neighbors() {
        assert_eq!(NeighborIter::new((3, 1), (3, 3)).count(), 0);
        assert_eq!(NeighborIter::new((0, 0), (0, 4)).count(), 0);
    }
}
