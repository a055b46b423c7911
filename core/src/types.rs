use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid width, height, and hex positions.
pub type Coord = u8;

/// Count type used for hex and edge totals.
pub type CellCount = u16;

/// Two-dimensional hex coordinates `(col, row)`.
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

/// Address in the doubled-resolution lattice shared by hexes and edges.
///
/// Hex `(col, row)` sits at `(2 * col + 1, 2 * row + 1)`; its borders occupy
/// the surrounding cells. For a grid of `(width, height)` hexes the lattice
/// spans `[0, 2 * width] x [0, 2 * height]` inclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LatticeCoord {
    pub x: i32,
    pub y: i32,
}

impl LatticeCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether this cell lies inside the lattice of a grid with `size` hexes.
    pub const fn within(self, size: Coord2) -> bool {
        let max_x = 2 * size.0 as i32;
        let max_y = 2 * size.1 as i32;
        self.x >= 0 && self.y >= 0 && self.x <= max_x && self.y <= max_y
    }
}

impl From<(i32, i32)> for LatticeCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_accepts_inclusive_upper_bound() {
        assert!(LatticeCoord::new(6, 4).within((3, 2)));
        assert!(!LatticeCoord::new(7, 4).within((3, 2)));
        assert!(!LatticeCoord::new(0, -1).within((3, 2)));
    }

    #[test]
    fn mult_saturates() {
        assert_eq!(mult(255, 255), 65025);
        assert_eq!(mult(3, 4), 12);
    }
}
