//! Doubled-coordinate addressing for hexes and their borders.
//!
//! Hexes use flat-top offset columns where odd columns sit half a hex lower
//! than even ones. Every border lies at the lattice midpoint between the two
//! hexes it separates, so a single displacement table per column parity gives
//! both the neighbouring hex and the shared edge.

use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    NW,
    N,
    NE,
    SE,
    S,
    SW,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::NW,
        Direction::N,
        Direction::NE,
        Direction::SE,
        Direction::S,
        Direction::SW,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            NW => SE,
            N => S,
            NE => SW,
            SE => NW,
            S => N,
            SW => NE,
        }
    }

    /// Displacement towards this direction, in `(col, row)` steps for hexes
    /// and in lattice cells for edges.
    const fn displacement(self, odd_column: bool) -> (i32, i32) {
        if odd_column {
            ODD_COLUMN_DISPLACEMENTS[self.index()]
        } else {
            EVEN_COLUMN_DISPLACEMENTS[self.index()]
        }
    }
}

// Indexed by `Direction::index`.
const EVEN_COLUMN_DISPLACEMENTS: [(i32, i32); 6] = [
    (-1, -1), // NW
    (0, -1),  // N
    (1, -1),  // NE
    (1, 0),   // SE
    (0, 1),   // S
    (-1, 0),  // SW
];

const ODD_COLUMN_DISPLACEMENTS: [(i32, i32); 6] = [
    (-1, 0), // NW
    (0, -1), // N
    (1, 0),  // NE
    (1, 1),  // SE
    (0, 1),  // S
    (-1, 1), // SW
];

const fn is_odd(value: i32) -> bool {
    value & 1 == 1
}

pub const fn to_lattice_coordinate(col: i16, row: i16) -> LatticeCoord {
    LatticeCoord::new(2 * col as i32 + 1, 2 * row as i32 + 1)
}

/// Lattice cell of the border on the `direction` side of hex `(col, row)`.
///
/// Total over every input; bounds are the caller's concern.
pub const fn edge_lattice_coordinate(col: i16, row: i16, direction: Direction) -> LatticeCoord {
    let center = to_lattice_coordinate(col, row);
    center.offset(direction.displacement(is_odd(col as i32)))
}

/// Hex adjacent to `coords` across its `direction` border, if it lies inside `bounds`.
pub fn neighbor_hex(coords: Coord2, direction: Direction, bounds: Coord2) -> Option<Coord2> {
    let (col, row) = coords;
    let (dc, dr) = direction.displacement(is_odd(col.into()));
    let (max_col, max_row) = bounds;

    let next_col = col.checked_add_signed(dc.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    let next_row = row.checked_add_signed(dr.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    Some((next_col, next_row))
}

/// Entity class implied by the parity of a lattice cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatticeKind {
    /// Both axes odd: a hex centre.
    Hex,
    /// Odd `x`, even `y`: the N/S border between two hexes of one column.
    Horizontal,
    /// Even `x`, odd `y`: a slanted border between two columns.
    SlantedOddRow,
    /// Even `x`, even `y`: a slanted border between two columns, or vacant.
    SlantedEvenRow,
}

impl LatticeKind {
    pub const fn of(coord: LatticeCoord) -> Self {
        match (is_odd(coord.x), is_odd(coord.y)) {
            (true, true) => Self::Hex,
            (true, false) => Self::Horizontal,
            (false, true) => Self::SlantedOddRow,
            (false, false) => Self::SlantedEvenRow,
        }
    }

    pub const fn is_edge(self) -> bool {
        !matches!(self, Self::Hex)
    }
}

/// Occupancy of a lattice cell within a grid of `size` hexes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatticeCell {
    Hex,
    Edge,
    /// Inside the lattice but touched by no hex border.
    Vacant,
    OutOfBounds,
}

impl LatticeCell {
    pub const fn of(coord: LatticeCoord, size: Coord2) -> Self {
        if !coord.within(size) {
            return Self::OutOfBounds;
        }

        match LatticeKind::of(coord) {
            LatticeKind::Hex => Self::Hex,
            LatticeKind::Horizontal => Self::Edge,
            LatticeKind::SlantedOddRow | LatticeKind::SlantedEvenRow => {
                // only the outer columns leave a slot unused: an even column's
                // side borders span rows [0, 2h), an odd column's (0, 2h]
                let max_x = 2 * size.0 as i32;
                let max_y = 2 * size.1 as i32;
                let outer_column_odd = if coord.x == 0 {
                    Some(false)
                } else if coord.x == max_x {
                    Some(is_odd(size.0 as i32 - 1))
                } else {
                    None
                };
                match outer_column_odd {
                    Some(false) if coord.y == max_y => Self::Vacant,
                    Some(true) if coord.y == 0 => Self::Vacant,
                    _ => Self::Edge,
                }
            }
        }
    }
}
