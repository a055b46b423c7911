//! Vertex adjacency between edges of the lattice.
//!
//! Each border has two endpoints and at most two further borders meet at each
//! endpoint, so an edge touches at most four others. Which lattice cells those
//! are depends only on the parity of the edge's own cell and of the hex column
//! it belongs to.

use smallvec::SmallVec;

use crate::*;

/// Whether the hex column `(x - 1) / 2` of an odd lattice `x` is even.
const fn hex_column_is_even(x: i32) -> bool {
    x.rem_euclid(4) == 1
}

/// Whether the hex column left of an even lattice `x` (`x / 2 - 1`) is even.
const fn left_column_is_even(x: i32) -> bool {
    x.rem_euclid(4) == 2
}

/// Lattice cells that may hold an edge touching the edge at `edge`.
///
/// Candidates are clipped to the lattice of a grid with `size` hexes but not
/// checked for occupancy; [`HexGrid::connected_edges_at`] drops vacant cells.
/// A hex cell has no edge neighbours and yields nothing.
pub fn connected_lattice_coordinates(
    edge: LatticeCoord,
    size: Coord2,
) -> SmallVec<[LatticeCoord; 4]> {
    let LatticeCoord { x, y } = edge;

    let candidates = match LatticeKind::of(edge) {
        LatticeKind::Hex => return SmallVec::new(),
        LatticeKind::Horizontal => {
            let y2 = if hex_column_is_even(x) { y - 1 } else { y + 1 };
            [(x - 1, y), (x + 1, y), (x - 1, y2), (x + 1, y2)]
        }
        LatticeKind::SlantedOddRow => {
            let shift = if left_column_is_even(x) { 1 } else { -1 };
            [(x, y - 1), (x, y + 1), (x - 1, y + shift), (x + 1, y - shift)]
        }
        LatticeKind::SlantedEvenRow => [(x, y - 1), (x, y + 1), (x - 1, y), (x + 1, y)],
    };

    candidates
        .into_iter()
        .map(LatticeCoord::from)
        .filter(|candidate| candidate.within(size))
        .collect()
}
