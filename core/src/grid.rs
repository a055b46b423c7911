use hashbrown::HashMap;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Handle into the edge arena of a [`HexGrid`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(u32);

impl EdgeId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hex {
    coords: Coord2,
    edges: [EdgeId; 6],
}

impl Hex {
    pub fn coords(&self) -> Coord2 {
        self.coords
    }

    pub fn lattice(&self) -> LatticeCoord {
        to_lattice_coordinate(self.coords.0.into(), self.coords.1.into())
    }

    pub fn edge(&self, direction: Direction) -> EdgeId {
        self.edges[direction.index()]
    }

    /// Edge handles indexed by [`Direction::index`].
    pub fn edges(&self) -> [EdgeId; 6] {
        self.edges
    }

    pub fn iter_edges(&self) -> impl Iterator<Item = (Direction, EdgeId)> + '_ {
        Direction::ALL.into_iter().map(|direction| (direction, self.edge(direction)))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    lattice: LatticeCoord,
    owner: Option<Player>,
    hexes: SmallVec<[Coord2; 2]>,
}

impl Edge {
    fn new(lattice: LatticeCoord) -> Self {
        Self {
            lattice,
            owner: None,
            hexes: SmallVec::new(),
        }
    }

    pub fn lattice(&self) -> LatticeCoord {
        self.lattice
    }

    pub fn owner(&self) -> Option<Player> {
        self.owner
    }

    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }

    pub fn is_owned_by(&self, player: Player) -> bool {
        self.owner == Some(player)
    }

    /// Hexes bordering this edge, in construction order.
    pub fn hexes(&self) -> &[Coord2] {
        &self.hexes
    }

    /// Whether the edge lies on the outside of the grid.
    pub fn is_boundary(&self) -> bool {
        self.hexes.len() == 1
    }
}

/// Hexes and their shared borders for a rectangular offset-column grid.
///
/// Topology is fixed at construction; afterwards only edge owners change.
#[derive(Clone, Debug, PartialEq)]
pub struct HexGrid {
    size: Coord2,
    hexes: Array2<Hex>,
    edges: Vec<Edge>,
    lattice: HashMap<LatticeCoord, EdgeId>,
}

impl HexGrid {
    pub fn new(size: Coord2) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyGrid);
        }

        let mut edges: Vec<Edge> = Vec::new();
        let mut lattice: HashMap<LatticeCoord, EdgeId> = HashMap::new();

        let hexes = Array2::from_shape_fn(size.to_nd_index(), |(col, row)| {
            // shape comes from `Coord` values, so both indices fit
            let coords = (col as Coord, row as Coord);
            let mut hex_edges = [EdgeId(0); 6];

            for direction in Direction::ALL {
                let slot = edge_lattice_coordinate(coords.0.into(), coords.1.into(), direction);
                debug_assert_eq!(LatticeCell::of(slot, size), LatticeCell::Edge);
                let id = *lattice.entry(slot).or_insert_with(|| {
                    let id = EdgeId(edges.len() as u32);
                    edges.push(Edge::new(slot));
                    id
                });
                edges[id.index()].hexes.push(coords);
                hex_edges[direction.index()] = id;
            }

            Hex {
                coords,
                edges: hex_edges,
            }
        });

        log::debug!(
            "Built {}x{} hex grid with {} edges",
            size.0,
            size.1,
            edges.len()
        );

        Ok(Self {
            size,
            hexes,
            edges,
            lattice,
        })
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn hex_count(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size.0 && coords.1 < self.size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Dense hex lookup. Panics when `coords` is outside the grid.
    pub fn hex(&self, coords: Coord2) -> &Hex {
        &self.hexes[coords.to_nd_index()]
    }

    pub fn get_hex(&self, coords: Coord2) -> Option<&Hex> {
        self.hexes.get(coords.to_nd_index())
    }

    pub fn iter_hexes(&self) -> impl Iterator<Item = &Hex> {
        self.hexes.iter()
    }

    pub fn edges(&self, coords: Coord2) -> [EdgeId; 6] {
        self.hex(coords).edges()
    }

    pub fn edge_at(&self, coords: Coord2, direction: Direction) -> EdgeId {
        self.hex(coords).edge(direction)
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    pub fn cell_at(&self, coord: LatticeCoord) -> LatticeCell {
        LatticeCell::of(coord, self.size)
    }

    pub fn edge_at_lattice(&self, coord: LatticeCoord) -> Option<EdgeId> {
        self.lattice.get(&coord).copied()
    }

    pub fn iter_edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges
            .iter()
            .enumerate()
            .map(|(index, edge)| (EdgeId(index as u32), edge))
    }

    /// Edges sharing a vertex with the `direction` border of the hex at `coords`.
    pub fn connected_edges(&self, coords: Coord2, direction: Direction) -> SmallVec<[EdgeId; 4]> {
        self.connected_edges_of(self.edge_at(coords, direction))
    }

    pub fn connected_edges_of(&self, id: EdgeId) -> SmallVec<[EdgeId; 4]> {
        self.connected_edges_at(self.edge(id).lattice)
    }

    pub fn connected_edges_at(&self, coord: LatticeCoord) -> SmallVec<[EdgeId; 4]> {
        connected_lattice_coordinates(coord, self.size)
            .into_iter()
            .filter_map(|candidate| self.edge_at_lattice(candidate))
            .collect()
    }

    /// Assigns an owner to an unowned edge. Owned edges are left untouched.
    pub fn set_owner(&mut self, id: EdgeId, player: Player) -> MarkOutcome {
        let edge = &mut self.edges[id.index()];
        if edge.owner.is_some() {
            return MarkOutcome::NoChange;
        }
        edge.owner = Some(player);
        MarkOutcome::Changed
    }
}
