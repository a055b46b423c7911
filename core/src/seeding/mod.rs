use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

/// One pre-owned edge per player, granted before the first move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartEdges {
    pub player1: (Coord2, Direction),
    pub player2: (Coord2, Direction),
}

impl StartEdges {
    pub const fn for_player(&self, player: Player) -> (Coord2, Direction) {
        match player {
            Player::Player1 => self.player1,
            Player::Player2 => self.player2,
        }
    }
}

pub trait StartEdgeSeeder {
    fn seed(self, size: Coord2) -> StartEdges;
}

/// Fixed placements seed themselves.
impl StartEdgeSeeder for StartEdges {
    fn seed(self, _size: Coord2) -> StartEdges {
        self
    }
}
