use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[default]
    Player1,
    Player2,
}

impl Player {
    pub const fn other(self) -> Self {
        match self {
            Self::Player1 => Self::Player2,
            Self::Player2 => Self::Player1,
        }
    }
}

/// State of the turn machine as it was before a transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub current_player: Player,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    current_player: Player,
    history: Vec<TurnSnapshot>,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Snapshots taken before each switch, oldest first.
    pub fn history(&self) -> &[TurnSnapshot] {
        &self.history
    }

    pub fn snapshot(&self) -> TurnSnapshot {
        TurnSnapshot {
            current_player: self.current_player,
        }
    }

    pub fn switch_player(&mut self) {
        self.history.push(self.snapshot());
        self.current_player = self.current_player.other();
    }

    /// A claim is valid when `edge` is unowned and one of `connected` already
    /// belongs to the current player.
    pub fn is_valid_move<'a>(
        &self,
        edge: &Edge,
        connected: impl IntoIterator<Item = &'a Edge>,
    ) -> bool {
        if edge.is_owned() {
            return false;
        }

        connected
            .into_iter()
            .any(|connected_edge| connected_edge.is_owned_by(self.current_player))
    }
}
