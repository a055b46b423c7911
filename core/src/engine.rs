use serde::{Deserialize, Serialize};

use crate::*;

/// Stroke state of an edge as the renderer should draw it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeStyle {
    Unowned,
    Hovered,
    Player1,
    Player2,
}

impl From<Player> for EdgeStyle {
    fn from(player: Player) -> Self {
        match player {
            Player::Player1 => Self::Player1,
            Player::Player2 => Self::Player2,
        }
    }
}

/// One game session: the grid, whose turn it is, and the turn history.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    config: GameConfig,
    grid: HexGrid,
    turn: TurnState,
}

impl Game {
    /// Builds the grid and grants each player their start edge. Seeding skips
    /// move validation and records no history.
    pub fn new(config: GameConfig, seeder: impl StartEdgeSeeder) -> Result<Self> {
        let mut grid = HexGrid::new(config.size)?;
        let start = seeder.seed(config.size);

        let player1_edge = Self::start_edge(&grid, start.player1)?;
        let player2_edge = Self::start_edge(&grid, start.player2)?;
        if player1_edge == player2_edge {
            return Err(GameError::InvalidStartEdge);
        }

        // a fresh grid has no owners, and the two edges differ
        let marked = grid.set_owner(player1_edge, Player::Player1);
        debug_assert!(marked.has_update());
        let marked = grid.set_owner(player2_edge, Player::Player2);
        debug_assert!(marked.has_update());
        log::debug!(
            "Seeded start edges {:?} for Player1 and {:?} for Player2",
            start.player1,
            start.player2
        );

        Ok(Self {
            config,
            grid,
            turn: TurnState::new(),
        })
    }

    fn start_edge(grid: &HexGrid, (coords, direction): (Coord2, Direction)) -> Result<EdgeId> {
        grid.validate_coords(coords)
            .map(|coords| grid.edge_at(coords, direction))
            .map_err(|_| GameError::InvalidStartEdge)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn current_player(&self) -> Player {
        self.turn.current_player()
    }

    pub fn history(&self) -> &[TurnSnapshot] {
        self.turn.history()
    }

    pub fn owned_edge_count(&self, player: Player) -> usize {
        self.grid
            .iter_edges()
            .filter(|(_, edge)| edge.is_owned_by(player))
            .count()
    }

    pub fn edge_for(&self, coords: Coord2, direction: Direction) -> Result<EdgeId> {
        let coords = self.grid.validate_coords(coords)?;
        Ok(self.grid.edge_at(coords, direction))
    }

    pub fn is_valid_move(&self, coords: Coord2, direction: Direction) -> Result<bool> {
        let id = self.edge_for(coords, direction)?;
        Ok(self.is_valid_edge(id))
    }

    fn is_valid_edge(&self, id: EdgeId) -> bool {
        let connected = self.grid.connected_edges_of(id);
        self.turn.is_valid_move(
            self.grid.edge(id),
            connected.iter().map(|&other| self.grid.edge(other)),
        )
    }

    /// Claims the `direction` border of the hex at `coords` for the current
    /// player. A rejected claim leaves the game untouched.
    pub fn claim(&mut self, coords: Coord2, direction: Direction) -> Result<ClaimOutcome> {
        let id = self.edge_for(coords, direction)?;
        let player = self.current_player();

        if !self.is_valid_edge(id) {
            log::trace!("{player:?} claim of {coords:?} {direction:?} rejected");
            return Ok(ClaimOutcome::Rejected);
        }

        let marked = self.grid.set_owner(id, player);
        debug_assert!(marked.has_update());
        self.turn.switch_player();
        log::debug!("{player:?} claimed {coords:?} {direction:?}");

        Ok(ClaimOutcome::Claimed { edge: id, player })
    }

    pub fn claim_candidate(&mut self, candidate: &EdgeCandidate) -> Result<ClaimOutcome> {
        let (coords, direction) = candidate.primary;
        self.claim(coords, direction)
    }

    /// Pointer-down: claims the border under the pointer.
    pub fn claim_at(&mut self, layout: &ScreenLayout, px: f64, py: f64) -> Result<ClaimOutcome> {
        let candidate = layout.nearest_edge(px, py);
        self.claim_candidate(&candidate)
    }

    /// Pointer-move: the border under the pointer, if the current player may
    /// claim it.
    pub fn hover_at(&self, layout: &ScreenLayout, px: f64, py: f64) -> Option<EdgeCandidate> {
        let candidate = layout.nearest_edge(px, py);
        let (coords, direction) = candidate.primary;
        match self.is_valid_move(coords, direction) {
            Ok(true) => Some(candidate),
            _ => None,
        }
    }

    pub fn edge_style(&self, id: EdgeId, hovered: Option<&EdgeCandidate>) -> EdgeStyle {
        if let Some(owner) = self.grid.edge(id).owner() {
            return owner.into();
        }

        let is_hovered = hovered
            .and_then(|candidate| {
                let (coords, direction) = candidate.primary;
                self.edge_for(coords, direction).ok()
            })
            .is_some_and(|hovered_id| hovered_id == id);

        if is_hovered {
            EdgeStyle::Hovered
        } else {
            EdgeStyle::Unowned
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: Coord2, start: StartEdges) -> Game {
        Game::new(GameConfig::new(size, DEFAULT_PADDING), start).unwrap()
    }

    fn corner_start() -> StartEdges {
        StartEdges {
            player1: ((0, 0), Direction::NW),
            player2: ((2, 2), Direction::SE),
        }
    }

    #[test]
    fn seeding_marks_start_edges_without_history() {
        let game = game((3, 3), corner_start());

        assert_eq!(game.owned_edge_count(Player::Player1), 1);
        assert_eq!(game.owned_edge_count(Player::Player2), 1);
        assert!(game.history().is_empty());
        assert_eq!(game.current_player(), Player::Player1);
    }

    #[test]
    fn rejects_bad_start_edges() {
        let outside = StartEdges {
            player1: ((3, 0), Direction::N),
            player2: ((0, 0), Direction::S),
        };
        assert_eq!(
            Game::new(GameConfig::new((3, 3), DEFAULT_PADDING), outside),
            Err(GameError::InvalidStartEdge)
        );

        // the same border seen from both sides
        let shared = StartEdges {
            player1: ((0, 0), Direction::S),
            player2: ((0, 1), Direction::N),
        };
        assert_eq!(
            Game::new(GameConfig::new((3, 3), DEFAULT_PADDING), shared),
            Err(GameError::InvalidStartEdge)
        );
    }

    #[test]
    fn claim_next_to_seed_is_accepted() {
        let mut game = game((3, 3), corner_start());

        let outcome = game.claim((0, 0), Direction::N).unwrap();

        let edge = game.edge_for((0, 0), Direction::N).unwrap();
        assert_eq!(
            outcome,
            ClaimOutcome::Claimed {
                edge,
                player: Player::Player1
            }
        );
        assert_eq!(game.grid().edge(edge).owner(), Some(Player::Player1));
        assert_eq!(game.current_player(), Player::Player2);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn disconnected_claim_is_rejected_without_mutation() {
        let mut game = game((3, 3), corner_start());
        let before = game.clone();

        let outcome = game.claim((1, 1), Direction::N).unwrap();

        assert_eq!(outcome, ClaimOutcome::Rejected);
        assert!(!outcome.has_update());
        assert_eq!(game, before);
    }

    #[test]
    fn owned_edge_cannot_be_claimed_again() {
        let mut game = game((3, 3), corner_start());
        game.claim((0, 0), Direction::N).unwrap();
        // Player2 tries to take Player1's seeded edge next to its own claim
        assert_eq!(
            game.claim((0, 0), Direction::NW).unwrap(),
            ClaimOutcome::Rejected
        );
    }

    #[test]
    fn out_of_bounds_claim_is_an_error() {
        let mut game = game((3, 3), corner_start());
        assert_eq!(
            game.claim((3, 0), Direction::N),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn history_tracks_alternating_moves() {
        let mut game = game((3, 3), corner_start());
        let moves = [
            ((0, 0), Direction::N, Player::Player1),
            ((2, 2), Direction::S, Player::Player2),
            ((0, 0), Direction::NE, Player::Player1),
            ((2, 2), Direction::SW, Player::Player2),
            ((0, 0), Direction::SW, Player::Player1),
        ];

        for (coords, direction, player) in moves {
            assert_eq!(game.current_player(), player);
            let outcome = game.claim(coords, direction).unwrap();
            assert!(outcome.has_update(), "{coords:?} {direction:?}");
        }

        let history = game.history();
        assert_eq!(history.len(), 5);
        for (snapshot, (_, _, player)) in history.iter().zip(moves) {
            assert_eq!(snapshot.current_player, player);
        }
        assert_eq!(game.owned_edge_count(Player::Player1), 4);
        assert_eq!(game.owned_edge_count(Player::Player2), 3);
    }

    #[test]
    fn pointer_claims_resolve_through_layout() {
        let mut game = game((3, 3), corner_start());
        let layout = ScreenLayout::new(ScreenContext::new(800.0, 600.0), (3, 3)).unwrap();
        let (cx, cy) = layout.hex_center((0, 0));
        let r = f64::from(layout.radius());

        // straight up from the centre of (0, 0) is its N border
        let hovered = game.hover_at(&layout, cx, cy - r * 0.8);
        assert_eq!(hovered.map(|c| c.primary), Some(((0, 0), Direction::N)));

        // centre of (1, 1) pointing up is not connected to Player1
        let (cx2, cy2) = layout.hex_center((1, 1));
        assert_eq!(game.hover_at(&layout, cx2, cy2 - r * 0.8), None);

        let outcome = game.claim_at(&layout, cx, cy - r * 0.8).unwrap();
        assert!(outcome.has_update());
        assert_eq!(game.current_player(), Player::Player2);
    }

    #[test]
    fn edge_style_reflects_owner_and_hover() {
        let game = game((3, 3), corner_start());
        let seeded = game.edge_for((0, 0), Direction::NW).unwrap();
        let target = game.edge_for((0, 0), Direction::N).unwrap();
        let other = game.edge_for((1, 1), Direction::S).unwrap();
        let hovered = EdgeCandidate {
            primary: ((0, 0), Direction::N),
            secondary: None,
        };

        assert_eq!(game.edge_style(seeded, Some(&hovered)), EdgeStyle::Player1);
        assert_eq!(game.edge_style(target, Some(&hovered)), EdgeStyle::Hovered);
        assert_eq!(game.edge_style(target, None), EdgeStyle::Unowned);
        assert_eq!(game.edge_style(other, Some(&hovered)), EdgeStyle::Unowned);
        let player2 = game.edge_for((2, 2), Direction::SE).unwrap();
        assert_eq!(game.edge_style(player2, None), EdgeStyle::Player2);
    }

    #[test]
    fn random_seeding_starts_a_playable_game() {
        let game = Game::new(GameConfig::default(), RandomStartSeeder::new(7)).unwrap();
        assert_eq!(game.size(), (10, 10));
        assert_eq!(game.owned_edge_count(Player::Player1), 1);
        assert_eq!(game.owned_edge_count(Player::Player2), 1);
    }
}
