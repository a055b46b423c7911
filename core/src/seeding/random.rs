use super::*;

/// Places Player1 on the top border and Player2 on the bottom border of the
/// grid, each in a random column.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomStartSeeder {
    seed: u64,
}

impl RandomStartSeeder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl StartEdgeSeeder for RandomStartSeeder {
    fn seed(self, size: Coord2) -> StartEdges {
        use rand::prelude::*;

        let (cols, rows) = size;
        if cols == 0 || rows == 0 {
            log::warn!("Seeding an empty {}x{} grid, using the origin", cols, rows);
        }
        let cols = cols.max(1);
        let last_row = rows.saturating_sub(1);

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let top = rng.random_range(0..cols);
        let bottom = rng.random_range(0..cols);

        StartEdges {
            player1: ((top, 0), Direction::N),
            player2: ((bottom, last_row), Direction::S),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_players_on_opposite_borders() {
        for seed in 0..20 {
            let start = RandomStartSeeder::new(seed).seed((7, 5));

            let ((top_col, top_row), top_direction) = start.player1;
            assert!(top_col < 7);
            assert_eq!(top_row, 0);
            assert_eq!(top_direction, Direction::N);

            let ((bottom_col, bottom_row), bottom_direction) = start.player2;
            assert!(bottom_col < 7);
            assert_eq!(bottom_row, 4);
            assert_eq!(bottom_direction, Direction::S);
        }
    }

    #[test]
    fn same_seed_same_placement() {
        let a = RandomStartSeeder::new(42).seed((10, 10));
        let b = RandomStartSeeder::new(42).seed((10, 10));
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_placement_is_returned_as_is() {
        let start = StartEdges {
            player1: ((1, 1), Direction::NE),
            player2: ((0, 2), Direction::SW),
        };
        assert_eq!(start.seed((3, 3)), start);
        assert_eq!(start.for_player(Player::Player2), ((0, 2), Direction::SW));
    }
}
