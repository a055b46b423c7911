use serde::{Deserialize, Serialize};

pub use connectivity::*;
pub use engine::*;
pub use error::*;
pub use geometry::*;
pub use grid::*;
pub use lattice::*;
pub use seeding::*;
pub use turn::*;
pub use types::*;

mod connectivity;
mod engine;
mod error;
mod geometry;
mod grid;
mod lattice;
mod seeding;
mod turn;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    /// Fraction of the screen kept as margin on each side.
    pub padding: f64,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, padding: f64) -> Self {
        Self { size, padding }
    }

    pub fn new(size: Coord2, padding: f64) -> Self {
        let size_x = size.0.clamp(1, Coord::MAX);
        let size_y = size.1.clamp(1, Coord::MAX);
        let clamped_padding = if padding.is_nan() {
            DEFAULT_PADDING
        } else {
            padding.clamp(0.0, MAX_PADDING)
        };
        if (size_x, size_y) != size || clamped_padding.to_bits() != padding.to_bits() {
            log::warn!(
                "Clamped game config to {}x{} with padding {}",
                size_x,
                size_y,
                clamped_padding
            );
        }
        Self::new_unchecked((size_x, size_y), clamped_padding)
    }

    pub const fn total_hexes(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Screen context for a drawing area of `width` by `height` pixels.
    pub const fn screen_context(&self, width: f64, height: f64) -> ScreenContext {
        ScreenContext::new(width, height).with_padding(self.padding)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((10, 10), DEFAULT_PADDING)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClaimOutcome {
    Rejected,
    Claimed { edge: EdgeId, player: Player },
}

impl ClaimOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Rejected => false,
            Self::Claimed { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_size_and_padding() {
        let config = GameConfig::new((0, 4), 0.8);
        assert_eq!(config.size, (1, 4));
        assert_eq!(config.padding, MAX_PADDING);

        let config = GameConfig::new((5, 5), f64::NAN);
        assert_eq!(config.padding, DEFAULT_PADDING);
        assert_eq!(config.total_hexes(), 25);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = GameConfig::new((12, 8), 0.05);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn screen_context_carries_config_padding() {
        let context = GameConfig::new((4, 4), 0.1).screen_context(640.0, 480.0);
        assert_eq!(context.padding, 0.1);
        assert!(context.validate().is_ok());
    }
}
