use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid needs at least one column and one row")]
    EmptyGrid,
    #[error("Screen area is too small to lay out the grid")]
    InvalidScreen,
    #[error("Start edges must be distinct edges inside the grid")]
    InvalidStartEdge,
}

pub type Result<T> = core::result::Result<T, GameError>;
