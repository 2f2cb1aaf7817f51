use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position out of range")]
    InvalidPosition,
    #[error("Catalog does not have enough eligible tiles")]
    NotEnoughTiles,
    #[error("Catalog has no designated free tile")]
    MissingFreeTile,
    #[error("No game in progress")]
    NoActiveGame,
}

pub type Result<T> = core::result::Result<T, GameError>;
