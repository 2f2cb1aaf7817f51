use serde::{Deserialize, Serialize};

pub use catalog::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use settings::*;
pub use stats::*;
pub use store::*;
pub use tile::*;
pub use types::*;

mod catalog;
mod engine;
mod error;
mod generator;
mod session;
mod settings;
mod stats;
mod store;
mod tile;
mod types;

/// Game mode, controls how many consecutive spotted cells complete a line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Standard,
    Savage,
}

impl GameMode {
    /// Length of a winning run for this mode.
    pub const fn win_length(self) -> usize {
        match self {
            Self::Standard => 3,
            Self::Savage => 4,
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        Self::Standard
    }
}
