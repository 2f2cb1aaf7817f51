use serde::{Deserialize, Serialize};

/// Thematic grouping of a tile. `Special` is reserved for the free cell and
/// is never drawn into the 24 open positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileCategory {
    Roadkill,
    Vehicles,
    Roadside,
    People,
    Infrastructure,
    Special,
}

impl TileCategory {
    pub const fn is_special(self) -> bool {
        matches!(self, Self::Special)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
}

/// Immutable catalog entry describing one spottable thing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDef {
    pub id: String,
    pub name: String,
    pub category: TileCategory,
    pub rarity: Rarity,
    /// Content-sensitivity flag, lets hosts tone down what they show.
    pub sensitive: bool,
}

impl TileDef {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: TileCategory,
        rarity: Rarity,
        sensitive: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            rarity,
            sensitive,
        }
    }

    pub fn is_special(&self) -> bool {
        self.category.is_special()
    }
}
