use crate::*;

/// Read-only source of tile definitions. Static for the process lifetime;
/// the engine never mutates catalog data.
pub trait TileCatalog {
    /// All tiles, optionally excluding the special/free category.
    fn tiles(&self, exclude_special: bool) -> Vec<&TileDef>;

    /// The designated free tile placed at the card center.
    fn free_tile(&self) -> &TileDef;
}

/// Catalog backed by a fixed list of tiles.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticCatalog {
    tiles: Vec<TileDef>,
    free_index: usize,
}

impl StaticCatalog {
    /// The first special tile becomes the free tile.
    pub fn new(tiles: Vec<TileDef>) -> Result<Self> {
        let free_index = tiles
            .iter()
            .position(|tile| tile.is_special())
            .ok_or(GameError::MissingFreeTile)?;
        Ok(Self { tiles, free_index })
    }

    /// The built-in road-trip set.
    pub fn road_trip() -> Self {
        Self::new(road_trip_tiles()).expect("built-in catalog carries a free tile")
    }
}

impl TileCatalog for StaticCatalog {
    fn tiles(&self, exclude_special: bool) -> Vec<&TileDef> {
        self.tiles
            .iter()
            .filter(|tile| !(exclude_special && tile.is_special()))
            .collect()
    }

    fn free_tile(&self) -> &TileDef {
        &self.tiles[self.free_index]
    }
}

fn road_trip_tiles() -> Vec<TileDef> {
    use Rarity::*;
    use TileCategory::*;

    fn tile(
        id: &str,
        name: &str,
        category: TileCategory,
        rarity: Rarity,
        sensitive: bool,
    ) -> TileDef {
        TileDef::new(id, name, category, rarity, sensitive)
    }

    vec![
        tile("free", "Free Space", Special, Common, false),
        // roadkill
        tile("possum", "Possum", Roadkill, Common, true),
        tile("raccoon", "Raccoon", Roadkill, Common, true),
        tile("squirrel", "Squirrel", Roadkill, Common, true),
        tile("skunk", "Skunk", Roadkill, Uncommon, true),
        tile("deer", "Deer", Roadkill, Uncommon, true),
        tile("armadillo", "Armadillo", Roadkill, Rare, true),
        tile("coyote", "Coyote", Roadkill, Rare, true),
        // vehicles
        tile("cop-car", "Cop Car", Vehicles, Common, false),
        tile("motorcycle", "Motorcycle", Vehicles, Common, false),
        tile("school-bus", "School Bus", Vehicles, Common, false),
        tile("rv", "RV", Vehicles, Common, false),
        tile("semi-truck", "Semi Truck", Vehicles, Common, false),
        tile("ambulance", "Ambulance", Vehicles, Uncommon, false),
        tile("tow-truck", "Tow Truck", Vehicles, Uncommon, false),
        tile("monster-truck", "Monster Truck", Vehicles, Rare, false),
        tile("hearse", "Hearse", Vehicles, Rare, false),
        // roadside
        tile("billboard", "Billboard", Roadside, Common, false),
        tile("water-tower", "Water Tower", Roadside, Common, false),
        tile("windmill", "Windmill", Roadside, Common, false),
        tile("fruit-stand", "Fruit Stand", Roadside, Uncommon, false),
        tile("memorial", "Roadside Memorial", Roadside, Uncommon, true),
        tile("giant-sculpture", "Giant Sculpture", Roadside, Rare, false),
        // people
        tile("cyclist", "Cyclist", People, Common, false),
        tile("road-crew", "Road Crew", People, Common, false),
        tile("hitchhiker", "Hitchhiker", People, Uncommon, false),
        tile("truck-bed-dog", "Dog in a Truck Bed", People, Uncommon, false),
        // infrastructure
        tile("gas-station", "Gas Station", Infrastructure, Common, false),
        tile("rest-stop", "Rest Stop", Infrastructure, Common, false),
        tile("rail-crossing", "Railroad Crossing", Infrastructure, Common, false),
        tile("toll-booth", "Toll Booth", Infrastructure, Uncommon, false),
        tile("tunnel", "Tunnel", Infrastructure, Uncommon, false),
        tile("weigh-station", "Weigh Station", Infrastructure, Uncommon, false),
        tile("drawbridge", "Drawbridge", Infrastructure, Rare, false),
    ]
}
