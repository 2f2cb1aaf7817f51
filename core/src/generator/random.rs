use super::*;

/// Uniform sampling without replacement, seeded so hosts and tests can
/// reproduce a card.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomGridGenerator {
    seed: u64,
}

impl RandomGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn from_entropy() -> Self {
        use rand::Rng;
        Self::new(rand::thread_rng().gen())
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(self, catalog: &dyn TileCatalog) -> Result<Vec<GridCell>> {
        use rand::prelude::*;

        let open_slots = GRID_CELLS - 1;
        let eligible = catalog.tiles(true);
        if eligible.len() < open_slots {
            log::warn!(
                "Catalog has {} eligible tiles but a card needs {}",
                eligible.len(),
                open_slots
            );
            return Err(GameError::NotEnoughTiles);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut drawn: Vec<&TileDef> = eligible.choose_multiple(&mut rng, open_slots).copied().collect();
        // choose_multiple does not randomize the order of the result
        drawn.shuffle(&mut rng);

        let mut drawn = drawn.into_iter();
        let mut cells = Vec::with_capacity(GRID_CELLS);
        for pos in 0..GRID_CELLS as Pos {
            if pos == CENTER_POS {
                cells.push(GridCell::free(catalog.free_tile().clone()));
            } else {
                let tile = drawn.next().expect("one drawn tile per open slot");
                cells.push(GridCell::new(tile.clone(), pos));
            }
        }
        Ok(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn generate(seed: u64) -> Vec<GridCell> {
        RandomGridGenerator::new(seed)
            .generate(&StaticCatalog::road_trip())
            .unwrap()
    }

    #[test]
    fn center_holds_the_pre_spotted_free_tile() {
        for seed in 0..16 {
            let cells = generate(seed);
            let center = &cells[CENTER_POS as usize];
            assert!(center.spotted);
            assert!(center.tile.is_special());
            assert_eq!(center.tile.id, "free");
        }
    }

    #[test]
    fn open_cells_are_distinct_non_special_and_unspotted() {
        for seed in 0..16 {
            let cells = generate(seed);
            let mut seen = BTreeSet::new();
            for cell in cells.iter().filter(|cell| cell.pos != CENTER_POS) {
                assert!(!cell.spotted);
                assert!(!cell.tile.is_special());
                assert!(seen.insert(cell.tile.id.clone()), "duplicate {}", cell.tile.id);
            }
            assert_eq!(seen.len(), GRID_CELLS - 1);
        }
    }

    #[test]
    fn positions_are_row_major_and_complete() {
        let cells = generate(7);
        assert_eq!(cells.len(), GRID_CELLS);
        for (index, cell) in cells.iter().enumerate() {
            assert_eq!(cell.pos as usize, index);
        }
    }

    #[test]
    fn same_seed_reproduces_the_card() {
        assert_eq!(generate(42), generate(42));
    }

    #[test]
    fn small_catalog_is_rejected() {
        let tiles = vec![
            TileDef::new("free", "Free Space", TileCategory::Special, Rarity::Common, false),
            TileDef::new("rv", "RV", TileCategory::Vehicles, Rarity::Common, false),
        ];
        let catalog = StaticCatalog::new(tiles).unwrap();
        let result = RandomGridGenerator::new(1).generate(&catalog);
        assert_eq!(result, Err(GameError::NotEnoughTiles));
    }
}
