use crate::*;
pub use random::*;

mod random;

/// Strategy for laying out a fresh 5x5 card from a catalog.
pub trait GridGenerator {
    fn generate(self, catalog: &dyn TileCatalog) -> Result<Vec<GridCell>>;
}
