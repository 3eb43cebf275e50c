//! Grid dimensions and the catalog rounds pick them from.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::GameConfig;

/// Rows, columns and requested pair count of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    pub rows: u32,
    pub columns: u32,
    pub pairs: u32,
}

impl GridLayout {
    pub const fn new(rows: u32, columns: u32, pairs: u32) -> Self {
        Self {
            rows,
            columns,
            pairs,
        }
    }

    /// Clamps rows and columns to 2..=8 and pairs to 1..=10.
    pub fn clamped(&self) -> Self {
        Self {
            rows: self
                .rows
                .clamp(GameConfig::MIN_GRID_SIDE, GameConfig::MAX_GRID_SIDE),
            columns: self
                .columns
                .clamp(GameConfig::MIN_GRID_SIDE, GameConfig::MAX_GRID_SIDE),
            pairs: self.pairs.clamp(GameConfig::MIN_PAIRS, GameConfig::MAX_PAIRS),
        }
    }

    pub const fn total_slots(&self) -> usize {
        (self.rows * self.columns) as usize
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(
            GameConfig::DEFAULT_ROWS,
            GameConfig::DEFAULT_COLUMNS,
            GameConfig::DEFAULT_PAIRS,
        )
    }
}

/// A set of candidate layouts; each round may draw one at random.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutCatalog {
    layouts: Vec<GridLayout>,
}

impl LayoutCatalog {
    pub fn new(layouts: Vec<GridLayout>) -> Self {
        Self { layouts }
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    pub fn layouts(&self) -> &[GridLayout] {
        &self.layouts
    }

    /// Picks a layout uniformly at random, clamped into the supported range.
    ///
    /// Returns `None` for an empty catalog; callers fall back to the
    /// configured layout.
    pub fn pick<R>(&self, rng: &mut R) -> Option<GridLayout>
    where
        R: Rng + ?Sized,
    {
        self.layouts.choose(rng).map(GridLayout::clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pick_clamps_the_chosen_layout() {
        let catalog = LayoutCatalog::new(vec![GridLayout::new(12, 0, 0)]);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(catalog.pick(&mut rng), Some(GridLayout::new(8, 2, 1)));
    }

    #[test]
    fn empty_catalog_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(LayoutCatalog::default().pick(&mut rng), None);
    }
}
