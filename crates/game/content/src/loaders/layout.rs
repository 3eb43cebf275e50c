//! Grid layout catalog loader.

use std::path::Path;

use game_core::{GridLayout, LayoutCatalog};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One entry of the `blocks` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutBlock {
    #[serde(rename = "R")]
    pub rows: u32,
    #[serde(rename = "C")]
    pub columns: u32,
    #[serde(rename = "number")]
    pub pairs: u32,
}

impl From<LayoutBlock> for GridLayout {
    fn from(block: LayoutBlock) -> Self {
        GridLayout::new(block.rows, block.columns, block.pairs)
    }
}

/// `{"blocks": [{"R": 4, "C": 3, "number": 4}, ...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutDocument {
    #[serde(default)]
    pub blocks: Vec<LayoutBlock>,
}

/// Loader for grid layout catalogs from JSON files.
pub struct LayoutLoader;

impl LayoutLoader {
    /// Load a layout catalog from a JSON file.
    ///
    /// Layouts are kept as written; [`LayoutCatalog::pick`] clamps the one it
    /// returns.
    pub fn load(path: &Path) -> LoadResult<LayoutCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<LayoutCatalog> {
        let document: LayoutDocument = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse layout JSON: {}", e))?;

        Ok(LayoutCatalog::new(
            document.blocks.into_iter().map(GridLayout::from).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_block_catalog() {
        let catalog = LayoutLoader::parse(
            r#"{"blocks":[{"R":4,"C":3,"number":4},{"R":10,"C":1,"number":12}]}"#,
        )
        .unwrap();

        assert_eq!(
            catalog.layouts(),
            &[GridLayout::new(4, 3, 4), GridLayout::new(10, 1, 12)]
        );
    }

    #[test]
    fn missing_blocks_yield_an_empty_catalog() {
        assert!(LayoutLoader::parse("{}").unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(LayoutLoader::parse(r#"{"blocks":[{"R":"four"}]}"#).is_err());
    }
}
