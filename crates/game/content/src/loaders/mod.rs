//! Content loaders for reading round data from files.
//!
//! Payload catalogs are RON, game configuration is TOML and the grid layout
//! catalog keeps the JSON `blocks` format of the shipped level files.

pub mod config;
pub mod factory;
pub mod layout;
pub mod payload;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use layout::{LayoutBlock, LayoutDocument, LayoutLoader};
pub use payload::{PayloadCatalog, PayloadLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
