//! Data-driven round content and its loaders.
//!
//! This crate provides loaders for the files a round is built from:
//! - Payload catalogs (RON)
//! - Grid layout catalogs (JSON `blocks`)
//! - Game configuration (TOML)
//!
//! All loaders deserialize straight into game-core types.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LayoutBlock, LayoutDocument, LayoutLoader, PayloadCatalog,
    PayloadLoader,
};
