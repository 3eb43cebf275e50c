//! Content factory for loading every round input from one directory.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, LayoutCatalog, PayloadPool};

use crate::loaders::{ConfigLoader, LayoutLoader, LoadResult, PayloadLoader};

/// Content factory that loads all round content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── payloads.ron
/// └── layouts.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const PAYLOADS_FILE: &'static str = "payloads.ron";
    pub const LAYOUTS_FILE: &'static str = "layouts.json";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join(Self::CONFIG_FILE))
    }

    /// Load the payload pool from `payloads.ron`.
    pub fn load_payloads(&self) -> LoadResult<PayloadPool> {
        PayloadLoader::load(&self.data_dir.join(Self::PAYLOADS_FILE))
    }

    /// Load the grid layout catalog from `layouts.json`.
    pub fn load_layouts(&self) -> LoadResult<LayoutCatalog> {
        LayoutLoader::load(&self.data_dir.join(Self::LAYOUTS_FILE))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_every_file_from_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.toml"), "player_max_health = 7\n").unwrap();
        fs::write(
            dir.path().join("payloads.ron"),
            r#"(payloads: [(name: "Bomb", damage: 7, effect: Explosion)])"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("layouts.json"),
            r#"{"blocks":[{"R":2,"C":2,"number":2}]}"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap().player_max_health, 7);
        assert_eq!(factory.load_payloads().unwrap().len(), 1);
        assert_eq!(factory.load_layouts().unwrap().len(), 1);
    }

    #[test]
    fn missing_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let error = ContentFactory::new(dir.path()).load_payloads().unwrap_err();
        assert!(error.to_string().contains("payloads.ron"));
    }
}
