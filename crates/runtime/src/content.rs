//! Round inputs: rules config, payload pool and layout catalog.

use std::path::Path;

use rand::Rng;
use tracing::{debug, info, warn};

use game_content::ContentFactory;
use game_core::{GameConfig, GridLayout, LayoutCatalog, PayloadPool};

/// Everything a round is generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundContent {
    pub config: GameConfig,
    pub payloads: PayloadPool,
    pub layouts: LayoutCatalog,
}

impl RoundContent {
    /// Built-in content: default rules, the sample payload pool and no layout
    /// catalog (the configured layout is always used).
    pub fn builtin() -> Self {
        Self {
            config: GameConfig::default(),
            payloads: PayloadPool::sample(),
            layouts: LayoutCatalog::default(),
        }
    }

    /// Loads content from `data_dir`.
    ///
    /// Each file is optional: a missing or malformed file is logged and its
    /// built-in counterpart is used instead.
    pub fn load(data_dir: &Path) -> Self {
        let factory = ContentFactory::new(data_dir);
        let builtin = Self::builtin();

        let config = factory.load_config().unwrap_or_else(|error| {
            warn!(dir = %data_dir.display(), %error, "Using default game config");
            builtin.config
        });

        let payloads = match factory.load_payloads() {
            Ok(pool) if pool.is_empty() => {
                warn!(dir = %data_dir.display(), "Payload catalog is empty, using sample payloads");
                builtin.payloads
            }
            Ok(pool) => pool,
            Err(error) => {
                warn!(dir = %data_dir.display(), %error, "Using sample payloads");
                builtin.payloads
            }
        };

        let layouts = match factory.load_layouts() {
            Ok(catalog) if catalog.is_empty() => {
                warn!(dir = %data_dir.display(), "Layout catalog is empty, using configured layout");
                catalog
            }
            Ok(catalog) => catalog,
            Err(error) => {
                warn!(dir = %data_dir.display(), %error, "Using configured layout only");
                builtin.layouts
            }
        };

        info!(
            dir = %data_dir.display(),
            payloads = payloads.len(),
            layouts = layouts.len(),
            "Round content loaded"
        );

        Self {
            config,
            payloads,
            layouts,
        }
    }

    /// Picks a random catalog layout, or the configured one for an empty
    /// catalog. The result is always within the supported ranges.
    pub fn choose_layout<R>(&self, rng: &mut R) -> GridLayout
    where
        R: Rng + ?Sized,
    {
        match self.layouts.pick(rng) {
            Some(layout) => {
                debug!(?layout, "Picked layout from catalog");
                layout
            }
            None => self.config.layout.clamped(),
        }
    }
}

impl Default for RoundContent {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;

    #[test]
    fn missing_directory_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let content = RoundContent::load(&dir.path().join("nope"));
        assert_eq!(content, RoundContent::builtin());
    }

    #[test]
    fn empty_payload_catalog_uses_sample() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("payloads.ron"), "(payloads: [])").unwrap();
        let content = RoundContent::load(dir.path());
        assert_eq!(content.payloads, PayloadPool::sample());
    }

    #[test]
    fn empty_catalog_uses_configured_layout() {
        let mut content = RoundContent::builtin();
        content.config.layout = GridLayout::new(20, 3, 4);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(content.choose_layout(&mut rng), GridLayout::new(8, 3, 4));

        content.layouts = LayoutCatalog::new(vec![GridLayout::new(2, 2, 2)]);
        assert_eq!(content.choose_layout(&mut rng), GridLayout::new(2, 2, 2));
    }
}
