//! Payload catalog loader.

use std::path::Path;

use game_core::{PayloadPool, SlotPayload};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Payload catalog structure for RON files.
///
/// ```ron
/// (
///     payloads: [
///         (name: "Sword", damage: 3, effect: SlashHit),
///         (name: "Pebble", damage: 1),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadCatalog {
    pub payloads: Vec<SlotPayload>,
}

/// Loader for payload catalogs from RON files.
pub struct PayloadLoader;

impl PayloadLoader {
    /// Load a payload catalog from a RON file.
    ///
    /// Order is preserved: pairing draws payloads from the front of the pool.
    pub fn load(path: &Path) -> LoadResult<PayloadPool> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<PayloadPool> {
        let catalog: PayloadCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse payload catalog RON: {}", e))?;

        Ok(PayloadPool::new(catalog.payloads))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{EffectTag, PayloadId};

    #[test]
    fn parses_catalog_in_order() {
        let pool = PayloadLoader::parse(
            r#"(
                payloads: [
                    (name: "Fireball", damage: 5, effect: FireHit),
                    (name: "Pebble", damage: 1),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(pool.len(), 2);
        let fireball = pool.get(PayloadId(0)).unwrap();
        assert_eq!(fireball.effect, EffectTag::FireHit);
        assert_eq!(pool.get(PayloadId(1)).unwrap().effect, EffectTag::None);
    }

    #[test]
    fn unknown_effect_is_rejected() {
        let result = PayloadLoader::parse(r#"(payloads: [(name: "x", damage: 1, effect: Laser)])"#);
        assert!(result.is_err());
    }
}
