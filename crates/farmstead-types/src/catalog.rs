//! The static catalog of crop and livestock types.
//!
//! A [`Catalog`] is validated once at game start and never changes. It
//! also fixes the closed set of inventory items: every livestock product,
//! every crop, and the feed item, in that order. Ledgers and goals are
//! built against this key set so a misspelled item is rejected up front
//! instead of silently creating a new balance.

use serde::Serialize;

use crate::structs::{CropType, ItemName, LivestockType};

/// Errors raised while validating a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No crops were defined.
    #[error("catalog must define at least one crop")]
    NoCrops,

    /// A crop grows in zero days.
    #[error("crop {0} must take at least one day to grow")]
    ZeroGrowDays(ItemName),

    /// Two crops share a name.
    #[error("duplicate crop name: {0}")]
    DuplicateCrop(ItemName),

    /// Two livestock types share a name.
    #[error("duplicate livestock type: {0}")]
    DuplicateLivestock(String),
}

/// Immutable definitions of everything that can be planted or raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    /// Plantable crops in menu order.
    crops: Vec<CropType>,
    /// Livestock types in declaration order.
    livestock_types: Vec<LivestockType>,
    /// The item consumed when feeding a unit.
    feed_item: ItemName,
}

impl Catalog {
    /// Validate and build a catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if no crops are given, a crop has a zero
    /// growth duration, or names are duplicated.
    pub fn new(
        crops: Vec<CropType>,
        livestock_types: Vec<LivestockType>,
        feed_item: ItemName,
    ) -> Result<Self, CatalogError> {
        if crops.is_empty() {
            return Err(CatalogError::NoCrops);
        }
        for (i, crop) in crops.iter().enumerate() {
            if crop.grow_days == 0 {
                return Err(CatalogError::ZeroGrowDays(crop.name.clone()));
            }
            if crops.iter().take(i).any(|c| c.name == crop.name) {
                return Err(CatalogError::DuplicateCrop(crop.name.clone()));
            }
        }
        for (i, kind) in livestock_types.iter().enumerate() {
            if livestock_types.iter().take(i).any(|k| k.name == kind.name) {
                return Err(CatalogError::DuplicateLivestock(kind.name.clone()));
            }
        }
        Ok(Self {
            crops,
            livestock_types,
            feed_item,
        })
    }

    /// All crops in menu order.
    pub fn crops(&self) -> &[CropType] {
        &self.crops
    }

    /// Look up a crop by its menu index.
    pub fn crop(&self, index: usize) -> Option<&CropType> {
        self.crops.get(index)
    }

    /// Look up a livestock type by name.
    pub fn livestock_type(&self, name: &str) -> Option<&LivestockType> {
        self.livestock_types.iter().find(|k| k.name == name)
    }

    /// The feed item.
    pub const fn feed_item(&self) -> &ItemName {
        &self.feed_item
    }

    /// The closed set of inventory items, without duplicates.
    ///
    /// Order: livestock products, then crops, then the feed item.
    pub fn item_keys(&self) -> Vec<ItemName> {
        let mut keys: Vec<ItemName> = Vec::new();
        let candidates = self
            .livestock_types
            .iter()
            .map(|k| &k.product)
            .chain(self.crops.iter().map(|c| &c.name))
            .chain(core::iter::once(&self.feed_item));
        for item in candidates {
            if !keys.contains(item) {
                keys.push(item.clone());
            }
        }
        keys
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(
            vec![CropType::new("にんじん", 2), CropType::new("じゃがいも", 3)],
            vec![
                LivestockType::new("ニワトリ", "たまご"),
                LivestockType::new("ウシ", "ミルク"),
            ],
            ItemName::new("エサ"),
        )
        .unwrap()
    }

    #[test]
    fn item_keys_follow_product_crop_feed_order() {
        let keys: Vec<String> = sample()
            .item_keys()
            .into_iter()
            .map(|k| k.as_str().to_owned())
            .collect();
        assert_eq!(keys, vec!["たまご", "ミルク", "にんじん", "じゃがいも", "エサ"]);
    }

    #[test]
    fn item_keys_deduplicate_shared_products() {
        let catalog = Catalog::new(
            vec![CropType::new("にんじん", 2)],
            vec![
                LivestockType::new("ニワトリ", "たまご"),
                LivestockType::new("アヒル", "たまご"),
            ],
            ItemName::new("エサ"),
        )
        .unwrap();
        assert_eq!(catalog.item_keys().len(), 3);
    }

    #[test]
    fn lookups() {
        let catalog = sample();
        assert_eq!(catalog.crop(1).map(|c| c.grow_days), Some(3));
        assert!(catalog.crop(2).is_none());
        assert_eq!(
            catalog.livestock_type("ウシ").map(|k| k.product.as_str()),
            Some("ミルク")
        );
        assert!(catalog.livestock_type("ヒツジ").is_none());
    }

    #[test]
    fn rejects_zero_grow_days() {
        let result = Catalog::new(vec![CropType::new("かぼちゃ", 0)], vec![], "エサ".into());
        assert_eq!(
            result,
            Err(CatalogError::ZeroGrowDays(ItemName::new("かぼちゃ")))
        );
    }

    #[test]
    fn rejects_empty_and_duplicate_crops() {
        assert_eq!(
            Catalog::new(vec![], vec![], "エサ".into()),
            Err(CatalogError::NoCrops)
        );
        let dup = Catalog::new(
            vec![CropType::new("にんじん", 2), CropType::new("にんじん", 3)],
            vec![],
            "エサ".into(),
        );
        assert!(matches!(dup, Err(CatalogError::DuplicateCrop(_))));
    }

    #[test]
    fn rejects_duplicate_livestock() {
        let dup = Catalog::new(
            vec![CropType::new("にんじん", 2)],
            vec![
                LivestockType::new("ウシ", "ミルク"),
                LivestockType::new("ウシ", "チーズ"),
            ],
            "エサ".into(),
        );
        assert_eq!(dup, Err(CatalogError::DuplicateLivestock("ウシ".to_owned())));
    }
}
