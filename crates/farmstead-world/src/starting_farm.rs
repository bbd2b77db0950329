//! Default starting farm for the Farmstead simulation.
//!
//! Three crops, two livestock types, a herd of two chickens and a cow,
//! six bags of feed, and the goal of five carrots, three potatoes, four eggs
//! and two bottles of milk within ten days. The grid variant lays four plots
//! out as a 2x2 block in the lower-left and puts the barn top-right.

use std::collections::BTreeMap;

use farmstead_types::{Catalog, CatalogError, CropType, GridPos, ItemName, LivestockType};

use crate::error::WorldError;
use crate::livestock::LivestockUnit;

/// The item consumed when feeding livestock.
pub const FEED_ITEM: &str = "エサ";

/// Default in-game day limit.
pub const DEFAULT_DAY_LIMIT: u32 = 10;

/// Default number of actions per day.
pub const DEFAULT_ACTIONS_PER_DAY: u32 = 2;

/// Default number of field plots in the menu variant.
pub const DEFAULT_FIELD_COUNT: usize = 4;

/// Default grid width.
pub const DEFAULT_GRID_WIDTH: u32 = 8;

/// Default grid height.
pub const DEFAULT_GRID_HEIGHT: u32 = 6;

/// Starting feed stock.
pub const DEFAULT_FEED_STOCK: u32 = 6;

/// Helper to build a `(item, amount)` entry.
fn entry(item: &str, amount: u32) -> (ItemName, u32) {
    (ItemName::new(item), amount)
}

/// Default crops in menu order.
pub fn default_crops() -> Vec<CropType> {
    vec![
        CropType::new("にんじん", 2),
        CropType::new("じゃがいも", 3),
        CropType::new("かぼちゃ", 4),
    ]
}

/// Default livestock types.
pub fn default_livestock_types() -> Vec<LivestockType> {
    vec![
        LivestockType::new("ニワトリ", "たまご"),
        LivestockType::new("ウシ", "ミルク"),
    ]
}

/// Default herd, by livestock type name, in feeding order.
pub fn default_herd() -> Vec<String> {
    vec!["ニワトリ".to_owned(), "ニワトリ".to_owned(), "ウシ".to_owned()]
}

/// Default starting balances. Items not listed start at zero.
pub fn default_starting_inventory() -> BTreeMap<ItemName, u32> {
    [entry(FEED_ITEM, DEFAULT_FEED_STOCK)].into_iter().collect()
}

/// Default goal thresholds, in display order.
pub fn default_goal() -> Vec<(ItemName, u32)> {
    vec![
        entry("にんじん", 5),
        entry("じゃがいも", 3),
        entry("たまご", 4),
        entry("ミルク", 2),
    ]
}

/// Default player start on the grid.
pub const fn default_start() -> GridPos {
    GridPos::new(0, 0)
}

/// Default barn position on the grid.
pub const fn default_barn() -> GridPos {
    GridPos::new(6, 1)
}

/// Default field plot positions on the grid.
pub fn default_field_positions() -> Vec<GridPos> {
    vec![
        GridPos::new(1, 3),
        GridPos::new(2, 3),
        GridPos::new(1, 4),
        GridPos::new(2, 4),
    ]
}

/// The default catalog.
///
/// # Errors
///
/// Never fails for the built-in definitions; the [`CatalogError`] is
/// surfaced so callers can treat it like any other catalog.
pub fn starting_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(
        default_crops(),
        default_livestock_types(),
        ItemName::new(FEED_ITEM),
    )
}

/// Build a herd from livestock type names, in the given order.
///
/// # Errors
///
/// Returns [`WorldError::UnknownLivestock`] for a name missing from the
/// catalog.
pub fn build_herd(catalog: &Catalog, names: &[String]) -> Result<Vec<LivestockUnit>, WorldError> {
    names
        .iter()
        .map(|name| {
            catalog
                .livestock_type(name)
                .cloned()
                .map(LivestockUnit::new)
                .ok_or_else(|| WorldError::UnknownLivestock(name.clone()))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::grid::FarmGrid;

    #[test]
    fn starting_catalog_is_valid() {
        let catalog = starting_catalog().unwrap();
        assert_eq!(catalog.crops().len(), 3);
        assert_eq!(catalog.feed_item().as_str(), FEED_ITEM);
        assert_eq!(catalog.item_keys().len(), 6);
    }

    #[test]
    fn default_herd_builds_in_order() {
        let catalog = starting_catalog().unwrap();
        let herd = build_herd(&catalog, &default_herd()).unwrap();
        let names: Vec<&str> = herd.iter().map(|u| u.kind().name.as_str()).collect();
        assert_eq!(names, vec!["ニワトリ", "ニワトリ", "ウシ"]);
        assert!(herd.iter().all(|u| u.hunger() == 0));
    }

    #[test]
    fn unknown_herd_entry_is_rejected() {
        let catalog = starting_catalog().unwrap();
        let result = build_herd(&catalog, &["ヤギ".to_owned()]);
        assert_eq!(result, Err(WorldError::UnknownLivestock("ヤギ".to_owned())));
    }

    #[test]
    fn default_goal_names_known_items() {
        let keys = starting_catalog().unwrap().item_keys();
        for (item, _) in &default_goal() {
            assert!(keys.contains(item), "goal item {item} is not in the catalog");
        }
    }

    #[test]
    fn default_grid_layout_is_valid() {
        let grid = FarmGrid::new(
            DEFAULT_GRID_WIDTH,
            DEFAULT_GRID_HEIGHT,
            default_start(),
            default_barn(),
            default_field_positions(),
        );
        assert!(grid.is_ok());
        assert_eq!(default_field_positions().len(), DEFAULT_FIELD_COUNT);
    }
}
