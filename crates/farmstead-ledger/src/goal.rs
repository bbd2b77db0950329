//! Goal thresholds and the win check.
//!
//! A [`Goal`] is fixed at game start. It is met when, for every item it
//! names, the inventory holds at least the threshold. Items the goal does
//! not name are ignored.

use serde::Serialize;

use farmstead_types::ItemName;

use crate::{Inventory, LedgerError};

/// One goal row for status displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalLine {
    /// The item.
    pub item: ItemName,
    /// Quantity currently held.
    pub have: u32,
    /// Quantity required.
    pub need: u32,
}

impl GoalLine {
    /// Whether this row's threshold is reached.
    pub const fn is_met(&self) -> bool {
        self.have >= self.need
    }
}

/// Required item quantities for winning the game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Goal {
    /// `(item, threshold)` pairs in declaration order.
    thresholds: Vec<(ItemName, u32)>,
}

impl Goal {
    /// Build a goal against an inventory's key set.
    ///
    /// Thresholds keep the order they are given in. A repeated item keeps
    /// its first position and its last threshold.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownItem`] if a threshold names an item the
    /// inventory does not track.
    pub fn new<I>(thresholds: I, inventory: &Inventory) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = (ItemName, u32)>,
    {
        let mut rows: Vec<(ItemName, u32)> = Vec::new();
        for (item, need) in thresholds {
            if !inventory.contains(item.as_str()) {
                return Err(LedgerError::UnknownItem(item));
            }
            match rows.iter_mut().find(|(existing, _)| *existing == item) {
                Some(row) => row.1 = need,
                None => rows.push((item, need)),
            }
        }
        Ok(Self { thresholds: rows })
    }

    /// Whether every threshold is reached.
    pub fn is_met(&self, inventory: &Inventory) -> bool {
        self.thresholds
            .iter()
            .all(|(item, need)| inventory.has(item.as_str(), *need))
    }

    /// Per-item progress against `inventory`.
    pub fn progress(&self, inventory: &Inventory) -> Vec<GoalLine> {
        self.thresholds
            .iter()
            .map(|(item, need)| GoalLine {
                item: item.clone(),
                have: inventory.balance(item.as_str()),
                need: *need,
            })
            .collect()
    }
}
