//! Per-item balances for the player's inventory.
//!
//! Balances are `u32` and every update uses checked arithmetic -- no silent
//! overflows, no negative stock, no panics. The key set is closed at
//! construction; display order follows the order the keys were given in.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::trace;

use farmstead_types::ItemName;

use crate::LedgerError;

/// The player's item balances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inventory {
    /// Item names in display order.
    order: Vec<ItemName>,
    /// Current balance per item. Every key in `order` is present.
    balances: BTreeMap<ItemName, u32>,
}

impl Inventory {
    /// Create an inventory over `keys` with every balance at zero.
    ///
    /// Duplicate keys are folded into the first occurrence.
    pub fn new<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = ItemName>,
    {
        let mut order = Vec::new();
        let mut balances = BTreeMap::new();
        for key in keys {
            if balances.insert(key.clone(), 0).is_none() {
                order.push(key);
            }
        }
        Self { order, balances }
    }

    /// Create an inventory over `keys`, then seed the given starting balances.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownItem`] if a starting balance names an
    /// item outside `keys`.
    pub fn with_balances<I>(keys: I, starting: &BTreeMap<ItemName, u32>) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = ItemName>,
    {
        let mut inventory = Self::new(keys);
        for (item, &amount) in starting {
            let slot = inventory
                .balances
                .get_mut(item.as_str())
                .ok_or_else(|| LedgerError::UnknownItem(item.clone()))?;
            *slot = amount;
        }
        Ok(inventory)
    }

    /// Whether `item` belongs to this inventory's key set.
    pub fn contains(&self, item: &str) -> bool {
        self.balances.contains_key(item)
    }

    /// Current balance of `item`; zero for items outside the key set.
    pub fn balance(&self, item: &str) -> u32 {
        self.balances.get(item).copied().unwrap_or(0)
    }

    /// Whether at least `amount` of `item` is held.
    pub fn has(&self, item: &str, amount: u32) -> bool {
        self.balance(item) >= amount
    }

    /// Add `amount` units of `item`. Returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownItem`] for an item outside the key set,
    /// or [`LedgerError::Overflow`] if the balance would exceed `u32::MAX`.
    pub fn credit(&mut self, item: &str, amount: u32) -> Result<u32, LedgerError> {
        let slot = self
            .balances
            .get_mut(item)
            .ok_or_else(|| LedgerError::UnknownItem(ItemName::new(item)))?;
        let updated = slot
            .checked_add(amount)
            .ok_or_else(|| LedgerError::Overflow(ItemName::new(item)))?;
        *slot = updated;
        trace!(item, amount, balance = updated, "credit");
        Ok(updated)
    }

    /// Remove `amount` units of `item`. Returns the new balance.
    ///
    /// Nothing changes when the debit fails.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownItem`] for an item outside the key set,
    /// or [`LedgerError::InsufficientBalance`] if fewer than `amount` are held.
    pub fn debit(&mut self, item: &str, amount: u32) -> Result<u32, LedgerError> {
        let slot = self
            .balances
            .get_mut(item)
            .ok_or_else(|| LedgerError::UnknownItem(ItemName::new(item)))?;
        let updated = slot
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::InsufficientBalance {
                item: ItemName::new(item),
                requested: amount,
                available: *slot,
            })?;
        *slot = updated;
        trace!(item, amount, balance = updated, "debit");
        Ok(updated)
    }

    /// Item names in display order.
    pub fn keys(&self) -> &[ItemName] {
        &self.order
    }

    /// `(item, balance)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, u32)> + '_ {
        self.order
            .iter()
            .map(|item| (item, self.balance(item.as_str())))
    }
}
