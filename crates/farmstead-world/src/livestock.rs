//! Livestock hunger and production.
//!
//! Each [`LivestockUnit`] counts the days since it was last fed. Feeding
//! resets the counter and yields the unit's product; the ledger bookkeeping
//! (product in, feed out) is done by [`feed_all`], which walks the herd in
//! declaration order and stops as soon as the feed runs out.

use core::fmt;

use serde::Serialize;
use tracing::debug;

use farmstead_ledger::Inventory;
use farmstead_types::{ItemName, LivestockType};

use crate::error::WorldError;

// ---------------------------------------------------------------------------
// LivestockUnit
// ---------------------------------------------------------------------------

/// One animal on the farm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LivestockUnit {
    /// What kind of animal this is.
    kind: LivestockType,
    /// Days since the last feed.
    hunger: u32,
}

impl LivestockUnit {
    /// A freshly fed unit of the given type.
    pub const fn new(kind: LivestockType) -> Self {
        Self { kind, hunger: 0 }
    }

    /// The unit's type.
    pub const fn kind(&self) -> &LivestockType {
        &self.kind
    }

    /// Days since the last feed.
    pub const fn hunger(&self) -> u32 {
        self.hunger
    }

    /// Feed the unit: hunger drops to zero and the product is returned.
    ///
    /// The caller credits the product and debits the feed.
    pub fn feed(&mut self) -> ItemName {
        self.hunger = 0;
        self.kind.product.clone()
    }

    /// One day passes.
    pub const fn pass_day(&mut self) {
        self.hunger = self.hunger.saturating_add(1);
    }

    /// Derived hunger status for displays.
    pub const fn hunger_state(&self) -> HungerState {
        match self.hunger {
            0 => HungerState::Content,
            days => HungerState::Hungry { days },
        }
    }
}

// ---------------------------------------------------------------------------
// HungerState
// ---------------------------------------------------------------------------

/// How a unit is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HungerState {
    /// Fed today or never hungry yet.
    Content,
    /// Not fed for `days` day-advances.
    Hungry {
        /// Days since the last feed.
        days: u32,
    },
}

impl fmt::Display for HungerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Content => f.write_str("元気"),
            Self::Hungry { days } => write!(f, "空腹 {days}日目"),
        }
    }
}

// ---------------------------------------------------------------------------
// Feeding the herd
// ---------------------------------------------------------------------------

/// One unit that was fed during [`feed_all`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FedUnit {
    /// Position of the unit in the herd.
    pub index: usize,
    /// The animal's type name.
    pub name: String,
    /// The product credited.
    pub product: ItemName,
}

/// Result of feeding the herd.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeedReport {
    /// Units fed, in herd order.
    pub fed: Vec<FedUnit>,
}

impl FeedReport {
    /// Number of units fed.
    pub fn fed_count(&self) -> usize {
        self.fed.len()
    }

    /// Whether nobody was fed.
    pub fn is_empty(&self) -> bool {
        self.fed.is_empty()
    }
}

/// Feed the herd in declaration order while feed lasts.
///
/// For each unit: if the feed balance is positive, credit one unit of the
/// product, debit one feed, and reset the unit's hunger. Stops as soon as
/// the feed balance reaches zero. Feed never goes negative.
///
/// # Errors
///
/// Returns [`WorldError::Ledger`] if a product is not a known item. Units
/// fed before the failing one keep their updates.
pub fn feed_all(
    units: &mut [LivestockUnit],
    ledger: &mut Inventory,
    feed_item: &ItemName,
) -> Result<FeedReport, WorldError> {
    let mut report = FeedReport::default();
    for (index, unit) in units.iter_mut().enumerate() {
        if ledger.balance(feed_item.as_str()) == 0 {
            break;
        }
        ledger.credit(unit.kind.product.as_str(), 1)?;
        ledger.debit(feed_item.as_str(), 1)?;
        let product = unit.feed();
        debug!(index, animal = %unit.kind.name, product = %product, "fed");
        report.fed.push(FedUnit {
            index,
            name: unit.kind.name.clone(),
            product,
        });
    }
    Ok(report)
}

/// Advance every unit's hunger by one day.
pub fn pass_day(units: &mut [LivestockUnit]) {
    for unit in units {
        unit.pass_day();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
