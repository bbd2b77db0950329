//! Inventory ledger and goal thresholds for the Farmstead simulation.
//!
//! Every item the player owns is tracked through this crate. Balances are
//! never negative, and the set of items is closed: it is fixed from the
//! [`Catalog`] when the game starts, so a typo in a goal or a starting
//! balance is rejected before the first day begins.
//!
//! # Architecture
//!
//! - [`inventory`] -- The [`Inventory`] struct: per-item balances with
//!   checked credit and debit.
//! - [`goal`] -- The [`Goal`] struct: item thresholds and the win check.
//!
//! # Usage
//!
//! ```
//! use farmstead_ledger::{Goal, Inventory};
//! use farmstead_types::ItemName;
//!
//! let keys = vec![ItemName::new("たまご"), ItemName::new("エサ")];
//! let mut inventory = Inventory::new(keys);
//! let goal = Goal::new([(ItemName::new("たまご"), 1)], &inventory).ok();
//!
//! inventory.credit("たまご", 1).ok();
//! assert!(goal.is_some_and(|g| g.is_met(&inventory)));
//! ```
//!
//! [`Catalog`]: farmstead_types::Catalog

pub mod goal;
pub mod inventory;

// Re-export primary types at crate root.
pub use goal::{Goal, GoalLine};
pub use inventory::Inventory;

use farmstead_types::ItemName;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur when touching ledger balances.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The item is not part of this ledger's key set.
    #[error("unknown item: {0}")]
    UnknownItem(ItemName),

    /// A debit would drive the balance below zero.
    #[error("insufficient {item}: wanted {requested} but only have {available}")]
    InsufficientBalance {
        /// The item being debited.
        item: ItemName,
        /// The quantity the caller attempted to remove.
        requested: u32,
        /// The quantity actually held.
        available: u32,
    },

    /// A credit would overflow the balance counter.
    #[error("balance overflow for {0}")]
    Overflow(ItemName),
}
