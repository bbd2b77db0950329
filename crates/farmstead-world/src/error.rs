//! Error types for the `farmstead-world` crate.
//!
//! All fallible operations in this crate return [`WorldError`] through the
//! standard [`Result`] type alias.

use farmstead_ledger::LedgerError;

/// Errors that can occur while mutating plots, livestock, or the grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// Harvest was attempted on an empty or still-growing plot.
    #[error("plot is not ready for harvest")]
    NotReady,

    /// Planting was attempted on a plot that already holds a crop.
    #[error("plot is already planted with {crop}")]
    PlotOccupied {
        /// The crop already in the ground.
        crop: farmstead_types::ItemName,
    },

    /// A plot index was outside the field list.
    #[error("plot not found: {0}")]
    PlotNotFound(usize),

    /// A herd entry names a livestock type missing from the catalog.
    #[error("unknown livestock type: {0}")]
    UnknownLivestock(String),

    /// The grid layout is inconsistent.
    #[error("invalid grid: {reason}")]
    InvalidGrid {
        /// Explanation of what is wrong with the layout.
        reason: String,
    },

    /// A ledger operation failed.
    #[error("ledger error: {source}")]
    Ledger {
        /// The underlying ledger error.
        #[from]
        source: LedgerError,
    },
}
