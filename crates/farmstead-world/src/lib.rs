//! Field plots, livestock, and the farm grid for the Farmstead simulation.
//!
//! This crate models the mutable, per-instance side of the farm: plots
//! that grow crops over days, animals that get hungry and produce goods
//! when fed, and the bounded grid the player walks in the spatial variant.
//!
//! # Modules
//!
//! - [`error`] -- Error types for plot, herd, and grid operations.
//! - [`farming`] -- [`FieldPlot`] growth state, planting, readiness, and
//!   harvest into the ledger.
//! - [`livestock`] -- [`LivestockUnit`] hunger and [`feed_all`] production.
//! - [`grid`] -- [`FarmGrid`] clamped movement and position lookups.
//! - [`starting_farm`] -- Default catalog, herd, goal, and grid layout.

pub mod error;
pub mod farming;
pub mod grid;
pub mod livestock;
pub mod starting_farm;

// Re-export primary types at crate root.
pub use error::WorldError;
pub use farming::{FieldPlot, PlotStatus, empty_plots, ready_plots};
pub use grid::{Cell, FarmGrid};
pub use livestock::{FedUnit, FeedReport, HungerState, LivestockUnit, feed_all};
pub use starting_farm::{build_herd, starting_catalog};
