//! Shared type definitions for the Farmstead simulation.
//!
//! This crate is the single source of truth for the immutable definitions
//! used across the Farmstead workspace: item names, crop and livestock
//! types, grid positions, and the small enumerations that flow between the
//! engine and its console collaborators.
//!
//! # Modules
//!
//! - [`catalog`] -- The [`Catalog`] of crop and livestock types plus the
//!   feed item, with the closed item key set derived from it.
//! - [`enums`] -- Enumeration types (directions, game modes, targets)
//! - [`structs`] -- Item names, catalog entries, and grid positions

pub mod catalog;
pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use catalog::{Catalog, CatalogError};
pub use enums::{Direction, GameMode, Target};
pub use structs::{CropType, GridPos, ItemName, LivestockType};
