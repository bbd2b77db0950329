//! Core definition structs for the Farmstead simulation.
//!
//! Covers [`ItemName`], [`CropType`], [`LivestockType`], and [`GridPos`].
//! Everything here is immutable once the game starts; mutable per-instance
//! state lives in `farmstead-world`.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ItemName
// ---------------------------------------------------------------------------

/// The name of an inventory item (a crop, a livestock product, or feed).
///
/// Serialized transparently as a plain string so configuration files can
/// write `にんじん` rather than a wrapped object.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    /// Create an item name from anything string-like.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for ItemName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// CropType
// ---------------------------------------------------------------------------

/// A plantable crop: its name doubles as the item credited on harvest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CropType {
    /// Crop name, also the inventory item it yields.
    pub name: ItemName,
    /// Days that must elapse after planting before the crop is ready.
    pub grow_days: u32,
}

impl CropType {
    /// Build a crop type.
    pub fn new(name: impl Into<ItemName>, grow_days: u32) -> Self {
        Self {
            name: name.into(),
            grow_days,
        }
    }
}

// ---------------------------------------------------------------------------
// LivestockType
// ---------------------------------------------------------------------------

/// A kind of livestock and the good it produces when fed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LivestockType {
    /// Display name of the animal.
    pub name: String,
    /// Item credited each time a unit of this type is fed.
    pub product: ItemName,
}

impl LivestockType {
    /// Build a livestock type.
    pub fn new(name: impl Into<String>, product: impl Into<ItemName>) -> Self {
        Self {
            name: name.into(),
            product: product.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// GridPos
// ---------------------------------------------------------------------------

/// A cell on the farm grid. `(0, 0)` is the top-left corner.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct GridPos {
    /// Column, growing to the right.
    pub x: u32,
    /// Row, growing downwards.
    pub y: u32,
}

impl GridPos {
    /// Create a grid position.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl core::fmt::Display for GridPos {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
