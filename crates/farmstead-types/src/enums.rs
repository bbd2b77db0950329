//! Enumeration types for the Farmstead simulation.

use serde::{Deserialize, Serialize};

/// One of the four unit moves on the farm grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Towards column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl Direction {
    /// All directions in menu order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Japanese label shown in direction menus.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "上",
            Self::Down => "下",
            Self::Left => "左",
            Self::Right => "右",
        }
    }
}

/// Which interaction model the player uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Resources are picked directly from numbered lists.
    #[default]
    Menu,
    /// The player walks a grid and works whatever is underfoot.
    Grid,
}

/// Something on the farm the player can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Target {
    /// A field plot, by its 0-based index in declaration order.
    Plot(usize),
    /// The barn, where the whole herd is fed.
    Barn,
}
