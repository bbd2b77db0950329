//! Field plot state tracking: planting, growth timers, and harvest readiness.
//!
//! A [`FieldPlot`] is either empty or holds exactly one crop together with
//! the day it was planted. Growth is never stored; readiness and remaining
//! days are derived from the current day on every query.

use core::fmt;

use serde::Serialize;
use tracing::debug;

use farmstead_ledger::Inventory;
use farmstead_types::{CropType, ItemName};

use crate::error::WorldError;

// ---------------------------------------------------------------------------
// FieldPlot
// ---------------------------------------------------------------------------

/// A single farmable slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum FieldPlot {
    /// Nothing is planted.
    #[default]
    Empty,
    /// A crop is growing (or waiting to be harvested).
    Occupied {
        /// What was planted.
        crop: CropType,
        /// The day it went into the ground.
        planted_day: u32,
    },
}

impl FieldPlot {
    /// Plant `crop` on `current_day`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::PlotOccupied`] if a crop is already planted.
    pub fn plant(&mut self, crop: CropType, current_day: u32) -> Result<(), WorldError> {
        if let Self::Occupied { crop: existing, .. } = self {
            return Err(WorldError::PlotOccupied {
                crop: existing.name.clone(),
            });
        }
        debug!(crop = %crop.name, day = current_day, "planted");
        *self = Self::Occupied {
            crop,
            planted_day: current_day,
        };
        Ok(())
    }

    /// Whether nothing is planted.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The crop in the ground, if any.
    pub const fn crop(&self) -> Option<&CropType> {
        match self {
            Self::Empty => None,
            Self::Occupied { crop, .. } => Some(crop),
        }
    }

    /// Whether the crop has grown for at least its growth duration.
    pub const fn is_ready(&self, current_day: u32) -> bool {
        match self {
            Self::Empty => false,
            Self::Occupied { crop, planted_day } => {
                current_day.saturating_sub(*planted_day) >= crop.grow_days
            }
        }
    }

    /// Days left until the crop is ready.
    ///
    /// `None` for an empty plot or a ready crop; otherwise always at least 1.
    pub const fn remaining_days(&self, current_day: u32) -> Option<u32> {
        match self {
            Self::Empty => None,
            Self::Occupied { crop, planted_day } => {
                let elapsed = current_day.saturating_sub(*planted_day);
                match crop.grow_days.checked_sub(elapsed) {
                    Some(0) | None => None,
                    Some(left) => Some(left),
                }
            }
        }
    }

    /// Harvest a ready crop: credit one unit to `ledger` and clear the plot.
    ///
    /// Returns the harvested item.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::NotReady`] for an empty or still-growing plot,
    /// or [`WorldError::Ledger`] if the crop is not a known item. The plot is
    /// unchanged on error.
    pub fn harvest(&mut self, current_day: u32, ledger: &mut Inventory) -> Result<ItemName, WorldError> {
        if !self.is_ready(current_day) {
            return Err(WorldError::NotReady);
        }
        let Self::Occupied { crop, .. } = &*self else {
            return Err(WorldError::NotReady);
        };
        let item = crop.name.clone();
        ledger.credit(item.as_str(), 1)?;
        *self = Self::Empty;
        debug!(crop = %item, day = current_day, "harvested");
        Ok(item)
    }

    /// Derived status for displays.
    pub fn status(&self, current_day: u32) -> PlotStatus {
        match self {
            Self::Empty => PlotStatus::Empty,
            Self::Occupied { crop, .. } => self.remaining_days(current_day).map_or_else(
                || PlotStatus::Ready {
                    crop: crop.name.clone(),
                },
                |remaining_days| PlotStatus::Growing {
                    crop: crop.name.clone(),
                    remaining_days,
                },
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// PlotStatus
// ---------------------------------------------------------------------------

/// What a plot looks like on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PlotStatus {
    /// Free for planting.
    Empty,
    /// Harvestable now.
    Ready {
        /// The crop.
        crop: ItemName,
    },
    /// Still growing.
    Growing {
        /// The crop.
        crop: ItemName,
        /// Days until ready, at least 1.
        remaining_days: u32,
    },
}

impl fmt::Display for PlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("空き"),
            Self::Ready { crop } => write!(f, "{crop} (収穫OK)"),
            Self::Growing {
                crop,
                remaining_days,
            } => write!(f, "{crop} (あと{remaining_days}日)"),
        }
    }
}

// ---------------------------------------------------------------------------
// Field queries
// ---------------------------------------------------------------------------

/// Indices of plots with nothing planted, in field order.
pub fn empty_plots(fields: &[FieldPlot]) -> Vec<usize> {
    fields
        .iter()
        .enumerate()
        .filter(|(_, plot)| plot.is_empty())
        .map(|(i, _)| i)
        .collect()
}

/// Indices of plots whose crop is ready on `current_day`, in field order.
pub fn ready_plots(fields: &[FieldPlot], current_day: u32) -> Vec<usize> {
    fields
        .iter()
        .enumerate()
        .filter(|(_, plot)| plot.is_ready(current_day))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ledger() -> Inventory {
        Inventory::new(["にんじん", "じゃがいも"].into_iter().map(ItemName::new))
    }

    fn potato() -> CropType {
        CropType::new("じゃがいも", 3)
    }

    #[test]
    fn readiness_boundary() {
        let mut plot = FieldPlot::Empty;
        plot.plant(potato(), 2).unwrap();

        assert!(!plot.is_ready(2));
        assert!(!plot.is_ready(3));
        assert!(!plot.is_ready(4));
        assert!(plot.is_ready(5));
        assert!(plot.is_ready(9));
    }

    #[test]
    fn empty_plot_is_never_ready() {
        let plot = FieldPlot::Empty;
        assert!(!plot.is_ready(0));
        assert!(!plot.is_ready(100));
        assert_eq!(plot.remaining_days(5), None);
    }

    #[test]
    fn remaining_days_counts_down_and_never_hits_zero() {
        let mut plot = FieldPlot::Empty;
        plot.plant(CropType::new("かぼちゃ", 4), 1).unwrap();

        let seen: Vec<Option<u32>> = (1..=6).map(|day| plot.remaining_days(day)).collect();
        assert_eq!(seen, vec![Some(4), Some(3), Some(2), Some(1), None, None]);
    }

    #[test]
    fn planting_occupied_plot_fails() {
        let mut plot = FieldPlot::Empty;
        plot.plant(potato(), 1).unwrap();
        let result = plot.plant(CropType::new("にんじん", 2), 1);
        assert_eq!(
            result,
            Err(WorldError::PlotOccupied {
                crop: ItemName::new("じゃがいも"),
            })
        );
        assert_eq!(plot.crop().map(|c| c.grow_days), Some(3));
    }

    #[test]
    fn harvest_credits_once_and_clears() {
        let mut plot = FieldPlot::Empty;
        let mut inv = ledger();
        plot.plant(CropType::new("にんじん", 2), 1).unwrap();

        let item = plot.harvest(3, &mut inv).unwrap();
        assert_eq!(item.as_str(), "にんじん");
        assert_eq!(inv.balance("にんじん"), 1);
        assert!(plot.is_empty());

        assert_eq!(plot.harvest(3, &mut inv), Err(WorldError::NotReady));
        assert_eq!(inv.balance("にんじん"), 1);
    }

    #[test]
    fn harvest_unready_plot_leaves_it_alone() {
        let mut plot = FieldPlot::Empty;
        let mut inv = ledger();
        plot.plant(potato(), 1).unwrap();

        assert_eq!(plot.harvest(2, &mut inv), Err(WorldError::NotReady));
        assert!(!plot.is_empty());
        assert_eq!(inv.balance("じゃがいも"), 0);
    }

    #[test]
    fn harvest_of_unknown_item_keeps_crop() {
        let mut plot = FieldPlot::Empty;
        let mut inv = Inventory::new(Vec::new());
        plot.plant(potato(), 1).unwrap();

        let result = plot.harvest(4, &mut inv);
        assert!(matches!(result, Err(WorldError::Ledger { .. })));
        assert!(plot.is_ready(4));
    }

    #[test]
    fn status_strings() {
        let mut plot = FieldPlot::Empty;
        assert_eq!(plot.status(1).to_string(), "空き");

        plot.plant(CropType::new("にんじん", 2), 1).unwrap();
        assert_eq!(plot.status(1).to_string(), "にんじん (あと2日)");
        assert_eq!(plot.status(2).to_string(), "にんじん (あと1日)");
        assert_eq!(plot.status(3).to_string(), "にんじん (収穫OK)");
    }

    #[test]
    fn field_queries() {
        let mut fields = vec![FieldPlot::Empty; 4];
        fields
            .get_mut(1)
            .unwrap()
            .plant(CropType::new("にんじん", 2), 1)
            .unwrap();
        fields.get_mut(3).unwrap().plant(potato(), 1).unwrap();

        assert_eq!(empty_plots(&fields), vec![0, 2]);
        assert_eq!(ready_plots(&fields, 2), Vec::<usize>::new());
        assert_eq!(ready_plots(&fields, 3), vec![1]);
        assert_eq!(ready_plots(&fields, 4), vec![1, 3]);
    }
}
