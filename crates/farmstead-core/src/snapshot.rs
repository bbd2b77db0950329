//! Read-only view of the farm for status display.
//!
//! A [`FarmSnapshot`] is everything the status screen shows, computed once
//! from a [`Farm`]. It is serializable, so a front end can render it as
//! text or ship it as JSON, and it never holds references into the farm.

use serde::Serialize;

use farmstead_ledger::GoalLine;
use farmstead_types::{GameMode, GridPos, ItemName};
use farmstead_world::{Cell, HungerState, PlotStatus};

use crate::farm::Farm;

/// Status of one plot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlotView {
    /// 1-based plot number.
    pub number: usize,
    /// Growth status today.
    pub status: PlotStatus,
}

/// Status of one animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LivestockView {
    /// 1-based animal number.
    pub number: usize,
    /// Livestock type name.
    pub name: String,
    /// Fed or hungry.
    pub hunger: HungerState,
}

/// The grid, cell by cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridView {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// Player position.
    pub player: GridPos,
    /// Rows top to bottom.
    pub rows: Vec<Vec<Cell>>,
}

/// Everything shown on the status screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FarmSnapshot {
    /// Interaction model.
    pub mode: GameMode,
    /// Current day.
    pub day: u32,
    /// Last playable day.
    pub day_limit: u32,
    /// Actions left today.
    pub actions_left: u32,
    /// Plots in order.
    pub plots: Vec<PlotView>,
    /// Animals in order.
    pub livestock: Vec<LivestockView>,
    /// Balances in display order.
    pub inventory: Vec<(ItemName, u32)>,
    /// Goal lines in display order.
    pub goal: Vec<GoalLine>,
    /// Grid layout, grid variant only.
    pub grid: Option<GridView>,
}

impl Farm {
    /// Capture the current state for display.
    pub fn snapshot(&self) -> FarmSnapshot {
        let day = self.day();
        let plots = self
            .fields()
            .iter()
            .enumerate()
            .map(|(i, plot)| PlotView {
                number: i.saturating_add(1),
                status: plot.status(day),
            })
            .collect();
        let livestock = self
            .livestock()
            .iter()
            .enumerate()
            .map(|(i, unit)| LivestockView {
                number: i.saturating_add(1),
                name: unit.kind().name.clone(),
                hunger: unit.hunger_state(),
            })
            .collect();
        let inventory = self
            .inventory()
            .iter()
            .map(|(item, amount)| (item.clone(), amount))
            .collect();
        let grid = self.grid().map(|grid| GridView {
            width: grid.width(),
            height: grid.height(),
            player: grid.player(),
            rows: grid.rows(),
        });

        FarmSnapshot {
            mode: self.mode(),
            day,
            day_limit: self.scheduler().day_limit(),
            actions_left: self.scheduler().actions_left(),
            plots,
            livestock,
            inventory,
            goal: self.goal().progress(self.inventory()),
            grid,
        }
    }
}
