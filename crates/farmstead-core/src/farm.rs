//! The farm: all game state and the actions that change it.
//!
//! [`Farm`] bundles the scheduler, fields, herd, inventory, goal, and (in the
//! grid variant) the farm grid. It is created once from a [`FarmConfig`] and
//! mutated in place for the whole run; every engine function takes it by
//! `&mut`, so there is no hidden global state.
//!
//! Actions return an [`ActionOutcome`]. A [`Refusal`] means nothing changed
//! and no action was spent; [`ActionOutcome::Performed`] means state changed
//! and [`Farm::record`] charges the day's budget.

use serde::Serialize;
use tracing::{debug, info};

use farmstead_ledger::{Goal, Inventory, LedgerError};
use farmstead_types::{Catalog, CatalogError, Direction, GameMode, GridPos, ItemName, Target};
use farmstead_world::{
    FarmGrid, FeedReport, FieldPlot, LivestockUnit, PlotStatus, WorldError, build_herd,
    empty_plots, feed_all, livestock, ready_plots,
};

use crate::clock::{ClockError, DayScheduler};
use crate::config::FarmConfig;

/// Errors that can occur while building or mutating the farm.
#[derive(Debug, thiserror::Error)]
pub enum FarmError {
    /// The catalog is invalid.
    #[error("catalog error: {source}")]
    Catalog {
        /// The underlying catalog error.
        #[from]
        source: CatalogError,
    },

    /// A scheduler operation failed.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },

    /// A ledger operation failed.
    #[error("ledger error: {source}")]
    Ledger {
        /// The underlying ledger error.
        #[from]
        source: LedgerError,
    },

    /// A plot, herd, or grid operation failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },

    /// A crop index was outside the catalog.
    #[error("unknown crop index: {0}")]
    UnknownCrop(usize),

    /// A grid action was attempted on a menu-variant farm.
    #[error("this farm has no grid")]
    GridUnavailable,

    /// The configuration describes a farm that cannot be played.
    #[error("invalid farm setup: {reason}")]
    InvalidSetup {
        /// Explanation of what is wrong.
        reason: String,
    },
}

/// Why an action was turned down. Nothing changes and no action is spent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Refusal {
    /// Planting with every plot occupied.
    NoEmptyPlots,
    /// Harvesting with nothing ready.
    NoReadyPlots,
    /// Feeding with no feed in stock.
    InsufficientFeed,
    /// Feeding with stock but no animal to feed.
    NoEligibleTargets,
    /// Working a plot whose crop is still growing.
    StillGrowing {
        /// The crop.
        crop: ItemName,
        /// Days until ready, at least 1.
        remaining_days: u32,
    },
    /// Working a grid cell with nothing on it.
    NoActionHere,
}

/// What a performed action did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ActionReport {
    /// A crop went into a plot.
    Planted {
        /// Plot index.
        plot: usize,
        /// The crop planted.
        crop: ItemName,
    },
    /// A ready crop was collected.
    Harvested {
        /// Plot index.
        plot: usize,
        /// The item credited.
        crop: ItemName,
    },
    /// Part or all of the herd was fed.
    Fed(FeedReport),
    /// The player stepped on the grid.
    Moved {
        /// New position.
        to: GridPos,
        /// What is under the player now.
        target: Option<Target>,
    },
}

/// Result of attempting an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ActionOutcome {
    /// State changed.
    Performed(ActionReport),
    /// Nothing changed.
    Refused(Refusal),
}

/// What working a target would do, before doing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The plot is empty: plant (the crop is still to be chosen).
    Plant {
        /// Plot index.
        plot: usize,
    },
    /// The plot is ready: harvest it.
    Harvest {
        /// Plot index.
        plot: usize,
    },
    /// The barn with feed in stock: feed the herd.
    FeedAll,
    /// Nothing can be done.
    Refused(Refusal),
}

/// How the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameOutcome {
    /// Every threshold was reached mid-run.
    GoalMet {
        /// The day it happened.
        day: u32,
    },
    /// Every threshold was reached exactly as the last day ran out.
    GoalMetAtDeadline,
    /// The day limit passed with the goal unmet.
    TimeUp,
}

impl GameOutcome {
    /// Whether the player won.
    pub const fn is_success(self) -> bool {
        !matches!(self, Self::TimeUp)
    }
}

/// The whole game state.
#[derive(Debug, Clone)]
pub struct Farm {
    /// Interaction model.
    mode: GameMode,
    /// Crop and livestock definitions.
    catalog: Catalog,
    /// Day and action budget.
    scheduler: DayScheduler,
    /// Field plots in declaration order.
    fields: Vec<FieldPlot>,
    /// The herd in feeding order.
    livestock: Vec<LivestockUnit>,
    /// Item balances.
    inventory: Inventory,
    /// Win thresholds.
    goal: Goal,
    /// Spatial layout, grid variant only.
    grid: Option<FarmGrid>,
    /// Whether grid steps cost an action.
    steps_consume_actions: bool,
}

impl Farm {
    /// Build a farm from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FarmError`] if any part of the configuration is invalid:
    /// the catalog, the limits, an unknown herd member, a starting balance
    /// or goal item outside the catalog, no field plots, or (grid variant)
    /// an inconsistent grid layout.
    pub fn from_config(config: &FarmConfig) -> Result<Self, FarmError> {
        let catalog = Catalog::new(
            config.catalog.crops.clone(),
            config.catalog.livestock_types.clone(),
            config.catalog.feed_item.clone(),
        )?;
        let scheduler = DayScheduler::new(config.game.day_limit, config.game.actions_per_day)?;
        let inventory = Inventory::with_balances(catalog.item_keys(), &config.inventory)?;
        let goal = Goal::new(
            config.goal.iter().map(|(item, need)| (item.clone(), *need)),
            &inventory,
        )?;
        let livestock = build_herd(&catalog, &config.herd)?;

        let grid = match config.game.mode {
            GameMode::Menu => None,
            GameMode::Grid => Some(FarmGrid::new(
                config.grid.width,
                config.grid.height,
                config.grid.start,
                config.grid.barn,
                config.grid.fields.clone(),
            )?),
        };
        let field_count = grid
            .as_ref()
            .map_or(config.game.field_count, |g| g.fields().len());
        if field_count == 0 {
            return Err(FarmError::InvalidSetup {
                reason: "the farm needs at least one field plot".to_owned(),
            });
        }

        info!(
            mode = ?config.game.mode,
            day_limit = scheduler.day_limit(),
            actions_per_day = scheduler.actions_per_day(),
            fields = field_count,
            livestock = livestock.len(),
            "farm created"
        );

        Ok(Self {
            mode: config.game.mode,
            catalog,
            scheduler,
            fields: vec![FieldPlot::Empty; field_count],
            livestock,
            inventory,
            goal,
            grid,
            steps_consume_actions: config.grid.steps_consume_actions,
        })
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    /// Interaction model.
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// Crop and livestock definitions.
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Day and action budget.
    pub const fn scheduler(&self) -> &DayScheduler {
        &self.scheduler
    }

    /// Current day.
    pub const fn day(&self) -> u32 {
        self.scheduler.day()
    }

    /// Field plots in declaration order.
    pub fn fields(&self) -> &[FieldPlot] {
        &self.fields
    }

    /// The herd in feeding order.
    pub fn livestock(&self) -> &[LivestockUnit] {
        &self.livestock
    }

    /// Item balances.
    pub const fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Win thresholds.
    pub const fn goal(&self) -> &Goal {
        &self.goal
    }

    /// Spatial layout, grid variant only.
    pub const fn grid(&self) -> Option<&FarmGrid> {
        self.grid.as_ref()
    }

    /// Whether the goal is met right now.
    pub fn goal_met(&self) -> bool {
        self.goal.is_met(&self.inventory)
    }

    /// Indices of empty plots.
    pub fn empty_plots(&self) -> Vec<usize> {
        empty_plots(&self.fields)
    }

    /// Indices of plots ready today.
    pub fn ready_plots(&self) -> Vec<usize> {
        ready_plots(&self.fields, self.day())
    }

    /// Status of plot `index` today.
    pub fn plot_status(&self, index: usize) -> Option<PlotStatus> {
        self.fields.get(index).map(|plot| plot.status(self.day()))
    }

    // -------------------------------------------------------------------
    // Resolution
    // -------------------------------------------------------------------

    /// Decide what working `target` would do today.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::PlotNotFound`] for a plot index out of range.
    pub fn resolve(&self, target: Target) -> Result<Resolution, FarmError> {
        match target {
            Target::Plot(plot) => {
                let status = self
                    .plot_status(plot)
                    .ok_or(WorldError::PlotNotFound(plot))?;
                Ok(match status {
                    PlotStatus::Empty => Resolution::Plant { plot },
                    PlotStatus::Ready { .. } => Resolution::Harvest { plot },
                    PlotStatus::Growing {
                        crop,
                        remaining_days,
                    } => Resolution::Refused(Refusal::StillGrowing {
                        crop,
                        remaining_days,
                    }),
                })
            }
            Target::Barn => {
                if self.feed_stock() == 0 {
                    Ok(Resolution::Refused(Refusal::InsufficientFeed))
                } else {
                    Ok(Resolution::FeedAll)
                }
            }
        }
    }

    // -------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------

    /// Plant catalog crop `crop_index` in plot `plot`.
    ///
    /// # Errors
    ///
    /// Returns [`FarmError::UnknownCrop`], [`WorldError::PlotNotFound`], or
    /// [`WorldError::PlotOccupied`]. Callers offer only empty plots.
    pub fn plant(&mut self, plot: usize, crop_index: usize) -> Result<ActionOutcome, FarmError> {
        let crop = self
            .catalog
            .crop(crop_index)
            .cloned()
            .ok_or(FarmError::UnknownCrop(crop_index))?;
        let day = self.day();
        let field = self
            .fields
            .get_mut(plot)
            .ok_or(WorldError::PlotNotFound(plot))?;
        let name = crop.name.clone();
        field.plant(crop, day)?;
        Ok(ActionOutcome::Performed(ActionReport::Planted { plot, crop: name }))
    }

    /// Harvest plot `plot`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::NotReady`] if the plot is empty or still
    /// growing. Callers offer only ready plots, so this is a logic error.
    pub fn harvest(&mut self, plot: usize) -> Result<ActionOutcome, FarmError> {
        let day = self.day();
        let field = self
            .fields
            .get_mut(plot)
            .ok_or(WorldError::PlotNotFound(plot))?;
        let crop = field.harvest(day, &mut self.inventory)?;
        Ok(ActionOutcome::Performed(ActionReport::Harvested { plot, crop }))
    }

    /// Feed the herd while feed lasts.
    ///
    /// Refuses with [`Refusal::InsufficientFeed`] when there is no feed, and
    /// with [`Refusal::NoEligibleTargets`] when nobody could be fed.
    ///
    /// # Errors
    ///
    /// Returns [`FarmError::World`] if a product is not a known item.
    pub fn feed_all(&mut self) -> Result<ActionOutcome, FarmError> {
        if self.feed_stock() == 0 {
            return Ok(ActionOutcome::Refused(Refusal::InsufficientFeed));
        }
        let report = feed_all(
            &mut self.livestock,
            &mut self.inventory,
            self.catalog.feed_item(),
        )?;
        if report.is_empty() {
            return Ok(ActionOutcome::Refused(Refusal::NoEligibleTargets));
        }
        debug!(
            day = self.day(),
            fed = report.fed_count(),
            feed_left = self.feed_stock(),
            "herd fed"
        );
        Ok(ActionOutcome::Performed(ActionReport::Fed(report)))
    }

    /// Step the player one cell on the grid.
    ///
    /// # Errors
    ///
    /// Returns [`FarmError::GridUnavailable`] on a menu-variant farm.
    pub fn move_player(&mut self, direction: Direction) -> Result<ActionOutcome, FarmError> {
        let grid = self.grid.as_mut().ok_or(FarmError::GridUnavailable)?;
        let to = grid.move_player(direction);
        let target = grid.target_at(to);
        Ok(ActionOutcome::Performed(ActionReport::Moved { to, target }))
    }

    // -------------------------------------------------------------------
    // Budget and days
    // -------------------------------------------------------------------

    /// Whether `outcome` costs an action on this farm.
    pub const fn costs_action(&self, outcome: &ActionOutcome) -> bool {
        match outcome {
            ActionOutcome::Refused(_) => false,
            ActionOutcome::Performed(ActionReport::Moved { .. }) => self.steps_consume_actions,
            ActionOutcome::Performed(_) => true,
        }
    }

    /// Charge the day's budget for `outcome`. Returns `true` when the day's
    /// actions are now spent.
    pub fn record(&mut self, outcome: &ActionOutcome) -> bool {
        if self.costs_action(outcome) {
            self.scheduler.consume_action();
        }
        self.scheduler.is_day_over()
    }

    /// Refill today's action budget.
    pub fn start_day(&mut self) {
        self.scheduler.start_day();
        debug!(day = self.day(), actions = self.scheduler.actions_left(), "day started");
    }

    /// Give up the rest of today's actions.
    pub fn end_turn(&mut self) {
        self.scheduler.end_turn();
    }

    /// Close the day: every animal gets one day hungrier, then the day
    /// counter advances. Returns the new day.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::DayOverflow`] if the counter would overflow.
    pub fn end_day(&mut self) -> Result<u32, FarmError> {
        livestock::pass_day(&mut self.livestock);
        let next = self.scheduler.advance_day()?;
        info!(day = next, "day ended");
        Ok(next)
    }

    /// Outcome once the loop has run out of days.
    pub fn final_outcome(&self) -> GameOutcome {
        if self.goal_met() {
            GameOutcome::GoalMetAtDeadline
        } else {
            GameOutcome::TimeUp
        }
    }

    fn feed_stock(&self) -> u32 {
        self.inventory.balance(self.catalog.feed_item().as_str())
    }
}
