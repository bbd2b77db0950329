//! Day scheduler: the day counter and the per-day action budget.
//!
//! The scheduler is the single source of truth for time on the farm. A run
//! is active while `day <= day_limit`; within a day the player has
//! `actions_per_day` actions, and once they are spent the day ends.
//!
//! # Design Principles
//!
//! - All counter updates use checked or saturating arithmetic.
//! - The scheduler never starts a day past the limit: [`DayScheduler::is_active`]
//!   is the loop guard, checked before every [`DayScheduler::start_day`].

/// Errors that can occur during scheduler operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// Day counter would overflow.
    #[error("day counter overflow: cannot advance beyond u32::MAX")]
    DayOverflow,

    /// Invalid scheduler configuration (e.g. zero actions per day).
    #[error("invalid scheduler configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

/// Day and action bookkeeping for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayScheduler {
    /// Current day, starting at 1.
    day: u32,
    /// Last playable day.
    day_limit: u32,
    /// Actions granted at the start of each day.
    actions_per_day: u32,
    /// Actions left today.
    actions_left: u32,
}

impl DayScheduler {
    /// Create a scheduler on day 1 with a full budget.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if either limit is zero.
    pub fn new(day_limit: u32, actions_per_day: u32) -> Result<Self, ClockError> {
        if day_limit == 0 {
            return Err(ClockError::InvalidConfig {
                reason: "day_limit must be at least 1".to_owned(),
            });
        }
        if actions_per_day == 0 {
            return Err(ClockError::InvalidConfig {
                reason: "actions_per_day must be at least 1".to_owned(),
            });
        }
        Ok(Self {
            day: 1,
            day_limit,
            actions_per_day,
            actions_left: actions_per_day,
        })
    }

    /// Return the current day.
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Return the last playable day.
    pub const fn day_limit(&self) -> u32 {
        self.day_limit
    }

    /// Return the per-day action budget.
    pub const fn actions_per_day(&self) -> u32 {
        self.actions_per_day
    }

    /// Return the actions left today.
    pub const fn actions_left(&self) -> u32 {
        self.actions_left
    }

    /// Whether the current day is within the limit.
    pub const fn is_active(&self) -> bool {
        self.day <= self.day_limit
    }

    /// Whether today's budget is spent.
    pub const fn is_day_over(&self) -> bool {
        self.actions_left == 0
    }

    /// Refill today's budget.
    pub const fn start_day(&mut self) {
        self.actions_left = self.actions_per_day;
    }

    /// Spend one action. Returns `true` when the budget is now exhausted.
    pub const fn consume_action(&mut self) -> bool {
        self.actions_left = self.actions_left.saturating_sub(1);
        self.actions_left == 0
    }

    /// Give up the rest of today's actions.
    pub const fn end_turn(&mut self) {
        self.actions_left = 0;
    }

    /// Move to the next day. Returns the new day number.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::DayOverflow`] if the counter would exceed
    /// `u32::MAX`.
    pub fn advance_day(&mut self) -> Result<u32, ClockError> {
        self.day = self.day.checked_add(1).ok_or(ClockError::DayOverflow)?;
        Ok(self.day)
    }
}
