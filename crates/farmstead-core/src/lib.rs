//! Day scheduler, action resolution, and the game loop for the Farmstead simulation.
//!
//! This crate owns the rules: how a day's action budget is spent, what
//! working a plot or the barn does, when the game is won or lost, and the
//! loop that ties prompting and reporting together.
//!
//! # Modules
//!
//! - [`clock`] -- [`DayScheduler`]: the day counter and per-day action budget.
//! - [`config`] -- Configuration loading from `farmstead-config.yaml` into
//!   strongly-typed structs.
//! - [`decision`] -- [`Prompter`] trait and [`ScriptedPrompter`].
//! - [`farm`] -- [`Farm`]: all game state and the actions that change it.
//! - [`interaction`] -- [`Interaction`] capability for the menu and grid
//!   variants.
//! - [`session`] -- The game loop and the [`Reporter`] trait.
//! - [`snapshot`] -- [`FarmSnapshot`] for the status screen.
//!
//! [`DayScheduler`]: clock::DayScheduler
//! [`Prompter`]: decision::Prompter
//! [`ScriptedPrompter`]: decision::ScriptedPrompter
//! [`Farm`]: farm::Farm
//! [`Interaction`]: interaction::Interaction
//! [`Reporter`]: session::Reporter
//! [`FarmSnapshot`]: snapshot::FarmSnapshot

pub mod clock;
pub mod config;
pub mod decision;
pub mod farm;
pub mod interaction;
pub mod session;
pub mod snapshot;

pub use farm::{ActionOutcome, ActionReport, Farm, FarmError, GameOutcome, Refusal};
pub use session::{FarmEvent, Reporter, SessionError, run};
