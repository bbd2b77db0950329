//! The game loop.
//!
//! [`run`] drives a [`Farm`] from day 1 until the goal is met or the day
//! limit passes. Player choices come from a [`Prompter`]; everything the
//! player should see goes to a [`Reporter`] as a [`FarmEvent`] or a
//! [`FarmSnapshot`]. The loop itself does no I/O.
//!
//! # Turn structure
//!
//! Each iteration of the inner loop is one turn:
//!
//! 1. Report the remaining actions.
//! 2. Ask for an action (menu or grid list).
//! 3. Resolve it through the [`Interaction`] for that action.
//! 4. Charge the budget for performed actions and report the outcome.
//! 5. Check the goal.
//!
//! When the budget hits zero the day closes: livestock get hungrier and the
//! day counter advances.

use tracing::{debug, info, warn};

use farmstead_types::GameMode;

use crate::decision::{PromptError, Prompter};
use crate::farm::{ActionOutcome, Farm, FarmError, GameOutcome, Resolution};
use crate::interaction::{GridInteraction, Interaction, MenuInteraction};
use crate::snapshot::FarmSnapshot;

/// Question shown with the action list.
pub const ACTION_PROMPT: &str = "行動を選んでください:";

/// Question shown with the crop list.
pub const CROP_PROMPT: &str = "植える作物を選んでください:";

/// Action list in the menu variant.
pub const MENU_ACTIONS: [&str; 5] = [
    "作物を植える",
    "作物を収穫する",
    "家畜にエサをあげる",
    "ステータス確認",
    "行動を終了する",
];

/// Action list in the grid variant.
pub const GRID_ACTIONS: [&str; 4] = ["移動する", "ここで作業する", "ステータス確認", "行動を終了する"];

/// Errors that end a session early.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The prompter failed or ran out of input.
    #[error("prompt failed: {source}")]
    Prompt {
        /// The underlying prompt error.
        #[from]
        source: PromptError,
    },

    /// A farm operation failed.
    #[error("farm error: {source}")]
    Farm {
        /// The underlying farm error.
        #[from]
        source: FarmError,
    },

    /// The prompter returned an index outside the offered list.
    #[error("choice {index} is outside a list of {len}")]
    InvalidChoice {
        /// The returned index.
        index: usize,
        /// Number of choices offered.
        len: usize,
    },
}

/// Something the player should be told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FarmEvent {
    /// A turn is about to be prompted.
    TurnStarted {
        /// Current day.
        day: u32,
        /// Actions left today.
        actions_left: u32,
    },
    /// An action was attempted.
    Action(ActionOutcome),
    /// A day closed.
    DayEnded {
        /// The day now starting.
        next_day: u32,
    },
    /// The run is over.
    GameOver(GameOutcome),
}

/// Sink for everything the session shows the player.
pub trait Reporter {
    /// Announce an event.
    fn event(&mut self, event: &FarmEvent);

    /// Show the status screen.
    fn status(&mut self, snapshot: &FarmSnapshot);
}

/// A reporter that keeps everything it is told, for tests and replays.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    /// Events in order.
    pub events: Vec<FarmEvent>,
    /// Status screens in order.
    pub statuses: Vec<FarmSnapshot>,
}

impl RecordingReporter {
    /// Outcomes of all attempted actions, in order.
    pub fn outcomes(&self) -> Vec<&ActionOutcome> {
        self.events
            .iter()
            .filter_map(|event| match event {
                FarmEvent::Action(outcome) => Some(outcome),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn event(&mut self, event: &FarmEvent) {
        self.events.push(event.clone());
    }

    fn status(&mut self, snapshot: &FarmSnapshot) {
        self.statuses.push(snapshot.clone());
    }
}

/// What a single turn produced.
enum Turn {
    /// The player asked for the status screen.
    Status,
    /// The player ended the day.
    EndTurn,
    /// The player attempted an action.
    Acted(ActionOutcome),
}

/// Play `farm` to the end.
///
/// # Errors
///
/// Returns [`SessionError`] if the prompter fails or runs out of input, or
/// a farm operation fails (for example harvesting an unready plot, which
/// the menus never offer).
pub fn run(
    farm: &mut Farm,
    prompter: &mut dyn Prompter,
    reporter: &mut dyn Reporter,
) -> Result<GameOutcome, SessionError> {
    info!(
        mode = ?farm.mode(),
        day_limit = farm.scheduler().day_limit(),
        "session started"
    );

    while farm.scheduler().is_active() {
        farm.start_day();
        while !farm.scheduler().is_day_over() {
            reporter.event(&FarmEvent::TurnStarted {
                day: farm.day(),
                actions_left: farm.scheduler().actions_left(),
            });

            let turn = take_turn(farm, prompter).inspect_err(|e| {
                warn!(error = %e, day = farm.day(), "turn failed");
            })?;
            match turn {
                Turn::Status => reporter.status(&farm.snapshot()),
                Turn::EndTurn => farm.end_turn(),
                Turn::Acted(outcome) => {
                    farm.record(&outcome);
                    debug!(?outcome, actions_left = farm.scheduler().actions_left(), "action done");
                    reporter.event(&FarmEvent::Action(outcome));
                }
            }

            if farm.goal_met() {
                let outcome = GameOutcome::GoalMet { day: farm.day() };
                info!(day = farm.day(), "goal met");
                reporter.event(&FarmEvent::GameOver(outcome));
                return Ok(outcome);
            }
        }
        let next_day = farm.end_day()?;
        reporter.event(&FarmEvent::DayEnded { next_day });
    }

    let outcome = farm.final_outcome();
    info!(?outcome, "session finished");
    reporter.event(&FarmEvent::GameOver(outcome));
    if outcome == GameOutcome::TimeUp {
        reporter.status(&farm.snapshot());
    }
    Ok(outcome)
}

fn take_turn(farm: &mut Farm, prompter: &mut dyn Prompter) -> Result<Turn, SessionError> {
    match farm.mode() {
        GameMode::Menu => menu_turn(farm, prompter),
        GameMode::Grid => grid_turn(farm, prompter),
    }
}

fn menu_turn(farm: &mut Farm, prompter: &mut dyn Prompter) -> Result<Turn, SessionError> {
    let choice = prompter.choose_one(ACTION_PROMPT, &labels(&MENU_ACTIONS))?;
    let intent = match choice {
        0 => MenuInteraction::Planting,
        1 => MenuInteraction::Harvesting,
        2 => MenuInteraction::Feeding,
        3 => return Ok(Turn::Status),
        4 => return Ok(Turn::EndTurn),
        index => {
            return Err(SessionError::InvalidChoice {
                index,
                len: MENU_ACTIONS.len(),
            });
        }
    };
    work(farm, prompter, &intent).map(Turn::Acted)
}

fn grid_turn(farm: &mut Farm, prompter: &mut dyn Prompter) -> Result<Turn, SessionError> {
    let choice = prompter.choose_one(ACTION_PROMPT, &labels(&GRID_ACTIONS))?;
    match choice {
        0 => {
            let direction = prompter.choose_direction()?;
            Ok(Turn::Acted(farm.move_player(direction)?))
        }
        1 => work(farm, prompter, &GridInteraction).map(Turn::Acted),
        2 => Ok(Turn::Status),
        3 => Ok(Turn::EndTurn),
        index => Err(SessionError::InvalidChoice {
            index,
            len: GRID_ACTIONS.len(),
        }),
    }
}

/// Pick a target through `interaction`, resolve it, and apply the result.
fn work(
    farm: &mut Farm,
    prompter: &mut dyn Prompter,
    interaction: &dyn Interaction,
) -> Result<ActionOutcome, SessionError> {
    let targets = interaction.interactable(farm);
    let Some(&first) = targets.first() else {
        return Ok(ActionOutcome::Refused(interaction.when_empty()));
    };

    let early_crop = if interaction.crop_first() {
        Some(choose_crop(farm, prompter)?)
    } else {
        None
    };

    let target = if interaction.selects_target() {
        let names: Vec<String> = targets
            .iter()
            .map(|&t| interaction.target_label(farm, t))
            .collect();
        let index = prompter.choose_one(interaction.selection_prompt(), &names)?;
        *targets.get(index).ok_or(SessionError::InvalidChoice {
            index,
            len: targets.len(),
        })?
    } else {
        first
    };

    let outcome = match interaction.resolve(farm, target)? {
        Resolution::Plant { plot } => {
            let crop = match early_crop {
                Some(crop) => crop,
                None => choose_crop(farm, prompter)?,
            };
            farm.plant(plot, crop)?
        }
        Resolution::Harvest { plot } => farm.harvest(plot)?,
        Resolution::FeedAll => farm.feed_all()?,
        Resolution::Refused(refusal) => ActionOutcome::Refused(refusal),
    };
    Ok(outcome)
}

fn choose_crop(farm: &Farm, prompter: &mut dyn Prompter) -> Result<usize, SessionError> {
    let names: Vec<String> = farm
        .catalog()
        .crops()
        .iter()
        .map(|crop| crop.name.to_string())
        .collect();
    let index = prompter.choose_one(CROP_PROMPT, &names)?;
    if index >= names.len() {
        return Err(SessionError::InvalidChoice {
            index,
            len: names.len(),
        });
    }
    Ok(index)
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|&s| s.to_owned()).collect()
}
