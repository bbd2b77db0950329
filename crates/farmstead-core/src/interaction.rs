//! Interaction capability: which targets an action can apply to.
//!
//! Both game variants share the same resolution rules ([`Farm::resolve`]);
//! they differ only in how a target is reached. The menu variant lists
//! every eligible plot for the chosen intent, while the grid variant offers
//! exactly the cell under the player. The session works through the
//! [`Interaction`] trait and never branches on the variant itself.

use farmstead_types::Target;
use farmstead_world::FieldPlot;

use crate::farm::{Farm, FarmError, Refusal, Resolution};

/// How the player reaches something to work on.
pub trait Interaction {
    /// Targets the player may pick from right now.
    fn interactable(&self, farm: &Farm) -> Vec<Target>;

    /// Refusal when [`Interaction::interactable`] is empty.
    fn when_empty(&self) -> Refusal;

    /// Whether the player picks among several targets. When `false` the
    /// first target is used.
    fn selects_target(&self) -> bool {
        false
    }

    /// Whether the crop is chosen before the plot.
    fn crop_first(&self) -> bool {
        false
    }

    /// Question shown when the player picks a target.
    fn selection_prompt(&self) -> &'static str {
        ""
    }

    /// Decide what working `target` does.
    ///
    /// # Errors
    ///
    /// Returns [`FarmError`] if the target does not exist.
    fn resolve(&self, farm: &Farm, target: Target) -> Result<Resolution, FarmError> {
        farm.resolve(target)
    }

    /// Label for `target` in a selection list: `畑 N` for an empty plot,
    /// `畑 N: crop` for an occupied one.
    fn target_label(&self, farm: &Farm, target: Target) -> String {
        match target {
            Target::Plot(index) => {
                let number = index.saturating_add(1);
                match farm.fields().get(index).and_then(FieldPlot::crop) {
                    Some(crop) => format!("畑 {number}: {}", crop.name),
                    None => format!("畑 {number}"),
                }
            }
            Target::Barn => "家畜小屋".to_owned(),
        }
    }
}

/// Menu variant intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInteraction {
    /// Plant in an empty plot.
    Planting,
    /// Harvest a ready plot.
    Harvesting,
    /// Feed the herd.
    Feeding,
}

impl Interaction for MenuInteraction {
    fn interactable(&self, farm: &Farm) -> Vec<Target> {
        match self {
            Self::Planting => farm.empty_plots().into_iter().map(Target::Plot).collect(),
            Self::Harvesting => farm.ready_plots().into_iter().map(Target::Plot).collect(),
            Self::Feeding => vec![Target::Barn],
        }
    }

    fn when_empty(&self) -> Refusal {
        match self {
            Self::Planting => Refusal::NoEmptyPlots,
            Self::Harvesting => Refusal::NoReadyPlots,
            Self::Feeding => Refusal::InsufficientFeed,
        }
    }

    fn selects_target(&self) -> bool {
        matches!(self, Self::Planting | Self::Harvesting)
    }

    fn crop_first(&self) -> bool {
        matches!(self, Self::Planting)
    }

    fn selection_prompt(&self) -> &'static str {
        match self {
            Self::Planting => "植える場所を選んでください:",
            Self::Harvesting => "収穫する作物を選んでください:",
            Self::Feeding => "",
        }
    }
}

/// Grid variant: whatever is under the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridInteraction;

impl Interaction for GridInteraction {
    fn interactable(&self, farm: &Farm) -> Vec<Target> {
        farm.grid()
            .and_then(farmstead_world::FarmGrid::target_here)
            .into_iter()
            .collect()
    }

    fn when_empty(&self) -> Refusal {
        Refusal::NoActionHere
    }
}
