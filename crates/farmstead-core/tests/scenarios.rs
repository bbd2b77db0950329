//! End-to-end scenarios driving [`run`] with scripted input.

#![allow(clippy::unwrap_used)]

use farmstead_core::config::FarmConfig;
use farmstead_core::decision::{ScriptedAnswer, ScriptedPrompter};
use farmstead_core::session::RecordingReporter;
use farmstead_core::{
    ActionOutcome, ActionReport, Farm, FarmEvent, GameOutcome, Refusal, SessionError, run,
};
use farmstead_types::{Direction, GameMode, GridPos, ItemName};
use farmstead_world::FarmGrid;

const PLANT: usize = 0;
const HARVEST: usize = 1;
const FEED: usize = 2;
const STATUS: usize = 3;
const END: usize = 4;

fn farm_from(yaml: &str) -> Farm {
    Farm::from_config(&FarmConfig::parse(yaml).unwrap()).unwrap()
}

#[test]
fn carrot_goal_is_met_on_day_three() {
    let mut farm = farm_from("goal:\n  にんじん: 1\n");
    let mut prompter = ScriptedPrompter::choices([
        PLANT, 0, 0, // day 1: carrot into plot 1
        END, // day 1 over
        END, // day 2 over
        HARVEST, 0, // day 3: harvest plot 1
    ]);
    let mut reporter = RecordingReporter::default();

    let outcome = run(&mut farm, &mut prompter, &mut reporter).unwrap();

    assert_eq!(outcome, GameOutcome::GoalMet { day: 3 });
    assert_eq!(prompter.remaining(), 0);
    assert_eq!(farm.inventory().balance("にんじん"), 1);
    assert_eq!(
        reporter.events.last(),
        Some(&FarmEvent::GameOver(GameOutcome::GoalMet { day: 3 }))
    );
}

#[test]
fn goal_met_on_the_last_action_of_the_last_day_wins() {
    let mut farm = farm_from("game:\n  day_limit: 3\ngoal:\n  にんじん: 1\n");
    let mut prompter = ScriptedPrompter::choices([
        PLANT, 0, 0, // day 1: carrot into plot 1
        END, // day 1 over
        END, // day 2 over
        FEED, // day 3, first action
        HARVEST, 0, // day 3, last action
    ]);
    let mut reporter = RecordingReporter::default();

    let outcome = run(&mut farm, &mut prompter, &mut reporter).unwrap();

    assert_eq!(outcome, GameOutcome::GoalMet { day: 3 });
    assert_eq!(farm.day(), 3);
    assert_eq!(farm.scheduler().actions_left(), 0);
    assert_eq!(prompter.remaining(), 0);
    assert!(reporter.statuses.is_empty());
    assert_eq!(
        reporter.events.iter().filter(|e| matches!(e, FarmEvent::DayEnded { .. })).count(),
        2
    );
    assert_eq!(
        reporter.events.last(),
        Some(&FarmEvent::GameOver(GameOutcome::GoalMet { day: 3 }))
    );
}

#[test]
fn planting_asks_for_the_crop_before_the_plot() {
    let mut farm = farm_from("game:\n  day_limit: 1\n");
    let mut prompter = ScriptedPrompter::choices([PLANT, 1, 2, END]);
    let mut reporter = RecordingReporter::default();

    run(&mut farm, &mut prompter, &mut reporter).unwrap();

    let asked: Vec<&str> = prompter.asked().iter().map(String::as_str).collect();
    assert_eq!(
        asked.get(1..3),
        Some(["植える作物を選んでください:", "植える場所を選んでください:"].as_slice())
    );
    assert_eq!(
        reporter.outcomes().first(),
        Some(&&ActionOutcome::Performed(ActionReport::Planted {
            plot: 2,
            crop: ItemName::new("じゃがいも"),
        }))
    );
}

#[test]
fn feeding_stops_when_feed_runs_out() {
    let mut farm = farm_from(
        "herd: [ニワトリ, ウシ]\ninventory:\n  エサ: 1\ngame:\n  day_limit: 1\n",
    );
    let mut prompter = ScriptedPrompter::choices([FEED, FEED, END]);
    let mut reporter = RecordingReporter::default();

    let outcome = run(&mut farm, &mut prompter, &mut reporter).unwrap();

    assert_eq!(outcome, GameOutcome::TimeUp);
    assert_eq!(farm.inventory().balance("たまご"), 1);
    assert_eq!(farm.inventory().balance("ミルク"), 0);
    assert_eq!(farm.inventory().balance("エサ"), 0);

    let outcomes = reporter.outcomes();
    assert!(matches!(
        outcomes.first(),
        Some(ActionOutcome::Performed(ActionReport::Fed(report))) if report.fed_count() == 1
    ));
    assert_eq!(
        outcomes.get(1),
        Some(&&ActionOutcome::Refused(Refusal::InsufficientFeed))
    );
}

#[test]
fn day_limit_ends_the_run_with_time_up() {
    let mut farm = farm_from("");
    let mut prompter = ScriptedPrompter::choices([END; 10]);
    let mut reporter = RecordingReporter::default();

    let outcome = run(&mut farm, &mut prompter, &mut reporter).unwrap();

    assert_eq!(outcome, GameOutcome::TimeUp);
    assert_eq!(farm.day(), 11);
    assert_eq!(prompter.remaining(), 0);
    assert_eq!(prompter.asked().len(), 10);
    assert_eq!(reporter.statuses.len(), 1);
    assert!(farm.livestock().iter().all(|u| u.hunger() == 10));
}

#[test]
fn refusals_do_not_spend_actions() {
    let mut farm = farm_from("game:\n  day_limit: 1\n");
    // Nothing is ready; harvesting is refused twice, then two plantings
    // use up the day.
    let mut prompter = ScriptedPrompter::choices([HARVEST, HARVEST, PLANT, 0, 0, PLANT, 0, 0]);
    let mut reporter = RecordingReporter::default();

    run(&mut farm, &mut prompter, &mut reporter).unwrap();

    let outcomes = reporter.outcomes();
    assert_eq!(outcomes.len(), 4);
    assert_eq!(
        outcomes.first(),
        Some(&&ActionOutcome::Refused(Refusal::NoReadyPlots))
    );
    assert_eq!(farm.empty_plots(), vec![2, 3]);
    assert_eq!(prompter.remaining(), 0);
}

#[test]
fn full_fields_refuse_planting() {
    let mut farm = farm_from("game:\n  day_limit: 1\n  field_count: 1\n  actions_per_day: 3\n");
    let mut prompter = ScriptedPrompter::choices([PLANT, 0, 0, PLANT, END]);
    let mut reporter = RecordingReporter::default();

    run(&mut farm, &mut prompter, &mut reporter).unwrap();

    assert_eq!(
        reporter.outcomes().get(1),
        Some(&&ActionOutcome::Refused(Refusal::NoEmptyPlots))
    );
}

#[test]
fn status_is_free_and_reported() {
    let mut farm = farm_from("game:\n  day_limit: 1\n  actions_per_day: 1\n");
    let mut prompter = ScriptedPrompter::choices([STATUS, STATUS, END]);
    let mut reporter = RecordingReporter::default();

    run(&mut farm, &mut prompter, &mut reporter).unwrap();

    // Two requested screens plus the one shown on time-up.
    assert_eq!(reporter.statuses.len(), 3);
    assert_eq!(
        reporter.statuses.first().map(|s| s.actions_left),
        Some(1)
    );
}

#[test]
fn hunger_resets_when_fed_and_ticks_each_night() {
    let mut farm = farm_from("game:\n  day_limit: 3\n");
    let mut prompter = ScriptedPrompter::choices([END, FEED, END, END]);
    let mut reporter = RecordingReporter::default();

    run(&mut farm, &mut prompter, &mut reporter).unwrap();

    // Fed on day 2, then one night on day 2 and one on day 3.
    assert!(farm.livestock().iter().all(|u| u.hunger() == 2));
}

#[test]
fn grid_walk_plants_under_the_player() {
    let mut farm = farm_from("game:\n  mode: grid\n  day_limit: 1\n");
    let mut prompter = ScriptedPrompter::new([
        ScriptedAnswer::Choice(1), // work at start: nothing here
        ScriptedAnswer::Choice(0),
        ScriptedAnswer::Move(Direction::Right),
        ScriptedAnswer::Choice(0),
        ScriptedAnswer::Move(Direction::Down),
        ScriptedAnswer::Choice(0),
        ScriptedAnswer::Move(Direction::Down),
        ScriptedAnswer::Choice(0),
        ScriptedAnswer::Move(Direction::Down),
        ScriptedAnswer::Choice(1), // work: plant
        ScriptedAnswer::Choice(0), // carrot
        ScriptedAnswer::Choice(1), // work again: still growing
        ScriptedAnswer::Choice(3), // end
    ]);
    let mut reporter = RecordingReporter::default();

    run(&mut farm, &mut prompter, &mut reporter).unwrap();

    assert_eq!(farm.grid().map(FarmGrid::player), Some(GridPos::new(1, 3)));
    let outcomes = reporter.outcomes();
    assert_eq!(
        outcomes.first(),
        Some(&&ActionOutcome::Refused(Refusal::NoActionHere))
    );
    assert!(outcomes.contains(&&ActionOutcome::Performed(ActionReport::Planted {
        plot: 0,
        crop: ItemName::new("にんじん"),
    })));
    assert_eq!(
        outcomes.last(),
        Some(&&ActionOutcome::Refused(Refusal::StillGrowing {
            crop: ItemName::new("にんじん"),
            remaining_days: 2,
        }))
    );
    assert_eq!(prompter.remaining(), 0);
}

#[test]
fn grid_moves_clamp_at_the_edge() {
    let mut farm = farm_from("game:\n  mode: grid\n  day_limit: 1\n");
    let mut answers = Vec::new();
    for _ in 0..5 {
        answers.push(ScriptedAnswer::Choice(0));
        answers.push(ScriptedAnswer::Move(Direction::Left));
    }
    answers.push(ScriptedAnswer::Choice(3));
    let mut prompter = ScriptedPrompter::new(answers);
    let mut reporter = RecordingReporter::default();

    run(&mut farm, &mut prompter, &mut reporter).unwrap();

    assert_eq!(farm.grid().map(FarmGrid::player), Some(GridPos::new(0, 0)));
    assert_eq!(reporter.outcomes().len(), 5);
}

#[test]
fn exhausted_input_is_a_session_error() {
    let mut farm = farm_from("");
    let mut prompter = ScriptedPrompter::choices([END]);
    let mut reporter = RecordingReporter::default();

    let result = run(&mut farm, &mut prompter, &mut reporter);

    assert!(matches!(result, Err(SessionError::Prompt { .. })));
    assert_eq!(farm.day(), 2);
    assert_eq!(
        reporter.events.iter().filter(|e| matches!(e, FarmEvent::DayEnded { .. })).count(),
        1
    );
}

#[test]
fn menu_mode_is_the_default() {
    let farm = farm_from("");
    assert_eq!(farm.mode(), GameMode::Menu);
}
