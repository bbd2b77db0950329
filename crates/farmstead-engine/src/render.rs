//! Text rendering of session events and the status screen.
//!
//! [`render_event`] and [`render_status`] are pure and return the exact
//! text shown to the player. [`ConsoleReporter`] writes that text to any
//! [`Write`] sink and keeps the first write error for the caller to check.

use std::fmt;
use std::io::{self, Write};

use farmstead_core::session::{FarmEvent, Reporter};
use farmstead_core::snapshot::{FarmSnapshot, GridView};
use farmstead_core::{ActionOutcome, ActionReport, GameOutcome, Refusal};
use farmstead_types::Target;
use farmstead_world::Cell;

/// Lines printed before the first day.
pub const BANNER: &str = "農場経営シミュレーション: ほのかのチャレンジ\n\
主人公の女の子『ほのか』が農場を育てます。\n\
制限日数内に目標を達成しましょう！\n\n";

/// Text for one event. Empty for events that print nothing.
pub fn render_event(event: &FarmEvent) -> String {
    match event {
        FarmEvent::TurnStarted { actions_left, .. } => format!("残り行動回数: {actions_left}\n"),
        FarmEvent::Action(ActionOutcome::Performed(report)) => render_report(report),
        FarmEvent::Action(ActionOutcome::Refused(refusal)) => format!("{}\n", refusal_text(refusal)),
        FarmEvent::DayEnded { .. } => "\n日が暮れました。翌日になりました。\n\n".to_owned(),
        FarmEvent::GameOver(outcome) => match outcome {
            GameOutcome::GoalMet { .. } => "\n目標を達成しました！農場は大成功です！\n\n".to_owned(),
            GameOutcome::GoalMetAtDeadline => {
                "\n制限日数ギリギリで目標達成！素晴らしい成果です！\n\n".to_owned()
            }
            GameOutcome::TimeUp => "\n時間切れです。次はもっと計画的に挑戦しましょう。\n\n".to_owned(),
        },
    }
}

fn render_report(report: &ActionReport) -> String {
    match report {
        ActionReport::Planted { crop, .. } => format!("{crop}を植えました！\n"),
        ActionReport::Harvested { crop, .. } => format!("{crop}を収穫しました！\n"),
        ActionReport::Fed(feed) => {
            let lines: Vec<String> = feed
                .fed
                .iter()
                .map(|unit| format!("{}にエサをあげました。{}を獲得！\n", unit.name, unit.product))
                .collect();
            lines.concat()
        }
        ActionReport::Moved { to, target } => {
            let place = match target {
                Some(Target::Plot(index)) => format!("畑 {}", index.saturating_add(1)),
                Some(Target::Barn) => "家畜小屋".to_owned(),
                None => return format!("{to} に移動しました。\n"),
            };
            format!("{to} に移動しました。ここは{place}です。\n")
        }
    }
}

fn refusal_text(refusal: &Refusal) -> String {
    match refusal {
        Refusal::NoEmptyPlots => "畑に空きがありません。収穫してから植えましょう。".to_owned(),
        Refusal::NoReadyPlots => "収穫できる作物がありません。".to_owned(),
        Refusal::InsufficientFeed => "エサが足りません。".to_owned(),
        Refusal::NoEligibleTargets => "エサをあげられる家畜がいませんでした。".to_owned(),
        Refusal::StillGrowing {
            crop,
            remaining_days,
        } => format!("{crop}はまだ育っています (あと{remaining_days}日)。"),
        Refusal::NoActionHere => "ここでは何もできません。".to_owned(),
    }
}

/// The status screen.
pub fn render_status(snapshot: &FarmSnapshot) -> String {
    StatusScreen(snapshot).to_string()
}

struct StatusScreen<'a>(&'a FarmSnapshot);

impl fmt::Display for StatusScreen<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_status(out, self.0)
    }
}

fn write_status(out: &mut fmt::Formatter<'_>, snapshot: &FarmSnapshot) -> fmt::Result {
    writeln!(out, "\n=== ステータス ===")?;
    writeln!(out, "日数: {}/{}", snapshot.day, snapshot.day_limit)?;
    writeln!(out, "畑の状態:")?;
    for plot in &snapshot.plots {
        writeln!(out, "  {}. {}", plot.number, plot.status)?;
    }
    writeln!(out, "家畜の状態:")?;
    for unit in &snapshot.livestock {
        writeln!(out, "  {}. {}: {}", unit.number, unit.name, unit.hunger)?;
    }
    writeln!(out, "所持品:")?;
    for (item, amount) in &snapshot.inventory {
        writeln!(out, "  {item}: {amount}")?;
    }
    writeln!(out, "目標:")?;
    for line in &snapshot.goal {
        writeln!(out, "  {}: {}", line.item, line.need)?;
    }
    if let Some(grid) = &snapshot.grid {
        writeln!(out, "農場マップ:")?;
        write_grid(out, grid)?;
    }
    writeln!(out, "=================\n")
}

fn write_grid(out: &mut fmt::Formatter<'_>, grid: &GridView) -> fmt::Result {
    for row in &grid.rows {
        let line: Vec<&str> = row.iter().map(|&cell| cell_marker(cell)).collect();
        writeln!(out, "  {}", line.join(" "))?;
    }
    writeln!(out, "  (@: ほのか  F: 畑  B: 家畜小屋)")
}

const fn cell_marker(cell: Cell) -> &'static str {
    match cell {
        Cell::Player => "@",
        Cell::Field(_) => "F",
        Cell::Barn => "B",
        Cell::Path => ".",
    }
}

/// [`Reporter`] writing rendered text to `out`.
#[derive(Debug)]
pub struct ConsoleReporter<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleReporter<W> {
    /// Report to `out`.
    pub const fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Write free-form text, such as the banner.
    pub fn print(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = self.out.write_all(text.as_bytes()).and_then(|()| self.out.flush()) {
            self.error = Some(error);
        }
    }

    /// Surface the first write error, if any.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.out),
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn event(&mut self, event: &FarmEvent) {
        let text = render_event(event);
        if !text.is_empty() {
            self.print(&text);
        }
    }

    fn status(&mut self, snapshot: &FarmSnapshot) {
        self.print(&render_status(snapshot));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use farmstead_core::Farm;
    use farmstead_core::config::FarmConfig;
    use farmstead_types::{GameMode, GridPos, ItemName};
    use farmstead_world::{FedUnit, FeedReport};

    use super::*;

    #[test]
    fn action_messages() {
        let planted = FarmEvent::Action(ActionOutcome::Performed(ActionReport::Planted {
            plot: 0,
            crop: ItemName::new("にんじん"),
        }));
        assert_eq!(render_event(&planted), "にんじんを植えました！\n");

        let fed = FarmEvent::Action(ActionOutcome::Performed(ActionReport::Fed(FeedReport {
            fed: vec![FedUnit {
                index: 0,
                name: "ウシ".to_owned(),
                product: ItemName::new("ミルク"),
            }],
        })));
        assert_eq!(render_event(&fed), "ウシにエサをあげました。ミルクを獲得！\n");

        let refused = FarmEvent::Action(ActionOutcome::Refused(Refusal::NoReadyPlots));
        assert_eq!(render_event(&refused), "収穫できる作物がありません。\n");

        let turn = FarmEvent::TurnStarted {
            day: 1,
            actions_left: 2,
        };
        assert_eq!(render_event(&turn), "残り行動回数: 2\n");
    }

    #[test]
    fn feeding_message_has_one_line_per_animal() {
        let fed = FarmEvent::Action(ActionOutcome::Performed(ActionReport::Fed(FeedReport {
            fed: vec![
                FedUnit {
                    index: 0,
                    name: "ニワトリ".to_owned(),
                    product: ItemName::new("たまご"),
                },
                FedUnit {
                    index: 1,
                    name: "ウシ".to_owned(),
                    product: ItemName::new("ミルク"),
                },
            ],
        })));
        assert_eq!(
            render_event(&fed),
            "ニワトリにエサをあげました。たまごを獲得！\nウシにエサをあげました。ミルクを獲得！\n"
        );
    }

    #[test]
    fn goal_block_keeps_configured_order() {
        let farm = Farm::from_config(&FarmConfig::default()).unwrap();
        let text = render_status(&farm.snapshot());
        assert!(text.contains(
            "目標:\n  にんじん: 5\n  じゃがいも: 3\n  たまご: 4\n  ミルク: 2\n"
        ));
    }

    #[test]
    fn move_message_names_the_place() {
        let moved = FarmEvent::Action(ActionOutcome::Performed(ActionReport::Moved {
            to: GridPos::new(1, 3),
            target: Some(Target::Plot(0)),
        }));
        assert_eq!(
            render_event(&moved),
            "(1, 3) に移動しました。ここは畑 1です。\n"
        );
    }

    #[test]
    fn status_screen_layout() {
        let farm = Farm::from_config(&FarmConfig::default()).unwrap();
        let text = render_status(&farm.snapshot());
        assert!(text.starts_with("\n=== ステータス ===\n日数: 1/10\n畑の状態:\n  1. 空き\n"));
        assert!(text.contains("家畜の状態:\n  1. ニワトリ: 元気\n"));
        assert!(text.contains("所持品:\n"));
        assert!(text.contains("  エサ: 6\n"));
        assert!(text.contains("目標:\n"));
        assert!(text.contains("  にんじん: 5\n"));
        assert!(text.ends_with("=================\n\n"));
        assert!(!text.contains("農場マップ"));
    }

    #[test]
    fn grid_status_shows_the_map() {
        let mut config = FarmConfig::default();
        config.game.mode = GameMode::Grid;
        let farm = Farm::from_config(&config).unwrap();
        let text = render_status(&farm.snapshot());
        assert!(text.contains("農場マップ:\n  @ . . . . . . .\n  . . . . . . B .\n"));
        assert!(text.contains("  . F F . . . . .\n"));
    }

    #[test]
    fn reporter_writes_to_its_sink() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.print(BANNER);
        reporter.event(&FarmEvent::DayEnded { next_day: 2 });
        let out = String::from_utf8(reporter.finish().unwrap()).unwrap();
        assert!(out.starts_with("農場経営シミュレーション"));
        assert!(out.ends_with("\n日が暮れました。翌日になりました。\n\n"));
    }
}
