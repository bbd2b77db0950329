//! Line-oriented [`Prompter`] over any reader and writer.
//!
//! Choices are shown numbered from 1. Anything that is not a listed number
//! prints a retry message and asks again; end of input is reported as
//! [`PromptError::InputClosed`] so the game stops cleanly.

use std::io::{BufRead, Write};

use farmstead_core::decision::{PromptError, Prompter};
use farmstead_types::Direction;

const INPUT_PROMPT: &str = "番号を入力: ";
const DIRECTION_PROMPT: &str = "移動する方向を入力してください (w/a/s/d または 上/下/左/右): ";
const RETRY_MESSAGE: &str = "入力が正しくありません。もう一度お試しください。\n";

/// Prompter reading answers line by line.
#[derive(Debug)]
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    /// Prompt on `output`, read from `input`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, PromptError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn choose_one(&mut self, prompt: &str, choices: &[String]) -> Result<usize, PromptError> {
        if choices.is_empty() {
            return Err(PromptError::NoChoices {
                prompt: prompt.to_owned(),
            });
        }
        loop {
            writeln!(self.output, "{prompt}")?;
            for (number, choice) in (1_usize..).zip(choices) {
                writeln!(self.output, "  {number}. {choice}")?;
            }
            write!(self.output, "{INPUT_PROMPT}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Err(PromptError::InputClosed {
                    prompt: prompt.to_owned(),
                });
            };
            if let Some(index) = parse_choice(&line, choices.len()) {
                return Ok(index);
            }
            writeln!(self.output, "{RETRY_MESSAGE}")?;
        }
    }

    fn choose_direction(&mut self) -> Result<Direction, PromptError> {
        loop {
            write!(self.output, "{DIRECTION_PROMPT}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Err(PromptError::InputClosed {
                    prompt: DIRECTION_PROMPT.to_owned(),
                });
            };
            if let Some(direction) = parse_direction(&line) {
                return Ok(direction);
            }
            writeln!(self.output, "{RETRY_MESSAGE}")?;
        }
    }
}

/// Parse a 1-based answer into a 0-based index below `len`.
///
/// Only plain ASCII digits count; signs and other numerals are rejected.
fn parse_choice(line: &str, len: usize) -> Option<usize> {
    if !line.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let number: usize = line.parse().ok()?;
    let index = number.checked_sub(1)?;
    (index < len).then_some(index)
}

/// Parse a direction from a key, an English word, a kanji, or a number
/// in [`Direction::ALL`] order.
fn parse_direction(line: &str) -> Option<Direction> {
    let word = line.to_lowercase();
    let direction = match word.as_str() {
        "w" | "up" | "u" => Direction::Up,
        "s" | "down" => Direction::Down,
        "a" | "left" | "l" => Direction::Left,
        "d" | "right" | "r" => Direction::Right,
        other => {
            let by_label = Direction::ALL.into_iter().find(|d| d.label() == other);
            let by_number = parse_choice(other, Direction::ALL.len())
                .and_then(|index| Direction::ALL.get(index).copied());
            return by_label.or(by_number);
        }
    };
    Some(direction)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn prompter(input: &str) -> ConsolePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn choices() -> Vec<String> {
        vec!["にんじん".to_owned(), "じゃがいも".to_owned()]
    }

    #[test]
    fn answers_are_one_based() {
        let mut p = prompter("2\n");
        assert_eq!(p.choose_one("選んでください:", &choices()).unwrap(), 1);
        let shown = String::from_utf8(p.output).unwrap();
        assert!(shown.starts_with("選んでください:\n  1. にんじん\n  2. じゃがいも\n番号を入力: "));
    }

    #[test]
    fn bad_input_is_retried() {
        let mut p = prompter("0\nabc\n3\n 1 \n");
        assert_eq!(p.choose_one("q", &choices()).unwrap(), 0);
        let shown = String::from_utf8(p.output).unwrap();
        assert_eq!(shown.matches("入力が正しくありません").count(), 3);
    }

    #[test]
    fn end_of_input_closes_the_prompt() {
        let mut p = prompter("9\n");
        assert!(matches!(
            p.choose_one("q", &choices()),
            Err(PromptError::InputClosed { .. })
        ));
    }

    #[test]
    fn directions_accept_several_spellings() {
        let mut p = prompter("w\nLEFT\n下\n4\nx\nd\n");
        assert_eq!(p.choose_direction().unwrap(), Direction::Up);
        assert_eq!(p.choose_direction().unwrap(), Direction::Left);
        assert_eq!(p.choose_direction().unwrap(), Direction::Down);
        assert_eq!(p.choose_direction().unwrap(), Direction::Right);
        assert_eq!(p.choose_direction().unwrap(), Direction::Right);
        assert!(p.choose_direction().is_err());
    }

    #[test]
    fn parse_choice_bounds() {
        assert_eq!(parse_choice("1", 2), Some(0));
        assert_eq!(parse_choice("2", 2), Some(1));
        assert_eq!(parse_choice("3", 2), None);
        assert_eq!(parse_choice("0", 2), None);
        assert_eq!(parse_choice("-1", 2), None);
    }

    #[test]
    fn signed_or_spaced_numbers_are_rejected() {
        assert_eq!(parse_choice("+1", 2), None);
        assert_eq!(parse_choice("1 2", 2), None);
        assert_eq!(parse_choice("", 2), None);

        let mut p = prompter("+2
2
");
        assert_eq!(p.choose_one("q", &choices()).unwrap(), 1);
        let shown = String::from_utf8(p.output).unwrap();
        assert_eq!(shown.matches("入力が正しくありません").count(), 1);
    }
}
