//! Prompter trait and scripted implementation.
//!
//! Whenever the session needs the player to pick something, it asks a
//! [`Prompter`]. The trait abstracts the mechanism by which choices are
//! obtained -- a console reading numbered answers from stdin, or a test
//! script replaying a fixed sequence.
//!
//! A prompter only ever returns valid answers: invalid raw input is its own
//! business to retry, and never reaches the engine.

use std::collections::VecDeque;

use farmstead_types::Direction;

/// Errors that can occur while prompting.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// Reading input failed.
    #[error("failed to read input: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Input ended before a valid answer was given.
    #[error("input closed while waiting for: {prompt}")]
    InputClosed {
        /// The question that was left unanswered.
        prompt: String,
    },

    /// Asked to choose from an empty list.
    #[error("no choices offered for: {prompt}")]
    NoChoices {
        /// The question that had nothing to choose from.
        prompt: String,
    },
}

/// A source of player choices.
pub trait Prompter {
    /// Pick one of `choices`, returning its 0-based index.
    ///
    /// Implementations must keep asking until the answer is valid, and must
    /// never return an index outside `choices`.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if input fails or ends, or `choices` is empty.
    fn choose_one(&mut self, prompt: &str, choices: &[String]) -> Result<usize, PromptError>;

    /// Pick a direction to walk on the grid.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if input fails or ends.
    fn choose_direction(&mut self) -> Result<Direction, PromptError>;
}

/// One scripted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedAnswer {
    /// Answer a [`Prompter::choose_one`] with this 0-based index.
    Choice(usize),
    /// Answer a [`Prompter::choose_direction`].
    Move(Direction),
}

/// A prompter that replays a fixed list of answers.
///
/// Answers of the wrong kind, or choice indices out of range, are skipped
/// the way a console skips bad input. When the script runs out the prompter
/// reports [`PromptError::InputClosed`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    /// Remaining answers, front first.
    answers: VecDeque<ScriptedAnswer>,
    /// Questions asked so far, for assertions.
    asked: Vec<String>,
}

impl ScriptedPrompter {
    /// Create a prompter that will give `answers` in order.
    pub fn new<I>(answers: I) -> Self
    where
        I: IntoIterator<Item = ScriptedAnswer>,
    {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Convenience constructor for menu-only scripts.
    pub fn choices<I>(indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self::new(indices.into_iter().map(ScriptedAnswer::Choice))
    }

    /// Questions asked so far.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Number of unused answers.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn choose_one(&mut self, prompt: &str, choices: &[String]) -> Result<usize, PromptError> {
        self.asked.push(prompt.to_owned());
        if choices.is_empty() {
            return Err(PromptError::NoChoices {
                prompt: prompt.to_owned(),
            });
        }
        while let Some(answer) = self.answers.pop_front() {
            if let ScriptedAnswer::Choice(index) = answer {
                if index < choices.len() {
                    return Ok(index);
                }
            }
        }
        Err(PromptError::InputClosed {
            prompt: prompt.to_owned(),
        })
    }

    fn choose_direction(&mut self) -> Result<Direction, PromptError> {
        self.asked.push("direction".to_owned());
        while let Some(answer) = self.answers.pop_front() {
            if let ScriptedAnswer::Move(direction) = answer {
                return Ok(direction);
            }
        }
        Err(PromptError::InputClosed {
            prompt: "direction".to_owned(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn menu() -> Vec<String> {
        vec!["a".to_owned(), "b".to_owned()]
    }

    #[test]
    fn replays_choices_in_order() {
        let mut p = ScriptedPrompter::choices([1, 0]);
        assert_eq!(p.choose_one("q1", &menu()).unwrap(), 1);
        assert_eq!(p.choose_one("q2", &menu()).unwrap(), 0);
        assert_eq!(p.asked(), ["q1".to_owned(), "q2".to_owned()]);
        assert_eq!(p.remaining(), 0);
    }

    #[test]
    fn out_of_range_answers_are_skipped() {
        let mut p = ScriptedPrompter::choices([5, 2, 1]);
        assert_eq!(p.choose_one("q", &menu()).unwrap(), 1);
    }

    #[test]
    fn exhausted_script_reports_input_closed() {
        let mut p = ScriptedPrompter::choices([]);
        let result = p.choose_one("q", &menu());
        assert!(matches!(result, Err(PromptError::InputClosed { .. })));
    }

    #[test]
    fn empty_choice_list_is_an_error() {
        let mut p = ScriptedPrompter::choices([0]);
        let result = p.choose_one("q", &[]);
        assert!(matches!(result, Err(PromptError::NoChoices { .. })));
        assert_eq!(p.remaining(), 1);
    }

    #[test]
    fn directions_skip_menu_answers() {
        let mut p = ScriptedPrompter::new([
            ScriptedAnswer::Choice(0),
            ScriptedAnswer::Move(Direction::Left),
        ]);
        assert_eq!(p.choose_direction().unwrap(), Direction::Left);
        assert!(p.choose_direction().is_err());
    }
}
