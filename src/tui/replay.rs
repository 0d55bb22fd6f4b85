//! A scripted terminal that replays operator input and records what was shown.

use std::collections::VecDeque;

use anyhow::bail;

use super::components::{PromptResult, ValidationResult};
use super::terminal::Terminal;

/// One operator action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayEvent {
    /// Pick the item at this index in a selection list
    Choose(usize),
    /// Type this text and press Enter
    Type(String),
    /// Ctrl+C / Escape
    Interrupt,
}

impl ReplayEvent {
    #[must_use]
    pub fn typed(text: impl Into<String>) -> Self {
        Self::Type(text.into())
    }
}

/// What the terminal displayed when it asked for input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedFrame {
    Select {
        label: String,
        items: Vec<String>,
        cursor: usize,
    },
    Input {
        label: String,
        masked: bool,
    },
}

/// Feeds a fixed queue of events to the installer.
///
/// Running out of events behaves like closed input and yields an error.
#[derive(Debug, Default)]
pub struct Replay {
    events: VecDeque<ReplayEvent>,
    frames: Vec<RecordedFrame>,
    rejections: Vec<String>,
}

impl Replay {
    pub fn new(events: impl IntoIterator<Item = ReplayEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            frames: Vec::new(),
            rejections: Vec::new(),
        }
    }

    #[must_use]
    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    /// Validation messages shown for typed input that was refused.
    #[must_use]
    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }

    /// Events not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl Terminal for Replay {
    fn select(&mut self, label: &str, items: &[&str], cursor: usize) -> PromptResult<usize> {
        self.frames.push(RecordedFrame::Select {
            label: label.to_string(),
            items: items.iter().map(ToString::to_string).collect(),
            cursor,
        });

        match self.events.pop_front() {
            Some(ReplayEvent::Choose(idx)) if idx < items.len() => Ok(Some(idx)),
            Some(ReplayEvent::Choose(idx)) => {
                bail!("replayed choice {idx} is outside a list of {}", items.len())
            }
            Some(ReplayEvent::Type(text)) => {
                bail!("expected a selection for '{label}', got typed text '{text}'")
            }
            Some(ReplayEvent::Interrupt) => Ok(None),
            None => bail!("input closed while waiting on '{label}'"),
        }
    }

    fn input(
        &mut self,
        label: &str,
        masked: bool,
        validator: &dyn Fn(&str) -> ValidationResult,
    ) -> PromptResult<String> {
        self.frames.push(RecordedFrame::Input {
            label: label.to_string(),
            masked,
        });

        loop {
            match self.events.pop_front() {
                Some(ReplayEvent::Type(text)) => match validator(&text) {
                    ValidationResult::Valid => return Ok(Some(text)),
                    ValidationResult::Invalid(msg) => self.rejections.push(msg),
                },
                Some(ReplayEvent::Choose(idx)) => {
                    bail!("expected text for '{label}', got choice {idx}")
                }
                Some(ReplayEvent::Interrupt) => return Ok(None),
                None => bail!("input closed while waiting on '{label}'"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accept_all(_: &str) -> ValidationResult {
        ValidationResult::Valid
    }

    fn reject_short(s: &str) -> ValidationResult {
        if s.len() < 3 {
            ValidationResult::Invalid("too short".into())
        } else {
            ValidationResult::Valid
        }
    }

    #[test]
    fn test_select_records_frame_and_returns_choice() {
        let mut replay = Replay::new([ReplayEvent::Choose(1)]);

        let choice = replay.select("Pick", &["a", "b"], 0).unwrap();

        assert_eq!(choice, Some(1));
        assert_eq!(
            replay.frames(),
            &[RecordedFrame::Select {
                label: "Pick".into(),
                items: vec!["a".into(), "b".into()],
                cursor: 0,
            }]
        );
    }

    #[test]
    fn test_interrupt_is_a_cancel() {
        let mut replay = Replay::new([ReplayEvent::Interrupt]);
        assert_eq!(replay.select("Pick", &["a"], 0).unwrap(), None);
    }

    #[test]
    fn test_out_of_range_choice_is_an_error() {
        let mut replay = Replay::new([ReplayEvent::Choose(5)]);
        assert!(replay.select("Pick", &["a", "b"], 0).is_err());
    }

    #[test]
    fn test_exhausted_events_is_closed_input() {
        let mut replay = Replay::default();
        assert!(replay.input("Name", false, &accept_all).is_err());
    }

    #[test]
    fn test_input_reasks_until_valid() {
        let mut replay = Replay::new([ReplayEvent::typed("ab"), ReplayEvent::typed("abc")]);

        let value = replay.input("Name", false, &reject_short).unwrap();

        assert_eq!(value.as_deref(), Some("abc"));
        assert_eq!(replay.rejections(), &["too short".to_string()]);
        assert_eq!(replay.frames().len(), 1);
        assert_eq!(replay.remaining(), 0);
    }
}
