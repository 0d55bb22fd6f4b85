//! The seam between installer logic and whatever draws the prompts.

use super::components::{PromptResult, Select, TextInput, ValidationResult};

/// Blocking, one-question-at-a-time operator interaction.
pub trait Terminal {
    /// Shows `items` under `label` with the cursor on `cursor` and waits for
    /// one choice. Returns the chosen index.
    fn select(&mut self, label: &str, items: &[&str], cursor: usize) -> PromptResult<usize>;

    /// Asks for free text, re-asking until `validator` accepts it.
    fn input(
        &mut self,
        label: &str,
        masked: bool,
        validator: &dyn Fn(&str) -> ValidationResult,
    ) -> PromptResult<String>;
}

/// Full-screen ratatui prompts, one alternate-screen session per question.
#[derive(Debug, Default, Clone, Copy)]
pub struct TuiTerminal;

impl Terminal for TuiTerminal {
    fn select(&mut self, label: &str, items: &[&str], cursor: usize) -> PromptResult<usize> {
        Select::new(label, items).with_starting_cursor(cursor).prompt()
    }

    fn input(
        &mut self,
        label: &str,
        masked: bool,
        validator: &dyn Fn(&str) -> ValidationResult,
    ) -> PromptResult<String> {
        TextInput::new(label, validator).with_masking(masked).prompt()
    }
}
