//! Styled text for inline (non-alternate-screen) output.
//!
//! Prompt logic only ever builds plain strings; whoever prints them picks a
//! `Stylist` to color them.

use colored::Colorize;

/// The role a piece of text plays in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Neutral informational text
    Info,
    /// Completed steps
    Success,
    /// Things the operator still has to do
    Warning,
    /// Fatal problems
    Error,
    /// Names and counts that should stand out
    Emphasis,
    /// Separators and decoration
    Rule,
    /// Secondary details
    Muted,
}

/// Something that turns plain text into styled text.
pub trait Stylist {
    fn paint(&self, text: &str, tone: Tone) -> String;
}

/// ANSI colors through the `colored` crate. Honors `NO_COLOR`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Colored;

impl Stylist for Colored {
    fn paint(&self, text: &str, tone: Tone) -> String {
        match tone {
            Tone::Warning => text.yellow().to_string(),
            Tone::Info => text.cyan().to_string(),
            Tone::Success => text.green().to_string(),
            Tone::Error => text.red().to_string(),
            Tone::Emphasis => text.bold().to_string(),
            Tone::Rule => text.blue().to_string(),
            Tone::Muted => text.bright_black().to_string(),
        }
    }
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Stylist for Plain {
    fn paint(&self, text: &str, _tone: Tone) -> String {
        text.to_string()
    }
}
