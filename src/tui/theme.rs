//! Colors for the full-screen prompt widgets.

use ratatui::style::{Color, Modifier, Style};

const RACTF_YELLOW: Color = Color::Rgb(250, 204, 21);
const RACTF_RED: Color = Color::Rgb(248, 113, 113);
const RACTF_BLUE: Color = Color::Rgb(96, 165, 250);
const RACTF_GRAY: Color = Color::Rgb(156, 163, 175);
const RACTF_GRAY_LIGHT: Color = Color::Rgb(229, 231, 235);

/// Styles shared by the `Select` and `TextInput` widgets.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Prompt label
    pub title: Style,
    /// Item under the cursor
    pub selected: Style,
    /// Other items
    pub unselected: Style,
    /// Help text at the bottom
    pub help: Style,
    /// Validation errors
    pub error: Style,
    /// Box borders
    pub border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(RACTF_YELLOW)
                .add_modifier(Modifier::BOLD),
            selected: Style::default()
                .fg(RACTF_BLUE)
                .add_modifier(Modifier::BOLD),
            unselected: Style::default().fg(RACTF_GRAY_LIGHT),
            help: Style::default().fg(RACTF_GRAY),
            error: Style::default().fg(RACTF_RED),
            border: Style::default().fg(RACTF_BLUE),
        }
    }
}
