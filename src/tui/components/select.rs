//! Single selection component.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use super::{PromptResult, centered_rect};
use crate::tui::{TerminalApp, theme::Theme};

const HELP: &str = "↑↓ navigate, Enter select, Esc cancel";

/// A single selection prompt over a list of labels.
///
/// Returns the index of the chosen label.
pub struct Select<'a> {
    title: &'a str,
    items: &'a [&'a str],
    starting_index: usize,
    theme: Theme,
}

impl<'a> Select<'a> {
    #[must_use]
    pub fn new(title: &'a str, items: &'a [&'a str]) -> Self {
        Self {
            title,
            items,
            starting_index: 0,
            theme: Theme::default(),
        }
    }

    /// Sets the initial cursor position. Out-of-range values clamp to the last item.
    #[must_use]
    pub fn with_starting_cursor(mut self, index: usize) -> Self {
        self.starting_index = index;
        self
    }

    /// Runs the select prompt.
    ///
    /// - `Ok(Some(index))` - User selected an item
    /// - `Ok(None)` - User cancelled with Escape or Ctrl+C
    /// - `Err(_)` - Terminal error occurred
    pub fn prompt(self) -> PromptResult<usize> {
        if self.items.is_empty() {
            return Ok(None);
        }

        let mut app = TerminalApp::new()?;
        let mut state = ListState::default();
        state.select(Some(clamp_cursor(self.starting_index, self.items.len())));

        loop {
            app.draw(|frame| self.render(frame, &mut state))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let current = state.selected().unwrap_or(0);
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        state.select(Some(step_up(current, self.items.len())));
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        state.select(Some(step_down(current, self.items.len())));
                    }
                    KeyCode::Enter => return Ok(Some(current)),
                    KeyCode::Esc => return Ok(None),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(None);
                    }
                    _ => {}
                }
            }
        }
    }

    #[allow(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation
    )]
    fn render(&self, frame: &mut Frame, state: &mut ListState) {
        // Title line(s) + items + help + borders, capped so long lists scroll
        let max_visible_items: u16 = 15;
        let height = ((self.items.len() as u16).min(max_visible_items) + 6)
            .min(frame.area().height.saturating_sub(2));
        let area = centered_rect(70, height, frame.area());

        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border);
        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

        let title = Paragraph::new(Line::from(Span::styled(self.title, self.theme.title)))
            .wrap(Wrap { trim: true });
        frame.render_widget(title, chunks[0]);

        let list_items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, label)| {
                let is_cursor = state.selected() == Some(idx);
                let prefix = if is_cursor { "> " } else { "  " };

                let style = if is_cursor {
                    self.theme.selected
                } else {
                    self.theme.unselected
                };

                ListItem::new(Line::from(Span::styled(format!("{prefix}{label}"), style)))
            })
            .collect();

        let list = List::new(list_items).scroll_padding(1);
        frame.render_stateful_widget(list, chunks[1], state);

        let help_line = Line::from(Span::styled(HELP, self.theme.help));
        frame.render_widget(help_line, chunks[2]);
    }
}

fn clamp_cursor(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

fn step_up(current: usize, len: usize) -> usize {
    if current == 0 {
        len.saturating_sub(1)
    } else {
        current.saturating_sub(1)
    }
}

#[allow(clippy::arithmetic_side_effects)]
fn step_down(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add(1) % len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps_both_ways() {
        assert_eq!(step_up(0, 4), 3);
        assert_eq!(step_up(2, 4), 1);
        assert_eq!(step_down(3, 4), 0);
        assert_eq!(step_down(1, 4), 2);
    }

    #[test]
    fn test_starting_cursor_is_clamped() {
        assert_eq!(clamp_cursor(2, 4), 2);
        assert_eq!(clamp_cursor(9, 4), 3);
        assert_eq!(clamp_cursor(0, 0), 0);
    }
}
