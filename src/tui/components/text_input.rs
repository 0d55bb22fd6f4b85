//! Text input component with validation support.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tui_input::{Input, backend::crossterm::EventHandler};

use super::{PromptResult, ValidationResult, centered_rect};
use crate::tui::{TerminalApp, theme::Theme};

const HELP: &str = "Enter to submit, Esc to cancel";

/// A text input prompt that re-asks until the validator accepts the value.
pub struct TextInput<'a> {
    title: &'a str,
    validator: &'a dyn Fn(&str) -> ValidationResult,
    masked: bool,
    theme: Theme,
}

impl<'a> TextInput<'a> {
    #[must_use]
    pub fn new(title: &'a str, validator: &'a dyn Fn(&str) -> ValidationResult) -> Self {
        Self {
            title,
            validator,
            masked: false,
            theme: Theme::default(),
        }
    }

    /// Hides typed characters (passwords, API keys).
    #[must_use]
    pub fn with_masking(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Runs the text input prompt.
    ///
    /// - `Ok(Some(text))` - User submitted text accepted by the validator
    /// - `Ok(None)` - User cancelled with Escape or Ctrl+C
    /// - `Err(_)` - Terminal error occurred
    pub fn prompt(self) -> PromptResult<String> {
        let mut app = TerminalApp::new()?;
        let mut input = Input::default();
        let mut error_message: Option<String> = None;

        loop {
            app.draw(|frame| self.render(frame, &input, error_message.as_deref()))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Enter => {
                        let value = input.value().to_string();
                        match (self.validator)(&value) {
                            ValidationResult::Valid => return Ok(Some(value)),
                            ValidationResult::Invalid(msg) => error_message = Some(msg),
                        }
                    }
                    KeyCode::Esc => return Ok(None),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(None);
                    }
                    _ => {
                        input.handle_event(&Event::Key(key));
                        error_message = None;
                    }
                }
            }
        }
    }

    #[allow(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation
    )]
    fn render(&self, frame: &mut Frame, input: &Input, error_message: Option<&str>) {
        let area = centered_rect(70, 10, frame.area());

        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border);

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner_area);

        let title = Paragraph::new(Line::from(Span::styled(self.title, self.theme.title)))
            .wrap(Wrap { trim: true });
        frame.render_widget(title, chunks[0]);

        let shown = display_value(input.value(), self.masked);
        let input_width = chunks[1].width.saturating_sub(2);
        let scroll = calculate_scroll(input.visual_cursor(), input_width as usize);

        let input_widget = Paragraph::new(shown)
            .scroll((0, scroll as u16))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border),
            );
        frame.render_widget(input_widget, chunks[1]);

        let cursor_x = chunks[1].x + 1 + (input.visual_cursor() - scroll) as u16;
        let cursor_y = chunks[1].y + 1;
        frame.set_cursor_position((cursor_x, cursor_y));

        let status = match error_message {
            Some(err) => Line::from(Span::styled(err, self.theme.error)),
            None => Line::from(Span::styled(HELP, self.theme.help)),
        };
        frame.render_widget(Paragraph::new(status), chunks[2]);
    }
}

fn display_value(value: &str, masked: bool) -> String {
    if masked {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    }
}

fn calculate_scroll(cursor: usize, width: usize) -> usize {
    if cursor >= width {
        cursor.saturating_sub(width).saturating_add(1)
    } else {
        0
    }
}
