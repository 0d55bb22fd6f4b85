//! Alternate-screen session with RAII setup/teardown.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};

type Backend = CrosstermBackend<Stdout>;

/// Raw mode plus alternate screen for the lifetime of one prompt.
///
/// The terminal is restored on drop, including when the prompt returns
/// early with an error, so inline output printed afterwards lands on the
/// normal screen.
pub struct TerminalApp {
    terminal: Terminal<Backend>,
}

impl TerminalApp {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        undo_on_err(execute!(io::stdout(), EnterAlternateScreen), || {
            let _ = disable_raw_mode();
        })?;
        let terminal = undo_on_err(Terminal::new(CrosstermBackend::new(io::stdout())), || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })?;
        Ok(Self { terminal })
    }

    pub fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

/// Runs `undo` when a setup step failed, before the guard exists to do it.
fn undo_on_err<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

impl Drop for TerminalApp {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_failed_setup_step_is_undone() {
        let undone = Cell::new(false);

        let failed: io::Result<()> = Err(io::Error::other("no tty"));

        let result = undo_on_err(failed, || undone.set(true));

        assert!(result.is_err());
        assert!(undone.get());
    }

    #[test]
    fn test_successful_setup_step_is_kept() {
        let undone = Cell::new(false);

        let result = undo_on_err(Ok(7), || undone.set(true));

        assert_eq!(result.unwrap(), 7);
        assert!(!undone.get());
    }
}
