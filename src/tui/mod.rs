//! Terminal interaction for the installer.
//!
//! - `Terminal` - the seam the install flow talks to
//! - `TuiTerminal` - ratatui prompts (`Select`, `TextInput`)
//! - `Replay` - scripted input for tests and dry runs
//! - `Stylist` - colored or plain inline output

mod app;
pub mod components;
mod replay;
mod style;
mod terminal;
mod theme;

pub use app::TerminalApp;
pub use components::{ConfigEntry, ConfigView, Progress, PromptResult, ValidationResult};
pub use replay::{RecordedFrame, Replay, ReplayEvent};
pub use style::{Colored, Plain, Stylist, Tone};
pub use terminal::{Terminal, TuiTerminal};
pub use theme::Theme;
