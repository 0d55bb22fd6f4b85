mod common;
pub mod error;
pub mod install;
mod logging;
pub mod model;
pub mod presets;
pub mod prompt;
pub mod random;
pub mod tui;

pub use common::{PLATFORM_NAME, PROJECT_NAME, PROJECT_VERSION, version_line};
pub use error::InstallError;
pub use install::{InstallLayout, InstallReport, Installer, describe_failure};
pub use logging::Logging;
pub use model::{Component, Components, EmailMode, EmailSettings, InstallOptions};
pub use presets::Presets;
pub use prompt::{Endpoint, Selection, cumulative_select};
pub use random::generate_random_string;
