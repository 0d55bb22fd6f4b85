//! Operator questions: the cumulative multi-select, validators and endpoint
//! normalization.

mod cumulative;
mod endpoint;
pub mod validators;

pub use cumulative::{CONFIRM_LABEL, NONE_PLACEHOLDER, Selection, cumulative_select};
pub use endpoint::Endpoint;

use anyhow::Result;
use log::error;

use crate::{error::InstallError, tui::PromptResult};

/// Collapses a prompt outcome into the value or a prompt-display error.
///
/// A cancel (Escape, Ctrl+C) and a terminal failure are reported the same
/// way: the install cannot continue without the answer.
pub(crate) fn require_answer<T>(outcome: PromptResult<T>) -> Result<T> {
    match outcome {
        Ok(Some(value)) => Ok(value),
        Ok(None) => {
            error!("prompt cancelled by the operator");
            Err(InstallError::Prompt.into())
        }
        Err(e) => {
            error!("prompt failed: {e:#}");
            Err(e.context(InstallError::Prompt))
        }
    }
}
