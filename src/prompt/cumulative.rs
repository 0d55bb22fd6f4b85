//! Cumulative multi-select built from repeated single selections.
//!
//! The list shows every option plus a trailing "Confirm" entry. Choosing an
//! option flips it, choosing "Confirm" ends the prompt. The label lists what
//! is currently enabled so the operator can see the running set.

use std::collections::{BTreeMap, HashSet};

use anyhow::{Result, bail};
use log::debug;

use super::require_answer;
use crate::tui::Terminal;

/// Sentinel appended after the options.
pub const CONFIRM_LABEL: &str = "Confirm";

/// Shown in the label while nothing is enabled.
pub const NONE_PLACEHOLDER: &str = "[None]";

/// Enabled/disabled state for every label of a catalog, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<(String, bool)>,
}

impl Selection {
    /// Every label starts disabled.
    pub fn new<S: AsRef<str>>(catalog: &[S]) -> Self {
        Self {
            entries: catalog
                .iter()
                .map(|label| (label.as_ref().to_string(), false))
                .collect(),
        }
    }

    /// Starts with the labels for which `enabled` returns true.
    pub fn with_enabled<S, F>(catalog: &[S], enabled: F) -> Self
    where
        S: AsRef<str>,
        F: Fn(&str) -> bool,
    {
        let mut selection = Self::new(catalog);
        for (label, on) in &mut selection.entries {
            *on = enabled(label);
        }
        selection
    }

    /// `None` for labels outside the catalog.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, on)| *on)
    }

    #[must_use]
    pub fn is_enabled(&self, label: &str) -> bool {
        self.get(label).unwrap_or(false)
    }

    /// Flips the entry at `index` and returns its new state.
    fn toggle_at(&mut self, index: usize) -> Option<bool> {
        let (_, on) = self.entries.get_mut(index)?;
        *on = !*on;
        Some(*on)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, on)| *on)
            .map(|(l, _)| l.as_str())
    }

    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.enabled().count()
    }

    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, bool> {
        self.entries.iter().cloned().collect()
    }

    /// Label text for the prompt, e.g. `Pick (Currently selected: Core, Shell)`.
    #[must_use]
    pub fn describe(&self, prompt: &str) -> String {
        let enabled: Vec<&str> = self.enabled().collect();
        let listed = if enabled.is_empty() {
            NONE_PLACEHOLDER.to_string()
        } else {
            enabled.join(", ")
        };
        format!("{prompt} (Currently selected: {listed})")
    }
}

fn check_catalog(options: &[&str]) -> Result<()> {
    if options.is_empty() {
        bail!("a multi-select needs at least one option");
    }
    let mut seen = HashSet::new();
    for option in options {
        if !seen.insert(*option) {
            bail!("duplicate option '{option}' in multi-select");
        }
    }
    Ok(())
}

/// Lets the operator toggle any number of `options` before confirming.
///
/// Returns the state left at "Confirm" time with exactly the catalog's
/// labels as keys. After each toggle the cursor stays on the toggled item.
/// A cancelled or failed prompt ends the loop with `InstallError::Prompt`.
pub fn cumulative_select<T>(terminal: &mut T, prompt: &str, options: &[&str]) -> Result<Selection>
where
    T: Terminal + ?Sized,
{
    check_catalog(options)?;

    let mut selection = Selection::new(options);
    let mut items = options.to_vec();
    items.push(CONFIRM_LABEL);
    let confirm_index = options.len();
    let mut cursor = 0;

    loop {
        let label = selection.describe(prompt);
        let choice = require_answer(terminal.select(&label, &items, cursor))?;

        if choice == confirm_index {
            debug!("multi-select confirmed with {} enabled", selection.enabled_count());
            return Ok(selection);
        }

        let Some(now_enabled) = selection.toggle_at(choice) else {
            bail!("selection index {choice} is outside the option list");
        };
        debug!(
            "multi-select toggled '{}' -> {now_enabled}",
            options.get(choice).copied().unwrap_or_default()
        );
        cursor = choice;
    }
}
