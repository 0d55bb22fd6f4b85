//! Inline summary of collected answers.

use crate::tui::style::{Stylist, Tone};

/// Characters of a secret left visible in the summary.
const SECRET_PREFIX_LEN: usize = 4;

/// A labeled value to display.
#[derive(Debug, Clone)]
pub struct ConfigEntry {
    pub label: String,
    pub value: String,
}

impl ConfigEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn bool(label: impl Into<String>, value: bool) -> Self {
        Self::new(label, if value { "enabled" } else { "disabled" })
    }

    /// An entry whose value is shown only by its first few characters.
    #[must_use]
    pub fn secret(label: impl Into<String>, value: &str) -> Self {
        Self::new(label, mask_secret(value))
    }
}

fn mask_secret(value: &str) -> String {
    let visible: String = value.chars().take(SECRET_PREFIX_LEN).collect();
    if visible.chars().count() == value.chars().count() {
        return "*".repeat(value.chars().count().max(1));
    }
    format!("{visible}…")
}

/// A read-only list of entries printed to stdout, labels aligned.
pub struct ConfigView<'a> {
    title: &'a str,
    entries: Vec<ConfigEntry>,
}

impl<'a> ConfigView<'a> {
    #[must_use]
    pub fn new(title: &'a str, entries: Vec<ConfigEntry>) -> Self {
        Self { title, entries }
    }

    #[must_use]
    pub fn lines(&self, stylist: &dyn Stylist) -> Vec<String> {
        if self.entries.is_empty() {
            return Vec::new();
        }

        let max_label_width = self
            .entries
            .iter()
            .map(|e| e.label.chars().count())
            .max()
            .unwrap_or(0);

        let mut lines = vec![
            stylist.paint(self.title, Tone::Info),
            stylist.paint(&"─".repeat(self.title.chars().count()), Tone::Rule),
        ];

        for entry in &self.entries {
            let padding = max_label_width.saturating_sub(entry.label.chars().count());
            lines.push(format!(
                "  {}{} {} {}",
                stylist.paint(&entry.label, Tone::Emphasis),
                " ".repeat(padding),
                stylist.paint(":", Tone::Muted),
                entry.value
            ));
        }

        lines
    }

    pub fn print(&self, stylist: &dyn Stylist) {
        let lines = self.lines(stylist);
        if lines.is_empty() {
            return;
        }
        println!();
        for line in lines {
            println!("{line}");
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::style::Plain;

    #[test]
    fn test_secret_shows_prefix_only() {
        let entry = ConfigEntry::secret("Secret key", "abcdefghijkl");
        assert_eq!(entry.value, "abcd…");
    }

    #[test]
    fn test_short_secret_is_fully_masked() {
        assert_eq!(ConfigEntry::secret("Password", "abc").value, "***");
        assert_eq!(ConfigEntry::secret("Password", "").value, "*");
    }

    #[test]
    fn test_labels_are_aligned() {
        let view = ConfigView::new(
            "Summary",
            vec![
                ConfigEntry::new("Event", "RACTF"),
                ConfigEntry::bool("Watchtower", true),
            ],
        );
        let lines = view.lines(&Plain);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "  Event      : RACTF");
        assert_eq!(lines[3], "  Watchtower : enabled");
    }

    #[test]
    fn test_empty_view_has_no_lines() {
        assert!(ConfigView::new("Summary", vec![]).lines(&Plain).is_empty());
    }
}
