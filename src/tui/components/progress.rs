//! Step-by-step status lines printed inline.

use crate::tui::style::{Stylist, Tone};

/// Prints a title, then one line per step.
pub struct Progress<'a> {
    stylist: &'a dyn Stylist,
}

impl<'a> Progress<'a> {
    pub fn start(title: &str, stylist: &'a dyn Stylist) -> Self {
        println!("\n{}", stylist.paint(title, Tone::Info));
        Self { stylist }
    }

    pub fn step(&self, message: impl AsRef<str>) {
        println!("{} {}", self.stylist.paint("→", Tone::Rule), message.as_ref());
    }

    pub fn done(&self, message: impl AsRef<str>) {
        println!(
            "{} {}",
            self.stylist.paint("✓", Tone::Success),
            self.stylist.paint(message.as_ref(), Tone::Success)
        );
    }

    pub fn fail(&self, error: impl AsRef<str>) {
        println!(
            "{} {}",
            self.stylist.paint("✗", Tone::Error),
            self.stylist.paint(error.as_ref(), Tone::Error)
        );
    }
}
