//! Day-over-day movement and the terminal colors that show it.

use std::cmp::Ordering;

use colored::Color;

const RESET: &str = "\x1b[0m";

/// How a cell relates to the same field on the previous trading day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
    /// The session has not closed yet; no final value to compare.
    InProgress,
}

impl Trend {
    /// Classifies `current` against `previous`. Incomparable values are `Flat`.
    pub fn between<T: PartialOrd>(previous: T, current: T) -> Self {
        match current.partial_cmp(&previous) {
            Some(Ordering::Greater) => Trend::Up,
            Some(Ordering::Less) => Trend::Down,
            Some(Ordering::Equal) | None => Trend::Flat,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Trend::Up => Color::Green,
            Trend::Down => Color::Red,
            Trend::Flat => Color::Yellow,
            Trend::InProgress => Color::Blue,
        }
    }

    /// Wraps `text` in this trend's foreground color followed by a reset.
    pub fn paint(self, text: &str) -> String {
        format!("\x1b[{}m{text}{RESET}", self.color().to_fg_str())
    }
}
