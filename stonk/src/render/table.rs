//! Bordered OHLCV grid with day-over-day coloring.
//!
//! Rows are computed oldest first so each bar can be compared with the one
//! before it, then emitted newest first. Every column shares one content
//! width; padding is counted in visible characters so escape sequences never
//! shift the borders.

use std::{fmt, io};

use chrono::{DateTime, Utc};

use crate::{
    models::bar::{DailyBar, Series},
    render::{session::MarketClock, trend::Trend},
};

/// Narrowest content width of any column.
pub const MIN_CELL_WIDTH: usize = 13;

pub const HEADERS: [&str; 6] = ["YYYY-MM-DD", "Open", "High", "Low", "Close", "Volume"];

/// Close-column text for a session still trading.
pub const OPEN_SESSION_LABEL: &str = "Open";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single table cell: visible text plus an optional color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub trend: Option<Trend>,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            trend: None,
        }
    }

    fn colored(text: impl Into<String>, trend: Option<Trend>) -> Self {
        Self {
            text: text.into(),
            trend,
        }
    }

    /// Width on screen, ignoring any escape sequences.
    pub fn visible_width(&self) -> usize {
        self.text.chars().count()
    }

    /// Left-aligned to `width` visible characters.
    pub fn render(&self, width: usize) -> String {
        let pad = " ".repeat(width.saturating_sub(self.visible_width()));
        match self.trend {
            Some(trend) => format!("{}{pad}", trend.paint(&self.text)),
            None => format!("{}{pad}", self.text),
        }
    }
}

/// The six cells for one trading day.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub bar: DailyBar,
    pub cells: [Cell; 6],
}

impl Row {
    fn build(
        bar: &DailyBar,
        previous: Option<&DailyBar>,
        glyph: &str,
        session_open: bool,
    ) -> Self {
        let price = |value: f64, prev: Option<f64>| {
            Cell::colored(
                format!("{glyph} {value:.2}"),
                prev.map(|p| Trend::between(p, value)),
            )
        };

        let close = if session_open {
            Cell::colored(OPEN_SESSION_LABEL, Some(Trend::InProgress))
        } else {
            price(bar.close, previous.map(|p| p.close))
        };

        Self {
            bar: bar.clone(),
            cells: [
                Cell::plain(bar.date.format(DATE_FORMAT).to_string()),
                price(bar.open, previous.map(|p| p.open)),
                price(bar.high, previous.map(|p| p.high)),
                price(bar.low, previous.map(|p| p.low)),
                close,
                Cell::colored(
                    bar.volume.to_string(),
                    previous.map(|p| Trend::between(p.volume, bar.volume)),
                ),
            ],
        }
    }

    pub fn close(&self) -> &Cell {
        &self.cells[4]
    }
}

/// A laid-out table ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Newest first.
    rows: Vec<Row>,
    width: usize,
}

impl Table {
    /// Lays out `series` as observed at `now`.
    pub fn build(series: &Series, glyph: &str, clock: &MarketClock, now: DateTime<Utc>) -> Self {
        let bars = series.bars();
        let previous = std::iter::once(None).chain(bars.iter().map(Some));
        // Only the newest bar can still be trading.
        let open_date = series
            .latest()
            .filter(|bar| clock.is_open_bar(bar, now))
            .map(|bar| bar.date);

        let mut rows: Vec<Row> = bars
            .iter()
            .zip(previous)
            .map(|(bar, prev)| Row::build(bar, prev, glyph, open_date == Some(bar.date)))
            .collect();
        rows.reverse();

        let width = rows
            .iter()
            .flat_map(|r| r.cells.iter().map(Cell::visible_width))
            .chain(HEADERS.iter().map(|h| h.chars().count()))
            .fold(MIN_CELL_WIDTH, usize::max);

        Self { rows, width }
    }

    /// Content width shared by every column (excluding the two padding spaces).
    pub fn column_width(&self) -> usize {
        self.width
    }

    /// Rows newest first.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn border(&self) -> String {
        let segment = "-".repeat(self.width + 2);
        let mut line = String::from("+");
        for _ in HEADERS {
            line.push_str(&segment);
            line.push('+');
        }
        line
    }

    fn line(&self, cells: impl Iterator<Item = String>) -> String {
        format!("| {} |", cells.collect::<Vec<_>>().join(" | "))
    }

    pub fn header(&self) -> String {
        self.line(HEADERS.iter().map(|h| Cell::plain(*h).render(self.width)))
    }

    pub fn render_row(&self, row: &Row) -> String {
        self.line(row.cells.iter().map(|c| c.render(self.width)))
    }

    /// Every output line: border, header, border, rows, border.
    pub fn lines(&self) -> Vec<String> {
        let border = self.border();
        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(border.clone());
        lines.push(self.header());
        lines.push(border.clone());
        lines.extend(self.rows.iter().map(|r| self.render_row(r)));
        lines.push(border);
        lines
    }

    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
