//! Canonical in-memory representation of daily OHLCV history.
//!
//! Every [`DataProvider`](crate::providers::DataProvider) hands back a
//! [`Chart`]; the renderer consumes a [`Series`] built from it.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::errors::Error;

/// One trading day (OHLCV), keyed by its UTC calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBar {
    /// Trading date (UTC).
    pub date: NaiveDate,

    /// Opening price.
    pub open: f64,

    /// Highest price of the session.
    pub high: f64,

    /// Lowest price of the session.
    pub low: f64,

    /// Closing price. Not final while the session is still open.
    pub close: f64,

    /// Shares traded during the session.
    pub volume: u64,
}

/// Quote-level metadata returned alongside the bars.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuoteMeta {
    /// The symbol as echoed by the data source (e.g. "AAPL").
    pub symbol: String,
    /// ISO currency code (e.g. "USD"). Not every listing reports one.
    pub currency: Option<String>,
    /// Latest traded price, only meaningful for the most recent bar.
    pub current_price: Option<f64>,
}

/// Raw provider output: metadata plus, when the response carried them, the bars.
///
/// `bars` is `None` when the source payload had no timestamp or quote
/// arrays. That is not fatal for a run; see [`Chart::into_series`].
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub meta: QuoteMeta,
    pub bars: Option<Vec<DailyBar>>,
}

impl Chart {
    /// Turns the chart into a renderable [`Series`].
    ///
    /// Returns [`Error::IncompleteData`] when the payload had no usable bars.
    pub fn into_series(self) -> Result<Series, Error> {
        let bars = self.bars.ok_or(Error::IncompleteData)?;
        let series = Series::new(self.meta, bars);
        if series.is_empty() {
            return Err(Error::IncompleteData);
        }
        Ok(series)
    }
}

/// Daily bars for one symbol, unique by date and in ascending date order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub meta: QuoteMeta,
    bars: Vec<DailyBar>,
}

impl Series {
    /// Builds a series from bars in any order.
    ///
    /// Bars are keyed by date; if a date repeats, the later bar in `bars` wins.
    pub fn new(meta: QuoteMeta, bars: impl IntoIterator<Item = DailyBar>) -> Self {
        let by_date: BTreeMap<NaiveDate, DailyBar> =
            bars.into_iter().map(|bar| (bar.date, bar)).collect();
        Self {
            meta,
            bars: by_date.into_values().collect(),
        }
    }

    /// Bars oldest first.
    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The most recent bar, if any.
    pub fn latest(&self) -> Option<&DailyBar> {
        self.bars.last()
    }
}
