//! Wire schema of the chart endpoint and its conversion into a [`Chart`].
//!
//! Only the fields the table needs are modelled. Missing arrays are kept as
//! `None` rather than failing deserialization so the caller can tell a
//! malformed document (fatal) from a result without bars (table skipped).

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    models::bar::{Chart, DailyBar, QuoteMeta},
    providers::ProviderError,
};

const NO_DATA: &str = "No data found for the specified symbol";

#[derive(Deserialize, Debug)]
pub struct ChartEnvelope {
    pub chart: Option<ChartBody>,
}

#[derive(Deserialize, Debug)]
pub struct ChartBody {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
pub struct ChartError {
    pub code: Option<String>,
    pub description: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ChartResult {
    #[serde(default)]
    pub meta: ResultMeta,
    pub timestamp: Option<Vec<i64>>,
    pub indicators: Option<Indicators>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResultMeta {
    pub symbol: Option<String>,
    pub currency: Option<String>,
    pub regular_market_price: Option<f64>,
}

#[derive(Deserialize, Debug)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteArrays>,
}

/// Column-oriented OHLCV. Yahoo puts `null` where a session has no print.
#[derive(Deserialize, Debug, Default)]
pub struct QuoteArrays {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

impl ChartError {
    fn message(&self) -> Option<String> {
        match (&self.code, &self.description) {
            (_, Some(desc)) => Some(desc.clone()),
            (Some(code), None) => Some(code.clone()),
            (None, None) => None,
        }
    }
}

impl ChartEnvelope {
    /// Vendor error text, if the envelope carries one.
    pub fn error_message(&self) -> Option<String> {
        self.chart
            .as_ref()
            .and_then(|c| c.error.as_ref())
            .and_then(ChartError::message)
    }
}

/// Decodes a response body into a [`Chart`].
pub fn parse_chart(body: &[u8], requested_symbol: &str) -> Result<Chart, ProviderError> {
    let envelope: ChartEnvelope = serde_json::from_slice(body)?;
    Chart::try_from_envelope(envelope, requested_symbol)
}

impl Chart {
    fn try_from_envelope(
        envelope: ChartEnvelope,
        requested_symbol: &str,
    ) -> Result<Self, ProviderError> {
        let error_message = envelope.error_message();
        let result = envelope
            .chart
            .and_then(|c| c.result)
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| ProviderError::NoData(error_message.unwrap_or_else(|| NO_DATA.into())))?;

        let meta = QuoteMeta {
            symbol: result
                .meta
                .symbol
                .unwrap_or_else(|| requested_symbol.to_string()),
            currency: result.meta.currency,
            current_price: result.meta.regular_market_price,
        };

        let bars = match (result.timestamp, result.indicators) {
            (Some(timestamps), Some(indicators)) => indicators
                .quote
                .into_iter()
                .next()
                .map(|quote| zip_bars(&timestamps, &quote)),
            _ => None,
        };
        match &bars {
            Some(b) => debug!(symbol = %meta.symbol, bars = b.len(), "decoded chart"),
            None => debug!(symbol = %meta.symbol, "chart has no timestamp or quote arrays"),
        }

        Ok(Chart { meta, bars })
    }
}

/// Joins the parallel arrays row by row. Rows with any `null` are dropped;
/// the shortest array bounds the row count.
fn zip_bars(timestamps: &[i64], quote: &QuoteArrays) -> Vec<DailyBar> {
    let rows = [
        timestamps.len(),
        quote.open.len(),
        quote.high.len(),
        quote.low.len(),
        quote.close.len(),
        quote.volume.len(),
    ]
    .into_iter()
    .min()
    .unwrap_or(0);

    let mut bars = Vec::with_capacity(rows);
    for i in 0..rows {
        let Some(date) = utc_date(timestamps[i]) else {
            warn!(timestamp = timestamps[i], "timestamp out of range, skipping row");
            continue;
        };
        match (
            quote.open[i],
            quote.high[i],
            quote.low[i],
            quote.close[i],
            quote.volume[i],
        ) {
            (Some(open), Some(high), Some(low), Some(close), Some(volume)) => bars.push(DailyBar {
                date,
                open,
                high,
                low,
                close,
                volume,
            }),
            _ => debug!(%date, "row has null fields, skipping"),
        }
    }
    bars
}

fn utc_date(timestamp: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(timestamp, 0).map(|dt| dt.date_naive())
}
