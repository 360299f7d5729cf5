//! Daily OHLCV history for a ticker, rendered as a colored terminal table.

#[cfg(feature = "cli")]
pub mod cli;
pub mod errors;
pub mod logging;
pub mod models;
pub mod providers;
pub mod render;

use errors::Error;
use models::{bar::Chart, request_params::ChartRequest};
use providers::{DataProvider, yahoo::YahooProvider};

/// Fetches `request` from Yahoo using `STONK_*` environment overrides.
///
/// Every failure, including provider setup, is [`Error::DataUnavailable`].
pub async fn fetch_chart(request: &ChartRequest) -> Result<Chart, Error> {
    let provider = YahooProvider::from_env().map_err(providers::ProviderError::from)?;
    Ok(provider.fetch_chart(request).await?)
}
