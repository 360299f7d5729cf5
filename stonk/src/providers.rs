//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] trait, the seam between the
//! renderer and whatever vendor serves daily bars. [`yahoo`] is the only
//! implementation today.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use stonk::models::{
//!     bar::{Chart, QuoteMeta},
//!     request_params::ChartRequest,
//! };
//! use stonk::providers::{DataProvider, ProviderError};
//!
//! struct EmptyProvider;
//!
//! #[async_trait]
//! impl DataProvider for EmptyProvider {
//!     async fn fetch_chart(&self, request: &ChartRequest) -> Result<Chart, ProviderError> {
//!         Ok(Chart {
//!             meta: QuoteMeta { symbol: request.symbol.clone(), ..Default::default() },
//!             bars: None,
//!         })
//!     }
//! }
//! ```

pub mod yahoo;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{bar::Chart, request_params::ChartRequest};

/// Trait for fetching daily bar history from a market data provider.
#[async_trait]
pub trait DataProvider {
    /// Fetches daily bars and quote metadata for one symbol.
    ///
    /// Implementations issue exactly one request and do not retry.
    async fn fetch_chart(&self, request: &ChartRequest) -> Result<Chart, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Error)]
pub enum ProviderInitError {
    /// failed to init reqwest client
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),

    /// User agent contains characters not allowed in a header.
    #[error("Invalid user agent: {0}")]
    InvalidUserAgent(#[from] reqwest::header::InvalidHeaderValue),

    /// The configured base URL cannot carry a path.
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Errors that can occur within a `DataProvider` implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The body was not the JSON document the provider documents.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response was well-formed but held no result for the symbol.
    #[error("{0}")]
    NoData(String),

    /// The request parameters were invalid for this specific provider.
    #[error("Invalid parameters for provider: {0}")]
    Validation(String),

    /// An error during provider configuration or initialization.
    #[error("Provider initialization error: {0}")]
    Init(#[from] ProviderInitError),
}
