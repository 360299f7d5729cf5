//! Yahoo Finance chart endpoint (`/v8/finance/chart/{symbol}`).

pub mod config;
pub mod params;
pub mod provider;
pub mod response;

pub use config::YahooConfig;
pub use provider::YahooProvider;
