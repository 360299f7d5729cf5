use async_trait::async_trait;
use reqwest::{Client, Url, header};
use tracing::{debug, info};

use crate::{
    models::{bar::Chart, request_params::ChartRequest},
    providers::{
        DataProvider, ProviderError, ProviderInitError,
        yahoo::{
            config::YahooConfig,
            params::ChartParams,
            response::{ChartEnvelope, parse_chart},
        },
    },
};

const CHART_PATH: [&str; 3] = ["v8", "finance", "chart"];

pub struct YahooProvider {
    client: Client,
    base_url: Url,
}

impl YahooProvider {
    /// Creates a provider from explicit settings.
    ///
    /// No request timeout is set; an unresponsive endpoint blocks the call.
    pub fn new(config: &YahooConfig) -> Result<Self, ProviderInitError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ProviderInitError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ProviderInitError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "cannot be a base".into(),
            });
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)?,
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client, base_url })
    }

    /// Creates a provider from `STONK_*` environment overrides.
    pub fn from_env() -> Result<Self, ProviderInitError> {
        Self::new(&YahooConfig::from_env())
    }

    /// `{base}/v8/finance/chart/{symbol}`, with the symbol percent-encoded.
    pub fn chart_url(&self, symbol: &str) -> Result<Url, ProviderError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(ProviderError::Validation("symbol must not be empty".into()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProviderError::Validation(format!("base URL {} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(CHART_PATH)
            .push(symbol);
        Ok(url)
    }
}

#[async_trait]
impl DataProvider for YahooProvider {
    async fn fetch_chart(&self, request: &ChartRequest) -> Result<Chart, ProviderError> {
        let url = self.chart_url(&request.symbol)?;
        info!(%url, range = %request.range, "requesting daily chart");

        let response = self
            .client
            .get(url)
            .query(&ChartParams::daily(request.range))
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "chart response received");

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            // Unknown symbols come back as 404 with a JSON error envelope.
            let message = serde_json::from_str::<ChartEnvelope>(&body)
                .ok()
                .and_then(|env| env.error_message())
                .unwrap_or(body);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        parse_chart(&body, &request.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::range::Range;

    fn provider(base_url: &str) -> YahooProvider {
        YahooProvider::new(&YahooConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn chart_url_appends_symbol_path() {
        let url = provider("https://query1.finance.yahoo.com")
            .chart_url("SAVE")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://query1.finance.yahoo.com/v8/finance/chart/SAVE"
        );
    }

    #[test]
    fn chart_url_keeps_base_path_and_encodes_symbol() {
        let url = provider("http://localhost:8080/proxy/").chart_url("BRK/B").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/proxy/v8/finance/chart/BRK%2FB");
    }

    #[test]
    fn blank_symbol_is_rejected() {
        let err = provider("https://query1.finance.yahoo.com")
            .chart_url("  ")
            .unwrap_err();
        assert!(matches!(err, ProviderError::Validation(_)));
    }

    #[test]
    fn bad_config_fails_init() {
        let bad_url = YahooProvider::new(&YahooConfig {
            base_url: "not a url".into(),
            ..Default::default()
        });
        assert!(matches!(bad_url, Err(ProviderInitError::InvalidBaseUrl { .. })));

        let bad_agent = YahooProvider::new(&YahooConfig {
            user_agent: "bad\nagent".into(),
            ..Default::default()
        });
        assert!(matches!(bad_agent, Err(ProviderInitError::InvalidUserAgent(_))));
    }

    #[tokio::test]
    async fn unreachable_host_is_request_error() {
        // Port 9 (discard) on loopback refuses connections.
        let provider = provider("http://127.0.0.1:9");
        let err = provider
            .fetch_chart(&ChartRequest::new("SAVE", Range::FiveDays))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Request(_)), "got {err:?}");
    }
}
