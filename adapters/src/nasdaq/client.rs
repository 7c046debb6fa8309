use std::time::Duration;

use async_trait::async_trait;
use corelib::StockQuote;
use reqwest::{Client, Url};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, instrument};

use super::{QuoteError, parse_quote};
use crate::provider::QuoteProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.nasdaq.com";

#[derive(Clone)]
pub struct NasdaqClient {
    http: Client,
    base_url: Url,
}

impl NasdaqClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, QuoteError> {
        // The endpoint rejects requests without a browser-like agent.
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("Mozilla/5.0"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(30))
            .build()?;

        let raw = base_url.into();
        let base_url = Url::parse(&raw)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or(QuoteError::InvalidEndpoint(raw))?;

        Ok(Self { http, base_url })
    }

    /// `{base}/api/quote/{symbol}/info?assetclass=stocks`, with `symbol` encoded
    /// as a single path segment.
    pub fn quote_url(&self, symbol: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "quote", symbol, "info"]);
        }
        url.query_pairs_mut().append_pair("assetclass", "stocks");
        url
    }
}

#[async_trait]
impl QuoteProvider for NasdaqClient {
    #[instrument(skip(self), level = "debug")]
    async fn fetch_quote(&self, symbol: &str) -> Result<StockQuote, QuoteError> {
        let url = self.quote_url(symbol);

        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let quote = parse_quote(symbol, &body)?;

        debug!(
            price = quote.last_sale_price,
            net_change = quote.net_change,
            "quote fetched"
        );

        Ok(quote)
    }
}
