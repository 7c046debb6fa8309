use async_trait::async_trait;
use corelib::StockQuote;

use crate::nasdaq::QuoteError;

/// Source of the latest quote for a single symbol.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_quote(&self, symbol: &str) -> Result<StockQuote, QuoteError>;
}
