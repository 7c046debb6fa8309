//! Decoding of the Nasdaq quote-info payload into a [`StockQuote`].
//!
//! The endpoint is third-party and loosely typed: every number arrives as a
//! display string and any field may be missing. Only the last sale price is
//! mandatory.

use corelib::StockQuote;
use corelib::nasdaq_models::QuoteEnvelope;
use corelib::number::parse_loose_number;

use super::QuoteError;

pub fn parse_quote(requested: &str, raw: &str) -> Result<StockQuote, QuoteError> {
    let envelope: QuoteEnvelope = serde_json::from_str(raw)?;

    let data = envelope
        .data
        .ok_or_else(|| QuoteError::NoData(requested.to_string()))?;
    let primary = data.primary_data;

    let last_sale_price = primary
        .last_sale_price
        .as_deref()
        .and_then(parse_loose_number)
        .filter(|p| *p > 0.0)
        .ok_or_else(|| {
            QuoteError::InvalidResponse(format!(
                "unusable lastSalePrice {:?}",
                primary.last_sale_price
            ))
        })?;

    let net_change_display = non_empty(primary.net_change);
    let percent_change_display = non_empty(primary.percentage_change);

    let net_change = net_change_display
        .as_deref()
        .and_then(parse_loose_number)
        .unwrap_or(0.0);

    let symbol = if data.symbol.trim().is_empty() {
        requested.to_string()
    } else {
        data.symbol
    };

    Ok(StockQuote {
        symbol,
        company_name: non_empty(data.company_name),
        last_sale_price,
        net_change,
        net_change_display,
        percent_change_display,
    })
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}
