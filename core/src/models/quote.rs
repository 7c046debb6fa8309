/// Normalised quote for one symbol at one point in time.
///
/// Numeric fields are already coerced; the `*_display` fields keep what the
/// endpoint sent so the report can show it verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct StockQuote {
    pub symbol: String,
    pub company_name: Option<String>,
    pub last_sale_price: f64,

    /// Per-share change since previous close. `0.0` when the endpoint sent
    /// nothing usable.
    pub net_change: f64,

    pub net_change_display: Option<String>,
    pub percent_change_display: Option<String>,
}
