use serde::Deserialize;

/// Top-level body of `GET /api/quote/{symbol}/info`.
///
/// `data` is `null` when the endpoint does not know the symbol.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteEnvelope {
    #[serde(default)]
    pub data: Option<QuoteData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteData {
    pub symbol: String,

    #[serde(default)]
    pub company_name: Option<String>,

    pub primary_data: PrimaryData,
}

/// Every field arrives as a display string (`"$12.34"`, `"+0.12"`, `"+0.98%"`).
/// Any of them may be missing or `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryData {
    #[serde(default)]
    pub last_sale_price: Option<String>,

    #[serde(default)]
    pub net_change: Option<String>,

    #[serde(default)]
    pub percentage_change: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_payload() {
        let raw = r#"{
            "data": {
                "symbol": "EQPT",
                "companyName": "EquipmentShare Inc.",
                "primaryData": {
                    "lastSalePrice": "$12.34",
                    "netChange": "+0.12",
                    "percentageChange": "+0.98%",
                    "deltaIndicator": "up",
                    "lastTradeTimestamp": "Oct 16, 2026 4:00 PM ET"
                }
            },
            "message": null,
            "status": { "rCode": 200 }
        }"#;

        let env: QuoteEnvelope = serde_json::from_str(raw).unwrap();
        let data = env.data.unwrap();
        assert_eq!(data.symbol, "EQPT");
        assert_eq!(data.primary_data.last_sale_price.as_deref(), Some("$12.34"));
        assert_eq!(data.primary_data.percentage_change.as_deref(), Some("+0.98%"));
    }

    #[test]
    fn null_data_decodes_as_none() {
        let env: QuoteEnvelope = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(env.data.is_none());
    }

    #[test]
    fn missing_primary_fields_default_to_none() {
        let raw = r#"{"data": {"symbol": "X", "primaryData": {"lastSalePrice": null}}}"#;
        let env: QuoteEnvelope = serde_json::from_str(raw).unwrap();
        let primary = env.data.unwrap().primary_data;
        assert!(primary.last_sale_price.is_none());
        assert!(primary.net_change.is_none());
    }
}
