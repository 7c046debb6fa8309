use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("json decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no quote data for symbol {0}")]
    NoData(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("invalid endpoint '{0}'")]
    InvalidEndpoint(String),
}
