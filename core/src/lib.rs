pub mod models;
pub mod number;

pub use models::nasdaq_models;
pub use models::quote::StockQuote;
