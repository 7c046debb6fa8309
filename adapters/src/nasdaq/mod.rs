pub mod client;
pub mod errors;
pub mod parser;

pub use client::NasdaqClient;
pub use errors::QuoteError;
pub use parser::parse_quote;
