pub mod nasdaq;
pub mod provider;

pub use provider::QuoteProvider;
