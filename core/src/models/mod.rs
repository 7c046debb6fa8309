pub mod nasdaq_models;
pub mod quote;
