pub mod history;
pub mod position;
pub mod rolling_window;
pub mod trend;
