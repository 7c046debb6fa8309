pub mod cli;
pub mod config;
pub mod format;
pub mod report;
pub mod screen;
pub mod ticker;
