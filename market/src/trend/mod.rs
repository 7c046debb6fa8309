pub mod sparkline;

pub use sparkline::{Cell, Direction, MAX_WIDTH, Sparkline, render};
