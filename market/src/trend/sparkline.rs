//! Trend Renderer
//!
//! Turns the tail of a price history into a one-line sparkline:
//!
//! ```text
//! ▁▂▃L▅▆▇H▆▅ ▼
//! ```
//!
//! Each point of the window maps onto one of eight block glyphs by linear
//! interpolation between the window's min and max. The most recent point at the
//! window low is drawn as `L`, the most recent point at the window high as `H`.
//! When the low or high repeats, earlier occurrences keep their block glyph, so
//! each marker appears at most once. A flat window has no markers.
//! A trailing glyph shows the direction of the last step, taken from the raw
//! values so quantisation cannot hide a real move.
//!
//! Colour is not decided here. [`Sparkline::direction`] tells the caller how to
//! paint it.

use std::fmt;

/// Most points shown in one sparkline.
pub const MAX_WIDTH: usize = 25;

/// Block glyphs, lowest to highest.
pub const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub const LOW_MARKER: char = 'L';
pub const HIGH_MARKER: char = 'H';

/// Direction of the last step in the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    pub fn between(prev: f64, last: f64) -> Self {
        if last > prev {
            Self::Up
        } else if last < prev {
            Self::Down
        } else {
            Self::Flat
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Up => '▲',
            Self::Down => '▼',
            Self::Flat => '▶',
        }
    }
}

/// One rendered position of the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Block level in `0..=7`.
    Block(u8),
    Low,
    High,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Self::Block(level) => BLOCKS[usize::from(level.min(7))],
            Self::Low => LOW_MARKER,
            Self::High => HIGH_MARKER,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sparkline {
    cells: Vec<Cell>,
    min: f64,
    max: f64,
    direction: Direction,
}

impl Sparkline {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cell glyphs without the trailing direction glyph.
    pub fn body(&self) -> String {
        self.cells.iter().map(|c| c.glyph()).collect()
    }
}

impl fmt::Display for Sparkline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.body(), self.direction.glyph())
    }
}

/// Renders the trailing [`MAX_WIDTH`] points of `points` (oldest first).
///
/// Returns `None` when there are fewer than two points.
pub fn render(points: &[f64]) -> Option<Sparkline> {
    if points.len() < 2 {
        return None;
    }

    let window = &points[points.len().saturating_sub(MAX_WIDTH)..];

    let min = window.iter().copied().fold(f64::INFINITY, f64::min);
    let max = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let spread = max - min;
    let range = if spread == 0.0 { 1.0 } else { spread };

    let mut cells: Vec<Cell> = window
        .iter()
        .map(|&v| Cell::Block(block_level(v, min, range)))
        .collect();

    // A flat window has no distinct extremes.
    if spread > 0.0 {
        if let Some(i) = window.iter().rposition(|&v| v == min) {
            cells[i] = Cell::Low;
        }
        if let Some(i) = window.iter().rposition(|&v| v == max) {
            cells[i] = Cell::High;
        }
    }

    let last = window[window.len() - 1];
    let prev = window[window.len() - 2];

    Some(Sparkline {
        cells,
        min,
        max,
        direction: Direction::between(prev, last),
    })
}

/// `floor((value - min) / range * 7)`, clamped to `0..=7`.
pub fn block_level(value: f64, min: f64, range: f64) -> u8 {
    let top = (BLOCKS.len() - 1) as f64;
    let level = ((value - min) / range * top).floor();
    level.clamp(0.0, top) as u8
}
