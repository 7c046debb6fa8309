//! Number, currency and colour formatting for the report.
//!
//! The core crates never format for display; everything locale- or
//! terminal-dependent lives behind [`Formatter`].

use crossterm::style::{Color, ResetColor, SetForegroundColor};
use market::trend::{Direction, Sparkline};

const GAIN: Color = Color::DarkGreen;
const LOSS: Color = Color::DarkRed;

pub trait Formatter {
    /// Currency with two decimals, e.g. `$1,234.50` / `-$200.00`.
    fn money(&self, value: f64) -> String;

    /// Plain number with grouping and at most three decimals.
    fn number(&self, value: f64) -> String;

    /// Paints `text` according to the sign of `value`.
    fn signed(&self, value: f64, text: &str) -> String;

    /// Sparkline text, or an empty string when there is none.
    fn sparkline(&self, sparkline: Option<&Sparkline>) -> String;
}

/// en-US style formatting with optional ANSI colours.
#[derive(Clone, Copy, Debug)]
pub struct AnsiFormatter {
    color: bool,
}

impl AnsiFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if self.color {
            format!("{}{text}{}", SetForegroundColor(color), ResetColor)
        } else {
            text.to_string()
        }
    }
}

impl Formatter for AnsiFormatter {
    fn money(&self, value: f64) -> String {
        let fixed = format!("{:.2}", value.abs());
        let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };

        format!("{sign}${}.{frac}", group_thousands(int))
    }

    fn number(&self, value: f64) -> String {
        let fixed = format!("{:.3}", value.abs());
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        let (int, frac) = match trimmed.split_once('.') {
            Some((int, frac)) => (int, Some(frac)),
            None => (trimmed, None),
        };
        let sign = if value < 0.0 && trimmed != "0" { "-" } else { "" };

        match frac {
            Some(frac) => format!("{sign}{}.{frac}", group_thousands(int)),
            None => format!("{sign}{}", group_thousands(int)),
        }
    }

    fn signed(&self, value: f64, text: &str) -> String {
        if value > 0.0 {
            self.paint(GAIN, text)
        } else if value < 0.0 {
            self.paint(LOSS, text)
        } else {
            text.to_string()
        }
    }

    fn sparkline(&self, sparkline: Option<&Sparkline>) -> String {
        let Some(s) = sparkline else {
            return String::new();
        };

        let text = s.to_string();
        match s.direction() {
            Direction::Up => self.paint(GAIN, &text),
            Direction::Down => self.paint(LOSS, &text),
            Direction::Flat => text,
        }
    }
}

/// Inserts `,` every three digits from the right of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use market::trend::render;

    const PLAIN: AnsiFormatter = AnsiFormatter { color: false };
    const ANSI: AnsiFormatter = AnsiFormatter { color: true };

    #[test]
    fn money() {
        assert_eq!(PLAIN.money(0.0), "$0.00");
        assert_eq!(PLAIN.money(12.346), "$12.35");
        assert_eq!(PLAIN.money(1200.0), "$1,200.00");
        assert_eq!(PLAIN.money(1_234_567.891), "$1,234,567.89");
        assert_eq!(PLAIN.money(-200.0), "-$200.00");
        assert_eq!(PLAIN.money(-0.001), "$0.00");
    }

    #[test]
    fn number() {
        assert_eq!(PLAIN.number(1000.0), "1,000");
        assert_eq!(PLAIN.number(12.5), "12.5");
        assert_eq!(PLAIN.number(0.12345), "0.123");
        assert_eq!(PLAIN.number(-1234.5), "-1,234.5");
        assert_eq!(PLAIN.number(999.0), "999");
    }

    #[test]
    fn signed_colours() {
        assert_eq!(ANSI.signed(1.0, "x"), "\x1b[38;5;2mx\x1b[0m");
        assert_eq!(ANSI.signed(-1.0, "x"), "\x1b[38;5;1mx\x1b[0m");
        assert_eq!(ANSI.signed(0.0, "x"), "x");
        assert_eq!(PLAIN.signed(1.0, "x"), "x");
    }

    #[test]
    fn sparkline_coloured_by_last_step() {
        let up = render(&[3.0, 7.0]);
        let down = render(&[7.0, 3.0]);
        let flat = render(&[5.0, 5.0]);

        assert_eq!(ANSI.sparkline(up.as_ref()), "\x1b[38;5;2mLH ▲\x1b[0m");
        assert_eq!(ANSI.sparkline(down.as_ref()), "\x1b[38;5;1mHL ▼\x1b[0m");
        assert_eq!(ANSI.sparkline(flat.as_ref()), "▁▁ ▶");
        assert_eq!(ANSI.sparkline(None), "");
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
