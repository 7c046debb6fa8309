//! Coercion of display strings such as `"$1,234.50"` or `"-0.42%"` into numbers.

/// Drops every character that is not a digit, `.` or `-` and parses the rest.
///
/// Returns `None` when nothing numeric is left or the remainder is not a valid
/// finite float.
pub fn parse_loose_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
