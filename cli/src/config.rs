use std::path::PathBuf;
use std::time::Duration;

use market::position::Position;
use thiserror::Error;

pub const USAGE: &str = "ticker [SYMBOL] <SHARES> <STRIKE> [REFRESH_MS]";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("missing required argument <{0}>")]
    Missing(&'static str),

    #[error("unexpected extra argument '{0}'")]
    Unexpected(String),

    #[error("<{name}> must be a number, got '{value}'")]
    NotANumber { name: &'static str, value: String },

    #[error("<{name}> must be positive, got '{value}'")]
    NotPositive { name: &'static str, value: String },
}

/// Validated runtime configuration.
#[derive(Clone, Debug)]
pub struct TickerConfig {
    /// Upper-cased symbol to track.
    pub symbol: String,

    pub position: Position,

    /// Delay between the start of two ticks.
    pub refresh: Duration,

    /// Rejected `REFRESH_MS` argument, kept so it can be logged once logging is up.
    pub ignored_refresh: Option<String>,

    /// Directory holding `price-history-<SYMBOL>.json`.
    pub history_dir: PathBuf,

    /// Points kept in the price history.
    pub history_capacity: usize,

    /// Base URL of the quote endpoint.
    pub endpoint: String,

    /// Upper bound on a single quote request.
    pub request_timeout: Duration,

    /// ANSI colours in the report.
    pub color: bool,

    pub log_json: bool,
}

impl TickerConfig {
    pub const DEFAULT_SYMBOL: &'static str = "EQPT";
    pub const DEFAULT_REFRESH_MS: u64 = 5_000;
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
}

/// Positional arguments after resolving the optional leading symbol.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionalArgs {
    pub symbol: String,
    pub shares: f64,
    pub strike: f64,
    pub refresh_ms: u64,

    /// `REFRESH_MS` as given when it was not a positive integer and the default
    /// was used instead.
    pub ignored_refresh: Option<String>,
}

/// Resolves `[SYMBOL] SHARES STRIKE [REFRESH_MS]`.
///
/// A leading argument that does not parse as a number is the symbol. A blank
/// one keeps its slot but falls back to [`TickerConfig::DEFAULT_SYMBOL`]; a
/// numeric one means no symbol was given. An unusable `REFRESH_MS` falls back to
/// [`TickerConfig::DEFAULT_REFRESH_MS`] and is reported in `ignored_refresh`.
pub fn resolve_positional(args: &[String]) -> Result<PositionalArgs, ConfigError> {
    let (symbol, rest) = match args.split_first() {
        Some((first, rest)) if first.trim().is_empty() => {
            (TickerConfig::DEFAULT_SYMBOL.to_string(), rest)
        }
        Some((first, rest)) if !is_finite_number(first) => {
            (first.trim().to_uppercase(), rest)
        }
        _ => (TickerConfig::DEFAULT_SYMBOL.to_string(), args),
    };

    let mut rest = rest.iter();

    let shares = positive_f64("SHARES", rest.next())?;
    let strike = positive_f64("STRIKE", rest.next())?;
    let (refresh_ms, ignored_refresh) = match rest.next() {
        Some(raw) => match positive_u64(raw) {
            Some(ms) => (ms, None),
            None => (TickerConfig::DEFAULT_REFRESH_MS, Some(raw.clone())),
        },
        None => (TickerConfig::DEFAULT_REFRESH_MS, None),
    };

    if let Some(extra) = rest.next() {
        return Err(ConfigError::Unexpected(extra.clone()));
    }

    Ok(PositionalArgs {
        symbol,
        shares,
        strike,
        refresh_ms,
        ignored_refresh,
    })
}

fn is_finite_number(raw: &str) -> bool {
    raw.trim().parse::<f64>().is_ok_and(f64::is_finite)
}

fn positive_f64(name: &'static str, raw: Option<&String>) -> Result<f64, ConfigError> {
    let raw = raw.ok_or(ConfigError::Missing(name))?;
    let value: f64 = raw.trim().parse().map_err(|_| ConfigError::NotANumber {
        name,
        value: raw.clone(),
    })?;

    if !value.is_finite() {
        return Err(ConfigError::NotANumber {
            name,
            value: raw.clone(),
        });
    }
    if value <= 0.0 {
        return Err(ConfigError::NotPositive {
            name,
            value: raw.clone(),
        });
    }
    Ok(value)
}

fn positive_u64(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|v| *v > 0)
}
