use std::path::PathBuf;
use std::time::Duration;

use adapters::nasdaq::client::DEFAULT_BASE_URL;
use clap::Parser;
use market::history::DEFAULT_CAPACITY;
use market::position::Position;

use crate::config::{ConfigError, TickerConfig, USAGE, resolve_positional};

/// Polls a quote endpoint and redraws a position report in place.
#[derive(Debug, Parser)]
#[command(name = "ticker", version, override_usage = USAGE)]
pub struct Cli {
    /// [SYMBOL] SHARES STRIKE [REFRESH_MS]
    #[arg(
        value_name = "ARGS",
        required = true,
        num_args = 1..=4,
        allow_negative_numbers = true
    )]
    pub args: Vec<String>,

    /// Directory for the persisted price history
    #[arg(long, env = "TICKER_HISTORY_DIR", default_value = ".")]
    pub history_dir: PathBuf,

    /// Base URL of the quote endpoint
    #[arg(long, env = "TICKER_ENDPOINT", default_value = DEFAULT_BASE_URL)]
    pub endpoint: String,

    /// Timeout for a single quote request, in seconds
    #[arg(long, default_value_t = TickerConfig::DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Disable ANSI colours in the report
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    pub fn into_config(self) -> Result<TickerConfig, ConfigError> {
        let positional = resolve_positional(&self.args)?;

        Ok(TickerConfig {
            symbol: positional.symbol,
            position: Position::new(positional.shares, positional.strike),
            refresh: Duration::from_millis(positional.refresh_ms),
            ignored_refresh: positional.ignored_refresh,
            history_dir: self.history_dir,
            history_capacity: DEFAULT_CAPACITY,
            endpoint: self.endpoint,
            request_timeout: Duration::from_secs(self.timeout_secs.max(1)),
            color: !self.no_color,
            log_json: self.log_json,
        })
    }
}
