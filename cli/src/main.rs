use std::process::ExitCode;

use adapters::nasdaq::NasdaqClient;
use clap::Parser;
use common::logger::{LogFormat, init_logger};
use market::history::JsonFileHistoryStore;
use ticker::cli::Cli;
use ticker::config::{TickerConfig, USAGE};
use ticker::format::AnsiFormatter;
use ticker::ticker::Ticker;

/// Quiet by default so log lines do not break the in-place redraw.
const DEFAULT_LOG_LEVEL: &str = "warn";

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            // Print clap's message but exit 1 like other usage errors.
            let _ = e.print();
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => e.exit(),
    };

    let cfg = match cli.into_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("error: {e}\n\nUsage: {USAGE}");
            return Ok(ExitCode::FAILURE);
        }
    };

    init_logger("ticker", DEFAULT_LOG_LEVEL, LogFormat::detect(cfg.log_json));

    if let Some(raw) = &cfg.ignored_refresh {
        tracing::warn!(
            refresh_ms = %raw,
            default_ms = TickerConfig::DEFAULT_REFRESH_MS,
            "REFRESH_MS is not a positive integer, using the default"
        );
    }

    tracing::info!(
        symbol = %cfg.symbol,
        shares = cfg.position.shares,
        strike = cfg.position.strike,
        history_dir = %cfg.history_dir.display(),
        "starting ticker"
    );

    let provider = NasdaqClient::new(cfg.endpoint.clone(), cfg.request_timeout)?;
    let store = JsonFileHistoryStore::new(&cfg.history_dir);

    let mut ticker = Ticker::bootstrap(
        provider,
        store,
        &cfg.symbol,
        cfg.history_capacity,
        cfg.position,
        Box::new(AnsiFormatter::new(cfg.color)),
        std::io::stdout(),
    )
    .await;

    ticker.run(cfg.refresh, shutdown_signal()).await;

    Ok(ExitCode::SUCCESS)
}
