use once_cell::sync::OnceCell;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Output encoding for log lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    /// JSON when asked for explicitly or when running with `APP_ENV=production`.
    pub fn detect(force_json: bool) -> Self {
        let is_production = std::env::var("APP_ENV").unwrap_or_default() == "production";
        if force_json || is_production {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Installs the global subscriber once; later calls are no-ops.
///
/// Logs go to stderr so they never interleave with the report written to stdout.
/// `RUST_LOG` wins over `default_level`.
pub fn init_logger(service_name: &'static str, default_level: &str, format: LogFormat) {
    LOGGER_INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

        let base = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_line_number(true);

        match format {
            LogFormat::Json => tracing_subscriber::registry()
                .with(filter)
                .with(base.json())
                .init(),
            LogFormat::Pretty => tracing_subscriber::registry()
                .with(filter)
                .with(base.compact())
                .init(),
        }

        tracing::info!(service = service_name, ?format, "logger initialized");
    });
}
