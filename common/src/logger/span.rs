use std::time::{Duration, Instant};

use tracing::{Span, field};

use super::TraceId;

/// Root span for one fetch → store → render cycle.
///
/// `price` is left empty and recorded once the quote is in.
pub fn tick_span(symbol: &str, trace_id: &TraceId) -> Span {
    tracing::info_span!(
        "tick",
        symbol = %symbol,
        trace_id = %trace_id.as_str(),
        price = field::Empty
    )
}

/// Awaits `fut` and emits a warning under the `performance` target when it took
/// longer than `max`.
pub async fn warn_if_slow<F, T>(label: &'static str, max: Duration, fut: F) -> T
where
    F: std::future::Future<Output = T>,
{
    let start = Instant::now();
    let out = fut.await;
    let elapsed = start.elapsed();
    if elapsed > max {
        tracing::warn!(
            target: "performance",
            label = label,
            elapsed_ms = elapsed.as_millis() as u64,
            "slow operation detected"
        );
    }
    out
}
