//! Ticker controller
//!
//! Owns every piece of mutable state (price history, screen, collaborators) and
//! drives the fetch → append → persist → render cycle.
//!
//! Data flow per tick:
//! QuoteProvider → PriceHistory → HistoryStore → Report → Screen

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use adapters::QuoteProvider;
use adapters::nasdaq::QuoteError;
use common::logger::{TraceId, tick_span, warn_if_slow};
use market::history::{HistoryError, HistoryStore, PriceHistory, load_history};
use market::position::Position;
use thiserror::Error;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{Instrument, Span, debug, error, info};

use crate::format::Formatter;
use crate::report::Report;
use crate::screen::Screen;

/// Fetches slower than this are logged as slow.
pub const SLOW_FETCH: Duration = Duration::from_secs(2);

#[derive(Error, Debug)]
pub enum TickError {
    #[error("error fetching data: {0}")]
    Fetch(#[from] QuoteError),

    #[error("error persisting history: {0}")]
    Persist(#[from] HistoryError),

    #[error("error writing report: {0}")]
    Output(#[source] std::io::Error),
}

/// What a successful tick did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickOutcome {
    pub price: f64,
    pub points: usize,
    pub evicted: Option<f64>,
}

pub struct Ticker<P, S, W> {
    provider: P,
    store: S,
    formatter: Box<dyn Formatter + Send>,
    out: W,
    history: PriceHistory,
    position: Position,
    screen: Screen,
}

impl<P, S, W> Ticker<P, S, W>
where
    P: QuoteProvider,
    S: HistoryStore,
    W: Write,
{
    pub fn new(
        provider: P,
        store: S,
        history: PriceHistory,
        position: Position,
        formatter: Box<dyn Formatter + Send>,
        out: W,
    ) -> Self {
        Self {
            provider,
            store,
            formatter,
            out,
            history,
            position,
            screen: Screen::new(),
        }
    }

    /// Builds a ticker whose history is restored from `store`.
    pub async fn bootstrap(
        provider: P,
        store: S,
        symbol: &str,
        capacity: usize,
        position: Position,
        formatter: Box<dyn Formatter + Send>,
        out: W,
    ) -> Self {
        let history = load_history(&store, symbol, capacity).await;
        Self::new(provider, store, history, position, formatter, out)
    }

    pub fn history(&self) -> &PriceHistory {
        &self.history
    }

    /// One fetch → append → persist → render cycle.
    ///
    /// A failed fetch leaves the history untouched. A failed persist keeps the
    /// appended point in memory but skips the render.
    pub async fn tick(&mut self) -> Result<TickOutcome, TickError> {
        let symbol = self.history.symbol().to_string();

        let quote =
            warn_if_slow("fetch_quote", SLOW_FETCH, self.provider.fetch_quote(&symbol)).await?;
        Span::current().record("price", quote.last_sale_price);

        let evicted = self.history.append(quote.last_sale_price);
        self.store.persist(&symbol, &self.history.points()).await?;

        let report = Report::build(
            self.formatter.as_ref(),
            &quote,
            &self.history,
            &self.position,
        );
        self.screen
            .present(&mut self.out, report.lines())
            .map_err(TickError::Output)?;

        Ok(TickOutcome {
            price: quote.last_sale_price,
            points: self.history.len(),
            evicted,
        })
    }

    /// Runs one tick inside its own span and logs the failure, if any.
    ///
    /// Returns whether the tick succeeded.
    pub async fn run_once(&mut self) -> bool {
        let trace_id = TraceId::default();
        let span = tick_span(self.history.symbol(), &trace_id);

        match self.tick().instrument(span.clone()).await {
            Ok(outcome) => {
                debug!(
                    parent: &span,
                    price = outcome.price,
                    points = outcome.points,
                    evicted = ?outcome.evicted,
                    "tick complete"
                );
                true
            }
            Err(e) => {
                error!(parent: &span, error = %e, "tick failed");
                // The log line landed under the last frame.
                self.screen.invalidate();
                false
            }
        }
    }

    /// Ticks every `refresh` until `shutdown` resolves.
    ///
    /// Ticks never overlap: each one is awaited to completion, and a tick that
    /// overruns `refresh` delays the schedule instead of queueing a burst.
    pub async fn run<F>(&mut self, refresh: Duration, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let mut ticker = interval(refresh);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            symbol = %self.history.symbol(),
            every_ms = refresh.as_millis() as u64,
            restored_points = self.history.len(),
            capacity = self.history.capacity(),
            "ticker started"
        );

        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("shutdown signal received");
                    break;
                }
                _ = async {
                    ticker.tick().await;
                    self.run_once().await;
                } => {}
            }
        }
    }
}
