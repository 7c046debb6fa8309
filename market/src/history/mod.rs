//! Rolling price history for the tracked symbol and its persistence.

pub mod errors;
pub mod json_store;

use async_trait::async_trait;

use crate::rolling_window::RollingWindow;

pub use errors::HistoryError;
pub use json_store::JsonFileHistoryStore;

/// Points kept per symbol.
pub const DEFAULT_CAPACITY: usize = 30;

/// Bounded, chronologically ordered sequence of observed prices for one symbol.
#[derive(Clone, Debug)]
pub struct PriceHistory {
    symbol: String,
    points: RollingWindow<f64>,
}

impl PriceHistory {
    pub fn new(symbol: impl Into<String>, capacity: usize) -> Self {
        Self {
            symbol: symbol.into(),
            points: RollingWindow::new(capacity),
        }
    }

    /// Seeds the history from previously stored points (oldest first).
    /// Anything beyond `capacity` is dropped from the front.
    pub fn from_points(symbol: impl Into<String>, capacity: usize, points: Vec<f64>) -> Self {
        Self {
            symbol: symbol.into(),
            points: RollingWindow::from_items(capacity, points),
        }
    }

    /// Appends `price`, evicting the oldest point when over capacity.
    pub fn append(&mut self, price: f64) -> Option<f64> {
        self.points.push(price)
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn points(&self) -> Vec<f64> {
        self.points.to_vec()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }
}

/// Durable storage of a symbol's price history.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Returns the stored points for `symbol`, oldest first.
    ///
    /// Never fails: missing, unreadable or malformed state yields an empty vec.
    async fn load(&self, symbol: &str) -> Vec<f64>;

    /// Replaces the stored points for `symbol`. Last writer wins.
    async fn persist(&self, symbol: &str, points: &[f64]) -> Result<(), HistoryError>;
}

/// Loads the stored points for `symbol` into a fresh [`PriceHistory`].
pub async fn load_history<S>(store: &S, symbol: &str, capacity: usize) -> PriceHistory
where
    S: HistoryStore + ?Sized,
{
    let points = store.load(symbol).await;
    let history = PriceHistory::from_points(symbol, capacity, points);

    tracing::debug!(
        symbol,
        points = history.len(),
        fresh = history.is_empty(),
        "price history loaded"
    );

    history
}
