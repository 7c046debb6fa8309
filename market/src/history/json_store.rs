//! File-backed [`HistoryStore`]: one JSON array of numbers per symbol.
//!
//! Layout: `<dir>/price-history-<SYMBOL>.json`, e.g. `[12.31,12.4,12.38]`.
//! Writes go to a `.tmp` sibling first and are renamed into place.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{HistoryError, HistoryStore};

#[derive(Clone, Debug)]
pub struct JsonFileHistoryStore {
    dir: PathBuf,
}

impl JsonFileHistoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File that holds the history for `symbol`.
    ///
    /// Characters outside `[A-Za-z0-9._-]` are replaced so a symbol can never
    /// address a path outside `dir`.
    pub fn path_for(&self, symbol: &str) -> PathBuf {
        let safe: String = symbol
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        self.dir.join(format!("price-history-{safe}.json"))
    }
}

#[async_trait]
impl HistoryStore for JsonFileHistoryStore {
    async fn load(&self, symbol: &str) -> Vec<f64> {
        let path = self.path_for(symbol);

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored history");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "history unreadable, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<f64>>(&raw) {
            Ok(points) => points,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "history malformed, starting empty");
                Vec::new()
            }
        }
    }

    async fn persist(&self, symbol: &str, points: &[f64]) -> Result<(), HistoryError> {
        let path = self.path_for(symbol);
        let tmp = path.with_extension("json.tmp");
        let body = serde_json::to_string(points)?;

        let write_err = |source| HistoryError::Write {
            path: path.clone(),
            source,
        };

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(write_err)?;
        tokio::fs::write(&tmp, body).await.map_err(write_err)?;
        tokio::fs::rename(&tmp, &path).await.map_err(write_err)?;

        debug!(path = %path.display(), points = points.len(), "history persisted");
        Ok(())
    }
}
