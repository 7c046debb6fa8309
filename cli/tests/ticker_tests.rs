
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use market::history::{DEFAULT_CAPACITY, JsonFileHistoryStore};
use market::position::Position;
use ticker::format::AnsiFormatter;
use ticker::report::REPORT_HEIGHT;
use ticker::ticker::{TickError, Ticker};

use mock_provider::ScriptedProvider;
use mock_store::InMemoryHistoryStore;

/// Cloneable stdout stand-in.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.0.lock().unwrap());
        String::from_utf8(bytes).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

async fn ticker_with(
    provider: ScriptedProvider,
    store: InMemoryHistoryStore,
    out: SharedBuf,
) -> Ticker<ScriptedProvider, InMemoryHistoryStore, SharedBuf> {
    Ticker::bootstrap(
        provider,
        store,
        "EQPT",
        DEFAULT_CAPACITY,
        Position::new(100.0, 10.0),
        Box::new(AnsiFormatter::new(false)),
        out,
    )
    .await
}

#[tokio::test]
async fn tick_appends_persists_and_renders() {
    let provider = ScriptedProvider::new(vec![Ok(12.0)]);
    let store = InMemoryHistoryStore::default();
    let out = SharedBuf::default();
    let mut ticker = ticker_with(provider, store.clone(), out.clone()).await;

    let outcome = ticker.tick().await.unwrap();

    assert_eq!(outcome.price, 12.0);
    assert_eq!(outcome.points, 1);
    assert_eq!(store.stored("EQPT"), Some(vec![12.0]));

    let printed = out.take();
    assert_eq!(printed.lines().count(), REPORT_HEIGHT);
    assert!(printed.contains("Position Value:     $1,200.00"));
    assert!(printed.contains("Unrealized P/L:     $200.00 (20.00%)"));
    assert!(printed.contains("Today's $ Change:   $25.00"));
    assert!(!printed.contains("\x1b["));
}

#[tokio::test]
async fn second_tick_redraws_in_place() {
    let provider = ScriptedProvider::new(vec![Ok(12.0), Ok(12.5)]);
    let out = SharedBuf::default();
    let mut ticker = ticker_with(provider, InMemoryHistoryStore::default(), out.clone()).await;

    ticker.tick().await.unwrap();
    out.take();
    ticker.tick().await.unwrap();

    let printed = out.take();
    assert!(printed.starts_with(&format!("\x1b[{REPORT_HEIGHT}A\x1b[J")));
    assert!(printed.contains("Price Trend:        LH ▲"));
}

#[tokio::test]
async fn restored_history_feeds_the_sparkline() {
    let provider = ScriptedProvider::new(vec![Ok(9.0)]);
    let store = InMemoryHistoryStore::seeded("EQPT", vec![5.0, 1.0, 9.5]);
    let out = SharedBuf::default();
    let mut ticker = ticker_with(provider, store.clone(), out.clone()).await;

    assert_eq!(ticker.history().points(), vec![5.0, 1.0, 9.5]);

    ticker.tick().await.unwrap();

    assert_eq!(store.stored("EQPT"), Some(vec![5.0, 1.0, 9.5, 9.0]));
    // 5 → floor(4/8.5*7)=3, 9 → floor(8/8.5*7)=6
    assert!(out.take().contains("Price Trend:        ▄LH▇ ▼"));
}

#[tokio::test]
async fn failed_fetch_leaves_history_untouched() {
    let provider = ScriptedProvider::new(vec![Ok(12.0), Err("upstream 503"), Ok(13.0)]);
    let store = InMemoryHistoryStore::default();
    let out = SharedBuf::default();
    let mut ticker = ticker_with(provider.clone(), store.clone(), out.clone()).await;

    ticker.tick().await.unwrap();
    out.take();

    let err = ticker.tick().await.unwrap_err();
    assert!(matches!(err, TickError::Fetch(_)));
    assert!(err.to_string().contains("upstream 503"));
    assert_eq!(ticker.history().points(), vec![12.0]);
    assert_eq!(store.stored("EQPT"), Some(vec![12.0]));
    assert_eq!(out.take(), "");

    ticker.tick().await.unwrap();
    assert_eq!(ticker.history().points(), vec![12.0, 13.0]);
    assert_eq!(provider.calls(), 3);
}

#[tokio::test]
async fn failed_persist_skips_render_and_recovers() {
    let provider = ScriptedProvider::new(vec![Ok(12.0), Ok(12.5), Ok(13.0)]);
    let store = InMemoryHistoryStore::default();
    let out = SharedBuf::default();
    let mut ticker = ticker_with(provider, store.clone(), out.clone()).await;

    ticker.tick().await.unwrap();
    out.take();

    store.fail_writes(true);
    let err = ticker.tick().await.unwrap_err();
    assert!(matches!(err, TickError::Persist(_)));
    assert_eq!(out.take(), "");
    assert_eq!(store.stored("EQPT"), Some(vec![12.0]));

    store.fail_writes(false);
    ticker.tick().await.unwrap();
    assert_eq!(store.stored("EQPT"), Some(vec![12.0, 12.5, 13.0]));
}

#[tokio::test]
async fn failed_tick_makes_next_frame_fresh() {
    let provider = ScriptedProvider::new(vec![Ok(12.0), Err("timeout"), Ok(13.0)]);
    let out = SharedBuf::default();
    let mut ticker = ticker_with(provider, InMemoryHistoryStore::default(), out.clone()).await;

    assert!(ticker.run_once().await);
    assert!(!ticker.run_once().await);
    out.take();
    assert!(ticker.run_once().await);

    assert!(!out.take().starts_with("\x1b["));
}

#[tokio::test]
async fn history_stays_bounded_over_many_ticks() {
    let prices: Vec<Result<f64, &str>> = (1..=45).map(|i| Ok(f64::from(i))).collect();
    let provider = ScriptedProvider::new(prices);
    let store = InMemoryHistoryStore::default();
    let mut ticker = ticker_with(provider, store.clone(), SharedBuf::default()).await;

    for _ in 0..45 {
        ticker.tick().await.unwrap();
    }

    let stored = store.stored("EQPT").unwrap();
    assert_eq!(stored.len(), DEFAULT_CAPACITY);
    assert_eq!(stored.first(), Some(&16.0));
    assert_eq!(stored.last(), Some(&45.0));
}

#[tokio::test(start_paused = true)]
async fn run_ticks_on_schedule_until_shutdown() {
    let provider = ScriptedProvider::new(vec![Ok(10.0), Ok(11.0), Ok(12.0), Ok(13.0)]);
    let store = InMemoryHistoryStore::default();
    let mut ticker = ticker_with(provider.clone(), store.clone(), SharedBuf::default()).await;

    // Ticks at t=0s, 5s and 10s; shutdown at 12s.
    ticker
        .run(
            Duration::from_secs(5),
            tokio::time::sleep(Duration::from_secs(12)),
        )
        .await;

    assert_eq!(provider.calls(), 3);
    assert_eq!(store.stored("EQPT"), Some(vec![10.0, 11.0, 12.0]));
}

#[tokio::test]
async fn works_against_the_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let out = SharedBuf::default();

    {
        let mut ticker = Ticker::bootstrap(
            ScriptedProvider::new(vec![Ok(12.0), Ok(12.5)]),
            JsonFileHistoryStore::new(dir.path()),
            "EQPT",
            DEFAULT_CAPACITY,
            Position::new(10.0, 10.0),
            Box::new(AnsiFormatter::new(false)),
            out.clone(),
        )
        .await;
        ticker.tick().await.unwrap();
        ticker.tick().await.unwrap();
    }

    let restarted = Ticker::bootstrap(
        ScriptedProvider::new(vec![Ok(13.0)]),
        JsonFileHistoryStore::new(dir.path()),
        "EQPT",
        DEFAULT_CAPACITY,
        Position::new(10.0, 10.0),
        Box::new(AnsiFormatter::new(false)),
        out,
    )
    .await;

    assert_eq!(restarted.history().points(), vec![12.0, 12.5]);
}
