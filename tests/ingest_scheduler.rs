// tests/ingest_scheduler.rs
use std::sync::Arc;
use std::time::Duration;

use lead_stream::ingest::{spawn_ingest_scheduler, IntervalTicker, ManualTicker};
use lead_stream::{LeadEngine, StreamConfig};

fn empty_engine(capacity: usize) -> Arc<LeadEngine> {
    let cfg = StreamConfig {
        capacity,
        with_seed_leads: false,
        seed: Some(10),
        ..StreamConfig::default()
    };
    Arc::new(LeadEngine::from_config(&cfg))
}

#[tokio::test(start_paused = true)]
async fn interval_scheduler_ingests_once_per_period() {
    let engine = empty_engine(50);
    let handle = spawn_ingest_scheduler(
        engine.clone(),
        IntervalTicker::new(Duration::from_secs(10)),
    );

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(engine.len(), 0, "first tick waits a full period");

    tokio::time::sleep(Duration::from_secs(30)).await; // t = 35s
    assert_eq!(engine.len(), 3);

    handle.stop();
    handle.stop(); // idempotent
    tokio::time::sleep(Duration::from_secs(100)).await;
    assert_eq!(engine.len(), 3, "no ingestion after stop");
    assert!(handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn capacity_bounds_a_long_running_feed() {
    let engine = empty_engine(5);
    let handle = spawn_ingest_scheduler(
        engine.clone(),
        IntervalTicker::new(Duration::from_secs(10)),
    );
    tokio::time::sleep(Duration::from_secs(10 * 40 + 5)).await;
    assert_eq!(engine.len(), 5);
    handle.stop();
}

#[tokio::test]
async fn manual_ticker_drives_exact_ingests() {
    let engine = empty_engine(50);
    let (ticker, tx) = ManualTicker::new();
    let handle = spawn_ingest_scheduler(engine.clone(), ticker);

    for _ in 0..4 {
        assert!(tx.tick());
    }
    drop(tx);

    // ticker exhausted after the queued ticks; the task ends on its own
    handle.join().await;
    assert_eq!(engine.len(), 4);
}
