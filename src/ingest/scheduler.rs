// src/ingest/scheduler.rs
use metrics::{counter, gauge};
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::engine::LeadEngine;
use crate::ingest::{ensure_metrics_described, ticker::Ticker};

/// Handle to a running ingest task.
///
/// Dropping the handle detaches the task; call [`SchedulerHandle::stop`] to
/// end ingestion.
#[derive(Debug)]
pub struct SchedulerHandle {
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Stop further ingestion. Safe to call more than once.
    pub fn stop(&self) {
        if !self.task.is_finished() {
            tracing::info!(target: "ingest", "stopping ingest scheduler");
        }
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait until the task ends (ticker exhausted or stopped).
    pub async fn join(self) {
        if let Err(e) = self.task.await {
            if !e.is_cancelled() {
                tracing::warn!(target: "ingest", error = ?e, "ingest scheduler task failed");
            }
        }
    }
}

/// Spawn a task that calls [`LeadEngine::ingest_tick`] once per tick.
pub fn spawn_ingest_scheduler<T>(engine: Arc<LeadEngine>, mut ticker: T) -> SchedulerHandle
where
    T: Ticker + 'static,
{
    ensure_metrics_described();

    let task = tokio::spawn(async move {
        while ticker.tick().await {
            let id = engine.ingest_tick();
            let now = chrono::Utc::now().timestamp().max(0) as u64;

            counter!("ingest_ticks_total").increment(1);
            gauge!("ingest_last_tick_ts").set(now as f64);

            tracing::info!(
                target: "ingest",
                %id,
                len = engine.len(),
                "ingest tick"
            );
        }
        tracing::info!(target: "ingest", "ticker exhausted, scheduler finished");
    });

    SchedulerHandle { task }
}
