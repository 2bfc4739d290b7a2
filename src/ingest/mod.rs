// src/ingest/mod.rs
//! Periodic ingestion: a ticker decides *when*, the engine decides *what*.

pub mod scheduler;
pub mod ticker;

use metrics::{describe_counter, describe_gauge};
use once_cell::sync::OnceCell;

pub use scheduler::{spawn_ingest_scheduler, SchedulerHandle};
pub use ticker::{IntervalTicker, ManualTicker, TickSender, Ticker};

/// One-time metrics registration (so series show up on /metrics).
pub fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("leads_ingested_total", "Leads added to the stream.");
        describe_counter!(
            "leads_evicted_total",
            "Leads dropped from the tail by capacity pressure."
        );
        describe_counter!(
            "leads_rejected_total",
            "External leads dropped for breaking record invariants."
        );
        describe_counter!("lead_queries_total", "Filtered/paginated views served.");
        describe_counter!("ingest_ticks_total", "Scheduler ticks handled.");
        describe_gauge!("lead_stream_len", "Current number of leads in the stream.");
        describe_gauge!(
            "ingest_last_tick_ts",
            "Unix ts when the ingest scheduler last ran."
        );
    });
}
