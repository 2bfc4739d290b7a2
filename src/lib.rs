// src/lib.rs
// Public library surface for integration tests and the binaries.

pub mod api;
pub mod classify;
pub mod config;
pub mod engine;
pub mod factory;
pub mod ingest;
pub mod lead;
pub mod metrics;
pub mod query;
pub mod seed;
pub mod selection;
pub mod signals;
pub mod stream;
pub mod summary;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::config::StreamConfig;
pub use crate::engine::LeadEngine;
pub use crate::lead::{Lead, LeadId, LeadStatus, PriorityClass, ResearchSignal, SignalKind};
pub use crate::query::{LeadView, QueryError, Tab};
pub use crate::summary::DashboardSummary;

use crate::ingest::{spawn_ingest_scheduler, IntervalTicker, SchedulerHandle};
use crate::metrics::Metrics;

/// Build shared state and the router from `cfg`, start the periodic ingest
/// scheduler, and install Prometheus telemetry when possible.
///
/// Must be called inside a Tokio runtime. A telemetry failure is logged and
/// leaves `/metrics` unmounted; it never blocks startup.
pub fn app(cfg: &StreamConfig) -> anyhow::Result<(axum::Router, SchedulerHandle)> {
    cfg.validate()?;

    let mut state = AppState::from_config(cfg);
    match Metrics::init(cfg.capacity) {
        Ok(m) => state = state.with_metrics(m),
        Err(e) => tracing::warn!(error = ?e, "prometheus telemetry disabled"),
    }

    let scheduler = spawn_ingest_scheduler(
        state.engine.clone(),
        IntervalTicker::new(cfg.tick_interval()),
    );
    tracing::info!(
        target: "ingest",
        period_secs = cfg.tick_interval_secs,
        "ingest scheduler started"
    );

    Ok((router(state), scheduler))
}
