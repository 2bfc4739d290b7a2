//! Lead Stream Service: binary entrypoint
//! Boots the Axum HTTP server, wiring routes, shared state, and the periodic
//! ingest scheduler.

use shuttle_axum::ShuttleAxum;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lead_stream::config;

/// Compact tracing logs. `RUST_LOG` wins over the built-in filter.
fn enable_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lead_stream=info,engine=info,ingest=info,api=info,warn"));

    // Shuttle may already have installed a subscriber; keep theirs if so.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    enable_tracing();

    let cfg = config::load_default()?;
    tracing::info!(?cfg, "stream config loaded");

    // The scheduler runs for the process lifetime; dropping the handle detaches it.
    let (router, _scheduler) = lead_stream::app(&cfg)?;

    Ok(router.into())
}
