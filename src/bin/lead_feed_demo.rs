//! Demo that runs a fast synthetic feed for a few ticks and prints the
//! high-priority view plus the dashboard summary.
//!
//! Usage: `lead_feed_demo [ticks] [period_ms]` (defaults: 8 ticks, 200 ms).

use std::sync::Arc;
use std::time::Duration;

use lead_stream::ingest::{spawn_ingest_scheduler, IntervalTicker};
use lead_stream::{config, LeadEngine, Tab};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_target(false).init();

    let mut args = std::env::args().skip(1);
    let ticks = args.next().map(|s| s.parse::<u32>()).transpose()?.unwrap_or(8);
    let period_ms = args.next().map(|s| s.parse::<u64>()).transpose()?.unwrap_or(200);

    let cfg = config::load_default()?;
    let engine = Arc::new(LeadEngine::from_config(&cfg));

    let period = Duration::from_millis(period_ms);
    let scheduler = spawn_ingest_scheduler(engine.clone(), IntervalTicker::new(period));

    // half a period of slack so the last tick lands before we stop
    tokio::time::sleep(period * ticks + period / 2).await;
    scheduler.stop();

    let view = engine.query(Tab::HighPriority, "", 1, cfg.page_size)?;
    println!(
        "high-priority: {} of {} (pages: {})",
        view.items.len(),
        view.total_count,
        view.total_pages
    );
    for lead in &view.items {
        println!(
            "  {:<8} {:<20} {:<20} {:<18} {}",
            lead.priority_class.to_string(),
            lead.name,
            lead.company,
            lead.position,
            lead.status.label()
        );
    }

    let s = engine.metrics();
    println!(
        "leads={} hot={} closed={} value=${} / ${} ({:.1}%)",
        s.total_leads,
        s.hot_count,
        s.closed_count,
        s.total_value,
        s.target_value,
        s.progress_percent_clamped()
    );

    println!("lead-feed-demo done");
    Ok(())
}
