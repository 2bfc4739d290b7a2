// src/ingest/ticker.rs
//! Tick sources for the ingest scheduler.
//!
//! `IntervalTicker` follows tokio time, so tests can drive it with paused
//! time. `ManualTicker` fires only when its sender says so.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

#[async_trait::async_trait]
pub trait Ticker: Send {
    /// Wait for the next tick. `false` means the source is exhausted and the
    /// scheduler should stop.
    async fn tick(&mut self) -> bool;
}

/// Fixed-period ticks; the first one fires one full period after creation.
/// A zero period is raised to 1 ms.
#[derive(Debug)]
pub struct IntervalTicker {
    inner: Interval,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        let mut inner = interval_at(Instant::now() + period, period);
        inner.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { inner }
    }

    pub fn period(&self) -> Duration {
        self.inner.period()
    }
}

#[async_trait::async_trait]
impl Ticker for IntervalTicker {
    async fn tick(&mut self) -> bool {
        self.inner.tick().await;
        true
    }
}

/// Ticks on demand. Dropping every [`TickSender`] exhausts the ticker.
#[derive(Debug)]
pub struct ManualTicker {
    rx: mpsc::UnboundedReceiver<()>,
}

#[derive(Debug, Clone)]
pub struct TickSender {
    tx: mpsc::UnboundedSender<()>,
}

impl TickSender {
    /// Returns `false` if the ticker is gone.
    pub fn tick(&self) -> bool {
        self.tx.send(()).is_ok()
    }
}

impl ManualTicker {
    pub fn new() -> (Self, TickSender) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { rx }, TickSender { tx })
    }
}

#[async_trait::async_trait]
impl Ticker for ManualTicker {
    async fn tick(&mut self) -> bool {
        self.rx.recv().await.is_some()
    }
}
