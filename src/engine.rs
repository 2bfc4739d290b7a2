//! # Lead Engine
//! The facade the presentation layer talks to: ingest ticks, queries,
//! summary figures and selection, over one owned stream.
//!
//! Single writer (the ingest scheduler), any number of readers. Readers copy
//! a snapshot under the read lock and do all filtering after releasing it.

use metrics::{counter, gauge};
use parking_lot::{Mutex, RwLock};

use crate::config::StreamConfig;
use crate::factory::LeadFactory;
use crate::lead::{Lead, LeadId};
use crate::query::{self, LeadView, QueryError, Tab};
use crate::seed::seed_leads;
use crate::selection::{Selection, SelectionController};
use crate::stream::{LeadStream, Snapshot};
use crate::summary::{self, DashboardSummary};

#[derive(Debug)]
pub struct LeadEngine {
    stream: RwLock<LeadStream>,
    factory: Mutex<LeadFactory>,
    selection: Mutex<SelectionController>,
    target_value: u64,
}

impl LeadEngine {
    pub fn new(stream: LeadStream, factory: LeadFactory, target_value: u64) -> Self {
        Self {
            stream: RwLock::new(stream),
            factory: Mutex::new(factory),
            selection: Mutex::new(SelectionController::new()),
            target_value,
        }
    }

    pub fn from_config(cfg: &StreamConfig) -> Self {
        let stream = if cfg.with_seed_leads {
            LeadStream::with_seed(cfg.capacity, seed_leads())
        } else {
            LeadStream::new(cfg.capacity)
        };
        tracing::info!(
            target: "engine",
            capacity = stream.capacity(),
            seeded = stream.len(),
            rng_seed = ?cfg.seed,
            "lead engine initialized"
        );
        Self::new(stream, LeadFactory::new(cfg.seed), cfg.target_value)
    }

    /// One factory creation plus one ingestion. Returns the new lead's id.
    pub fn ingest_tick(&self) -> LeadId {
        let lead = self.factory.lock().create();
        let id = lead.id.clone();
        self.ingest(lead);
        id
    }

    /// Feed an externally produced lead into the stream. Overflow is evicted
    /// from the tail and an id already in the stream is replaced. Records
    /// breaking the lead invariants are dropped; returns whether `lead` was
    /// stored.
    pub fn ingest(&self, lead: Lead) -> bool {
        let violations = lead.invariant_violations();
        if !violations.is_empty() {
            counter!("leads_rejected_total").increment(1);
            tracing::warn!(target: "ingest", id = %lead.id, ?violations, "inconsistent lead rejected");
            return false;
        }

        let id = lead.id.clone();
        let class = lead.priority_class;
        let (replaced, evicted, len) = {
            let mut s = self.stream.write();
            let replaced = s.contains(&id);
            let evicted = s.ingest(lead);
            (replaced, evicted, s.len())
        };

        if replaced {
            tracing::warn!(target: "ingest", %id, "lead id already in stream, replaced");
        }
        counter!("leads_ingested_total").increment(1);
        counter!("leads_evicted_total").increment(evicted.len() as u64);
        gauge!("lead_stream_len").set(len as f64);

        tracing::debug!(target: "ingest", %id, %class, len, evicted = evicted.len(), "lead ingested");
        for old in &evicted {
            tracing::debug!(target: "ingest", id = %old.id, "lead evicted");
        }
        true
    }

    pub fn snapshot(&self) -> Snapshot {
        self.stream.read().snapshot()
    }

    pub fn lead(&self, id: &LeadId) -> Option<Lead> {
        self.stream.read().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.stream.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.stream.read().is_empty()
    }

    pub fn query(
        &self,
        tab: Tab,
        search: &str,
        page: usize,
        page_size: usize,
    ) -> Result<LeadView, QueryError> {
        let snap = self.snapshot();
        counter!("lead_queries_total").increment(1);
        query::view(&snap, tab, search, page, page_size)
    }

    pub fn metrics(&self) -> DashboardSummary {
        summary::summarize(&self.snapshot(), self.target_value)
    }

    /// Select `id` if it is currently in the stream. Unknown ids leave the
    /// selection untouched and return `None`.
    pub fn select(&self, id: &LeadId) -> Option<Lead> {
        let lead = self.lead(id)?;
        self.selection.lock().select(&lead);
        Some(lead)
    }

    pub fn clear_selection(&self) {
        self.selection.lock().clear();
    }

    pub fn selection_state(&self) -> Selection {
        self.selection.lock().state().clone()
    }

    /// Selected lead resolved against the live stream; `None` once evicted.
    pub fn current_selection(&self) -> Option<Lead> {
        let snap = self.snapshot();
        self.selection.lock().resolve(&snap).cloned()
    }
}
