//! # Lead Stream
//! Bounded, newest-first collection of leads.
//!
//! `ingest` prepends and evicts from the tail once `capacity` is exceeded, so
//! eviction is FIFO by ingestion order. Ids stay unique: re-ingesting an id
//! already present replaces the old record and moves it to the front.
//! `snapshot` copies the current
//! contents into an immutable, cheaply clonable view; later ingests never
//! touch a snapshot already handed out.

use std::collections::VecDeque;
use std::ops::Deref;
use std::sync::Arc;

use crate::lead::{Lead, LeadId};

pub const DEFAULT_CAPACITY: usize = 50;

/// Point-in-time, read-only copy of the stream (newest first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(Arc<[Lead]>);

impl Snapshot {
    pub fn find(&self, id: &LeadId) -> Option<&Lead> {
        self.0.iter().find(|l| &l.id == id)
    }
}

impl Deref for Snapshot {
    type Target = [Lead];

    fn deref(&self) -> &[Lead] {
        &self.0
    }
}

impl From<Vec<Lead>> for Snapshot {
    fn from(v: Vec<Lead>) -> Self {
        Self(Arc::from(v))
    }
}

#[derive(Debug)]
pub struct LeadStream {
    leads: VecDeque<Lead>,
    capacity: usize,
}

impl LeadStream {
    /// Empty stream. A zero capacity is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            leads: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Stream pre-filled with `seed` (already newest first), cut to capacity.
    pub fn with_seed(capacity: usize, seed: Vec<Lead>) -> Self {
        let mut s = Self::new(capacity);
        s.leads.extend(seed.into_iter().take(s.capacity));
        s
    }

    /// Prepend `lead`, returning whatever fell off the tail (oldest last).
    ///
    /// A record with the same id is removed first; it is not reported as
    /// evicted.
    pub fn ingest(&mut self, lead: Lead) -> Vec<Lead> {
        if let Some(pos) = self.leads.iter().position(|l| l.id == lead.id) {
            self.leads.remove(pos);
        }

        self.leads.push_front(lead);
        let mut evicted = Vec::new();
        while self.leads.len() > self.capacity {
            if let Some(old) = self.leads.pop_back() {
                evicted.push(old);
            }
        }
        evicted
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self.leads.iter().cloned().collect::<Vec<_>>())
    }

    pub fn get(&self, id: &LeadId) -> Option<&Lead> {
        self.leads.iter().find(|l| &l.id == id)
    }

    pub fn contains(&self, id: &LeadId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for LeadStream {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::LeadFactory;

    #[test]
    fn ingest_prepends_and_bounds() {
        let mut f = LeadFactory::new(Some(5));
        let mut s = LeadStream::new(3);
        for i in 0..10 {
            let lead = f.create();
            let id = lead.id.clone();
            let evicted = s.ingest(lead);
            assert!(s.len() <= 3);
            assert_eq!(s.snapshot()[0].id, id);
            assert_eq!(evicted.len(), usize::from(i >= 3));
        }
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn snapshot_is_unaffected_by_later_ingest() {
        let mut f = LeadFactory::new(Some(6));
        let mut s = LeadStream::new(2);
        s.ingest(f.create());
        s.ingest(f.create());
        let before = s.snapshot();
        let before_ids: Vec<_> = before.iter().map(|l| l.id.clone()).collect();

        s.ingest(f.create());
        let after_ids: Vec<_> = before.iter().map(|l| l.id.clone()).collect();
        assert_eq!(before_ids, after_ids);
        assert!(before.find(&before_ids[1]).is_some());
        assert_ne!(s.snapshot()[0].id, before[0].id);
    }

    #[test]
    fn seed_is_truncated_to_capacity() {
        let s = LeadStream::with_seed(4, crate::seed::seed_leads());
        assert_eq!(s.len(), 4);
        assert_eq!(s.snapshot()[0].id.as_str(), "1");
        assert!(s.contains(&LeadId::new("4")));
        assert!(!s.contains(&LeadId::new("5")));
    }

    #[test]
    fn duplicate_id_replaces_and_moves_to_front() {
        let mut f = LeadFactory::new(Some(9));
        let mut s = LeadStream::new(5);
        let first = f.create();
        s.ingest(first.clone());
        s.ingest(f.create());
        s.ingest(f.create());

        let mut again = f.create();
        again.id = first.id.clone();
        let evicted = s.ingest(again.clone());

        assert!(evicted.is_empty());
        assert_eq!(s.len(), 3);
        let snap = s.snapshot();
        assert_eq!(snap[0], again);
        assert_eq!(snap.iter().filter(|l| l.id == first.id).count(), 1);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut f = LeadFactory::new(Some(8));
        let mut s = LeadStream::new(0);
        assert_eq!(s.capacity(), 1);
        s.ingest(f.create());
        s.ingest(f.create());
        assert_eq!(s.len(), 1);
    }
}
