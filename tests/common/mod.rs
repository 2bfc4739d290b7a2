// tests/common/mod.rs
// Shared fixtures: hand-built leads with controlled class/company.
#![allow(dead_code)]

use lead_stream::factory::{create_with, status_for};
use lead_stream::{Lead, LeadId, PriorityClass};
use rand::{rngs::StdRng, SeedableRng};

/// A consistent lead with the given id/class/company, other fields seeded.
pub fn lead(id: &str, class: PriorityClass, company: &str) -> Lead {
    let mut rng = StdRng::seed_from_u64(id.len() as u64 * 31 + company.len() as u64);
    let mut l = create_with(&mut rng);
    l.id = LeadId::new(id);
    l.company = company.to_string();
    l.priority_class = class;
    l.status = status_for(&mut rng, class);
    l
}

/// Nine leads, newest first: 4 hot, 3 warm, 1 new, 1 closed.
pub fn nine_leads() -> Vec<Lead> {
    use PriorityClass::*;
    vec![
        lead("h1", Hot, "Acme Corp"),
        lead("w1", Warm, "TechGrowth"),
        lead("h2", Hot, "Global Solutions"),
        lead("n1", New, "Innovate Inc"),
        lead("h3", Hot, "Quantum Systems"),
        lead("w2", Warm, "Apex Industries"),
        lead("c1", Closed, "Stellar Tech"),
        lead("h4", Hot, "Horizon Software"),
        lead("w3", Warm, "Pinnacle Solutions"),
    ]
}
