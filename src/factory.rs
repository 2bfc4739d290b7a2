//! # Lead Factory
//! Builds complete, internally consistent synthetic leads.
//!
//! Stands in for a CRM/webhook feed. Every lead gets a class from
//! [`crate::classify::PRIORITY_DISTRIBUTION`], a status compatible with that
//! class, 1–3 research signals and a fresh UUID drawn from the factory RNG
//! (so seeded factories are fully reproducible).

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::classify;
use crate::lead::{Lead, LeadId, LeadStatus, PriorityClass};
use crate::signals::{self, pick};

const COMPANIES: &[&str] = &[
    "Acme Corp",
    "TechGrowth",
    "Global Solutions",
    "Innovate Inc",
    "Quantum Systems",
    "Apex Industries",
    "Stellar Tech",
    "Horizon Software",
    "Pinnacle Solutions",
    "Elevate Digital",
    "Fusion Technologies",
    "Catalyst Corp",
];

const POSITIONS: &[&str] = &[
    "VP Sales",
    "CTO",
    "Director",
    "CMO",
    "CEO",
    "COO",
    "Sales Manager",
    "Product Manager",
    "Marketing Director",
    "Head of Growth",
];

const FIRST_NAMES: &[&str] = &[
    "Sarah", "Michael", "Alex", "Emily", "David", "Jessica", "James", "Olivia", "Daniel",
    "Sophia", "Robert", "Emma", "William", "Ava", "John", "Isabella", "Richard", "Mia", "Henry",
    "Joanna", "Francois", "Anderson", "Mike", "Victor", "Ali", "Jenny", "Sean",
];

const LAST_NAMES: &[&str] = &[
    "Johnson", "Chen", "Rodriguez", "Watson", "Smith", "Brown", "Davis", "Miller", "Wilson",
    "Moore", "Taylor", "Anderson", "Thomas", "Jackson", "White", "Harris", "Martin", "Thompson",
    "O'Larry", "Stuart", "Mehmud", "Yang", "Carr", "Johanson", "Heid", "Khaled",
];

/// Estimated deal value range, `[min, max)`.
pub const VALUE_RANGE: std::ops::Range<u64> = 3_000..13_000;
/// Closed deal amount range, `[min, max)`.
pub const CLOSED_AMOUNT_RANGE: std::ops::Range<u64> = 10_000..60_000;
/// Chance a lead carries a "last contacted" label.
pub const LAST_CONTACTED_PROBABILITY: f64 = 0.3;

/// Seedable lead generator. Owns its RNG; not shared between threads
/// without an outer lock.
#[derive(Debug)]
pub struct LeadFactory {
    rng: StdRng,
}

impl LeadFactory {
    /// `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    pub fn create(&mut self) -> Lead {
        create_with(&mut self.rng)
    }
}

impl Default for LeadFactory {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Build one lead from the given random source.
pub fn create_with<R: Rng + ?Sized>(rng: &mut R) -> Lead {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    let company = pick(rng, COMPANIES);
    let position = pick(rng, POSITIONS);
    let value = rng.random_range(VALUE_RANGE);

    let priority_class = classify::sample_priority(rng);
    let status = status_for(rng, priority_class);

    let last_contacted = if rng.random_bool(LAST_CONTACTED_PROBABILITY) {
        Some(format!("{} months ago", rng.random_range(1..=2u32)))
    } else {
        None
    };

    let signals = signals::generate(rng, company);
    let id = fresh_id(rng);

    Lead {
        id,
        name: format!("{first} {last}"),
        company: company.to_string(),
        position: position.to_string(),
        priority_class,
        status,
        value: Some(value),
        last_contacted,
        signals,
    }
}

/// Status drawn conditionally on the class.
pub fn status_for<R: Rng + ?Sized>(rng: &mut R, class: PriorityClass) -> LeadStatus {
    match class {
        PriorityClass::Hot => {
            let time = recent_hours(rng);
            if rng.random_bool(0.5) {
                LeadStatus::ViewedDemo { time }
            } else {
                LeadStatus::BookedDemo { time }
            }
        }
        PriorityClass::Warm => {
            if rng.random_bool(0.5) {
                LeadStatus::OpenedEmail {
                    time: recent_days(rng),
                }
            } else {
                LeadStatus::DownloadedWhitepaper
            }
        }
        PriorityClass::New => LeadStatus::FormSubmission {
            time: recent_days(rng),
        },
        PriorityClass::Closed => LeadStatus::ClosedDeal {
            amount: rng.random_range(CLOSED_AMOUNT_RANGE),
            time: recent_days(rng),
        },
    }
}

/// "Hh ago", H in [0, 24).
fn recent_hours<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}h ago", rng.random_range(0..24u32))
}

/// "Dd ago", D in [1, 7].
fn recent_days<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}d ago", rng.random_range(1..=7u32))
}

fn fresh_id<R: Rng + ?Sized>(rng: &mut R) -> LeadId {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    let id = uuid::Builder::from_random_bytes(bytes).into_uuid();
    LeadId::new(id.to_string())
}
