//! # Research signals
//! Synthetic company facts attached to leads: one to three per lead, each of
//! a distinct kind, title drawn from a per-kind pool.

use rand::Rng;

use crate::lead::{ResearchSignal, SignalKind, MAX_SIGNALS, MIN_SIGNALS};

const HIRE_POOL: &[&str] = &[
    "Hired Azure Cosmos DB specialist",
    "Brought on ex-Google ML engineer",
    "New AWS architect joined",
    "Hired Salesforce integration expert",
    "Brought on Kubernetes specialist",
    "New React Native developer",
    "Hired former Microsoft AI researcher",
    "New data science team lead",
];

const FUNDING_POOL: &[&str] = &[
    "Raised $12M Series A",
    "Closed $25M funding round",
    "Secured $8M seed funding",
    "Announced $40M Series B",
    "Raised $5M from strategic investors",
    "Closed $15M growth round",
    "Secured $30M in new funding",
];

const EXECUTIVE_POOL: &[&str] = &[
    "New VP of Engineering",
    "Appointed CTO from Amazon",
    "New Chief Product Officer",
    "Hired VP of Sales from competitor",
    "New CIO with cloud expertise",
    "Appointed Director of AI",
    "New Head of Customer Success",
];

const SOCIAL_POOL: &[&str] = &[
    "LinkedIn post about digital transformation",
    "CEO shared article on cloud migration",
    "Posted about AI implementation success",
    "Shared case study on data analytics",
    "LinkedIn update on team expansion",
    "Posted about industry award win",
    "Shared thoughts on remote work tools",
];

const TECH_POOL: &[&str] = &[
    "Moving from Oracle to cloud databases",
    "Implementing microservices architecture",
    "Exploring AI for customer service",
    "Migrating to containerized infrastructure",
    "Evaluating new CRM solutions",
    "Investing in data analytics platform",
    "Building internal developer platform",
];

const NEWS_POOL: &[&str] = &[
    "Featured in TechCrunch article",
    "Mentioned in industry report",
    "Announced new product launch",
    "Opening new office location",
    "Partnered with major tech vendor",
    "Won industry innovation award",
    "Expanding into new market segment",
];

/// Oldest signal age in days.
pub const MAX_AGE_DAYS: u32 = 30;

/// Title pool for a kind.
pub fn pool(kind: SignalKind) -> &'static [&'static str] {
    match kind {
        SignalKind::Hire => HIRE_POOL,
        SignalKind::Funding => FUNDING_POOL,
        SignalKind::Executive => EXECUTIVE_POOL,
        SignalKind::Social => SOCIAL_POOL,
        SignalKind::Tech => TECH_POOL,
        SignalKind::News => NEWS_POOL,
    }
}

/// One-sentence elaboration for a kind. Only hires name the company.
pub fn detail(kind: SignalKind, company: &str) -> String {
    match kind {
        SignalKind::Hire => format!(
            "{company} recently strengthened their technical team with this strategic hire."
        ),
        SignalKind::Funding => {
            "This new capital will accelerate their product development and market expansion."
                .to_string()
        }
        SignalKind::Executive => {
            "This leadership change signals their focus on technical innovation and growth."
                .to_string()
        }
        SignalKind::Social => {
            "This indicates their current priorities and challenges they're addressing."
                .to_string()
        }
        SignalKind::Tech => {
            "This technology shift presents an opportunity for our solution to add value."
                .to_string()
        }
        SignalKind::News => {
            "This recent development shows their current business trajectory and focus."
                .to_string()
        }
    }
}

/// Uniform pick from a non-empty static pool.
pub(crate) fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// Build 1–3 signals with distinct kinds for `company`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, company: &str) -> Vec<ResearchSignal> {
    let n = rng.random_range(MIN_SIGNALS..=MAX_SIGNALS);
    let mut kinds: Vec<SignalKind> = Vec::with_capacity(n);

    // Rejection sampling: redraw until the kind is new for this lead.
    while kinds.len() < n {
        let k = SignalKind::ALL[rng.random_range(0..SignalKind::ALL.len())];
        if !kinds.contains(&k) {
            kinds.push(k);
        }
    }

    let mut out = Vec::with_capacity(n);
    for kind in kinds {
        let title = pick(rng, pool(kind)).to_string();
        let days = rng.random_range(1..=MAX_AGE_DAYS);
        out.push(ResearchSignal {
            kind,
            title,
            detail: detail(kind, company),
            age: format!("{days}d ago"),
        });
    }
    out
}
