//! # Lead model
//! Records held by the stream: identity, priority class, the single active
//! status and the research signals attached at creation.
//!
//! A lead is immutable once built. Status and class are chosen together by
//! the factory and never transition afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier, stable for the lifetime of a lead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(String);

impl LeadId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LeadId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Category of a research signal. At most one signal per kind on a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Hire,
    Funding,
    Executive,
    Social,
    Tech,
    News,
}

impl SignalKind {
    pub const ALL: [SignalKind; 6] = [
        SignalKind::Hire,
        SignalKind::Funding,
        SignalKind::Executive,
        SignalKind::Social,
        SignalKind::Tech,
        SignalKind::News,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SignalKind::Hire => "Hire",
            SignalKind::Funding => "Funding",
            SignalKind::Executive => "Executive",
            SignalKind::Social => "Social",
            SignalKind::Tech => "Tech",
            SignalKind::News => "News",
        }
    }
}

/// Short contextual fact about a lead's company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchSignal {
    pub kind: SignalKind,
    pub title: String,
    pub detail: String,
    /// Relative recency marker ("5d ago"), fixed at creation.
    pub age: String,
}

/// Most recent recorded interaction. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LeadStatus {
    ViewedDemo { time: String },
    OpenedEmail { time: String },
    DownloadedWhitepaper,
    FormSubmission { time: String },
    BookedDemo { time: String },
    ClosedDeal { amount: u64, time: String },
}

impl LeadStatus {
    /// Wire tag of the active variant.
    pub fn kind(&self) -> &'static str {
        match self {
            LeadStatus::ViewedDemo { .. } => "viewed_demo",
            LeadStatus::OpenedEmail { .. } => "opened_email",
            LeadStatus::DownloadedWhitepaper => "downloaded_whitepaper",
            LeadStatus::FormSubmission { .. } => "form_submission",
            LeadStatus::BookedDemo { .. } => "booked_demo",
            LeadStatus::ClosedDeal { .. } => "closed_deal",
        }
    }

    pub fn is_closed_deal(&self) -> bool {
        matches!(self, LeadStatus::ClosedDeal { .. })
    }

    /// Human label for list rows, e.g. "Viewed demo (2h ago)" or "$12,000 (3d ago)".
    pub fn label(&self) -> String {
        match self {
            LeadStatus::ViewedDemo { time } => format!("Viewed demo ({time})"),
            LeadStatus::OpenedEmail { time } => format!("Opened email ({time})"),
            LeadStatus::DownloadedWhitepaper => "Downloaded whitepaper".to_string(),
            LeadStatus::FormSubmission { time } => format!("Form submission ({time})"),
            LeadStatus::BookedDemo { time } => format!("Booked demo ({time})"),
            LeadStatus::ClosedDeal { amount, time } => {
                format!("${} ({time})", group_thousands(*amount))
            }
        }
    }
}

/// Coarse triage bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityClass {
    Hot,
    Warm,
    New,
    Closed,
}

impl fmt::Display for PriorityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PriorityClass::Hot => "Hot",
            PriorityClass::Warm => "Warm",
            PriorityClass::New => "New",
            PriorityClass::Closed => "Closed",
        };
        f.write_str(s)
    }
}

/// A prospective customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub company: String,
    pub position: String,
    pub priority_class: PriorityClass,
    pub status: LeadStatus,
    /// Estimated deal size in whole currency units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contacted: Option<String>,
    /// Relevance order as generated.
    pub signals: Vec<ResearchSignal>,
}

pub const MIN_SIGNALS: usize = 1;
pub const MAX_SIGNALS: usize = 3;

impl Lead {
    /// Lists every record-level invariant this lead breaks (empty when consistent).
    pub fn invariant_violations(&self) -> Vec<&'static str> {
        let mut out = Vec::new();

        let closed_class = self.priority_class == PriorityClass::Closed;
        if closed_class != self.status.is_closed_deal() {
            out.push("closed class must pair with closed_deal status");
        }

        if !(MIN_SIGNALS..=MAX_SIGNALS).contains(&self.signals.len()) {
            out.push("signal count outside 1..=3");
        }

        let mut seen = Vec::with_capacity(self.signals.len());
        for s in &self.signals {
            if seen.contains(&s.kind) {
                out.push("duplicate signal kind");
                break;
            }
            seen.push(s.kind);
        }

        if self.id.as_str().is_empty() {
            out.push("empty id");
        }
        out
    }

    pub fn is_consistent(&self) -> bool {
        self.invariant_violations().is_empty()
    }
}

/// 12345 -> "12,345"
pub(crate) fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
