//! Dashboard summary figures derived from a snapshot.
//!
//! Illustrative numbers only, not revenue accounting.

use serde::Serialize;

use crate::lead::{Lead, PriorityClass};

/// Total contract value goal the progress bar is measured against.
pub const DEFAULT_TARGET_VALUE: u64 = 812_500;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_leads: usize,
    pub closed_count: usize,
    pub hot_count: usize,
    /// Sum of `value` over every lead, missing values counted as 0.
    pub total_value: u64,
    pub target_value: u64,
    /// `total_value / target_value`, unclamped. 0 when the target is 0.
    pub progress_ratio: f64,
}

impl DashboardSummary {
    /// Progress in percent, clamped to `[0, 100]` for bounded indicators.
    pub fn progress_percent_clamped(&self) -> f64 {
        (self.progress_ratio * 100.0).clamp(0.0, 100.0)
    }
}

pub fn summarize(leads: &[Lead], target_value: u64) -> DashboardSummary {
    let mut closed_count = 0;
    let mut hot_count = 0;
    let mut total_value: u64 = 0;

    for l in leads {
        match l.priority_class {
            PriorityClass::Closed => closed_count += 1,
            PriorityClass::Hot => hot_count += 1,
            PriorityClass::Warm | PriorityClass::New => {}
        }
        total_value = total_value.saturating_add(l.value.unwrap_or(0));
    }

    let progress_ratio = if target_value == 0 {
        0.0
    } else {
        total_value as f64 / target_value as f64
    };

    DashboardSummary {
        total_leads: leads.len(),
        closed_count,
        hot_count,
        total_value,
        target_value,
        progress_ratio,
    }
}
