//! # Query Engine
//! Search → tab filter → paginate over a snapshot, in that order.
//!
//! Pure function of its inputs: the same snapshot and arguments always give
//! the same view. Invalid paging arguments are rejected, never clamped.

use serde::Serialize;
use std::str::FromStr;

use crate::lead::{Lead, PriorityClass};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Dashboard tab selecting which priority classes are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    HighPriority,
    NewLeads,
    ClosedDeals,
    AllLeads,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::HighPriority, Tab::NewLeads, Tab::ClosedDeals, Tab::AllLeads];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::HighPriority => "high-priority",
            Tab::NewLeads => "new-leads",
            Tab::ClosedDeals => "closed-deals",
            Tab::AllLeads => "all-leads",
        }
    }

    pub fn admits(self, class: PriorityClass) -> bool {
        match self {
            Tab::HighPriority => class == PriorityClass::Hot,
            Tab::NewLeads => class == PriorityClass::New,
            Tab::ClosedDeals => class == PriorityClass::Closed,
            Tab::AllLeads => true,
        }
    }
}

impl FromStr for Tab {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| QueryError::InvalidArgument(format!("unknown tab '{s}'")))
    }
}

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadView {
    pub items: Vec<Lead>,
    pub page: usize,
    pub page_size: usize,
    /// Matches across all pages.
    pub total_count: usize,
    pub total_pages: usize,
}

/// Case-insensitive substring match against name, company or position.
/// `needle` must already be lowercased; an empty needle matches everything.
fn matches_search(lead: &Lead, needle: &str) -> bool {
    needle.is_empty()
        || lead.name.to_lowercase().contains(needle)
        || lead.company.to_lowercase().contains(needle)
        || lead.position.to_lowercase().contains(needle)
}

/// Leads passing both the search and the tab predicate, in stream order.
pub fn filter<'a>(leads: &'a [Lead], tab: Tab, search: &str) -> Vec<&'a Lead> {
    let needle = search.to_lowercase();
    leads
        .iter()
        .filter(|l| matches_search(l, &needle))
        .filter(|l| tab.admits(l.priority_class))
        .collect()
}

/// Build the page `page` (1-based) of `page_size` items.
///
/// Pages past the end are empty, not errors. `total_pages` is 0 for an empty
/// result.
pub fn view(
    leads: &[Lead],
    tab: Tab,
    search: &str,
    page: usize,
    page_size: usize,
) -> Result<LeadView, QueryError> {
    if page < 1 {
        return Err(QueryError::InvalidArgument(format!(
            "page must be >= 1, got {page}"
        )));
    }
    if page_size < 1 {
        return Err(QueryError::InvalidArgument(format!(
            "page_size must be >= 1, got {page_size}"
        )));
    }

    let matched = filter(leads, tab, search);
    let total_count = matched.len();
    let total_pages = total_count.div_ceil(page_size);

    let start = (page - 1).saturating_mul(page_size);
    let items = matched
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    Ok(LeadView {
        items,
        page,
        page_size,
        total_count,
        total_pages,
    })
}
