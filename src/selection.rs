//! Single-lead selection for the detail panel.
//!
//! Holds an id, never a reference: every read resolves the id against the
//! snapshot it is given, so an evicted lead simply reads back as `None`.

use crate::lead::{Lead, LeadId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Selected(LeadId),
}

#[derive(Debug, Default)]
pub struct SelectionController {
    state: Selection,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, lead: &Lead) {
        self.state = Selection::Selected(lead.id.clone());
    }

    pub fn clear(&mut self) {
        self.state = Selection::None;
    }

    pub fn state(&self) -> &Selection {
        &self.state
    }

    pub fn selected_id(&self) -> Option<&LeadId> {
        match &self.state {
            Selection::None => None,
            Selection::Selected(id) => Some(id),
        }
    }

    /// Look the selected id up in `leads`. Stale ids resolve to `None`.
    pub fn resolve<'a>(&self, leads: &'a [Lead]) -> Option<&'a Lead> {
        let id = self.selected_id()?;
        leads.iter().find(|l| &l.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_leads;

    #[test]
    fn select_resolve_clear() {
        let leads = seed_leads();
        let mut sel = SelectionController::new();
        assert_eq!(sel.resolve(&leads), None);

        sel.select(&leads[2]);
        assert_eq!(sel.state(), &Selection::Selected(LeadId::new("3")));
        assert_eq!(sel.resolve(&leads).map(|l| l.name.as_str()), Some("Francois Mehmud"));

        sel.clear();
        assert_eq!(sel.state(), &Selection::None);
        assert_eq!(sel.resolve(&leads), None);
    }

    #[test]
    fn stale_id_resolves_to_none() {
        let leads = seed_leads();
        let mut sel = SelectionController::new();
        sel.select(&leads[8]);
        let without_last = &leads[..8];
        assert_eq!(sel.resolve(without_last), None);
        // still selected; only the lookup misses
        assert!(sel.selected_id().is_some());
    }
}
