//! Selection accumulator
//!
//! Tracks which additional considerations are toggled on and sums their
//! cost on top of the fixed base total.

use crate::catalog::{AdditionalConsideration, CostCatalog};
use serde::Serialize;
use tracing::debug;

/// Set of selected consideration names, kept in the order they were selected
///
/// Names are weak references into the catalog: a name with no catalog row
/// stays selected but contributes nothing to totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    selected: Vec<String>,
}

/// Cost totals for a selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub additional_total: f64,
    pub grand_total: f64,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `name`; returns true if it is now selected
    pub fn toggle(&mut self, name: &str) -> bool {
        match self.selected.iter().position(|s| s == name) {
            Some(idx) => {
                self.selected.remove(idx);
                debug!(name, "Deselected consideration");
                false
            }
            None => {
                self.selected.push(name.to_string());
                debug!(name, "Selected consideration");
                true
            }
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|s| s == name)
    }

    /// Selected names in selection order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Catalog rows for the selected names, skipping names not in the catalog
    pub fn resolve<'a>(
        &'a self,
        catalog: &'a CostCatalog,
    ) -> impl Iterator<Item = &'a AdditionalConsideration> + 'a {
        self.names()
            .filter_map(move |name| catalog.find_consideration(name))
    }

    /// Sum of incremental costs over selected names found in the catalog
    pub fn additional_total(&self, catalog: &CostCatalog) -> f64 {
        self.resolve(catalog).map(|c| c.incremental_cost).sum()
    }

    /// Base total plus the additional total
    pub fn grand_total(&self, catalog: &CostCatalog) -> f64 {
        catalog.base_total() + self.additional_total(catalog)
    }

    pub fn totals(&self, catalog: &CostCatalog) -> Totals {
        let additional_total = self.additional_total(catalog);
        Totals {
            additional_total,
            grand_total: catalog.base_total() + additional_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut selection = SelectionState::new();
        selection.toggle("Multi-Region Deployment");
        let before = selection.clone();

        for name in ["Data Ingress from Vehicles", "Not In Catalog"] {
            assert!(selection.toggle(name));
            assert!(selection.is_selected(name));
            assert!(!selection.toggle(name));
            assert_eq!(selection, before);
        }
    }

    #[test]
    fn test_totals_for_known_selection() {
        let catalog = CostCatalog::builtin();
        let mut selection = SelectionState::new();

        selection.toggle("Machine Learning Model Training");
        selection.toggle("Data Ingress from Vehicles");

        let totals = selection.totals(&catalog);
        assert_eq!(totals.additional_total, 250.0);
        assert_eq!(totals.grand_total, 350.0);
        assert_eq!(selection.grand_total(&catalog), 350.0);
    }

    #[test]
    fn test_empty_selection_totals_base_only() {
        let catalog = CostCatalog::builtin();
        let selection = SelectionState::new();

        assert_eq!(selection.additional_total(&catalog), 0.0);
        assert_eq!(selection.grand_total(&catalog), 100.0);
    }

    #[test]
    fn test_unknown_name_contributes_zero() {
        let catalog = CostCatalog::builtin();
        let mut selection = SelectionState::new();

        selection.toggle("Quantum Annealing");
        selection.toggle("User Training & Support");

        assert_eq!(selection.len(), 2);
        assert_eq!(selection.additional_total(&catalog), 50.0);
        assert_eq!(selection.resolve(&catalog).count(), 1);
    }

    #[test]
    fn test_sum_matches_every_consideration() {
        let catalog = CostCatalog::builtin();
        let mut selection = SelectionState::new();
        let mut expected = 0.0;

        for consideration in catalog.additional_considerations() {
            selection.toggle(&consideration.name);
            expected += consideration.incremental_cost;
            assert_eq!(selection.additional_total(&catalog), expected);
        }

        assert_eq!(expected, 1125.0);
        assert_eq!(selection.grand_total(&catalog), 1225.0);
    }

    #[test]
    fn test_selection_order_is_insertion_order() {
        let mut selection = SelectionState::new();
        selection.toggle("b");
        selection.toggle("a");
        selection.toggle("c");
        selection.toggle("b");
        selection.toggle("b");

        let names: Vec<&str> = selection.names().collect();
        assert_eq!(names, vec!["a", "c", "b"]);
    }
}
