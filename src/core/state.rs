//! Planner state - dataset, selection, and derived result behind one
//! explicit controller
//!
//! The whole tool moves through three phases: no dataset, dataset loaded
//! with nothing chosen, and a computed result. Loading is a wholesale
//! replacement that resets the selection and discards any prior result;
//! selection changes recompute synchronously.

use crate::core::calc::{compute, MachineFilter, RequirementResult, Selection};
use crate::core::dataset::Dataset;

/// Where the planner currently stands. There is no terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No dataset loaded
    Empty,
    /// Dataset present, no result available
    Loaded,
    /// Component chosen and result computed
    Computed,
}

/// Single owner of the dataset, the active selection, and the derived
/// result. No ambient globals; callers hold exactly one instance.
#[derive(Debug, Default)]
pub struct Planner {
    dataset: Dataset,
    selection: Selection,
    result: Option<RequirementResult>,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the dataset wholesale. The selection resets and any prior
    /// result is discarded.
    pub fn load(self, dataset: Dataset) -> Self {
        Self {
            dataset,
            selection: Selection::default(),
            result: None,
        }
    }

    /// Drop the dataset and all derived state.
    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn select_component(&mut self, component: &str) {
        self.selection.component = component.to_string();
        self.recompute();
    }

    pub fn select_machine(&mut self, machine: MachineFilter) {
        self.selection.machine = machine;
        self.recompute();
    }

    pub fn set_years(&mut self, years: u8) {
        self.selection.set_years(years);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.result = compute(self.dataset.rows(), &self.selection);
    }

    pub fn phase(&self) -> Phase {
        if self.dataset.is_empty() {
            Phase::Empty
        } else if self.result.is_some() {
            Phase::Computed
        } else {
            Phase::Loaded
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn result(&self) -> Option<&RequirementResult> {
        self.result.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::parse("h\nM1,Widget,2,10,20\nM2,Widget,3,5,5\n")
    }

    #[test]
    fn test_phases_advance_with_load_and_selection() {
        let mut planner = Planner::new();
        assert_eq!(planner.phase(), Phase::Empty);

        planner = planner.load(sample());
        assert_eq!(planner.phase(), Phase::Loaded);

        planner.select_component("Widget");
        assert_eq!(planner.phase(), Phase::Computed);
        assert_eq!(planner.result().unwrap().total_components, 90);
    }

    #[test]
    fn test_load_replaces_wholesale_and_resets_selection() {
        let mut planner = Planner::new().load(sample());
        planner.select_component("Widget");
        planner.set_years(2);
        assert!(planner.result().is_some());

        let planner = planner.load(Dataset::parse("h\nM3,Axle,1,4\n"));
        assert_eq!(planner.phase(), Phase::Loaded);
        assert_eq!(planner.selection(), &Selection::default());
        assert!(planner.result().is_none());
        assert_eq!(planner.dataset().len(), 1);
    }

    #[test]
    fn test_reset_returns_to_empty() {
        let mut planner = Planner::new().load(sample());
        planner.select_component("Widget");

        let planner = planner.reset();
        assert_eq!(planner.phase(), Phase::Empty);
        assert!(planner.dataset().is_empty());
        assert!(planner.result().is_none());
    }

    #[test]
    fn test_selection_changes_recompute_synchronously() {
        let mut planner = Planner::new().load(sample());
        planner.select_component("Widget");
        planner.set_years(2);
        assert_eq!(planner.result().unwrap().total_components, 90);

        planner.select_machine(MachineFilter::Machine("M1".to_string()));
        assert_eq!(planner.result().unwrap().total_components, 60);

        // A filter that matches nothing suppresses the result without
        // touching the dataset.
        planner.select_machine(MachineFilter::Machine("M9".to_string()));
        assert_eq!(planner.phase(), Phase::Loaded);
        assert!(planner.result().is_none());
    }
}
