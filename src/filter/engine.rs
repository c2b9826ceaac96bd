//! Stateful filter engine owning the record sequence and its derived values.
//!
//! The filtered view is cached as a list of record indices and recomputed whenever the filter
//! state actually changes. The selector catalogs are computed once: the record sequence is
//! fixed for the lifetime of the engine.

use crate::filter::{CycleStep, FilterCatalogs, FilterField, FilterState, Selector};
use crate::records::{PatientRecord, PatientStatus, Priority};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct FilterEngine {
    records: Arc<[PatientRecord]>,
    catalogs: FilterCatalogs,
    state: FilterState,
    /// Indices into `records` of the rows passing `state`, in source order
    matching: Vec<usize>,
}

impl FilterEngine {
    pub fn new(records: impl Into<Arc<[PatientRecord]>>) -> Self {
        let records: Arc<[PatientRecord]> = records.into();
        let catalogs = FilterCatalogs::from_records(records.iter());
        let matching = (0..records.len()).collect();

        Self {
            records,
            catalogs,
            state: FilterState::default(),
            matching,
        }
    }

    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    pub fn catalogs(&self) -> &FilterCatalogs {
        &self.catalogs
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Records passing the current filters, in source order.
    pub fn filtered(&self) -> Vec<&PatientRecord> {
        self.matching.iter().map(|&idx| &self.records[idx]).collect()
    }

    /// The `position`-th record of the filtered view.
    pub fn filtered_get(&self, position: usize) -> Option<&PatientRecord> {
        self.matching
            .get(position)
            .and_then(|&idx| self.records.get(idx))
    }

    pub fn match_count(&self) -> usize {
        self.matching.len()
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if self.state.search != search {
            self.state.search = search;
            self.refresh();
        }
    }

    pub fn set_status(&mut self, selector: Selector<PatientStatus>) {
        if self.state.status != selector {
            self.state.status = selector;
            self.refresh();
        }
    }

    pub fn set_department(&mut self, selector: Selector<String>) {
        if self.state.department != selector {
            self.state.department = selector;
            self.refresh();
        }
    }

    pub fn set_priority(&mut self, selector: Selector<Priority>) {
        if self.state.priority != selector {
            self.state.priority = selector;
            self.refresh();
        }
    }

    /// Step one selector through its catalog choices.
    pub fn cycle(&mut self, field: FilterField, step: CycleStep) {
        match field {
            FilterField::Status => {
                let next = self.state.status.cycle(&self.catalogs.statuses, step);
                self.set_status(next);
            }
            FilterField::Department => {
                let next = self
                    .state
                    .department
                    .cycle(&self.catalogs.departments, step);
                self.set_department(next);
            }
            FilterField::Priority => {
                let next = self.state.priority.cycle(&self.catalogs.priorities, step);
                self.set_priority(next);
            }
        }
    }

    /// Drop the search term and every selector.
    pub fn clear(&mut self) {
        if !self.state.is_unconstrained() {
            self.state = FilterState::default();
            self.refresh();
        }
    }

    fn refresh(&mut self) {
        let needle = self.state.search.to_lowercase();
        self.matching = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.state.matches_folded(record, &needle))
            .map(|(idx, _)| idx)
            .collect();
        log::debug!(
            "filter refreshed: {} of {} records match",
            self.matching.len(),
            self.records.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_records;
    use crate::records::{parse_records, sample::SAMPLE_RECORDS_JSON};
    use std::path::Path;

    fn engine() -> FilterEngine {
        FilterEngine::new(parse_records(SAMPLE_RECORDS_JSON, Path::new("sample")).unwrap())
    }

    #[test]
    fn starts_unfiltered() {
        let engine = engine();
        assert_eq!(engine.match_count(), engine.records().len());
        assert!(engine.state().is_unconstrained());
    }

    #[test]
    fn cached_view_matches_pure_filter() {
        let mut engine = engine();
        engine.set_search("a");
        engine.set_department(Selector::Only("Cardiologia".into()));

        let expected = filter_records(engine.records(), engine.state());
        assert_eq!(engine.filtered(), expected);
        assert_eq!(engine.filtered_get(0), expected.first().copied());
        assert!(engine.filtered_get(expected.len()).is_none());
    }

    #[test]
    fn cycling_status_walks_the_catalog() {
        let mut engine = engine();
        engine.cycle(FilterField::Status, CycleStep::Forward);
        assert_eq!(engine.state().status, Selector::Only(PatientStatus::InTreatment));
        assert!(engine
            .filtered()
            .iter()
            .all(|r| r.status == PatientStatus::InTreatment));

        engine.cycle(FilterField::Status, CycleStep::Backward);
        assert!(engine.state().status.is_any());
        assert_eq!(engine.match_count(), engine.records().len());
    }

    #[test]
    fn clear_restores_everything() {
        let mut engine = engine();
        engine.set_search("zzz");
        engine.cycle(FilterField::Priority, CycleStep::Forward);
        assert_eq!(engine.match_count(), 0);

        engine.clear();
        assert!(engine.state().is_unconstrained());
        assert_eq!(engine.match_count(), engine.records().len());
    }
}
