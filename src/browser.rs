//! Browser core: the single owner of filter, column and detail state.
//!
//! Every operation runs synchronously to completion. Derived values (filtered records, visible
//! columns, selector catalogs, selected record) are read back after each mutation by the
//! rendering surface.

use crate::columns::{ColumnDescriptor, ColumnError, ColumnKey, ColumnLayout};
use crate::detail::DetailSelector;
use crate::filter::{CycleStep, FilterCatalogs, FilterEngine, FilterField, FilterState, Selector};
use crate::records::{PatientRecord, PatientStatus, Priority};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Browser {
    filter: FilterEngine,
    columns: ColumnLayout,
    detail: DetailSelector,
}

impl Browser {
    pub fn new(records: impl Into<Arc<[PatientRecord]>>) -> Self {
        Self {
            filter: FilterEngine::new(records),
            columns: ColumnLayout::new(),
            detail: DetailSelector::new(),
        }
    }

    // Derived, read-only views

    pub fn records(&self) -> &[PatientRecord] {
        self.filter.records()
    }

    pub fn filtered_records(&self) -> Vec<&PatientRecord> {
        self.filter.filtered()
    }

    pub fn filtered_record(&self, position: usize) -> Option<&PatientRecord> {
        self.filter.filtered_get(position)
    }

    pub fn patient_count(&self) -> usize {
        self.filter.match_count()
    }

    pub fn filter_state(&self) -> &FilterState {
        self.filter.state()
    }

    pub fn catalogs(&self) -> &FilterCatalogs {
        self.filter.catalogs()
    }

    pub fn columns(&self) -> &ColumnLayout {
        &self.columns
    }

    pub fn visible_columns(&self) -> Vec<&'static ColumnDescriptor> {
        self.columns.visible_columns()
    }

    pub fn selected_record(&self) -> Option<&PatientRecord> {
        self.detail.selected()
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail.is_open()
    }

    // Filter operations

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.set_search(search);
    }

    pub fn set_status_filter(&mut self, selector: Selector<PatientStatus>) {
        self.filter.set_status(selector);
    }

    pub fn set_department_filter(&mut self, selector: Selector<String>) {
        self.filter.set_department(selector);
    }

    pub fn set_priority_filter(&mut self, selector: Selector<Priority>) {
        self.filter.set_priority(selector);
    }

    pub fn cycle_filter(&mut self, field: FilterField, step: CycleStep) {
        self.filter.cycle(field, step);
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    // Column operations

    pub fn toggle_column(&mut self, key: ColumnKey) -> bool {
        self.columns.toggle(key)
    }

    pub fn toggle_column_named(&mut self, name: &str) -> Result<bool, ColumnError> {
        self.columns.toggle_named(name)
    }

    pub fn select_all_columns(&mut self) {
        self.columns.select_all();
    }

    pub fn deselect_all_columns(&mut self) {
        self.columns.deselect_all();
    }

    pub fn toggle_all_columns(&mut self) {
        self.columns.toggle_all();
    }

    pub fn reset_columns(&mut self) {
        self.columns.reset_to_default();
    }

    pub fn reorder_columns(&mut self, from: usize, to: usize) -> bool {
        self.columns.reorder(from, to)
    }

    // Detail view

    pub fn open_details(&mut self, record: PatientRecord) {
        self.detail.open(record);
    }

    /// Open the `position`-th record of the filtered view. Returns false when out of range.
    pub fn open_filtered_details(&mut self, position: usize) -> bool {
        match self.filter.filtered_get(position).cloned() {
            Some(record) => {
                self.detail.open(record);
                true
            }
            None => false,
        }
    }

    pub fn close_details(&mut self) {
        self.detail.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{parse_records, sample::SAMPLE_RECORDS_JSON};
    use std::path::Path;

    fn browser() -> Browser {
        Browser::new(parse_records(SAMPLE_RECORDS_JSON, Path::new("sample")).unwrap())
    }

    #[test]
    fn opens_filtered_rows_by_position() {
        let mut browser = browser();
        browser.set_search("sepse");
        assert!(browser.open_filtered_details(0));
        assert_eq!(browser.selected_record().map(|r| r.id.as_str()), Some("4"));

        assert!(!browser.open_filtered_details(1));
        // A failed open leaves the previous selection in place.
        assert_eq!(browser.selected_record().map(|r| r.id.as_str()), Some("4"));

        browser.close_details();
        assert!(!browser.is_detail_open());
    }

    #[test]
    fn filters_and_columns_are_independent() {
        let mut browser = browser();
        browser.cycle_filter(FilterField::Department, CycleStep::Forward);
        browser.toggle_column(ColumnKey::Cost);

        assert_eq!(
            browser.filter_state().department,
            Selector::Only("Cardiologia".to_string())
        );
        assert_eq!(browser.patient_count(), 2);
        assert_eq!(browser.visible_columns().last().unwrap().key, ColumnKey::Cost);

        browser.clear_filters();
        assert_eq!(browser.patient_count(), browser.records().len());
        assert!(browser.columns().is_visible(ColumnKey::Cost));
    }
}
