//! Record filtering: free-text search plus three categorical selectors.
//!
//! Filtering is a pure function of `(records, FilterState)`. It never reorders records, so the
//! result is always an order-preserving subsequence of its input, and applying the same state
//! to an already filtered sequence returns it unchanged.

pub mod catalog;
pub mod engine;

pub use catalog::FilterCatalogs;
pub use engine::FilterEngine;

use crate::records::{PatientRecord, PatientStatus, Priority};

/// A categorical filter: either match-all or one literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T> {
    Any,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::Any
    }
}

/// Which way to step when cycling a selector through its choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStep {
    Forward,
    Backward,
}

/// The three categorical filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Status,
    Department,
    Priority,
}

impl<T> Selector<T> {
    pub fn is_any(&self) -> bool {
        matches!(self, Selector::Any)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Selector::Any => None,
            Selector::Only(value) => Some(value),
        }
    }
}

impl<T: PartialEq + Clone> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::Any => true,
            Selector::Only(expected) => expected == value,
        }
    }

    /// Step through `Any, choices[0], .., choices[n-1], Any`.
    ///
    /// A current value that is no longer among `choices` falls back to `Any`.
    pub fn cycle(&self, choices: &[T], step: CycleStep) -> Self {
        let position = match self {
            Selector::Any => None,
            Selector::Only(value) => match choices.iter().position(|c| c == value) {
                Some(idx) => Some(idx),
                None => return Selector::Any,
            },
        };

        let next = match (step, position) {
            (CycleStep::Forward, None) => choices.first(),
            (CycleStep::Forward, Some(idx)) => choices.get(idx + 1),
            (CycleStep::Backward, None) => choices.last(),
            (CycleStep::Backward, Some(0)) => None,
            (CycleStep::Backward, Some(idx)) => choices.get(idx - 1),
        };

        next.cloned().map_or(Selector::Any, Selector::Only)
    }
}

/// Search term and categorical selectors that decide which records are shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub status: Selector<PatientStatus>,
    pub department: Selector<String>,
    pub priority: Selector<Priority>,
}

impl FilterState {
    /// True when no constraint is active.
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty()
            && self.status.is_any()
            && self.department.is_any()
            && self.priority.is_any()
    }

    /// Whether a single record passes every filter.
    pub fn matches(&self, record: &PatientRecord) -> bool {
        self.matches_folded(record, &self.search.to_lowercase())
    }

    fn matches_folded(&self, record: &PatientRecord, needle: &str) -> bool {
        let matches_search = needle.is_empty()
            || record.patient_name.to_lowercase().contains(needle)
            || record.patient_code.to_lowercase().contains(needle)
            || record.diagnosis.to_lowercase().contains(needle);

        matches_search
            && self.status.matches(&record.status)
            && self.department.matches(&record.department)
            && self.priority.matches(&record.priority)
    }
}

/// Filter `records`, preserving their order.
pub fn filter_records<'a, I>(records: I, state: &FilterState) -> Vec<&'a PatientRecord>
where
    I: IntoIterator<Item = &'a PatientRecord>,
{
    let needle = state.search.to_lowercase();
    records
        .into_iter()
        .filter(|record| state.matches_folded(record, &needle))
        .collect()
}
