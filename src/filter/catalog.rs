//! Distinct selector values observed in the record sequence.

use crate::records::{PatientRecord, PatientStatus, Priority};
use std::collections::HashSet;
use std::hash::Hash;

/// Choices offered by the status, department and priority selectors, each deduplicated in
/// order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCatalogs {
    pub statuses: Vec<PatientStatus>,
    pub departments: Vec<String>,
    pub priorities: Vec<Priority>,
}

impl FilterCatalogs {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a PatientRecord>,
        I::IntoIter: Clone,
    {
        let records = records.into_iter();
        Self {
            statuses: distinct_in_order(records.clone().map(|r| &r.status)),
            departments: distinct_in_order(records.clone().map(|r| &r.department)),
            priorities: distinct_in_order(records.map(|r| &r.priority)),
        }
    }
}

fn distinct_in_order<'a, T, I>(values: I) -> Vec<T>
where
    T: Clone + Eq + Hash + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{parse_records, sample::SAMPLE_RECORDS_JSON};
    use std::path::Path;

    #[test]
    fn catalogs_follow_first_occurrence() {
        let records = parse_records(SAMPLE_RECORDS_JSON, Path::new("sample")).unwrap();
        let catalogs = FilterCatalogs::from_records(&records);

        assert_eq!(
            catalogs.departments,
            ["Cardiologia", "Neurologia", "Ortopedia", "UTI", "Pediatria", "Oncologia"]
        );
        assert_eq!(
            catalogs.statuses,
            [
                PatientStatus::InTreatment,
                PatientStatus::Admitted,
                PatientStatus::Discharged,
                PatientStatus::Transferred,
                PatientStatus::Deceased,
            ]
        );
        assert_eq!(
            catalogs.priorities,
            [Priority::High, Priority::Critical, Priority::Low, Priority::Medium]
        );
    }

    #[test]
    fn empty_records_give_empty_catalogs() {
        let records: Vec<PatientRecord> = Vec::new();
        assert_eq!(FilterCatalogs::from_records(&records), FilterCatalogs::default());
    }
}
