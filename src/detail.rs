//! Detail view selection.
//!
//! At most one record is expanded at a time. Opening another record replaces the current one.

use crate::format::Formatter;
use crate::records::PatientRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailSelector {
    selected: Option<PatientRecord>,
    open: bool,
}

impl DetailSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, record: PatientRecord) {
        log::debug!("opening details for record {}", record.id);
        self.selected = Some(record);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.selected = None;
        self.open = false;
    }

    pub fn selected(&self) -> Option<&PatientRecord> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// A titled group of label/value pairs in the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub title: &'static str,
    pub fields: Vec<(&'static str, String)>,
}

impl DetailSection {
    fn new(title: &'static str, fields: Vec<(&'static str, String)>) -> Self {
        Self { title, fields }
    }
}

/// Group a record's fields for the detail view. The discharge date only appears when set.
pub fn detail_sections(record: &PatientRecord, formatter: &Formatter) -> Vec<DetailSection> {
    let mut dates = vec![(
        "Admission Date",
        formatter.date_time(&record.admission_date),
    )];
    if let Some(discharge) = &record.discharge_date {
        dates.push(("Discharge Date", formatter.date_time(discharge)));
    }
    dates.push(("Last Update", formatter.date_time(&record.last_update)));

    vec![
        DetailSection::new(
            "Basic Information",
            vec![
                ("Full Name", record.patient_name.clone()),
                ("Patient ID", record.patient_code.clone()),
                ("Status", record.status.label().to_string()),
                ("Priority", record.priority.label().to_string()),
                ("Insurance", record.insurance.clone()),
            ],
        ),
        DetailSection::new(
            "Location & Care",
            vec![
                ("Department", record.department.clone()),
                ("Attending Physician", record.doctor.clone()),
                ("Room", record.room_number.clone()),
            ],
        ),
        DetailSection::new("Dates", dates),
        DetailSection::new(
            "Diagnosis & Treatment",
            vec![
                ("Diagnosis", record.diagnosis.clone()),
                ("Treatment", record.treatment.clone()),
            ],
        ),
        DetailSection::new(
            "Financial",
            vec![("Total Cost", formatter.currency(record.cost))],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Locale;
    use crate::records::{parse_records, sample::SAMPLE_RECORDS_JSON};
    use std::path::Path;

    fn sample() -> Vec<PatientRecord> {
        parse_records(SAMPLE_RECORDS_JSON, Path::new("sample")).unwrap()
    }

    #[test]
    fn opening_replaces_previous_selection() {
        let records = sample();
        let mut selector = DetailSelector::new();
        assert!(!selector.is_open());

        selector.open(records[0].clone());
        selector.open(records[1].clone());

        assert!(selector.is_open());
        assert_eq!(selector.selected(), Some(&records[1]));
    }

    #[test]
    fn close_clears_selection() {
        let records = sample();
        let mut selector = DetailSelector::new();
        selector.open(records[0].clone());
        selector.close();

        assert!(!selector.is_open());
        assert!(selector.selected().is_none());
    }

    #[test]
    fn discharge_date_only_when_present() {
        let records = sample();
        let formatter = Formatter::new(Locale::PtBr);

        let admitted = detail_sections(&records[0], &formatter);
        let dates = admitted.iter().find(|s| s.title == "Dates").unwrap();
        assert!(dates.fields.iter().all(|(label, _)| *label != "Discharge Date"));

        let discharged = detail_sections(&records[2], &formatter);
        let dates = discharged.iter().find(|s| s.title == "Dates").unwrap();
        assert_eq!(dates.fields[1], ("Discharge Date", "14/01/2024 16:00".to_string()));
    }

    #[test]
    fn financial_section_formats_cost() {
        let records = sample();
        let sections = detail_sections(&records[0], &Formatter::new(Locale::PtBr));
        assert_eq!(sections.len(), 5);
        assert_eq!(
            sections[4].fields,
            vec![("Total Cost", "R$ 15.750,50".to_string())]
        );
    }
}
