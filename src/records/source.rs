//! Record sources.
//!
//! A [`RecordSource`] produces the fixed, ordered record sequence the browser works on. The
//! browser never goes back to the source after startup.

use crate::error::{Result, WardviewError};
use crate::records::model::{PatientRecord, RawRecord};
use crate::records::sample::SAMPLE_RECORDS_JSON;
use crate::records::validation::validate_record_path;
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Core trait for loading patient records.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Load every record, preserving source order
    async fn load(&self) -> Result<Vec<PatientRecord>>;

    /// Short description used in logs and the status line
    fn describe(&self) -> String;
}

/// Records stored as a JSON array in a file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<PatientRecord>> {
        validate_record_path(&self.path)?;

        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| {
                WardviewError::file_error(format!("Failed to read {}", self.path.display()), e)
            })?;

        let records = parse_records(&contents, &self.path)?;
        log::info!(
            "loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<unnamed>")
            .to_string()
    }
}

/// Built-in demonstration records.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

#[async_trait]
impl RecordSource for SampleSource {
    async fn load(&self) -> Result<Vec<PatientRecord>> {
        parse_records(SAMPLE_RECORDS_JSON, Path::new("<sample>"))
    }

    fn describe(&self) -> String {
        "sample data".to_string()
    }
}

/// Parse a JSON array of records. `origin` is only used for error messages.
pub fn parse_records(json: &str, origin: &Path) -> Result<Vec<PatientRecord>> {
    let raw: Vec<RawRecord> =
        serde_json::from_str(json).map_err(|source| WardviewError::RecordParse {
            path: origin.to_path_buf(),
            source,
        })?;

    let records = raw
        .into_iter()
        .map(PatientRecord::try_from)
        .collect::<Result<Vec<_>>>()?;

    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        if !seen.insert(record.id.as_str()) {
            log::warn!("duplicate record id {} in {}", record.id, origin.display());
        }
        if !record.status.is_known() || !record.priority.is_known() {
            log::debug!(
                "record {} carries an unrecognized status or priority ({} / {})",
                record.id,
                record.status,
                record.priority
            );
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{PatientStatus, Priority};

    #[tokio::test]
    async fn sample_source_loads() {
        let records = SampleSource.load().await.unwrap();
        assert!(records.len() >= 8);
        assert!(records
            .iter()
            .all(|r| r.status.is_known() && r.priority.is_known()));
    }

    #[test]
    fn parse_records_preserves_order() {
        let json = r#"[
            {"id":"b","patientName":"B","patientId":"P2","admissionDate":"2024-02-01",
             "department":"X","doctor":"D","roomNumber":"1","status":"Admitted",
             "priority":"Low","diagnosis":"","treatment":"","insurance":"",
             "cost":0,"lastUpdate":"2024-02-01"},
            {"id":"a","patientName":"A","patientId":"P1","admissionDate":"2024-01-01",
             "department":"Y","doctor":"D","roomNumber":"2","status":"Limbo",
             "priority":"Critical","diagnosis":"","treatment":"","insurance":"",
             "cost":1.5,"lastUpdate":"2024-01-01","dischargeDate":"2024-01-03"}
        ]"#;

        let records = parse_records(json, Path::new("test.json")).unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(records[1].status, PatientStatus::Unknown("Limbo".into()));
        assert_eq!(records[1].priority, Priority::Critical);
        assert!(records[1].discharge_date.is_some());
    }

    #[test]
    fn malformed_json_reports_origin() {
        let err = parse_records("{ not an array", Path::new("broken.json")).unwrap_err();
        match err {
            WardviewError::RecordParse { path, .. } => assert_eq!(path, Path::new("broken.json")),
            other => panic!("expected RecordParse, got {other:?}"),
        }
    }

    #[test]
    fn describe_uses_file_name() {
        let source = JsonFileSource::new("/var/exports/ward-3.json");
        assert_eq!(source.describe(), "ward-3.json");
        assert_eq!(SampleSource.describe(), "sample data");
    }
}
