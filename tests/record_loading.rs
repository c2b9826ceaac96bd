use std::io::Write;
use tempfile::NamedTempFile;

use wardview::records::{JsonFileSource, PatientStatus, Priority, RecordSource, SampleSource};
use wardview::{Browser, WardviewError};

const RECORDS: &str = r#"[
  {
    "id": "a1", "patientName": "Helena Duarte", "patientId": "H-100",
    "admissionDate": "2024-03-02 09:15", "department": "Nefrologia",
    "doctor": "Dr. Caio Ramos", "roomNumber": "12",
    "status": "in_treatment", "priority": "HIGH",
    "diagnosis": "Insuficiência renal aguda", "treatment": "Hemodiálise",
    "insurance": "Amil", "cost": 9800, "lastUpdate": "2024-03-04T08:00:00Z"
  },
  {
    "id": "a2", "patientName": "Otávio Brandão", "patientId": "H-101",
    "admissionDate": "2024-02-27", "dischargeDate": "2024-03-01T11:30",
    "department": "Nefrologia", "doctor": "Dr. Caio Ramos", "roomNumber": "14",
    "status": "Quarantine", "priority": "Baixa",
    "diagnosis": "Cálculo renal", "treatment": "Litotripsia",
    "insurance": "SUS", "cost": 1200.4, "lastUpdate": "2024-03-01T11:30:00"
  }
]"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write contents");
    file
}

#[tokio::test]
async fn loads_records_from_json_file() {
    let file = write_temp(RECORDS);
    let source = JsonFileSource::new(file.path());

    let records = source.load().await.expect("records load");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].status, PatientStatus::InTreatment);
    assert_eq!(records[0].priority, Priority::High);
    assert_eq!(
        records[1].status,
        PatientStatus::Unknown("Quarantine".to_string())
    );
    assert!(records[0].discharge_date.is_none());
    assert!(records[1].discharge_date.is_some());

    let browser = Browser::new(records);
    assert_eq!(browser.catalogs().departments, vec!["Nefrologia".to_string()]);
}

#[tokio::test]
async fn missing_file_is_reported() {
    let source = JsonFileSource::new("/definitely/not/a/ward.json");
    match source.load().await {
        Err(WardviewError::FileNotFound { path }) => {
            assert!(path.ends_with("ward.json"));
        }
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn directory_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let source = JsonFileSource::new(dir.path());
    assert!(matches!(
        source.load().await,
        Err(WardviewError::NotAFile { .. })
    ));
}

#[tokio::test]
async fn empty_file_is_rejected() {
    let file = write_temp("");
    let err = JsonFileSource::new(file.path()).load().await.unwrap_err();
    assert!(err.to_string().contains("File is empty"));
}

#[tokio::test]
async fn malformed_json_names_the_file() {
    let file = write_temp(r#"[{"id": "1", "patientName": "#);
    let err = JsonFileSource::new(file.path()).load().await.unwrap_err();
    match err {
        WardviewError::RecordParse { path, .. } => assert_eq!(path, file.path()),
        other => panic!("expected RecordParse, got {other:?}"),
    }
}

#[tokio::test]
async fn bad_field_value_names_the_record() {
    let bad = RECORDS.replacen("\"cost\": 9800", "\"cost\": -5", 1);
    let file = write_temp(&bad);
    match JsonFileSource::new(file.path()).load().await {
        Err(WardviewError::InvalidRecord {
            record_id, field, ..
        }) => {
            assert_eq!(record_id, "a1");
            assert_eq!(field, "cost");
        }
        other => panic!("expected InvalidRecord, got {other:?}"),
    }

    let bad = RECORDS.replacen("2024-02-27", "27/02/2024", 1);
    let file = write_temp(&bad);
    match JsonFileSource::new(file.path()).load().await {
        Err(WardviewError::InvalidRecord {
            record_id, field, ..
        }) => {
            assert_eq!(record_id, "a2");
            assert_eq!(field, "admissionDate");
        }
        other => panic!("expected InvalidRecord, got {other:?}"),
    }
}

#[tokio::test]
async fn sample_source_describes_itself() {
    let source = SampleSource;
    assert_eq!(source.describe(), "sample data");
    let records = source.load().await.expect("sample loads");
    assert_eq!(records.len(), 10);
}
