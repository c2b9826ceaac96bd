//! Typed patient record model.
//!
//! The on-disk layout uses camelCase JSON field names. Status and priority values are parsed
//! leniently: English labels, the Portuguese labels used by the hospital's exports and
//! snake/kebab spellings are all recognized. Anything else is kept verbatim as `Unknown` so a
//! drifted export still loads and is rendered with a neutral style.

use crate::error::{Result, WardviewError};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Care status of a patient.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatientStatus {
    Admitted,
    InTreatment,
    Discharged,
    Transferred,
    Deceased,
    /// A value outside the known enumeration, preserved as written.
    Unknown(String),
}

impl PatientStatus {
    /// All known statuses in their conventional order.
    pub const KNOWN: [PatientStatus; 5] = [
        PatientStatus::Admitted,
        PatientStatus::InTreatment,
        PatientStatus::Discharged,
        PatientStatus::Transferred,
        PatientStatus::Deceased,
    ];

    /// Human readable label.
    pub fn label(&self) -> &str {
        match self {
            PatientStatus::Admitted => "Admitted",
            PatientStatus::InTreatment => "In Treatment",
            PatientStatus::Discharged => "Discharged",
            PatientStatus::Transferred => "Transferred",
            PatientStatus::Deceased => "Deceased",
            PatientStatus::Unknown(raw) => raw,
        }
    }

    /// Parse a status label. Never fails; unrecognized input becomes `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "admitted" | "admitido" => PatientStatus::Admitted,
            "in treatment" | "em tratamento" => PatientStatus::InTreatment,
            "discharged" | "alta" => PatientStatus::Discharged,
            "transferred" | "transferido" => PatientStatus::Transferred,
            "deceased" | "falecido" => PatientStatus::Deceased,
            _ => PatientStatus::Unknown(raw.trim().to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PatientStatus::Unknown(_))
    }
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Triage priority of a patient.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
    /// A value outside the known enumeration, preserved as written.
    Unknown(String),
}

impl Priority {
    pub const KNOWN: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn label(&self) -> &str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
            Priority::Unknown(raw) => raw,
        }
    }

    /// Parse a priority label. Never fails; unrecognized input becomes `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "low" | "baixa" => Priority::Low,
            "medium" | "média" | "media" => Priority::Medium,
            "high" | "alta" => Priority::High,
            "critical" | "crítica" | "critica" => Priority::Critical,
            _ => Priority::Unknown(raw.trim().to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Priority::Unknown(_))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn normalize_label(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect()
}

/// Returned when a timestamp string matches none of the accepted layouts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized timestamp '{0}'")]
pub struct TimestampError(pub String);

/// Wall-clock timestamp as recorded by the hospital system.
///
/// Offsets in RFC 3339 input are dropped after conversion to local wall-clock time; records
/// are displayed exactly as the ward recorded them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    const DATE_TIME_LAYOUTS: [&'static str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    pub fn new(value: NaiveDateTime) -> Self {
        Self(value)
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(with_offset.naive_local()));
        }

        for layout in Self::DATE_TIME_LAYOUTS {
            if let Ok(value) = NaiveDateTime::parse_from_str(trimmed, layout) {
                return Ok(Self(value));
            }
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Self)
            .ok_or_else(|| TimestampError(trimmed.to_string()))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M"))
    }
}

/// A single patient record. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientRecord {
    pub id: String,
    pub patient_name: String,
    /// External patient code shown in the ID column (e.g. `P001`).
    pub patient_code: String,
    pub admission_date: Timestamp,
    pub discharge_date: Option<Timestamp>,
    pub department: String,
    pub doctor: String,
    pub room_number: String,
    pub status: PatientStatus,
    pub priority: Priority,
    pub diagnosis: String,
    pub treatment: String,
    pub insurance: String,
    /// Accumulated cost, never negative.
    pub cost: f64,
    pub last_update: Timestamp,
}

/// Wire layout of a record before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawRecord {
    id: String,
    patient_name: String,
    #[serde(rename = "patientId")]
    patient_code: String,
    admission_date: String,
    #[serde(default)]
    discharge_date: Option<String>,
    department: String,
    doctor: String,
    room_number: String,
    status: String,
    priority: String,
    diagnosis: String,
    treatment: String,
    insurance: String,
    cost: f64,
    last_update: String,
}

impl RawRecord {
    fn timestamp(&self, field: &'static str, raw: &str) -> Result<Timestamp> {
        raw.parse::<Timestamp>()
            .map_err(|e| WardviewError::invalid_record(&self.id, field, e.to_string()))
    }
}

impl TryFrom<RawRecord> for PatientRecord {
    type Error = WardviewError;

    fn try_from(raw: RawRecord) -> Result<Self> {
        if !raw.cost.is_finite() {
            return Err(WardviewError::invalid_record(
                &raw.id,
                "cost",
                "must be a finite number",
            ));
        }
        if raw.cost < 0.0 {
            return Err(WardviewError::invalid_record(
                &raw.id,
                "cost",
                "must not be negative",
            ));
        }

        let admission_date = raw.timestamp("admissionDate", &raw.admission_date)?;
        let last_update = raw.timestamp("lastUpdate", &raw.last_update)?;
        let discharge_date = match raw.discharge_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(raw.timestamp("dischargeDate", value)?),
        };

        Ok(PatientRecord {
            status: PatientStatus::parse(&raw.status),
            priority: Priority::parse(&raw.priority),
            id: raw.id,
            patient_name: raw.patient_name,
            patient_code: raw.patient_code,
            admission_date,
            discharge_date,
            department: raw.department,
            doctor: raw.doctor,
            room_number: raw.room_number,
            diagnosis: raw.diagnosis,
            treatment: raw.treatment,
            insurance: raw.insurance,
            cost: raw.cost,
            last_update,
        })
    }
}
