//! Column catalog and the configurable column layout.
//!
//! The catalog is fixed: thirteen columns, each projecting one record field. Five of them are
//! essential and can never be hidden. Which of the remaining columns are shown, and in which
//! order, is tracked by [`ColumnLayout`].

pub mod layout;

pub use layout::{ColumnLayout, ColumnSlot};

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifies the record field a column projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColumnKey {
    PatientId,
    PatientName,
    Department,
    Doctor,
    RoomNumber,
    Status,
    Priority,
    AdmissionDate,
    Diagnosis,
    Treatment,
    Insurance,
    Cost,
    LastUpdate,
}

/// How a column's values are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Date,
    Currency,
    Status,
    Priority,
}

/// Static catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub key: ColumnKey,
    pub label: &'static str,
    pub essential: bool,
    pub kind: ColumnKind,
}

const fn column(
    key: ColumnKey,
    label: &'static str,
    essential: bool,
    kind: ColumnKind,
) -> ColumnDescriptor {
    ColumnDescriptor {
        key,
        label,
        essential,
        kind,
    }
}

/// Number of catalog columns.
pub const COLUMN_COUNT: usize = 13;

/// The full column catalog in canonical order.
pub static CATALOG: [ColumnDescriptor; COLUMN_COUNT] = [
    column(ColumnKey::PatientId, "ID", true, ColumnKind::Text),
    column(ColumnKey::PatientName, "Patient Name", true, ColumnKind::Text),
    column(ColumnKey::Department, "Department", true, ColumnKind::Text),
    column(ColumnKey::Doctor, "Attending Physician", false, ColumnKind::Text),
    column(ColumnKey::RoomNumber, "Room", false, ColumnKind::Text),
    column(ColumnKey::Status, "Status", true, ColumnKind::Status),
    column(ColumnKey::Priority, "Priority", true, ColumnKind::Priority),
    column(ColumnKey::AdmissionDate, "Admission Date", false, ColumnKind::Date),
    column(ColumnKey::Diagnosis, "Diagnosis", false, ColumnKind::Text),
    column(ColumnKey::Treatment, "Treatment", false, ColumnKind::Text),
    column(ColumnKey::Insurance, "Insurance", false, ColumnKind::Text),
    column(ColumnKey::Cost, "Cost", false, ColumnKind::Currency),
    column(ColumnKey::LastUpdate, "Last Update", false, ColumnKind::Date),
];

/// Non-essential columns shown in the default layout.
pub const DEFAULT_EXTRA_COLUMNS: [ColumnKey; 3] = [
    ColumnKey::Doctor,
    ColumnKey::RoomNumber,
    ColumnKey::AdmissionDate,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
}

impl ColumnKey {
    /// Position in the canonical catalog order.
    pub fn catalog_index(self) -> usize {
        self as usize
    }

    pub fn descriptor(self) -> &'static ColumnDescriptor {
        &CATALOG[self.catalog_index()]
    }

    pub fn is_essential(self) -> bool {
        self.descriptor().essential
    }

    pub fn is_default(self) -> bool {
        self.is_essential() || DEFAULT_EXTRA_COLUMNS.contains(&self)
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }

    /// Name of the record field, as used in record files.
    pub fn name(self) -> &'static str {
        match self {
            ColumnKey::PatientId => "patientId",
            ColumnKey::PatientName => "patientName",
            ColumnKey::Department => "department",
            ColumnKey::Doctor => "doctor",
            ColumnKey::RoomNumber => "roomNumber",
            ColumnKey::Status => "status",
            ColumnKey::Priority => "priority",
            ColumnKey::AdmissionDate => "admissionDate",
            ColumnKey::Diagnosis => "diagnosis",
            ColumnKey::Treatment => "treatment",
            ColumnKey::Insurance => "insurance",
            ColumnKey::Cost => "cost",
            ColumnKey::LastUpdate => "lastUpdate",
        }
    }

    /// Every key in canonical order.
    pub fn all() -> impl Iterator<Item = ColumnKey> {
        CATALOG.iter().map(|descriptor| descriptor.key)
    }
}

impl FromStr for ColumnKey {
    type Err = ColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnKey::all()
            .find(|key| key.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColumnError::UnknownColumn(s.to_string()))
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
