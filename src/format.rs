//! Presentation formatting for record values.
//!
//! Two literal locales are supported: `pt-BR` (the hospital's own) and `en-US`. There is no
//! translation layer; only number and date layouts change.

use crate::columns::ColumnKey;
use crate::records::{PatientRecord, PatientStatus, Priority, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en-us" | "en" => Ok(Locale::EnUs),
            other => Err(format!("unsupported locale '{other}' (expected pt-BR or en-US)")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::PtBr => f.write_str("pt-BR"),
            Locale::EnUs => f.write_str("en-US"),
        }
    }
}

/// Color family of a status or priority badge. The theme maps tones to concrete styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Orange,
    Green,
    Purple,
    Gray,
    Red,
    Yellow,
    /// Fallback for values outside the known enumerations
    Neutral,
}

pub fn status_tone(status: &PatientStatus) -> Tone {
    match status {
        PatientStatus::Admitted => Tone::Blue,
        PatientStatus::InTreatment => Tone::Orange,
        PatientStatus::Discharged => Tone::Green,
        PatientStatus::Transferred => Tone::Purple,
        PatientStatus::Deceased => Tone::Gray,
        PatientStatus::Unknown(_) => Tone::Neutral,
    }
}

pub fn priority_tone(priority: &Priority) -> Tone {
    match priority {
        Priority::Critical => Tone::Red,
        Priority::High => Tone::Orange,
        Priority::Medium => Tone::Yellow,
        Priority::Low => Tone::Green,
        Priority::Unknown(_) => Tone::Neutral,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    locale: Locale,
}

impl Formatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// `R$ 1.234,56` for pt-BR, `$1,234.56` for en-US.
    pub fn currency(&self, value: f64) -> String {
        let cents = (value.abs() * 100.0).round() as u64;
        let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
        let (whole, fraction) = (cents / 100, cents % 100);

        match self.locale {
            Locale::PtBr => format!("{sign}R$ {},{fraction:02}", group_thousands(whole, '.')),
            Locale::EnUs => format!("{sign}${}.{fraction:02}", group_thousands(whole, ',')),
        }
    }

    pub fn date(&self, timestamp: &Timestamp) -> String {
        let layout = match self.locale {
            Locale::PtBr => "%d/%m/%Y",
            Locale::EnUs => "%m/%d/%Y",
        };
        timestamp.naive().format(layout).to_string()
    }

    pub fn date_time(&self, timestamp: &Timestamp) -> String {
        let layout = match self.locale {
            Locale::PtBr => "%d/%m/%Y %H:%M",
            Locale::EnUs => "%m/%d/%Y %I:%M %p",
        };
        timestamp.naive().format(layout).to_string()
    }

    /// Text of one table cell.
    pub fn cell(&self, record: &PatientRecord, key: ColumnKey) -> String {
        match key {
            ColumnKey::PatientId => record.patient_code.clone(),
            ColumnKey::PatientName => record.patient_name.clone(),
            ColumnKey::Department => record.department.clone(),
            ColumnKey::Doctor => record.doctor.clone(),
            ColumnKey::RoomNumber => record.room_number.clone(),
            ColumnKey::Status => record.status.label().to_string(),
            ColumnKey::Priority => record.priority.label().to_string(),
            ColumnKey::AdmissionDate => self.date(&record.admission_date),
            ColumnKey::Diagnosis => record.diagnosis.clone(),
            ColumnKey::Treatment => record.treatment.clone(),
            ColumnKey::Insurance => record.insurance.clone(),
            ColumnKey::Cost => self.currency(record.cost),
            ColumnKey::LastUpdate => self.date(&record.last_update),
        }
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_pt_br() {
        let fmt = Formatter::new(Locale::PtBr);
        assert_eq!(fmt.currency(15750.5), "R$ 15.750,50");
        assert_eq!(fmt.currency(0.0), "R$ 0,00");
        assert_eq!(fmt.currency(999.999), "R$ 1.000,00");
        assert_eq!(fmt.currency(1234567.0), "R$ 1.234.567,00");
    }

    #[test]
    fn currency_en_us() {
        let fmt = Formatter::new(Locale::EnUs);
        assert_eq!(fmt.currency(15750.5), "$15,750.50");
        assert_eq!(fmt.currency(12.3), "$12.30");
        assert_eq!(fmt.currency(-4.0), "-$4.00");
    }

    #[test]
    fn dates_follow_locale() {
        let ts: Timestamp = "2024-01-05T14:07:00".parse().unwrap();
        assert_eq!(Formatter::new(Locale::PtBr).date(&ts), "05/01/2024");
        assert_eq!(Formatter::new(Locale::EnUs).date(&ts), "01/05/2024");
        assert_eq!(Formatter::new(Locale::PtBr).date_time(&ts), "05/01/2024 14:07");
        assert_eq!(Formatter::new(Locale::EnUs).date_time(&ts), "01/05/2024 02:07 PM");
    }

    #[test]
    fn locale_parsing() {
        assert_eq!("pt-BR".parse::<Locale>(), Ok(Locale::PtBr));
        assert_eq!("en_us".parse::<Locale>(), Ok(Locale::EnUs));
        assert!("fr-FR".parse::<Locale>().is_err());
        assert_eq!(Locale::EnUs.to_string(), "en-US");
    }

    #[test]
    fn unknown_values_use_neutral_tone() {
        assert_eq!(status_tone(&PatientStatus::parse("Quarentena")), Tone::Neutral);
        assert_eq!(priority_tone(&Priority::parse("?")), Tone::Neutral);
        assert_eq!(status_tone(&PatientStatus::Admitted), Tone::Blue);
        assert_eq!(priority_tone(&Priority::Critical), Tone::Red);
    }

    #[test]
    fn group_thousands_boundaries() {
        assert_eq!(group_thousands(0, '.'), "0");
        assert_eq!(group_thousands(999, '.'), "999");
        assert_eq!(group_thousands(1000, '.'), "1.000");
        assert_eq!(group_thousands(100000, ','), "100,000");
    }
}
