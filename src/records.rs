//! Patient records and the sources they are loaded from.
//!
//! Records are supplied once at startup as a fixed ordered sequence and are never mutated
//! afterwards. The browser core only ever reads them.

pub mod model;
pub mod sample;
pub mod source;
pub mod validation;

pub use model::{PatientRecord, PatientStatus, Priority, Timestamp, TimestampError};
pub use source::{parse_records, JsonFileSource, RecordSource, SampleSource};
