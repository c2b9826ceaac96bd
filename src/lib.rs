//! # wardview - Terminal Patient Record Browser
//!
//! Browse a hospital's patient records in the terminal: free-text search, status/department/
//! priority filters, a configurable and reorderable column set, and a per-patient detail view.
//!
//! ## Architecture
//!
//! - [`records`] - Record model, JSON parsing and record sources
//! - [`filter`] - Search and categorical filtering with cached results
//! - [`columns`] - Column catalog and the visible/ordered column layout
//! - [`detail`] - Single-record detail selection and field grouping
//! - [`browser`] - Facade owning all browser state
//! - [`format`] - Locale-aware presentation of values
//! - [`input`] / [`render`] - Terminal key handling and drawing
//! - [`app`] - Event loop tying input, browser and renderer together
//! - [`config`] - TOML configuration
//! - [`error`] - Centralized error types

// Core modules
pub mod config;
pub mod error;
pub mod format;

// Browser engine
pub mod browser;
pub mod columns;
pub mod detail;
pub mod filter;
pub mod records;

// Terminal front end
pub mod app;
pub mod input;
pub mod render;

// Re-export commonly used types for convenience
pub use error::{Result, WardviewError};

pub use app::Application;
pub use browser::Browser;
pub use columns::{ColumnKey, ColumnLayout};
pub use config::Config;
pub use filter::{FilterState, Selector};
pub use records::{JsonFileSource, PatientRecord, RecordSource, SampleSource};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
