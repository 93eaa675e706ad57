//! i18n-magic - translation key extraction and locale file reconciliation
//!
//! Scans JS/TS sources for translation calls, maps every key to the
//! namespaces it belongs to, and keeps the per-locale, per-namespace JSON
//! documents in sync: missing keys are filled by prompting and machine
//! translation, unused keys are removed.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and validation
//! - `core`: Extraction, reconciliation, storage and translation
//! - `engines`: Scan, sync, clean and the other orchestrated operations
//! - `error`: Error type shared by the core and the engines
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod engines;
pub mod error;
pub mod mcp;

pub use error::{Error, Result};
