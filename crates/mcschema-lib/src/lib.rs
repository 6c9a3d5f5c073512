//! mcschema: extract a typed block/entity schema from a host registry.
//!
//! The pipeline:
//! - `classify` - property domain to type tag
//! - `enums` - enum unification across all block properties
//! - `blocks` - block registry walk
//! - `hierarchy` - ancestor-chain linearization of implementation types
//! - `entities` - entity registry walk and the global class table
//! - `report` - the line-oriented report (emit, parse, check)
//! - `diagnostics` - non-fatal conditions found along the way
//!
//! # Example
//!
//! ```
//! use mcschema_core::Snapshot;
//! use mcschema_lib::{ExtractConfig, extract_snapshot};
//!
//! let snapshot = Snapshot::from_json(r#"{
//!     "blocks": [{"id": "minecraft:furnace", "properties": [
//!         {"name": "lit", "domain": {"kind": "boolean"}}
//!     ]}]
//! }"#).unwrap();
//!
//! let extraction = extract_snapshot(&snapshot, &ExtractConfig::default());
//! assert!(extraction.render_report().starts_with("BLOCKINFO --- furnace - lit:bool \n"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod blocks;
pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod entities;
pub mod enums;
pub mod extract;
pub mod hierarchy;
pub mod report;

#[cfg(test)]
mod hierarchy_tests;
#[cfg(test)]
mod test_utils;

/// Result type for walks that produce both output and diagnostics.
///
/// Per-kind failures never abort a walk; they end up in the diagnostics or
/// are skipped.
pub type PassResult<T> = (T, Diagnostics);

pub use classify::{Classifier, TypeTag};
pub use config::ExtractConfig;
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use extract::{Extraction, extract, extract_snapshot};
pub use report::{Report, check, parse};

/// Errors that stop a command outright.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Snapshot(#[from] mcschema_core::snapshot::SnapshotError),

    /// A report line does not match any record family.
    #[error("report line {line}: {message}")]
    ReportParse { line: usize, message: String },
}

/// Result type for report and snapshot operations.
pub type Result<T> = std::result::Result<T, Error>;
