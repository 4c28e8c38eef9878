//! Export layer for performance results.
//!
//! The engine keeps results in memory only; this module writes them out.

pub mod csv;

// Re-export key types
pub use csv::{CSV_HEADERS, CsvExporter};
