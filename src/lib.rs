pub mod algorithms;
pub mod config;
pub mod core;
pub mod engine;
pub mod input;
pub mod storage;

pub mod compare_cmd;
pub mod list_cmd;
pub mod run_cmd;

use std::path::Path;

use thiserror::Error;

pub use algorithms::{Edge, Graph, GraphTraverser, Searcher, ShortestPathFinder, Sorter};
pub use core::{AlgorithmDescriptor, Category, PerformanceResult, RunConfig};
pub use engine::{BenchmarkRunner, Comparison, ComparisonEngine, ResultStore, Variant, Workload};
pub use storage::CsvExporter;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("{0}")]
    Message(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type BenchResult<T> = Result<T, BenchError>;

// Shared helpers
pub fn now_string() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "".to_string())
}

pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> BenchResult<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).map_err(|e| BenchError::Message(e.to_string()))?;
        }
    }
    let json = serde_json::to_vec_pretty(value).map_err(|e| BenchError::Message(e.to_string()))?;
    std::fs::write(path, json).map_err(|e| BenchError::Message(e.to_string()))
}
