//! Core types for algo-bench.
//!
//! This module contains the algorithm catalog (`AlgorithmDescriptor`), the measurement
//! protocol (`RunConfig`) and the `PerformanceResult` record produced by every benchmark.

pub mod descriptor;
pub mod env;
pub mod schema;

// Re-export key types for convenience
pub use descriptor::{AlgorithmDescriptor, Category, catalog, descriptors, find_descriptor};
pub use env::EnvironmentInfo;
pub use schema::{PerformanceResult, RunConfig};
