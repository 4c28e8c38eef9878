//! Engine module: measures algorithm variants and compares them.
//!
//! # Architecture
//!
//! - **Runner**: `BenchmarkRunner` applies the fixed protocol (warm-up, then N timed
//!   runs on fresh inputs, averaged) to any closure. It knows nothing about algorithms.
//!
//! - **Workload**: `Variant` and `Workload` pair a capability with a compatible input and
//!   drive the runner for one variant, producing a `PerformanceResult`.
//!
//! - **Store**: `ResultStore` is the append-only, in-memory log of results with the
//!   aggregation queries the reporting layer uses.
//!
//! - **Compare**: `ComparisonEngine` benchmarks several variants on the same logical
//!   input, ranks them and records every result in a store.
//!
//! Everything here is synchronous and single-threaded. A store shared between threads
//! must be wrapped in a lock by the caller.

pub mod compare;
pub mod runner;
pub mod store;
pub mod workload;

// Re-export key types for convenience
pub use compare::{Comparison, ComparisonEngine, RankedEntry};
pub use runner::{BenchmarkRunner, Measurement};
pub use store::{AlgorithmSummary, ResultStore};
pub use workload::{Execution, Output, Variant, Workload, run};
