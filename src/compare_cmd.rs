//! Compare several algorithms of one category on a shared input.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::resolve_config;
use crate::core::{Category, EnvironmentInfo, RunConfig};
use crate::engine::{AlgorithmSummary, Comparison, ComparisonEngine, ResultStore, Variant};
use crate::input::{InputOptions, build_workload};
use crate::storage::CsvExporter;
use crate::{BenchError, BenchResult, now_string, write_json};

/// Machine-readable comparison report.
#[derive(Debug, Clone, Serialize)]
pub struct CompareReport {
    pub timestamp: String,
    pub env: EnvironmentInfo,
    pub config: RunConfig,
    pub comparison: Comparison,
    pub summaries: Vec<AlgorithmSummary>,
}

/// Format a duration in milliseconds for display.
pub fn format_ms(value: f64) -> String {
    if value >= 1000.0 {
        format!("{:.2}s", value / 1000.0)
    } else if value >= 1.0 {
        format!("{:.3}ms", value)
    } else {
        format!("{:.1}µs", value * 1000.0)
    }
}

pub fn format_text(comparison: &Comparison) -> String {
    let rule = "-".repeat(50);
    let mut out = String::new();
    out.push_str(&format!(
        "Comparing {} algorithms on input size {}\n\n",
        comparison.category, comparison.input_size
    ));
    out.push_str(&format!("{rule}\n{:<30} {:<15}\n{rule}\n", "Algorithm", "Execution Time (ms)"));
    for entry in &comparison.ranking {
        out.push_str(&format!("{:<30} {:<15.3}\n", entry.algorithm.name, entry.average_ms));
    }
    out.push_str(&format!("{rule}\n"));

    if let Some(fastest) = comparison.fastest() {
        out.push_str(&format!(
            "Fastest algorithm: {} ({})\n",
            fastest.algorithm.name,
            format_ms(fastest.average_ms)
        ));
    }
    out.push_str(&format!("Speedup compared to slowest: {:.2}x\n", comparison.speedup));
    out
}

/// Resolve the variants to compare: the named ones, or every variant of `category`.
pub fn select_variants(category: Option<Category>, algorithms: &[String]) -> BenchResult<Vec<Variant>> {
    if algorithms.is_empty() {
        let Some(category) = category else {
            return Err(BenchError::InvalidArgument(
                "pass --category or --algorithms".into(),
            ));
        };
        return Ok(Variant::all(category));
    }
    algorithms.iter().map(|name| Variant::from_name(name)).collect()
}

/// Main entry point for the compare command
pub fn run(
    category: Option<Category>,
    algorithms: Vec<String>,
    inputs: InputOptions,
    config: Option<PathBuf>,
    format: String,
    json_out: Option<PathBuf>,
    csv_out: Option<PathBuf>,
) -> BenchResult<Comparison> {
    let cfg = resolve_config(config)?;
    let variants = select_variants(category, &algorithms)?;
    let category = match (category, variants.first()) {
        (Some(c), _) => c,
        (None, Some(v)) => v.category(),
        (None, None) => {
            return Err(BenchError::InvalidArgument(
                "comparison needs at least one algorithm".into(),
            ));
        }
    };
    let workload = build_workload(category, &inputs, &cfg)?;

    let mut store = ResultStore::new();
    let comparison = ComparisonEngine::new(&mut store).compare(&variants, &workload)?;

    let report = CompareReport {
        timestamp: now_string(),
        env: EnvironmentInfo::detect(),
        config: RunConfig::for_category(category),
        comparison: comparison.clone(),
        summaries: store.summaries(),
    };

    if let Some(ref json_path) = json_out {
        write_json(json_path, &report)?;
        eprintln!("Wrote comparison report to {}", json_path.display());
    }

    if let Some(ref csv_path) = csv_out {
        CsvExporter::new().export(store.results(), csv_path)?;
        eprintln!("Wrote results to {}", csv_path.display());
    }

    let output = match format.as_str() {
        "json" => serde_json::to_string_pretty(&report)
            .map_err(|e| BenchError::Message(format!("failed to serialize report: {e}")))?,
        _ => format_text(&comparison),
    };
    print!("{}", output);

    Ok(comparison)
}
