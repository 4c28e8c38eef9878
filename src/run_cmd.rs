//! Benchmark a single algorithm.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::resolve_config;
use crate::core::{EnvironmentInfo, PerformanceResult, RunConfig};
use crate::engine::{Execution, Output, Variant, Workload, run as run_variant};
use crate::input::{InputOptions, build_workload};
use crate::storage::CsvExporter;
use crate::{BenchError, BenchResult, now_string, write_json};

const PREVIEW_LEN: usize = 20;

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub timestamp: String,
    pub env: EnvironmentInfo,
    pub config: RunConfig,
    pub result: PerformanceResult,
    pub output: Output,
}

fn preview<T: std::fmt::Display>(values: &[T]) -> String {
    let shown: Vec<String> = values.iter().take(PREVIEW_LEN).map(|v| v.to_string()).collect();
    if values.len() > PREVIEW_LEN {
        format!("[{}, ... ({} more)]", shown.join(", "), values.len() - PREVIEW_LEN)
    } else {
        format!("[{}]", shown.join(", "))
    }
}

pub fn describe_output(output: &Output) -> String {
    match output {
        Output::Sorted(values) => format!("Sorted array: {}", preview(values)),
        Output::Index(Some(i)) => format!("Found at index: {i}"),
        Output::Index(None) => "Found at index: -1 (not present)".to_string(),
        Output::Order(order) => format!("Visit order: {}", preview(order)),
        Output::Distances(distances) => {
            let shown: Vec<String> = distances
                .iter()
                .map(|d| match *d {
                    crate::algorithms::UNREACHABLE => "INF".to_string(),
                    d => d.to_string(),
                })
                .collect();
            format!("Distances: {}", preview(&shown))
        }
    }
}

/// The array a searcher actually searched, when it differs from the workload's array.
pub fn sorted_search_input(variant: &Variant, workload: &Workload) -> Option<Vec<i32>> {
    match (variant, workload) {
        (Variant::Search(searcher), Workload::Search { data, .. }) if searcher.requires_sorted_input() => {
            let mut sorted = data.clone();
            sorted.sort_unstable();
            Some(sorted)
        }
        _ => None,
    }
}

/// Human-readable run summary. `sorted_input` is shown so a reported index can be read
/// against the array it refers to.
pub fn format_text(execution: &Execution, sorted_input: Option<&[i32]>) -> String {
    let d = execution.result.algorithm;
    let mut out = String::new();
    if let Some(sorted) = sorted_input {
        out.push_str(&format!("Array has been sorted for {}: {}\n", d.name, preview(sorted)));
    }
    out.push_str(&format!("{}\n", describe_output(&execution.output)));
    out.push_str(&format!(
        "Execution time: {:.3} ms\n\n",
        execution.result.execution_time_ms
    ));
    out.push_str(&format!("Algorithm: {}\n", d.name));
    out.push_str(&format!("Description: {}\n", d.description));
    out.push_str(&format!("Time Complexity: {}\n", d.time_complexity));
    out.push_str(&format!("Space Complexity: {}\n", d.space_complexity));
    out
}

/// Main entry point for the run command
pub fn run(
    algorithm: String,
    inputs: InputOptions,
    config: Option<PathBuf>,
    format: String,
    json_out: Option<PathBuf>,
    csv_out: Option<PathBuf>,
) -> BenchResult<Execution> {
    let cfg = resolve_config(config)?;
    let variant = Variant::from_name(&algorithm)?;
    let workload = build_workload(variant.category(), &inputs, &cfg)?;
    let execution = run_variant(&variant, &workload)?;

    let report = RunReport {
        timestamp: now_string(),
        env: EnvironmentInfo::detect(),
        config: RunConfig::for_category(variant.category()),
        result: execution.result,
        output: execution.output.clone(),
    };

    if let Some(ref json_path) = json_out {
        write_json(json_path, &report)?;
        eprintln!("Wrote run report to {}", json_path.display());
    }

    if let Some(ref csv_path) = csv_out {
        CsvExporter::new().export(&[execution.result], csv_path)?;
        eprintln!("Wrote result to {}", csv_path.display());
    }

    let output = match format.as_str() {
        "json" => serde_json::to_string_pretty(&report)
            .map_err(|e| BenchError::Message(format!("failed to serialize report: {e}")))?,
        _ => format_text(&execution, sorted_search_input(&variant, &workload).as_deref()),
    };
    print!("{}", output);

    Ok(execution)
}
