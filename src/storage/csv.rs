//! CSV export for performance results.

use std::io::Write;
use std::path::Path;

use crate::BenchError;
use crate::core::PerformanceResult;

/// CSV column headers in deterministic order.
pub const CSV_HEADERS: &[&str] = &[
    "algorithm",
    "category",
    "time_complexity",
    "space_complexity",
    "input_size",
    "execution_time_ms",
];

/// CSV exporter for performance results.
///
/// One row per result, in the order given, with a flat column structure.
#[derive(Debug, Clone, Default)]
pub struct CsvExporter;

impl CsvExporter {
    /// Create a new CsvExporter.
    pub fn new() -> Self {
        CsvExporter
    }

    /// Export results to a CSV file, creating parent directories as needed.
    ///
    /// # Errors
    /// Returns an error if file operations or CSV writing fails.
    pub fn export(&self, results: &[PerformanceResult], output: &Path) -> Result<(), BenchError> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| BenchError::Message(format!("failed to create directory: {e}")))?;
            }
        }

        let file = std::fs::File::create(output)
            .map_err(|e| BenchError::Message(format!("failed to create file: {e}")))?;

        self.export_to_writer(results, file)
    }

    /// Export results to any writer implementing Write.
    ///
    /// # Errors
    /// Returns an error if CSV writing fails.
    pub fn export_to_writer<W: Write>(
        &self,
        results: &[PerformanceResult],
        writer: W,
    ) -> Result<(), BenchError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(CSV_HEADERS)
            .map_err(|e| BenchError::Message(format!("failed to write CSV headers: {e}")))?;

        for result in results {
            csv_writer
                .write_record(self.result_to_row(result))
                .map_err(|e| BenchError::Message(format!("failed to write CSV row: {e}")))?;
        }

        csv_writer
            .flush()
            .map_err(|e| BenchError::Message(format!("failed to flush CSV writer: {e}")))?;

        Ok(())
    }

    fn result_to_row(&self, result: &PerformanceResult) -> Vec<String> {
        let algorithm = result.algorithm;
        vec![
            algorithm.name.to_string(),
            algorithm.category.to_string(),
            algorithm.time_complexity.to_string(),
            algorithm.space_complexity.to_string(),
            result.input_size.to_string(),
            format!("{:.6}", result.execution_time_ms),
        ]
    }
}
