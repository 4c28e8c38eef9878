//! Integration tests for CSV export and the command entry points' file outputs.

use std::path::PathBuf;

use algo_bench::core::descriptor::{BINARY_SEARCH, BUBBLE_SORT, DIJKSTRA, QUICK_SORT};
use algo_bench::engine::Output;
use algo_bench::input::InputOptions;
use algo_bench::{Category, CsvExporter, PerformanceResult, compare_cmd, run_cmd};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_export_matches_fixture() {
    let results = [
        PerformanceResult::new(&BUBBLE_SORT, 12.5, 1000),
        PerformanceResult::new(&QUICK_SORT, 0.125, 1000),
        PerformanceResult::new(&BINARY_SEARCH, 0.00075, 1000),
        PerformanceResult::new(&DIJKSTRA, 0.03125, 100),
    ];
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.csv");
    CsvExporter::new().export(&results, &path).expect("export failed");

    let actual = std::fs::read_to_string(&path).unwrap();
    let expected = std::fs::read_to_string(fixture("results.csv")).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn test_exported_rows_parse_back() {
    let mut buffer = Vec::new();
    CsvExporter::new()
        .export_to_writer(&[PerformanceResult::new(&QUICK_SORT, 2.0, 50)], &mut buffer)
        .unwrap();

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][2], "O(n log n) average, O(n^2) worst");
    assert_eq!(rows[0][4].parse::<usize>().unwrap(), 50);
    assert_eq!(rows[0][5].parse::<f64>().unwrap(), 2.0);
}

#[test]
fn test_compare_command_writes_reports() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("out").join("compare.json");
    let csv_path = dir.path().join("out").join("compare.csv");
    let inputs = InputOptions {
        size: Some(200),
        seed: Some(3),
        ..Default::default()
    };

    let comparison = compare_cmd::run(
        Some(Category::Sorting),
        Vec::new(),
        inputs,
        None,
        "text".to_string(),
        Some(json_path.clone()),
        Some(csv_path.clone()),
    )
    .unwrap();
    assert_eq!(comparison.ranking.len(), 5);

    let report: serde_json::Value = serde_json::from_slice(&std::fs::read(&json_path).unwrap()).unwrap();
    assert_eq!(report["config"]["measured_runs"], 10);
    assert_eq!(report["comparison"]["input_size"], 200);
    assert_eq!(report["summaries"].as_array().unwrap().len(), 5);
    assert!(report["timestamp"].as_str().is_some());

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 6);
}

#[test]
fn test_compare_command_rejects_mixed_categories() {
    let result = compare_cmd::run(
        None,
        vec!["quick_sort".to_string(), "bfs".to_string()],
        InputOptions::default(),
        None,
        "text".to_string(),
        None,
        None,
    );
    assert!(result.is_err());
}

#[test]
fn test_run_command_on_graph_file() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("run.json");
    let inputs = InputOptions {
        graph_file: Some(fixture("tree.toml")),
        ..Default::default()
    };

    let execution = run_cmd::run(
        "Dijkstra".to_string(),
        inputs,
        None,
        "text".to_string(),
        Some(json_path.clone()),
        None,
    )
    .unwrap();
    assert_eq!(execution.output, Output::Distances(vec![0, 1, 1, 2]));

    let report: serde_json::Value = serde_json::from_slice(&std::fs::read(&json_path).unwrap()).unwrap();
    assert_eq!(report["result"]["input_size"], 4);
    assert_eq!(report["output"]["distances"], serde_json::json!([0, 1, 1, 2]));
}

#[test]
fn test_run_command_unknown_algorithm() {
    let result = run_cmd::run(
        "bogo_sort".to_string(),
        InputOptions::default(),
        None,
        "text".to_string(),
        None,
        None,
    );
    assert!(matches!(result, Err(algo_bench::BenchError::UnknownAlgorithm(_))));
}
