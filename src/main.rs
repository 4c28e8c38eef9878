#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use algo_bench::input::InputOptions;
use algo_bench::{Category, compare_cmd, list_cmd, run_cmd};

#[derive(Parser, Debug)]
#[command(name = "algo-bench")]
#[command(about = "Benchmark and compare sorting, searching and graph algorithms", long_about = None)]
struct Cli {
    /// Enable verbose logging (or set ALGO_BENCH_LOG)
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Input generation flags shared by `run` and `compare`.
#[derive(Args, Debug)]
struct InputArgs {
    /// Benchmark this array instead of a generated one (e.g. --values 5,3,1,4,2)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Option<Vec<i32>>,
    /// Array length (sorting, searching)
    #[arg(long)]
    size: Option<usize>,
    /// Smallest generated value
    #[arg(long, allow_hyphen_values = true)]
    min: Option<i32>,
    /// Largest generated value
    #[arg(long, allow_hyphen_values = true)]
    max: Option<i32>,
    /// Array shape: random, sorted, reversed, nearly_sorted, duplicates
    #[arg(long, default_value = "random")]
    kind: String,
    /// Fraction of elements displaced for nearly_sorted
    #[arg(long, default_value_t = 0.05)]
    fraction: f64,
    /// Number of distinct values for duplicates
    #[arg(long, default_value_t = 10)]
    unique: usize,
    /// Search target (default: a value drawn from the array)
    #[arg(long, allow_hyphen_values = true)]
    target: Option<i32>,
    /// Vertex count for generated graphs
    #[arg(long)]
    vertices: Option<usize>,
    /// Edge count for generated graphs
    #[arg(long)]
    edges: Option<usize>,
    /// Largest generated edge weight
    #[arg(long)]
    max_weight: Option<u64>,
    /// Start vertex for graph algorithms
    #[arg(long, default_value_t = 0)]
    start: usize,
    /// Load the graph from an edge list (.json or .toml) instead of generating one.
    /// Depth-first search recurses once per vertex on a path, so very deep graphs
    /// (long chains of ~100k vertices) can overflow the stack.
    #[arg(long)]
    graph: Option<PathBuf>,
    /// RNG seed for reproducible inputs
    #[arg(long)]
    seed: Option<u64>,
}

impl From<InputArgs> for InputOptions {
    fn from(args: InputArgs) -> Self {
        InputOptions {
            values: args.values,
            size: args.size,
            min: args.min,
            max: args.max,
            kind: args.kind,
            fraction: args.fraction,
            unique: args.unique,
            target: args.target,
            vertices: args.vertices,
            edges: args.edges,
            max_weight: args.max_weight,
            start: args.start,
            graph_file: args.graph,
            seed: args.seed,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available algorithms
    List {
        /// Only list algorithms of this category (sorting, searching, graph)
        #[arg(long)]
        category: Option<Category>,
    },

    /// Benchmark a single algorithm
    Run {
        /// Algorithm id or display name (e.g. quick_sort, "Quick Sort")
        #[arg(long)]
        algorithm: String,
        #[command(flatten)]
        inputs: InputArgs,
        /// Config file (default: ./algo-bench.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
        /// Write machine-readable JSON report to this file
        #[arg(long)]
        json: Option<PathBuf>,
        /// Export the result as CSV to this file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Compare algorithms of one category on the same input
    Compare {
        /// Compare every algorithm of this category
        #[arg(long)]
        category: Option<Category>,
        /// Comma-separated algorithm ids or names
        #[arg(long, value_delimiter = ',')]
        algorithms: Vec<String>,
        #[command(flatten)]
        inputs: InputArgs,
        /// Config file (default: ./algo-bench.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
        /// Write machine-readable JSON report to this file
        #[arg(long)]
        json: Option<PathBuf>,
        /// Export every result as CSV to this file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("ALGO_BENCH_LOG").unwrap_or_else(|_| {
        if verbose { "algo_bench=debug".to_string() } else { "algo_bench=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_span_events(FmtSpan::ACTIVE)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::List { category } => list_cmd::run(category),
        Commands::Run { algorithm, inputs, config, format, json, csv } => {
            run_cmd::run(algorithm, inputs.into(), config, format, json, csv).map(|_| ())
        }
        Commands::Compare { category, algorithms, inputs, config, format, json, csv } => {
            compare_cmd::run(category, algorithms, inputs.into(), config, format, json, csv).map(|_| ())
        }
    };

    if let Err(e) = result {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_values_flag_accepts_negative_list() {
        let cli = Cli::try_parse_from([
            "algo-bench", "run", "--algorithm", "quick_sort", "--values", "5,-3,1", "--target", "-3",
        ])
        .unwrap();
        let Commands::Run { inputs, .. } = cli.command else {
            panic!("expected run command");
        };
        let opts = InputOptions::from(inputs);
        assert_eq!(opts.values, Some(vec![5, -3, 1]));
        assert_eq!(opts.target, Some(-3));
    }

    #[test]
    fn test_graph_help_warns_about_deep_dfs() {
        let cmd = Cli::command();
        let run = cmd.find_subcommand("run").unwrap();
        let graph = run
            .get_arguments()
            .find(|a| a.get_id() == "graph")
            .unwrap();
        let help = graph.get_help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("overflow the stack"), "{help}");
    }
}
