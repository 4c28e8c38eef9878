//! Synthetic input generation for benchmarks.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::algorithms::Graph;
use crate::algorithms::graph::EdgeList;
use crate::config::BenchConfig;
use crate::core::Category;
use crate::engine::Workload;
use crate::{BenchError, BenchResult};

/// Shape of a generated array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrayKind {
    Random,
    Sorted,
    Reversed,
    /// Sorted, then `fraction * size` random swaps.
    NearlySorted { fraction: f64 },
    /// Values drawn from a pool of `unique` distinct values.
    Duplicates { unique: usize },
}

impl ArrayKind {
    /// Build a kind from its name plus the parameters the parametric kinds need.
    pub fn from_parts(name: &str, fraction: f64, unique: usize) -> BenchResult<Self> {
        let kind = match name.parse::<ArrayKindName>()? {
            ArrayKindName::Random => ArrayKind::Random,
            ArrayKindName::Sorted => ArrayKind::Sorted,
            ArrayKindName::Reversed => ArrayKind::Reversed,
            ArrayKindName::NearlySorted => ArrayKind::NearlySorted { fraction },
            ArrayKindName::Duplicates => ArrayKind::Duplicates { unique },
        };
        Ok(kind)
    }
}

enum ArrayKindName {
    Random,
    Sorted,
    Reversed,
    NearlySorted,
    Duplicates,
}

impl FromStr for ArrayKindName {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "random" => Ok(ArrayKindName::Random),
            "sorted" => Ok(ArrayKindName::Sorted),
            "reversed" => Ok(ArrayKindName::Reversed),
            "nearly-sorted" => Ok(ArrayKindName::NearlySorted),
            "duplicates" => Ok(ArrayKindName::Duplicates),
            other => Err(BenchError::InvalidArgument(format!(
                "unknown array kind '{other}' (expected random, sorted, reversed, nearly-sorted or duplicates)"
            ))),
        }
    }
}

/// Seeded generator when `seed` is set, OS-seeded otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Generate `size` values in `min..=max` shaped by `kind`.
///
/// # Errors
/// `InvalidArgument` if `min > max`, a nearly-sorted fraction lies outside `0..=1`, or a
/// duplicates pool is empty for a non-empty array.
pub fn generate_array<R: Rng>(
    size: usize,
    min: i32,
    max: i32,
    kind: ArrayKind,
    rng: &mut R,
) -> BenchResult<Vec<i32>> {
    if min > max {
        return Err(BenchError::InvalidArgument(format!(
            "min ({min}) must not exceed max ({max})"
        )));
    }
    let mut values: Vec<i32> = match kind {
        ArrayKind::Duplicates { unique } => {
            if unique == 0 && size > 0 {
                return Err(BenchError::InvalidArgument(
                    "duplicates needs at least one unique value".into(),
                ));
            }
            let pool: Vec<i32> = (0..unique).map(|_| rng.random_range(min..=max)).collect();
            (0..size).map(|_| pool[rng.random_range(0..pool.len())]).collect()
        }
        _ => (0..size).map(|_| rng.random_range(min..=max)).collect(),
    };

    match kind {
        ArrayKind::Random | ArrayKind::Duplicates { .. } => {}
        ArrayKind::Sorted => values.sort_unstable(),
        ArrayKind::Reversed => values.sort_unstable_by(|a, b| b.cmp(a)),
        ArrayKind::NearlySorted { fraction } => {
            if !(0.0..=1.0).contains(&fraction) {
                return Err(BenchError::InvalidArgument(format!(
                    "nearly-sorted fraction {fraction} must be within 0..=1"
                )));
            }
            values.sort_unstable();
            if size > 1 {
                let swaps = (size as f64 * fraction).round() as usize;
                for _ in 0..swaps {
                    let a = rng.random_range(0..size);
                    let b = rng.random_range(0..size);
                    values.swap(a, b);
                }
            }
        }
    }
    Ok(values)
}

/// Generate a directed graph with `edges` random edges and weights in `1..=max_weight`.
///
/// # Errors
/// `InvalidArgument` if edges are requested for a graph without vertices or `max_weight`
/// is zero.
pub fn generate_graph<R: Rng>(
    vertices: usize,
    edges: usize,
    max_weight: u64,
    rng: &mut R,
) -> BenchResult<Graph> {
    if vertices == 0 && edges > 0 {
        return Err(BenchError::InvalidArgument(
            "cannot place edges in a graph with no vertices".into(),
        ));
    }
    if max_weight == 0 {
        return Err(BenchError::InvalidArgument("max_weight must be at least 1".into()));
    }
    let mut graph = Graph::new(vertices);
    for _ in 0..edges {
        let source = rng.random_range(0..vertices);
        let destination = rng.random_range(0..vertices);
        let weight = rng.random_range(1..=max_weight);
        graph.add_edge(source, destination, weight)?;
    }
    Ok(graph)
}

/// Pick a search target from `data`, so the search hits. `None` for an empty array.
pub fn pick_target<R: Rng>(data: &[i32], rng: &mut R) -> Option<i32> {
    data.choose(rng).copied()
}

/// Input parameters from the command line; unset fields fall back to `BenchConfig`.
#[derive(Debug, Clone)]
pub struct InputOptions {
    /// Explicit array contents; used as given instead of generating one.
    pub values: Option<Vec<i32>>,
    pub size: Option<usize>,
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub kind: String,
    pub fraction: f64,
    pub unique: usize,
    pub target: Option<i32>,
    pub vertices: Option<usize>,
    pub edges: Option<usize>,
    pub max_weight: Option<u64>,
    pub start: usize,
    pub graph_file: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Default for InputOptions {
    fn default() -> Self {
        InputOptions {
            values: None,
            size: None,
            min: None,
            max: None,
            kind: "random".to_string(),
            fraction: 0.05,
            unique: 10,
            target: None,
            vertices: None,
            edges: None,
            max_weight: None,
            start: 0,
            graph_file: None,
            seed: None,
        }
    }
}

/// Read an edge list from a `.json` or `.toml` file.
pub fn load_graph(path: &Path) -> BenchResult<Graph> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| BenchError::Message(format!("failed to read {}: {e}", path.display())))?;
    let list: EdgeList = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&s)
            .map_err(|e| BenchError::Message(format!("invalid graph file: {e}")))?,
        _ => toml::from_str(&s).map_err(|e| BenchError::Message(format!("invalid graph file: {e}")))?,
    };
    Graph::from_edge_list(&list)
}

/// Build the workload for `category` from command-line options and configuration.
pub fn build_workload(category: Category, opts: &InputOptions, config: &BenchConfig) -> BenchResult<Workload> {
    let mut rng = rng_from_seed(opts.seed.or(config.seed));
    match category {
        Category::Sorting | Category::Searching => {
            let data = match &opts.values {
                Some(values) => values.clone(),
                None => {
                    let kind = ArrayKind::from_parts(&opts.kind, opts.fraction, opts.unique)?;
                    generate_array(
                        opts.size.unwrap_or(config.array.size),
                        opts.min.unwrap_or(config.array.min),
                        opts.max.unwrap_or(config.array.max),
                        kind,
                        &mut rng,
                    )?
                }
            };
            if category == Category::Sorting {
                return Ok(Workload::Sort { data });
            }
            let target = opts
                .target
                .or_else(|| pick_target(&data, &mut rng))
                .unwrap_or_default();
            Ok(Workload::Search { data, target })
        }
        Category::Graph => {
            let graph = match &opts.graph_file {
                Some(path) => load_graph(path)?,
                None => generate_graph(
                    opts.vertices.unwrap_or(config.graph.vertices),
                    opts.edges.unwrap_or(config.graph.edges),
                    opts.max_weight.unwrap_or(config.graph.max_weight),
                    &mut rng,
                )?,
            };
            Ok(Workload::Graph {
                graph,
                start: opts.start,
            })
        }
    }
}
