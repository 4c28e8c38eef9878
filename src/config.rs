//! TOML configuration for CLI input defaults.
//!
//! ```toml
//! seed = 42
//!
//! [array]
//! size = 5000
//! min = 0
//! max = 1000
//!
//! [graph]
//! vertices = 200
//! edges = 800
//! max_weight = 20
//! ```
//!
//! The measurement protocol is fixed per category and cannot be configured here.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{BenchError, BenchResult};

pub const DEFAULT_CONFIG: &str = "algo-bench.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub seed: Option<u64>,
    pub array: ArrayDefaults,
    pub graph: GraphDefaults,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArrayDefaults {
    pub size: usize,
    pub min: i32,
    pub max: i32,
}

impl Default for ArrayDefaults {
    fn default() -> Self {
        ArrayDefaults {
            size: 1000,
            min: 0,
            max: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphDefaults {
    pub vertices: usize,
    pub edges: usize,
    pub max_weight: u64,
}

impl Default for GraphDefaults {
    fn default() -> Self {
        GraphDefaults {
            vertices: 100,
            edges: 300,
            max_weight: 10,
        }
    }
}

pub fn parse_config(s: &str) -> BenchResult<BenchConfig> {
    toml::from_str(s).map_err(|e| BenchError::Message(format!("invalid config: {e}")))
}

pub fn load_config(path: &Path) -> BenchResult<BenchConfig> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| BenchError::Message(format!("failed to read {}: {e}", path.display())))?;
    parse_config(&s)
}

/// Load `explicit` if given (it must exist), else `algo-bench.toml` if present, else defaults.
pub fn resolve_config(explicit: Option<PathBuf>) -> BenchResult<BenchConfig> {
    match explicit {
        Some(path) => load_config(&path),
        None => {
            let path = Path::new(DEFAULT_CONFIG);
            if path.exists() {
                debug!(path = %path.display(), "loading default config");
                load_config(path)
            } else {
                Ok(BenchConfig::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg, BenchConfig::default());
        assert_eq!(cfg.array.size, 1000);
        assert_eq!(cfg.graph.max_weight, 10);
        assert!(cfg.seed.is_none());
    }

    #[test]
    fn test_partial_sections_merge_with_defaults() {
        let cfg = parse_config("seed = 7\n[array]\nsize = 50\n[graph]\nedges = 9\n").unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.array.size, 50);
        assert_eq!(cfg.array.max, 1000);
        assert_eq!(cfg.graph.edges, 9);
        assert_eq!(cfg.graph.vertices, 100);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(parse_config("[array]\nsorted = true\n").is_err());
        assert!(parse_config("measured_runs = 3\n").is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = resolve_config(Some(dir.path().join("missing.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("algo-bench.toml");
        std::fs::write(&path, "[array]\nmin = -5\nmax = 5\n").unwrap();
        let cfg = load_config(&path).unwrap();
        assert_eq!((cfg.array.min, cfg.array.max), (-5, 5));
    }
}
