//! Host snapshot attached to exported reports.
//!
//! Timings are only comparable on the same machine; the snapshot lets a reader of an
//! exported report tell which machine produced it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_cores_physical: Option<u32>,

    pub cpu_cores_logical: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_ram_bytes: Option<u64>,

    pub os: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    pub algo_bench_version: String,
}

impl Default for EnvironmentInfo {
    fn default() -> Self {
        EnvironmentInfo {
            cpu_model: None,
            cpu_cores_physical: None,
            cpu_cores_logical: 0,
            total_ram_bytes: None,
            os: std::env::consts::OS.to_string(),
            hostname: None,
            algo_bench_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl EnvironmentInfo {
    /// Detect environment information from the current system
    pub fn detect() -> Self {
        use sysinfo::System;

        let mut sys = System::new_all();
        sys.refresh_all();

        let cpu_model = sys
            .cpus()
            .first()
            .map(|c| c.brand().trim().to_string())
            .filter(|s| !s.is_empty());
        let cpu_cores_physical = sys.physical_core_count().map(|c| c as u32);
        let cpu_cores_logical = sys.cpus().len() as u32;
        let total_ram_bytes = Some(sys.total_memory());
        let os = System::name().unwrap_or_else(|| std::env::consts::OS.to_string());
        let hostname = System::host_name();

        EnvironmentInfo {
            cpu_model,
            cpu_cores_physical,
            cpu_cores_logical,
            total_ram_bytes,
            os,
            hostname,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_detect_has_os() {
        let env = EnvironmentInfo::detect();
        assert!(!env.os.is_empty());
        assert_eq!(env.algo_bench_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_environment_default_skips_unknown_fields() {
        let env = EnvironmentInfo::default();
        let json = serde_json::to_value(&env).unwrap();
        assert!(json.get("cpu_model").is_none());
        assert!(json.get("hostname").is_none());
        assert_eq!(json["os"], std::env::consts::OS);
    }
}
