//! Path configuration for slurmcheck.
//!
//! Experiments live under a per-user project directory on the shared
//! filesystem; a JSON config file names every component of the layout. This
//! crate parses that file and resolves the concrete paths the rest of the
//! tool reads and writes.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(Utf8PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Cluster filesystem layout: HOME/USER/PROJECT compose the project root.
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterSection {
    #[serde(rename = "HOME")]
    pub home: Utf8PathBuf,
    #[serde(rename = "USER")]
    pub user: String,
    #[serde(rename = "PROJECT")]
    pub project: String,
}

/// Names of the metadata table and the two detail tables derived from it.
#[derive(Debug, Clone, Deserialize)]
pub struct TsvSection {
    #[serde(rename = "DEFAULT_FN")]
    pub default_fn: String,
    #[serde(rename = "FAILED_FN")]
    pub failed_fn: String,
    #[serde(rename = "TIMEOUT_FN")]
    pub timeout_fn: String,
}

/// Experiment file names within the SLURM directory.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpSection {
    /// Manifest: one command line per experiment, order defines the ID.
    #[serde(rename = "TXT_FN")]
    pub txt_fn: String,
    #[serde(rename = "TSV")]
    pub tsv: TsvSection,
}

/// Top-level path config schema.
#[derive(Debug, Clone, Deserialize)]
pub struct PathConfig {
    #[serde(rename = "EDI")]
    pub cluster: ClusterSection,
    /// SLURM subdirectory name within the project.
    #[serde(rename = "SLURM_DN")]
    pub slurm_dn: String,
    #[serde(rename = "EXP")]
    pub exp: ExpSection,
}

impl PathConfig {
    /// Load and parse a config file.
    ///
    /// A missing file is reported as `NotFound` rather than a bare IO error
    /// so the operator sees the path they passed.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_owned()));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Resolve every path the checker touches.
    pub fn resolve(&self) -> ResolvedPaths {
        let project_dir = self
            .cluster
            .home
            .join(&self.cluster.user)
            .join(&self.cluster.project);
        let slurm_dir = project_dir.join(&self.slurm_dn);
        ResolvedPaths {
            manifest: slurm_dir.join(&self.exp.txt_fn),
            metadata_table: slurm_dir.join(&self.exp.tsv.default_fn),
            failed_table: slurm_dir.join(&self.exp.tsv.failed_fn),
            timeout_table: slurm_dir.join(&self.exp.tsv.timeout_fn),
            slurm_dir,
        }
    }
}

/// Concrete filesystem locations resolved from a [`PathConfig`].
#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    /// Directory holding the manifest, the tables and the per-job logs.
    pub slurm_dir: Utf8PathBuf,
    /// Experiment manifest file.
    pub manifest: Utf8PathBuf,
    /// Source metadata table, one row per experiment ID.
    pub metadata_table: Utf8PathBuf,
    /// Destination for failed-experiment detail rows.
    pub failed_table: Utf8PathBuf,
    /// Destination for timed-out-experiment detail rows.
    pub timeout_table: Utf8PathBuf,
}

impl ResolvedPaths {
    /// Per-job log path for a (scheduler job, experiment ID) pair.
    ///
    /// Array jobs log to `slurm-{job}_{task}.out`, where the task index is
    /// the experiment ID.
    pub fn log_path(&self, job: u64, id: usize) -> Utf8PathBuf {
        self.slurm_dir.join(format!("slurm-{job}_{id}.out"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CONFIG_JSON: &str = r#"{
        "EDI": {
            "HOME": "/home",
            "USER": "s1234567",
            "PROJECT": "robust-perception"
        },
        "SLURM_DN": "slurm",
        "EXP": {
            "TXT_FN": "experiments.txt",
            "TSV": {
                "DEFAULT_FN": "experiments.tsv",
                "FAILED_FN": "failed.tsv",
                "TIMEOUT_FN": "timeout.tsv"
            }
        }
    }"#;

    #[test]
    fn test_parse_and_resolve() {
        let cfg: PathConfig = serde_json::from_str(CONFIG_JSON).unwrap();
        let paths = cfg.resolve();

        assert_eq!(paths.slurm_dir, "/home/s1234567/robust-perception/slurm");
        assert_eq!(
            paths.manifest,
            "/home/s1234567/robust-perception/slurm/experiments.txt"
        );
        assert_eq!(
            paths.metadata_table,
            "/home/s1234567/robust-perception/slurm/experiments.tsv"
        );
        assert_eq!(
            paths.failed_table,
            "/home/s1234567/robust-perception/slurm/failed.tsv"
        );
        assert_eq!(
            paths.timeout_table,
            "/home/s1234567/robust-perception/slurm/timeout.tsv"
        );
    }

    #[test]
    fn test_log_path_uses_array_task_naming() {
        let cfg: PathConfig = serde_json::from_str(CONFIG_JSON).unwrap();
        let paths = cfg.resolve();
        assert_eq!(
            paths.log_path(98765, 3),
            "/home/s1234567/robust-perception/slurm/slurm-98765_3.out"
        );
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(temp.path().join("missing.json")).unwrap();
        let err = PathConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(temp.path().join("paths.json")).unwrap();
        std::fs::write(&path, CONFIG_JSON).unwrap();

        let cfg = PathConfig::load(&path).unwrap();
        assert_eq!(cfg.cluster.user, "s1234567");
        assert_eq!(cfg.slurm_dn, "slurm");
        assert_eq!(cfg.exp.tsv.timeout_fn, "timeout.tsv");
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let temp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(temp.path().join("paths.json")).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        let err = PathConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
