use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_RECORDS_PATH: &str = "./data/abandon_animal_geo2.csv";
pub const DEFAULT_BOUNDARIES_PATH: &str = "./data/TL_SCCO_CTPRVN.json";
pub const DEFAULT_LOG_FILE_PATH: &str = "logs/shelter_report.log";

/// Input and log file locations.
///
/// Stored on disk as a JSON object; omitted keys fall back to defaults:
/// ```json
/// {
///   "records_path": "./data/abandon_animal_geo2.csv",
///   "boundaries_path": "./data/TL_SCCO_CTPRVN.json"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub records_path: PathBuf,
    pub boundaries_path: PathBuf,
    pub log_file_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            records_path: DEFAULT_RECORDS_PATH.into(),
            boundaries_path: DEFAULT_BOUNDARIES_PATH.into(),
            log_file_path: DEFAULT_LOG_FILE_PATH.into(),
        }
    }
}

impl DashboardConfig {
    /// Reads `SHELTER_RECORDS_PATH`, `SHELTER_BOUNDARIES_PATH` and
    /// `LOG_FILE_PATH`, using defaults for any that are unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            records_path: lookup("SHELTER_RECORDS_PATH")
                .map_or(defaults.records_path, PathBuf::from),
            boundaries_path: lookup("SHELTER_BOUNDARIES_PATH")
                .map_or(defaults.boundaries_path, PathBuf::from),
            log_file_path: lookup("LOG_FILE_PATH").map_or(defaults.log_file_path, PathBuf::from),
        }
    }

    /// Loads the config from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {path}"))?;
        Ok(config)
    }

    /// Replaces the dataset paths with any that were given explicitly.
    pub fn with_overrides(
        mut self,
        records_path: Option<PathBuf>,
        boundaries_path: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = records_path {
            self.records_path = path;
        }
        if let Some(path) = boundaries_path {
            self.boundaries_path = path;
        }
        self
    }
}
