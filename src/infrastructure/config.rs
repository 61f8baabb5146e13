//! Configuration management

use crate::error::{RemarkError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding project-local coderemark files
pub const REMARK_DIR: &str = ".coderemark";

const CONFIG_FILE: &str = "config.toml";

/// The .coderemark directory of the project at `root`
pub fn remark_dir(root: &Path) -> PathBuf {
    root.join(REMARK_DIR)
}

/// Collection size above which store scans run on the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
    pub created: DateTime<Utc>,
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            created: Utc::now(),
        }
    }

    fn path_in(root: &Path) -> PathBuf {
        remark_dir(root).join(CONFIG_FILE)
    }

    /// Load config from .coderemark/config.toml under `root`. A missing file
    /// means the project was never initialized.
    pub fn load_from_dir(root: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(Self::path_in(root)) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RemarkError::NotRemarkDirectory(root.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        toml::from_str(&contents)
            .map_err(|e| RemarkError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))
    }

    pub fn save_to_dir(&self, root: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| RemarkError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::create_dir_all(remark_dir(root))?;
        fs::write(Self::path_in(root), contents)?;
        Ok(())
    }
}
