//! Config management use case

use crate::error::{RemarkError, Result};
use crate::infrastructure::{Config, ProjectDir};

/// Service for managing project configuration
pub struct ConfigService {
    dir: ProjectDir,
}

impl ConfigService {
    pub fn new(dir: ProjectDir) -> Self {
        ConfigService { dir }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.dir.load_config()?;

        match key {
            "parallel_threshold" => Ok(config.parallel_threshold.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(RemarkError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: parallel_threshold, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.dir.load_config()?;

        match key {
            "parallel_threshold" => {
                config.parallel_threshold = value.parse().map_err(|_| {
                    RemarkError::Config(format!(
                        "Invalid parallel_threshold: '{}' (expected a non-negative integer)",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(RemarkError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(RemarkError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: parallel_threshold",
                    key
                )));
            }
        }

        self.dir.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.dir.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let dir = ProjectDir::new(temp.path().to_path_buf());
        dir.initialize().unwrap();
        ConfigService::new(dir)
    }

    #[test]
    fn test_get_default_threshold() {
        let temp = TempDir::new().unwrap();
        assert_eq!(service(&temp).get("parallel_threshold").unwrap(), "512");
    }

    #[test]
    fn test_set_threshold() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        service.set("parallel_threshold", "2048").unwrap();
        assert_eq!(service.list().unwrap().parallel_threshold, 2048);
    }

    #[test]
    fn test_set_invalid_threshold() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.set("parallel_threshold", "-1").is_err());
        assert!(service.set("parallel_threshold", "lots").is_err());
    }

    #[test]
    fn test_created_is_read_only() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.get("created").is_ok());
        assert!(service.set("created", "2020-01-01T00:00:00Z").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        match service.get("editor").unwrap_err() {
            RemarkError::Config(msg) => assert!(msg.contains("Unknown config key")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
