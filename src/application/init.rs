//! Initialize project use case

use crate::error::Result;
use crate::infrastructure::ProjectDir;
use std::fs;
use std::path::Path;

/// Initialize remark storage at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let dir = ProjectDir::new(path.to_path_buf());
    dir.initialize()?;

    println!("Initialized coderemark project at {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("new-project");

        init(&path).unwrap();

        assert!(path.join(".coderemark/config.toml").exists());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
