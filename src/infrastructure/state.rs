//! Persisted remark state
//!
//! The store itself never touches disk. Remarks are loaded once when a
//! project is opened and written back when it is closed.

use crate::domain::Remark;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name of the remark store inside the project directory
pub const STATE_FILE: &str = "code-remark.toml";

/// Version tag written alongside the data
pub const STATE_VERSION: &str = "1.4.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistentState {
    pub version: String,
    #[serde(default)]
    pub remarks: Vec<Remark>,
}

impl Default for PersistentState {
    fn default() -> Self {
        PersistentState::new(Vec::new())
    }
}

impl PersistentState {
    pub fn new(remarks: Vec<Remark>) -> Self {
        PersistentState {
            version: STATE_VERSION.to_string(),
            remarks,
        }
    }

    /// Load state from `path`. A missing file is an empty store; entries
    /// are accepted as written.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no state file, starting empty");
                return Ok(PersistentState::default());
            }
            Err(e) => return Err(e.into()),
        };

        let state: PersistentState = toml::from_str(&contents)?;
        if state.version != STATE_VERSION {
            tracing::warn!(
                found = %state.version,
                expected = STATE_VERSION,
                "state file written by a different version"
            );
        }
        tracing::debug!(path = %path.display(), count = state.remarks.len(), "loaded remarks");
        Ok(state)
    }

    /// Write state to `path` through a temp file renamed into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the destination is removed first.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;

        let tmp_name = format!(
            "{}.tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or(STATE_FILE),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        tracing::debug!(path = %path.display(), count = self.remarks.len(), "saved remarks");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemarkError;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let state = PersistentState::load(&temp.path().join(STATE_FILE)).unwrap();
        assert_eq!(state.version, STATE_VERSION);
        assert!(state.remarks.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".coderemark").join(STATE_FILE);
        let state = PersistentState::new(vec![
            Remark::new("a.rs", "h1", 3, "check bounds").on_branch("main"),
            Remark::new("b.rs", "h2", 7, "no vcs here"),
        ]);

        state.save(&path).unwrap();
        let loaded = PersistentState::load(&path).unwrap();

        assert_eq!(loaded, state);
    }

    #[test]
    fn test_save_overwrites_and_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(STATE_FILE);

        PersistentState::new(vec![Remark::new("a.rs", "h", 1, "old")])
            .save(&path)
            .unwrap();
        PersistentState::default().save(&path).unwrap();

        assert!(PersistentState::load(&path).unwrap().remarks.is_empty());
        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains(".tmp-"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_load_other_version_is_accepted() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(STATE_FILE);
        fs::write(
            &path,
            "version = \"1.2.0\"\n\n[[remarks]]\nfile_name = \"a.rs\"\ncontent_hash = \"h\"\nline_number = 2\ntext = \"old\"\n",
        )
        .unwrap();

        let state = PersistentState::load(&path).unwrap();
        assert_eq!(state.version, "1.2.0");
        assert_eq!(state.remarks.len(), 1);
        assert_eq!(state.remarks[0].branch, None);
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(STATE_FILE);
        fs::write(&path, "version = ").unwrap();

        match PersistentState::load(&path).unwrap_err() {
            RemarkError::StateDeserialize(_) => {}
            other => panic!("Expected StateDeserialize error, got {:?}", other),
        }
    }
}
