//! Add remark use case

use crate::domain::{derive_key, ContentHasher, Remark};
use crate::error::Result;
use crate::infrastructure::{Project, RemarkRepository};
use std::path::Path;

/// Attach `text` to `line` of the current version of `file`, replacing any
/// remark already on that line. Returns the remark as stored.
pub fn add_remark(
    project: &mut Project,
    file: &Path,
    line: i32,
    text: &str,
    hasher: &dyn ContentHasher,
) -> Result<Remark> {
    let key = derive_key(file, hasher)?;
    let remark = Remark::new(key.file_name, key.content_hash, line, text);

    Ok(project.store_mut().save(remark).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Blake3Hasher;
    use crate::infrastructure::{FixedBranch, ProjectDir};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_add_remark_stores_under_file_key() {
        let temp = TempDir::new().unwrap();
        let dir = ProjectDir::new(temp.path().to_path_buf());
        dir.initialize().unwrap();
        let file = temp.path().join("main.rs");
        fs::write(&file, "fn main() {}\n").unwrap();

        let mut project = Project::open_with(dir, Box::new(FixedBranch::named("main"))).unwrap();
        let stored = add_remark(&mut project, &file, 1, "entry point", &Blake3Hasher).unwrap();

        assert_eq!(stored.file_name, "main.rs");
        assert_eq!(stored.branch.as_deref(), Some("main"));
        let hash = Blake3Hasher.hash(b"fn main() {}\n");
        assert_eq!(project.store().get("main.rs", &hash, 1), Some(stored));
    }

    #[test]
    fn test_add_remark_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let dir = ProjectDir::new(temp.path().to_path_buf());
        dir.initialize().unwrap();

        let mut project = Project::open_with(dir, Box::new(FixedBranch::none())).unwrap();
        let result = add_remark(
            &mut project,
            &temp.path().join("nope.rs"),
            1,
            "text",
            &Blake3Hasher,
        );
        assert!(result.is_err());
        assert!(project.store().is_empty());
    }
}
