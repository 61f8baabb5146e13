//! List remarks use case

use crate::domain::{derive_key, ContentHasher, Remark};
use crate::error::Result;
use crate::infrastructure::{Project, RemarkRepository};
use std::path::Path;

/// List every remark in the project, or only those on the current version
/// of `file` for the current branch.
pub fn list_remarks(
    project: &Project,
    file: Option<&Path>,
    hasher: &dyn ContentHasher,
) -> Result<Vec<Remark>> {
    match file {
        Some(path) => {
            let key = derive_key(path, hasher)?;
            Ok(project.store().list(&key.file_name, &key.content_hash))
        }
        None => Ok(project.store().list_all()),
    }
}
