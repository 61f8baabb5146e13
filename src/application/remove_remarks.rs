//! Remove remarks use case

use crate::domain::{derive_key, ContentHasher};
use crate::error::Result;
use crate::infrastructure::{Project, RemarkRepository};
use std::path::Path;

/// Remove the remark on `line`, or every remark on the current version of
/// `file` when no line is given. Returns how many remarks were removed.
pub fn remove_remarks(
    project: &mut Project,
    file: &Path,
    line: Option<i32>,
    hasher: &dyn ContentHasher,
) -> Result<usize> {
    let key = derive_key(file, hasher)?;
    let store = project.store_mut();
    let before = store.len();

    match line {
        Some(line) => store.remove(&key.file_name, &key.content_hash, line),
        None => store.remove_file(&key.file_name, &key.content_hash),
    }

    Ok(before - store.len())
}
