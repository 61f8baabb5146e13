//! Show a single remark

use crate::domain::{derive_key, ContentHasher, Remark};
use crate::error::{RemarkError, Result};
use crate::infrastructure::{Project, RemarkRepository};
use std::path::Path;

pub fn show_remark(
    project: &Project,
    file: &Path,
    line: i32,
    hasher: &dyn ContentHasher,
) -> Result<Remark> {
    let key = derive_key(file, hasher)?;
    project
        .store()
        .get(&key.file_name, &key.content_hash, line)
        .ok_or_else(|| RemarkError::RemarkNotFound(format!("{}:{}", key.file_name, line)))
}
