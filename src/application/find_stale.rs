//! Find remarks whose file version no longer exists in the project

use crate::domain::{ContentHasher, FileKey, Remark};
use crate::error::Result;
use crate::infrastructure::{Project, RemarkRepository};
use std::collections::HashSet;
use std::fs;
use walkdir::WalkDir;

/// Remarks on every branch whose `(file_name, content_hash)` matches no file
/// currently in the project tree, in listing order.
pub fn find_stale(project: &Project, hasher: &dyn ContentHasher) -> Result<Vec<Remark>> {
    let remarks = project.store().list_all();
    let wanted: HashSet<&str> = remarks.iter().map(|r| r.file_name.as_str()).collect();
    if wanted.is_empty() {
        return Ok(Vec::new());
    }

    let walker = WalkDir::new(project.root()).into_iter().filter_entry(|entry| {
        if entry.depth() == 0 {
            return true;
        }
        if !entry.file_type().is_dir() {
            return true;
        }
        entry
            .file_name()
            .to_str()
            .is_none_or(|name| !name.starts_with('.'))
    });

    let mut present = HashSet::new();
    for entry in walker {
        let Ok(entry) = entry else {
            continue;
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !wanted.contains(name) {
            continue;
        }
        match fs::read(entry.path()) {
            Ok(content) => {
                present.insert(FileKey::for_content(name, &content, hasher));
            }
            Err(e) => {
                tracing::debug!(path = %entry.path().display(), error = %e, "skipping unreadable file");
            }
        }
    }

    let stale = remarks
        .iter()
        .filter(|r| !present.contains(&FileKey::new(r.file_name.as_str(), r.content_hash.as_str())))
        .cloned()
        .collect();
    Ok(stale)
}
