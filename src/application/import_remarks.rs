//! Import remarks from another state file

use crate::error::{RemarkError, Result};
use crate::infrastructure::{PersistentState, Project, RemarkRepository};
use std::path::Path;

/// Batch-save every remark found in the state file at `path`. Imported
/// remarks keep the branch they were recorded on.
pub fn import_remarks(project: &mut Project, path: &Path) -> Result<usize> {
    if !path.is_file() {
        return Err(RemarkError::Config(format!(
            "Cannot import missing file: {}",
            path.display()
        )));
    }

    let state = PersistentState::load(path)?;
    let count = state.remarks.len();
    project.store_mut().save_batch(state.remarks);

    tracing::info!(path = %path.display(), count, "imported remarks");
    Ok(count)
}
