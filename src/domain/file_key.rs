//! File identity: name plus content fingerprint

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Fingerprints file contents.
pub trait ContentHasher {
    fn hash(&self, content: &[u8]) -> String;
}

/// BLAKE3 hex digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl ContentHasher for Blake3Hasher {
    fn hash(&self, content: &[u8]) -> String {
        blake3::hash(content).to_hex().to_string()
    }
}

/// Identity under which remarks for one file version are stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileKey {
    pub file_name: String,
    pub content_hash: String,
}

impl FileKey {
    pub fn new(file_name: impl Into<String>, content_hash: impl Into<String>) -> Self {
        FileKey {
            file_name: file_name.into(),
            content_hash: content_hash.into(),
        }
    }

    /// Key for in-memory content, `file_name` being the bare name only.
    pub fn for_content(file_name: &str, content: &[u8], hasher: &dyn ContentHasher) -> Self {
        FileKey::new(file_name, hasher.hash(content))
    }
}

/// Read `path` and derive its key. Only the final path component is kept
/// as the file name.
pub fn derive_key(path: &Path, hasher: &dyn ContentHasher) -> Result<FileKey> {
    let content = fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(FileKey::for_content(&file_name, &content, hasher))
}
