//! Error types for coderemark

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for coderemark
#[derive(Debug, Error)]
pub enum RemarkError {
    #[error("Not a coderemark project: {0}")]
    NotRemarkDirectory(PathBuf),

    #[error("No remark found: {0}")]
    RemarkNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("State file could not be read: {0}")]
    StateDeserialize(#[from] toml::de::Error),

    #[error("State file could not be written: {0}")]
    StateSerialize(#[from] toml::ser::Error),
}

impl RemarkError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RemarkError::NotRemarkDirectory(_) => 2,
            RemarkError::StateDeserialize(_) => 3,
            RemarkError::RemarkNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            RemarkError::NotRemarkDirectory(path) => {
                format!(
                    "Not a coderemark project: {}\n\n\
                    Suggestions:\n\
                    • Run 'coderemark init' in your project root\n\
                    • Navigate to a directory inside an initialized project\n\
                    • Set CODE_REMARK_ROOT environment variable to your project path",
                    path.display()
                )
            }
            RemarkError::RemarkNotFound(what) => {
                format!(
                    "No remark found for {}\n\n\
                    Suggestions:\n\
                    • Use 'coderemark list <FILE>' to see remarks on the current file version\n\
                    • Remarks are scoped to the current branch and file content\n\
                    • Use 'coderemark stale' to find remarks whose file has changed",
                    what
                )
            }
            RemarkError::StateDeserialize(e) => {
                format!(
                    "State file could not be read: {}\n\n\
                    The remark store at .coderemark/code-remark.toml is malformed.\n\
                    Fix or remove it to start with an empty store.",
                    e
                )
            }
            RemarkError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: coderemark config parallel_threshold 1024",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using RemarkError
pub type Result<T> = std::result::Result<T, RemarkError>;
