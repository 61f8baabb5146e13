//! coderemark - Line-level code annotations
//!
//! Attaches free-text remarks to source lines, keyed by file name, content
//! hash and version-control branch, and persists them per project.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::RemarkError;
