//! Infrastructure layer - External I/O and persistence

pub mod branch;
pub mod config;
pub mod project;
pub mod repository;
pub mod state;

pub use branch::{BranchResolver, FixedBranch, GitBranchResolver};
pub use config::{Config, DEFAULT_PARALLEL_THRESHOLD};
pub use project::{Project, ProjectDir};
pub use repository::{RemarkRepository, RemarkStore};
pub use state::PersistentState;
