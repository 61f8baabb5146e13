//! Domain layer - Remark model and matching rules

pub mod file_key;
pub mod filter;
pub mod remark;

pub use file_key::{derive_key, Blake3Hasher, ContentHasher, FileKey};
pub use filter::{BranchScope, RemarkFilter};
pub use remark::{listing_order, Remark};
