//! Application layer - Use cases and orchestration

pub mod add_remark;
pub mod find_stale;
pub mod import_remarks;
pub mod init;
pub mod list_remarks;
pub mod manage_config;
pub mod remove_remarks;
pub mod show_remark;

pub use add_remark::add_remark;
pub use find_stale::find_stale;
pub use import_remarks::import_remarks;
pub use list_remarks::list_remarks;
pub use manage_config::ConfigService;
pub use remove_remarks::remove_remarks;
pub use show_remark::show_remark;
