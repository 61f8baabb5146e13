//! Remark entity and listing order

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A note attached to one line of one file version.
///
/// `branch` is stamped by the store on save and stays `None` when no
/// version control is detected for the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remark {
    pub file_name: String,
    pub content_hash: String,
    pub line_number: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default)]
    pub text: String,
}

impl Remark {
    pub fn new(
        file_name: impl Into<String>,
        content_hash: impl Into<String>,
        line_number: i32,
        text: impl Into<String>,
    ) -> Self {
        Remark {
            file_name: file_name.into(),
            content_hash: content_hash.into(),
            line_number,
            branch: None,
            text: text.into(),
        }
    }

    /// Same remark carrying an explicit branch.
    pub fn on_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }
}

/// Listing order: file name, then line number, both ascending.
pub fn listing_order(a: &Remark, b: &Remark) -> Ordering {
    a.file_name
        .cmp(&b.file_name)
        .then_with(|| a.line_number.cmp(&b.line_number))
}
