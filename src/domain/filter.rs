//! The match predicate shared by every store query and mutation

use super::remark::Remark;

/// How a filter treats the branch stamped on a remark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchScope<'a> {
    /// No version control: every branch matches
    Any,
    /// Stamped branch must equal this one, `None` included
    Exactly(Option<&'a str>),
}

impl<'a> BranchScope<'a> {
    /// Scope for the branch reported by a resolver. An absent current
    /// branch is a wildcard.
    pub fn current(branch: Option<&'a str>) -> Self {
        match branch {
            Some(branch) => BranchScope::Exactly(Some(branch)),
            None => BranchScope::Any,
        }
    }

    fn admits(&self, branch: Option<&str>) -> bool {
        match self {
            BranchScope::Any => true,
            BranchScope::Exactly(expected) => *expected == branch,
        }
    }
}

/// Conjunctive filter over branch, file name, content hash and line.
///
/// An empty file name or content hash and an absent line act as wildcards.
#[derive(Debug, Clone, Copy)]
pub struct RemarkFilter<'a> {
    pub branch: BranchScope<'a>,
    pub file_name: &'a str,
    pub content_hash: &'a str,
    pub line_number: Option<i32>,
}

impl<'a> RemarkFilter<'a> {
    pub fn new(current_branch: Option<&'a str>, file_name: &'a str, content_hash: &'a str) -> Self {
        RemarkFilter {
            branch: BranchScope::current(current_branch),
            file_name,
            content_hash,
            line_number: None,
        }
    }

    pub fn at_line(mut self, line_number: i32) -> Self {
        self.line_number = Some(line_number);
        self
    }

    /// Filter matching the same file, hash and line as `remark`.
    pub fn same_slot(current_branch: Option<&'a str>, remark: &'a Remark) -> Self {
        RemarkFilter::new(current_branch, &remark.file_name, &remark.content_hash)
            .at_line(remark.line_number)
    }

    /// Same slot as `remark` on exactly the branch it carries. An unstamped
    /// remark only matches other unstamped remarks.
    pub fn same_stamped_slot(remark: &'a Remark) -> Self {
        RemarkFilter {
            branch: BranchScope::Exactly(remark.branch.as_deref()),
            ..RemarkFilter::same_slot(None, remark)
        }
    }

    pub fn matches(&self, remark: &Remark) -> bool {
        let branch_match = self.branch.admits(remark.branch.as_deref());
        let file_match = self.file_name.is_empty() || self.file_name == remark.file_name;
        let hash_match = self.content_hash.is_empty() || self.content_hash == remark.content_hash;
        let line_match = self.line_number.is_none_or(|line| line == remark.line_number);

        branch_match && file_match && hash_match && line_match
    }
}
