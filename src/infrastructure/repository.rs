//! Remark repository

use crate::domain::{listing_order, Remark, RemarkFilter};
use crate::infrastructure::{BranchResolver, DEFAULT_PARALLEL_THRESHOLD};
use rayon::prelude::*;

/// Branch-scoped access to the remarks of one project.
///
/// "Not found" is never an error: lookups return `None`, listings return
/// empty vectors and removals of missing remarks do nothing.
pub trait RemarkRepository {
    /// Every remark regardless of branch, in listing order
    fn list_all(&self) -> Vec<Remark>;

    /// Remarks for one file version on the current branch, in listing order
    fn list(&self, file_name: &str, content_hash: &str) -> Vec<Remark>;

    /// Whether `list` would return anything
    fn exists(&self, file_name: &str, content_hash: &str) -> bool;

    fn get(&self, file_name: &str, content_hash: &str, line_number: i32) -> Option<Remark>;

    /// Stamp the current branch on `remark` and replace whatever occupies
    /// its line. Returns the remark as stored.
    fn save(&mut self, remark: Remark) -> &Remark;

    /// Replace the line of each remark on the branch it carries, then append
    /// them all in input order. Branches carried by the input are kept as
    /// they are.
    fn save_batch(&mut self, remarks: Vec<Remark>);

    fn remove(&mut self, file_name: &str, content_hash: &str, line_number: i32);

    /// Remove the remarks on every line of one file version
    fn remove_file(&mut self, file_name: &str, content_hash: &str);
}

/// In-memory implementation of RemarkRepository
///
/// Reads switch to rayon parallel iterators once the collection grows past
/// `parallel_threshold`. Results are identical to the sequential scan.
/// Mutations take `&mut self`, so callers sharing a store across threads
/// need their own lock.
pub struct RemarkStore {
    remarks: Vec<Remark>,
    resolver: Box<dyn BranchResolver>,
    parallel_threshold: usize,
}

impl std::fmt::Debug for RemarkStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemarkStore")
            .field("remarks", &self.remarks.len())
            .field("parallel_threshold", &self.parallel_threshold)
            .finish()
    }
}

impl RemarkStore {
    /// Create a store over already-loaded remarks
    pub fn new(remarks: Vec<Remark>, resolver: Box<dyn BranchResolver>) -> Self {
        RemarkStore {
            remarks,
            resolver,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn len(&self) -> usize {
        self.remarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remarks.is_empty()
    }

    /// Stored remarks in insertion order, for persisting
    pub fn remarks(&self) -> &[Remark] {
        &self.remarks
    }

    pub fn into_remarks(self) -> Vec<Remark> {
        self.remarks
    }

    pub fn current_branch(&self) -> Option<String> {
        self.resolver.current_branch()
    }

    fn parallel(&self) -> bool {
        self.remarks.len() > self.parallel_threshold
    }

    fn collect_matching(&self, filter: &RemarkFilter<'_>) -> Vec<Remark> {
        if self.parallel() {
            self.remarks
                .par_iter()
                .filter(|r| filter.matches(r))
                .cloned()
                .collect()
        } else {
            self.remarks
                .iter()
                .filter(|r| filter.matches(r))
                .cloned()
                .collect()
        }
    }

    fn sorted(&self, mut remarks: Vec<Remark>) -> Vec<Remark> {
        if self.parallel() {
            remarks.par_sort_by(listing_order);
        } else {
            remarks.sort_by(listing_order);
        }
        remarks
    }

    fn remove_matching(&mut self, filter: &RemarkFilter<'_>) -> usize {
        let before = self.remarks.len();
        self.remarks.retain(|r| !filter.matches(r));
        before - self.remarks.len()
    }
}

impl RemarkRepository for RemarkStore {
    fn list_all(&self) -> Vec<Remark> {
        self.sorted(self.remarks.clone())
    }

    fn list(&self, file_name: &str, content_hash: &str) -> Vec<Remark> {
        let branch = self.current_branch();
        let filter = RemarkFilter::new(branch.as_deref(), file_name, content_hash);
        self.sorted(self.collect_matching(&filter))
    }

    fn exists(&self, file_name: &str, content_hash: &str) -> bool {
        let branch = self.current_branch();
        let filter = RemarkFilter::new(branch.as_deref(), file_name, content_hash);
        if self.parallel() {
            self.remarks.par_iter().any(|r| filter.matches(r))
        } else {
            self.remarks.iter().any(|r| filter.matches(r))
        }
    }

    fn get(&self, file_name: &str, content_hash: &str, line_number: i32) -> Option<Remark> {
        let branch = self.current_branch();
        let filter =
            RemarkFilter::new(branch.as_deref(), file_name, content_hash).at_line(line_number);
        let found = if self.parallel() {
            self.remarks.par_iter().find_first(|r| filter.matches(r))
        } else {
            self.remarks.iter().find(|r| filter.matches(r))
        };
        found.cloned()
    }

    fn save(&mut self, mut remark: Remark) -> &Remark {
        let branch = self.current_branch();
        remark.branch = branch.clone();

        let filter = RemarkFilter::same_slot(branch.as_deref(), &remark);
        let replaced = self.remove_matching(&filter);

        tracing::debug!(
            file = %remark.file_name,
            line = remark.line_number,
            branch = ?remark.branch,
            replaced,
            "saved remark"
        );
        self.remarks.push(remark);
        &self.remarks[self.remarks.len() - 1]
    }

    fn save_batch(&mut self, remarks: Vec<Remark>) {
        let mut replaced = 0;
        for remark in &remarks {
            let filter = RemarkFilter::same_stamped_slot(remark);
            replaced += self.remove_matching(&filter);
        }

        tracing::debug!(count = remarks.len(), replaced, "saved remark batch");
        self.remarks.extend(remarks);
    }

    fn remove(&mut self, file_name: &str, content_hash: &str, line_number: i32) {
        let branch = self.current_branch();
        let filter =
            RemarkFilter::new(branch.as_deref(), file_name, content_hash).at_line(line_number);
        let removed = self.remove_matching(&filter);
        tracing::debug!(file = file_name, line = line_number, removed, "removed remark");
    }

    fn remove_file(&mut self, file_name: &str, content_hash: &str) {
        let branch = self.current_branch();
        let filter = RemarkFilter::new(branch.as_deref(), file_name, content_hash);
        let removed = self.remove_matching(&filter);
        tracing::debug!(file = file_name, removed, "removed file remarks");
    }
}
