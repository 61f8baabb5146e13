//! Version-control branch resolution

use std::fs;
use std::path::{Path, PathBuf};

/// Supplies the branch that scopes remark visibility.
///
/// Implementations must be idempotent and side-effect free. `None` means
/// no repository is associated with the project.
pub trait BranchResolver: Send + Sync {
    fn current_branch(&self) -> Option<String>;
}

/// Constant branch, or none at all.
#[derive(Debug, Clone, Default)]
pub struct FixedBranch(pub Option<String>);

impl FixedBranch {
    pub fn named(branch: impl Into<String>) -> Self {
        FixedBranch(Some(branch.into()))
    }

    pub fn none() -> Self {
        FixedBranch(None)
    }
}

impl BranchResolver for FixedBranch {
    fn current_branch(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Reads the checked-out branch from the git repository enclosing `start`.
#[derive(Debug, Clone)]
pub struct GitBranchResolver {
    start: PathBuf,
}

impl GitBranchResolver {
    pub fn new(start: PathBuf) -> Self {
        GitBranchResolver { start }
    }

    /// Locate the git directory by walking up from the start path.
    /// A `.git` file (worktrees, submodules) is followed through its
    /// `gitdir:` pointer.
    fn git_dir(&self) -> Option<PathBuf> {
        let mut current = self.start.as_path();

        loop {
            let candidate = current.join(".git");
            if candidate.is_dir() {
                return Some(candidate);
            }
            if candidate.is_file() {
                return Self::follow_gitdir_file(&candidate, current);
            }
            current = current.parent()?;
        }
    }

    fn follow_gitdir_file(file: &Path, base: &Path) -> Option<PathBuf> {
        let contents = fs::read_to_string(file).ok()?;
        let target = contents.trim().strip_prefix("gitdir:")?.trim();
        let target = Path::new(target);
        if target.is_absolute() {
            Some(target.to_path_buf())
        } else {
            Some(base.join(target))
        }
    }

    /// Branch name from HEAD contents; `None` for a detached HEAD.
    fn parse_head(head: &str) -> Option<String> {
        head.trim()
            .strip_prefix("ref:")
            .map(str::trim)
            .and_then(|reference| reference.strip_prefix("refs/heads/"))
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}

impl BranchResolver for GitBranchResolver {
    fn current_branch(&self) -> Option<String> {
        let Some(git_dir) = self.git_dir() else {
            tracing::debug!(start = %self.start.display(), "no git repository found");
            return None;
        };

        match fs::read_to_string(git_dir.join("HEAD")) {
            Ok(head) => Self::parse_head(&head),
            Err(e) => {
                tracing::debug!(git_dir = %git_dir.display(), error = %e, "unreadable HEAD");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_head(root: &Path, head: &str) {
        let git = root.join(".git");
        fs::create_dir_all(&git).unwrap();
        fs::write(git.join("HEAD"), head).unwrap();
    }

    #[test]
    fn test_fixed_branch() {
        assert_eq!(FixedBranch::named("main").current_branch(), Some("main".to_string()));
        assert_eq!(FixedBranch::none().current_branch(), None);
    }

    #[test]
    fn test_parse_head_branch() {
        assert_eq!(
            GitBranchResolver::parse_head("ref: refs/heads/main\n"),
            Some("main".to_string())
        );
        assert_eq!(
            GitBranchResolver::parse_head("ref: refs/heads/feature/login\n"),
            Some("feature/login".to_string())
        );
    }

    #[test]
    fn test_parse_head_detached() {
        assert_eq!(
            GitBranchResolver::parse_head("3f786850e387550fdab836ed7e6dc881de23001b\n"),
            None
        );
    }

    #[test]
    fn test_resolves_branch_from_repository_root() {
        let temp = TempDir::new().unwrap();
        write_head(temp.path(), "ref: refs/heads/dev\n");

        let resolver = GitBranchResolver::new(temp.path().to_path_buf());
        assert_eq!(resolver.current_branch(), Some("dev".to_string()));
    }

    #[test]
    fn test_resolves_branch_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        write_head(temp.path(), "ref: refs/heads/main\n");
        let sub = temp.path().join("crates").join("core");
        fs::create_dir_all(&sub).unwrap();

        let resolver = GitBranchResolver::new(sub);
        assert_eq!(resolver.current_branch(), Some("main".to_string()));
    }

    #[test]
    fn test_follows_gitdir_file() {
        let temp = TempDir::new().unwrap();
        let real_git = temp.path().join("main-repo").join(".git").join("worktrees").join("wt");
        fs::create_dir_all(&real_git).unwrap();
        fs::write(real_git.join("HEAD"), "ref: refs/heads/hotfix\n").unwrap();

        let worktree = temp.path().join("wt");
        fs::create_dir_all(&worktree).unwrap();
        fs::write(
            worktree.join(".git"),
            format!("gitdir: {}\n", real_git.display()),
        )
        .unwrap();

        let resolver = GitBranchResolver::new(worktree);
        assert_eq!(resolver.current_branch(), Some("hotfix".to_string()));
    }

    #[test]
    fn test_branch_change_is_observed() {
        let temp = TempDir::new().unwrap();
        write_head(temp.path(), "ref: refs/heads/main\n");
        let resolver = GitBranchResolver::new(temp.path().to_path_buf());
        assert_eq!(resolver.current_branch(), Some("main".to_string()));

        write_head(temp.path(), "ref: refs/heads/dev\n");
        assert_eq!(resolver.current_branch(), Some("dev".to_string()));
    }
}
