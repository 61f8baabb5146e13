//! Project discovery and the project-lifetime context

use crate::error::{RemarkError, Result};
use crate::infrastructure::config::{remark_dir, REMARK_DIR};
use crate::infrastructure::state::STATE_FILE;
use crate::infrastructure::{
    BranchResolver, Config, GitBranchResolver, PersistentState, RemarkStore,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the project root explicitly
pub const ROOT_ENV: &str = "CODE_REMARK_ROOT";

/// A project directory on disk, initialized or not
#[derive(Debug, Clone)]
pub struct ProjectDir {
    pub root: PathBuf,
}

impl ProjectDir {
    pub fn new(root: PathBuf) -> Self {
        ProjectDir { root }
    }

    /// Find the project root.
    /// First checks CODE_REMARK_ROOT, then walks up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_remark_dir(&path) {
                return Ok(ProjectDir::new(path));
            } else {
                return Err(RemarkError::Config(format!(
                    "{} is set to '{}' but no {} directory found. \
                    Run 'coderemark init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    REMARK_DIR,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` to the first directory containing .coderemark
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_remark_dir(&current) {
                return Ok(ProjectDir::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(RemarkError::NotRemarkDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_remark_dir(path: &Path) -> bool {
        remark_dir(path).is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_remark_dir(&self.root)
    }

    /// Create .coderemark with a default config
    pub fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(RemarkError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(remark_dir(&self.root))?;
        Config::new().save_to_dir(&self.root)
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    pub fn state_path(&self) -> PathBuf {
        remark_dir(&self.root).join(STATE_FILE)
    }
}

/// Everything that lives for as long as a project is open: its directory,
/// its config and the remark store. Remarks are read on open and written
/// back by `flush`/`close`.
#[derive(Debug)]
pub struct Project {
    dir: ProjectDir,
    config: Config,
    store: RemarkStore,
}

impl Project {
    /// Open with branch resolution from the enclosing git repository
    pub fn open(dir: ProjectDir) -> Result<Self> {
        let resolver = GitBranchResolver::new(dir.root.clone());
        Self::open_with(dir, Box::new(resolver))
    }

    pub fn open_with(dir: ProjectDir, resolver: Box<dyn BranchResolver>) -> Result<Self> {
        let config = dir.load_config()?;
        let state = PersistentState::load(&dir.state_path())?;
        let store = RemarkStore::new(state.remarks, resolver)
            .with_parallel_threshold(config.parallel_threshold);

        tracing::debug!(root = %dir.root.display(), remarks = store.len(), "opened project");
        Ok(Project { dir, config, store })
    }

    pub fn root(&self) -> &Path {
        &self.dir.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &RemarkStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RemarkStore {
        &mut self.store
    }

    /// Persist the current remarks without closing
    pub fn flush(&self) -> Result<()> {
        PersistentState::new(self.store.remarks().to_vec()).save(&self.dir.state_path())
    }

    pub fn close(self) -> Result<()> {
        self.flush()?;
        tracing::debug!(root = %self.dir.root.display(), "closed project");
        Ok(())
    }
}
