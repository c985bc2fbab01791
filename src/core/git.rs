//! Git repository layout helpers.
//!
//! Audits only look at the on-disk layout: a repository is any directory with
//! a `.git` entry, and hooks live under `.git/hooks`. No `git` process is run.

use std::path::{Path, PathBuf};

/// Name of the git metadata entry.
pub const GIT_DIR: &str = ".git";

/// Name of the pre-commit hook script.
pub const PRE_COMMIT_HOOK: &str = "pre-commit";

/// Returns true if `path` has a `.git` entry (directory or worktree file).
#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    path.join(GIT_DIR).exists()
}

/// Represents a Git repository on disk.
#[derive(Debug, Clone)]
pub struct GitRepo {
    /// Root directory of the repository (where .git is).
    root: PathBuf,
}

impl GitRepo {
    /// Opens the repository rooted at `root`, if it has a `.git` entry.
    #[must_use]
    pub fn open(root: &Path) -> Option<Self> {
        is_git_repo(root).then(|| Self {
            root: root.to_path_buf(),
        })
    }

    /// Returns the .git path.
    #[must_use]
    pub fn git_dir(&self) -> PathBuf {
        self.root.join(GIT_DIR)
    }

    /// Returns the hooks directory path.
    #[must_use]
    pub fn hooks_dir(&self) -> PathBuf {
        self.git_dir().join("hooks")
    }

    /// Returns the path to a specific hook.
    #[must_use]
    pub fn hook_path(&self, hook_name: &str) -> PathBuf {
        self.hooks_dir().join(hook_name)
    }
}
