use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Name of the metadata entry that marks a Git working tree.
pub const GIT_METADATA: &str = ".git";

#[derive(Debug, Error)]
pub enum RepoError {
    /// No ancestor of `start` (including `start` itself) holds `.git`.
    #[error("Git root not found walking up from {}", start.display())]
    RootNotFound { start: PathBuf },

    #[error("{} is not inside the repository at {}", path.display(), root.display())]
    OutsideRepository { path: PathBuf, root: PathBuf },
}

/// Find the nearest ancestor of `start` that contains Git metadata.
///
/// A `.git` directory or a `.git` file (worktrees, submodules) both count.
/// `start` should already be absolute; relative paths only see the ancestors
/// they spell out.
pub fn find_repo_root(start: &Path) -> Result<PathBuf, RepoError> {
    for candidate in start.ancestors() {
        if candidate.join(GIT_METADATA).exists() {
            debug!(root = %candidate.display(), "resolved repository root");
            return Ok(candidate.to_path_buf());
        }
    }
    Err(RepoError::RootNotFound { start: start.to_path_buf() })
}

/// Express `path` relative to the repository `root`.
pub fn relative_to_root(root: &Path, path: &Path) -> Result<PathBuf, RepoError> {
    path.strip_prefix(root).map(Path::to_path_buf).map_err(|_| RepoError::OutsideRepository {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    })
}

/// Commit message for a flicked file: a single leading space, then its
/// repository-relative path.
pub fn commit_message(relative: &Path) -> String {
    format!(" {}", relative.display())
}
