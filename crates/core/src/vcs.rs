//! Version-control capability used by the ritual.
//!
//! The ritual only needs two operations, so they sit behind a small trait:
//! `GitCli` shells out to `git`, and tests substitute a recorder.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum VcsError {
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    Failed { command: String, status: ExitStatus, stderr: String },
}

/// Stage-and-commit capability scoped to one repository.
pub trait VersionControl {
    /// Stage `path` (relative to the repository root).
    fn stage(&mut self, path: &Path) -> Result<(), VcsError>;

    /// Commit only `path` with `message`; anything else in the index stays
    /// staged and out of the commit.
    fn commit(&mut self, path: &Path, message: &str) -> Result<(), VcsError>;
}

/// Drives the `git` executable with the repository root as working directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    root: PathBuf,
    program: PathBuf,
}

impl GitCli {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), program: PathBuf::from("git") }
    }

    /// Use a specific git binary instead of the one on `PATH`.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn run(&self, args: &[&OsStr]) -> Result<(), VcsError> {
        let command = std::iter::once(self.program.as_os_str())
            .chain(args.iter().copied())
            .map(|part| part.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ");
        debug!(%command, root = %self.root.display(), "running git");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|source| VcsError::Spawn { command: command.clone(), source })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(VcsError::Failed { command, status: output.status, stderr });
        }
        Ok(())
    }
}

impl VersionControl for GitCli {
    fn stage(&mut self, path: &Path) -> Result<(), VcsError> {
        self.run(&[OsStr::new("add"), OsStr::new("--"), path.as_os_str()])
    }

    fn commit(&mut self, path: &Path, message: &str) -> Result<(), VcsError> {
        self.run(&[
            OsStr::new("commit"),
            OsStr::new("--only"),
            OsStr::new("-m"),
            OsStr::new(message),
            OsStr::new("--"),
            path.as_os_str(),
        ])
    }
}
