//! The flick ritual: sample folders, append graffiti, commit each file.
//!
//! Folders are processed one at a time. A failure in one folder is reported
//! through its [`FlickOutcome`] and never stops the folders after it; only
//! resolving the base directory and repository root can fail the whole run.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::graffiti::GraffitiLine;
use crate::repo::{commit_message, find_repo_root, relative_to_root, RepoError};
use crate::sampler::sample_folders;
use crate::target::{pick_target, FlickTarget};
use crate::vcs::{GitCli, VcsError, VersionControl};

/// Percentage used when none is given: flick every folder.
pub const DEFAULT_PERCENT: i64 = 100;

/// Inputs for one ritual run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RitualConfig {
    /// Directory whose subtree is walked; the repository root is searched
    /// upward from here.
    pub base_dir: PathBuf,
    /// Percentage of folders to flick. `>= 100` means all of them.
    pub percent: i64,
}

impl RitualConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into(), percent: DEFAULT_PERCENT }
    }

    pub fn with_percent(mut self, percent: i64) -> Self {
        self.percent = percent;
        self
    }
}

/// Errors that abort the whole run.
#[derive(Debug, Error)]
pub enum RitualError {
    #[error("Failed to resolve base directory {}: {source}", path.display())]
    BaseDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Errors confined to a single folder.
#[derive(Debug, Error)]
pub enum FlickError {
    #[error("failed to list {}: {source}", folder.display())]
    Listing {
        folder: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error(transparent)]
    Vcs(#[from] VcsError),
}

/// What happened to one selected folder.
#[derive(Debug)]
pub enum FlickOutcome {
    Flicked { folder: PathBuf, target: FlickTarget, message: String },
    Failed { folder: PathBuf, error: FlickError },
}

impl FlickOutcome {
    pub fn folder(&self) -> &Path {
        match self {
            FlickOutcome::Flicked { folder, .. } | FlickOutcome::Failed { folder, .. } => folder,
        }
    }

    pub fn is_flicked(&self) -> bool {
        matches!(self, FlickOutcome::Flicked { .. })
    }
}

/// Summary of a finished run.
#[derive(Debug)]
pub struct RitualReport {
    /// Folders that received a committed graffiti line.
    pub flicked: usize,
    /// Folders selected for flicking.
    pub selected: usize,
    /// Every folder enumerated under the base directory.
    pub total: usize,
    pub outcomes: Vec<FlickOutcome>,
}

impl RitualReport {
    pub fn failures(&self) -> impl Iterator<Item = &FlickOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_flicked())
    }
}

/// Append one graffiti line to `path`, creating the file if needed.
///
/// The handle is closed when it drops, including on a failed write.
pub fn append_graffiti(path: &Path, line: &GraffitiLine) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_str().as_bytes())?;
    file.flush()
}

/// Flick a single folder: pick a target, append graffiti, stage, commit.
///
/// Returns the target and the commit message used.
pub fn flick_folder<V, R>(
    repo_root: &Path,
    folder: &Path,
    vcs: &mut V,
    rng: &mut R,
) -> Result<(FlickTarget, String), FlickError>
where
    V: VersionControl + ?Sized,
    R: Rng + ?Sized,
{
    let target = pick_target(folder, rng)
        .map_err(|source| FlickError::Listing { folder: folder.to_path_buf(), source })?;
    debug!(target = %target.path.display(), mode = ?target.mode, "target chosen");

    let relative = relative_to_root(repo_root, &target.path)?;
    let line = GraffitiLine::generate(rng);
    append_graffiti(&target.path, &line)
        .map_err(|source| FlickError::Write { path: target.path.clone(), source })?;

    let message = commit_message(&relative);
    vcs.stage(&relative)?;
    vcs.commit(&relative, &message)?;
    Ok((target, message))
}

/// A prepared run: base directory and repository root are already resolved.
#[derive(Debug)]
pub struct Ritual<R> {
    repo_root: PathBuf,
    base_dir: PathBuf,
    percent: i64,
    rng: R,
}

impl<R: Rng> Ritual<R> {
    /// Resolve the base directory and its repository root.
    ///
    /// Nothing is written to disk here, so a missing repository aborts the
    /// run before any folder is touched.
    pub fn new(config: RitualConfig, rng: R) -> Result<Self, RitualError> {
        let base_dir = config
            .base_dir
            .canonicalize()
            .map_err(|source| RitualError::BaseDir { path: config.base_dir.clone(), source })?;
        let repo_root = find_repo_root(&base_dir)?;
        Ok(Self { repo_root, base_dir, percent: config.percent, rng })
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Flick the sampled folders in order, calling `on_outcome` as each one
    /// finishes.
    pub fn perform<V, F>(&mut self, vcs: &mut V, mut on_outcome: F) -> RitualReport
    where
        V: VersionControl + ?Sized,
        F: FnMut(&FlickOutcome),
    {
        let sample = sample_folders(&self.base_dir, self.percent, &mut self.rng);
        info!(
            root = %self.repo_root.display(),
            base = %self.base_dir.display(),
            total = sample.total,
            selected = sample.selected.len(),
            "starting ritual"
        );

        let selected = sample.selected.len();
        let mut outcomes = Vec::with_capacity(selected);
        let mut flicked = 0;
        for folder in sample.selected {
            let outcome = match flick_folder(&self.repo_root, &folder, vcs, &mut self.rng) {
                Ok((target, message)) => {
                    flicked += 1;
                    FlickOutcome::Flicked { folder, target, message }
                }
                Err(error) => {
                    debug!(folder = %folder.display(), %error, "flick failed");
                    FlickOutcome::Failed { folder, error }
                }
            };
            on_outcome(&outcome);
            outcomes.push(outcome);
        }

        info!(flicked, total = sample.total, "ritual complete");
        RitualReport { flicked, selected, total: sample.total, outcomes }
    }
}

/// Run the ritual against the real `git` binary.
pub fn plant_flicks<R, F>(
    config: RitualConfig,
    rng: R,
    on_outcome: F,
) -> Result<RitualReport, RitualError>
where
    R: Rng,
    F: FnMut(&FlickOutcome),
{
    let mut ritual = Ritual::new(config, rng)?;
    let mut git = GitCli::new(ritual.repo_root());
    Ok(ritual.perform(&mut git, on_outcome))
}
