//! Folder enumeration and percentage-based sampling.

use std::path::{Path, PathBuf};

use rand::seq::index;
use rand::Rng;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::repo::GIT_METADATA;

/// Folders found under a base directory and the subset chosen for flicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSample {
    /// Number of folders enumerated (the denominator of the summary).
    pub total: usize,
    pub selected: Vec<PathBuf>,
}

/// Enumerate `base` and every directory beneath it.
///
/// Entries are sorted by file name. The `.git` metadata directory is not
/// descended into. Unreadable entries are logged and skipped.
pub fn enumerate_folders(base: &Path) -> Vec<PathBuf> {
    let walker = WalkDir::new(base)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || entry.file_name() != GIT_METADATA);

    let mut folders = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_dir() => folders.push(entry.into_path()),
            Ok(_) => {}
            Err(err) => warn!(error = %err, "skipping unreadable entry"),
        }
    }
    debug!(base = %base.display(), count = folders.len(), "enumerated folders");
    folders
}

/// `floor(count * percent / 100)` for `percent < 100`, otherwise `count`.
///
/// Negative percentages yield zero.
pub fn sample_size(count: usize, percent: i64) -> usize {
    if percent >= 100 {
        return count;
    }
    let scaled = (count as i128 * percent as i128) / 100;
    usize::try_from(scaled.max(0)).unwrap_or(0)
}

/// Pick `sample_size(folders.len(), percent)` folders uniformly at random
/// without replacement. At 100 or above, every folder is kept in walk order.
pub fn select_folders<R: Rng + ?Sized>(
    folders: Vec<PathBuf>,
    percent: i64,
    rng: &mut R,
) -> Vec<PathBuf> {
    if percent >= 100 {
        return folders;
    }
    let amount = sample_size(folders.len(), percent);
    let mut slots: Vec<Option<PathBuf>> = folders.into_iter().map(Some).collect();
    index::sample(rng, slots.len(), amount)
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect()
}

/// Enumerate `base` and select folders per `percent`.
pub fn sample_folders<R: Rng + ?Sized>(base: &Path, percent: i64, rng: &mut R) -> FolderSample {
    let folders = enumerate_folders(base);
    let total = folders.len();
    let selected = select_folders(folders, percent, rng);
    debug!(total, selected = selected.len(), percent, "sampled folders");
    FolderSample { total, selected }
}
