use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::repo::GIT_METADATA;

/// Shortest synthesized dotfile stem.
pub const MIN_NAME_LEN: usize = 4;
/// Longest synthesized dotfile stem.
pub const MAX_NAME_LEN: usize = 8;

/// Whether the target already exists on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// A pre-existing hidden file; graffiti is appended.
    Append,
    /// A freshly named file; created by the first append.
    Create,
}

/// Hidden file chosen to receive graffiti.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlickTarget {
    pub path: PathBuf,
    pub mode: TargetMode,
}

/// List hidden regular files directly inside `folder`, sorted by name.
///
/// Names starting with `..` are excluded, as is a `.git` gitlink file.
/// Symlinks count when they resolve to a regular file.
pub fn hidden_files(folder: &Path) -> io::Result<Vec<PathBuf>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !name.starts_with('.') || name.starts_with("..") || name == GIT_METADATA {
            continue;
        }
        let path = entry.path();
        if fs::metadata(&path).map(|meta| meta.is_file()).unwrap_or(false) {
            names.push(path);
        }
    }
    names.sort();
    Ok(names)
}

/// `.` followed by 4 to 8 random lowercase letters.
pub fn random_dotfile_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(MIN_NAME_LEN..=MAX_NAME_LEN);
    let stem: String = (0..len).map(|_| char::from(rng.gen_range(b'a'..=b'z'))).collect();
    format!(".{stem}")
}

/// Choose an existing hidden file in `folder`, or name a new one.
pub fn pick_target<R: Rng + ?Sized>(folder: &Path, rng: &mut R) -> io::Result<FlickTarget> {
    let existing = hidden_files(folder)?;
    match existing.choose(rng) {
        Some(path) => Ok(FlickTarget { path: path.clone(), mode: TargetMode::Append }),
        None => Ok(FlickTarget {
            path: folder.join(random_dotfile_name(rng)),
            mode: TargetMode::Create,
        }),
    }
}
