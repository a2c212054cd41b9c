//! flick-core
//!
//! Core library for the flick ritual: walk a directory tree inside a Git
//! repository, append a graffiti line to a dotfile in each chosen folder, and
//! commit every change on its own.
//!
//! All substantive logic lives here so it can be tested with a fake version
//! control backend and a seeded RNG; the CLI only parses flags and prints.

pub mod graffiti;
pub mod repo;
pub mod ritual;
pub mod sampler;
pub mod target;
pub mod vcs;

pub use graffiti::GraffitiLine;
pub use repo::{find_repo_root, RepoError};
pub use ritual::{FlickError, FlickOutcome, Ritual, RitualConfig, RitualError, RitualReport};
pub use target::{pick_target, FlickTarget, TargetMode};
pub use vcs::{GitCli, VcsError, VersionControl};

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
