use std::io;
use std::path::PathBuf;

use flick_core::target::{FlickTarget, TargetMode};
use flick_core::{FlickError, FlickOutcome, RitualReport, VcsError};
use plant_flicks::{render_outcome, render_summary, resolve_base_dir};
use tempfile::tempdir;

#[test]
fn resolve_base_dir_returns_cwd_for_dot() {
    let cwd = std::env::current_dir().expect("cwd");
    assert_eq!(resolve_base_dir(".").expect("resolve"), cwd);
}

#[test]
fn resolve_base_dir_joins_relative_paths_onto_cwd() {
    let cwd = std::env::current_dir().expect("cwd");
    assert_eq!(resolve_base_dir("nested/dir").expect("resolve"), cwd.join("nested/dir"));
}

#[test]
fn resolve_base_dir_keeps_absolute_paths() {
    let tmp = tempdir().expect("tempdir");
    let abs = tmp.path().to_string_lossy().to_string();
    assert_eq!(resolve_base_dir(&abs).expect("resolve"), tmp.path());
}

#[test]
fn renders_success_and_failure_lines() {
    let flicked = FlickOutcome::Flicked {
        folder: PathBuf::from("/repo/docs"),
        target: FlickTarget { path: PathBuf::from("/repo/docs/.keep"), mode: TargetMode::Append },
        message: " docs/.keep".into(),
    };
    assert_eq!(render_outcome(&flicked), "✅  docs/.keep");

    let failed = FlickOutcome::Failed {
        folder: PathBuf::from("/repo/locked"),
        error: FlickError::Vcs(VcsError::Spawn {
            command: "git add -- locked/.x".into(),
            source: io::Error::new(io::ErrorKind::Other, "boom"),
        }),
    };
    assert_eq!(
        render_outcome(&failed),
        "❌ Failed in /repo/locked: failed to spawn `git add -- locked/.x`: boom"
    );
}

#[test]
fn renders_summary_over_total_folders() {
    let report = RitualReport { flicked: 5, selected: 5, total: 10, outcomes: Vec::new() };
    assert_eq!(
        render_summary(&report),
        "🌿 Ritual complete: 5 of 10 folders received their entropy."
    );
}
