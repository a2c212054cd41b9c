use std::fs;
use std::path::Path;

use flick_core::repo::{commit_message, relative_to_root};
use flick_core::{find_repo_root, RepoError};
use tempfile::tempdir;

#[test]
fn finds_git_dir_in_start_directory() {
    let tmp = tempdir().expect("tempdir");
    fs::create_dir(tmp.path().join(".git")).expect("create .git");

    let root = find_repo_root(tmp.path()).expect("root");
    assert_eq!(root, tmp.path());
}

#[test]
fn walks_up_to_nearest_ancestor() {
    let tmp = tempdir().expect("tempdir");
    fs::create_dir(tmp.path().join(".git")).expect("create .git");
    let nested = tmp.path().join("a").join("b").join("c");
    fs::create_dir_all(&nested).expect("create nested");

    let root = find_repo_root(&nested).expect("root");
    assert_eq!(root, tmp.path());
}

#[test]
fn prefers_innermost_repository() {
    let tmp = tempdir().expect("tempdir");
    fs::create_dir(tmp.path().join(".git")).expect("outer .git");
    let inner = tmp.path().join("vendor").join("lib");
    fs::create_dir_all(inner.join(".git")).expect("inner .git");
    let start = inner.join("src");
    fs::create_dir_all(&start).expect("create src");

    assert_eq!(find_repo_root(&start).expect("root"), inner);
}

#[test]
fn accepts_git_file_for_worktrees() {
    let tmp = tempdir().expect("tempdir");
    fs::write(tmp.path().join(".git"), "gitdir: /elsewhere/.git/worktrees/wt\n")
        .expect("write .git file");

    assert_eq!(find_repo_root(tmp.path()).expect("root"), tmp.path());
}

#[test]
fn errors_when_no_ancestor_has_metadata() {
    let tmp = tempdir().expect("tempdir");
    let start = tmp.path().join("lonely");
    fs::create_dir_all(&start).expect("create dir");

    match find_repo_root(&start) {
        Err(RepoError::RootNotFound { start: reported }) => assert_eq!(reported, start),
        other => panic!("expected RootNotFound, got {other:?}"),
    }
}

#[test]
fn relative_paths_and_messages() {
    let root = Path::new("/work/repo");
    let rel = relative_to_root(root, Path::new("/work/repo/docs/.notes")).expect("relative");
    assert_eq!(rel, Path::new("docs/.notes"));
    assert_eq!(commit_message(&rel), format!(" {}", Path::new("docs/.notes").display()));

    let err = relative_to_root(root, Path::new("/elsewhere/.notes")).unwrap_err();
    assert!(matches!(err, RepoError::OutsideRepository { .. }), "unexpected error: {err}");
}
