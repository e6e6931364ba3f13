use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command as StdCommand;
use tempfile::{tempdir, TempDir};

fn git(dir: &Path, args: &[&str]) -> String {
    let output = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Create a scratch repository with a local identity so commits work in CI.
fn init_repo() -> TempDir {
    let dir = tempdir().unwrap();
    git(dir.path(), &["init"]);
    git(dir.path(), &["config", "user.email", "test@example.com"]);
    git(dir.path(), &["config", "user.name", "Test User"]);
    git(dir.path(), &["config", "commit.gpgsign", "false"]);
    dir
}

fn seqcommit(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("seqcommit").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_empty_change_set_reports_nothing_to_do() {
    let dir = init_repo();

    seqcommit(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No uncommitted files matching criteria to process.",
        ));
}

#[test]
fn test_preview_lists_commit_order_without_mutation() {
    let dir = init_repo();
    fs::write(dir.path().join("a.1.txt"), "first").unwrap();
    fs::write(dir.path().join("a.2.txt"), "second").unwrap();
    fs::write(dir.path().join("b.txt"), "plain").unwrap();

    seqcommit(dir.path())
        .arg("--preview")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Preview mode: the files will be committed in the following order:",
        ))
        .stdout(predicate::str::contains(
            "1. Rename a.1.txt -> a.txt and commit",
        ))
        .stdout(predicate::str::contains(
            "2. Rename a.2.txt -> a.txt and commit",
        ))
        .stdout(predicate::str::contains("3. Commit b.txt"));

    // Nothing was renamed and nothing was committed.
    assert!(dir.path().join("a.1.txt").exists());
    assert!(dir.path().join("a.2.txt").exists());
    assert!(!dir.path().join("a.txt").exists());
    let head = StdCommand::new("git")
        .args(["rev-parse", "HEAD"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!head.status.success(), "preview must not create commits");
}

#[test]
fn test_execute_commits_each_file_in_sequence_order() {
    let dir = init_repo();
    fs::write(dir.path().join("a.1.txt"), "first").unwrap();
    fs::write(dir.path().join("a.2.txt"), "second").unwrap();
    fs::write(dir.path().join("b.txt"), "plain").unwrap();

    seqcommit(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. Renaming a.1.txt to a.txt and committing...",
        ))
        .stdout(predicate::str::contains(
            "2. Renaming a.2.txt to a.txt and committing...",
        ))
        .stdout(predicate::str::contains("3. Committing b.txt..."))
        .stdout(predicate::str::contains(
            "All matching uncommitted files have been committed and renamed in order.",
        ));

    // One commit per file, oldest first.
    let log = git(dir.path(), &["log", "--reverse", "--format=%s"]);
    let subjects: Vec<&str> = log.lines().collect();
    assert_eq!(subjects, ["Add a.txt", "Add a.txt", "Add b.txt"]);

    // The working tree is clean and the canonical name holds the last variant.
    assert_eq!(git(dir.path(), &["status", "--porcelain"]), "");
    assert_eq!(
        fs::read_to_string(dir.path().join("a.txt")).unwrap(),
        "second"
    );
}

#[test]
fn test_exclude_glob_filters_paths() {
    let dir = init_repo();
    fs::write(dir.path().join("scratch.tmp"), "scratch").unwrap();
    fs::write(dir.path().join("a.txt"), "keep").unwrap();

    seqcommit(dir.path())
        .args(["--preview", "--exclude", "*.tmp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Commit a.txt"))
        .stdout(predicate::str::contains("scratch.tmp").not());
}

#[test]
fn test_empty_exclude_pattern_is_a_fatal_config_error() {
    let dir = init_repo();
    fs::write(dir.path().join("a.txt"), "keep").unwrap();

    seqcommit(dir.path())
        .args(["--exclude", ""])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("requires a glob pattern"));

    // The error fired before any repository interaction.
    assert_eq!(git(dir.path(), &["status", "--porcelain"]), "?? a.txt\n");
}

#[test]
fn test_bare_exclude_flag_is_a_fatal_config_error() {
    let dir = init_repo();

    seqcommit(dir.path())
        .arg("--exclude")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("requires a glob pattern"));
}

#[test]
fn test_sequence_gap_warns_but_does_not_block() {
    let dir = init_repo();
    fs::write(dir.path().join("draft.1.md"), "one").unwrap();
    fs::write(dir.path().join("draft.3.md"), "three").unwrap();

    seqcommit(dir.path())
        .arg("--preview")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "missing files in sequence for draft.md pattern: draft.2.md",
        ))
        .stdout(predicate::str::contains(
            "1. Rename draft.1.md -> draft.md and commit",
        ))
        .stdout(predicate::str::contains(
            "2. Rename draft.3.md -> draft.md and commit",
        ));
}

#[test]
fn test_status_failure_outside_a_repository_is_fatal() {
    let dir = tempdir().unwrap();

    seqcommit(dir.path())
        .env("GIT_CEILING_DIRECTORIES", dir.path())
        .env_remove("GIT_DIR")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("status"));
}

#[test]
fn test_unparseable_paths_are_skipped_silently() {
    let dir = init_repo();
    fs::write(dir.path().join("Makefile"), "all:").unwrap();
    fs::write(dir.path().join("a.txt"), "keep").unwrap();

    seqcommit(dir.path())
        .arg("--preview")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Commit a.txt"))
        .stdout(predicate::str::contains("Makefile").not());
}
