use crate::common::command::{git_commit, repository_dir, run_git_command, run_git_status};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

/// Points `origin/main` at a commit `main` does not have, then adds
/// `ahead` commits to `main`.
fn diverge(dir: &std::path::Path, ahead: usize) {
    run_git_command(dir, &["checkout", "--quiet", "-b", "upstream-work"])
        .assert()
        .success();
    git_commit(dir, "Upstream change").assert().success();
    run_git_command(dir, &["update-ref", "refs/remotes/origin/main", "HEAD"])
        .assert()
        .success();
    run_git_command(dir, &["checkout", "--quiet", "main"])
        .assert()
        .success();

    for i in 0..ahead {
        git_commit(dir, &format!("Local change {i}"))
            .assert()
            .success();
    }
}

#[rstest]
fn report_commits_ahead_and_behind(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    diverge(repository_dir.path(), 3);

    run_git_status(repository_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\n↑ 3 ahead, ↓ 1 behind origin/main\n",
        ))
        .stdout(predicate::str::contains("3 ahead"))
        .stdout(predicate::str::contains("1 behind"));

    Ok(())
}

#[rstest]
fn omit_divergence_when_in_sync(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_git_command(
        repository_dir.path(),
        &["update-ref", "refs/remotes/origin/main", "HEAD"],
    )
    .assert()
    .success();

    run_git_status(repository_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ahead").not())
        .stdout(predicate::str::contains("behind").not());

    Ok(())
}

#[rstest]
fn omit_divergence_without_upstream(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    git_commit(repository_dir.path(), "Unpushed").assert().success();

    run_git_status(repository_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("↑").not());

    Ok(())
}
