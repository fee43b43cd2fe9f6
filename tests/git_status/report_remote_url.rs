use crate::common::command::{repository_dir, run_git_command, run_git_status};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn print_origin_url_after_branch(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_git_command(
        repository_dir.path(),
        &["remote", "add", "origin", "https://example.com/team/plz.git"],
    )
    .assert()
    .success();

    run_git_status(repository_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Branch: main\nRemote: https://example.com/team/plz.git\n\nStatus:\n",
        ));

    Ok(())
}

#[rstest]
fn omit_remote_line_without_origin(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_git_command(
        repository_dir.path(),
        &["remote", "add", "upstream", "https://example.com/other/plz.git"],
    )
    .assert()
    .success();

    run_git_status(repository_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Remote:").not());

    Ok(())
}
