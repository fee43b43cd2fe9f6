use crate::common::command::{run_plz_command, workspace_dir};
use crate::common::file::write_script;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn remove_installed_extension(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let extensions_dir = workspace_dir.path().join("extensions");
    let source = workspace_dir.path().join("greet");
    write_script(&source, "echo hi\n", true);

    run_plz_command(
        &extensions_dir,
        &["extension", "install", &source.to_string_lossy()],
    )
    .assert()
    .success();

    run_plz_command(&extensions_dir, &["extension", "uninstall", "greet"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "✓ Extension 'greet' uninstalled successfully!\n",
        ));

    assert!(!extensions_dir.join("greet").exists());
    assert!(source.exists());

    Ok(())
}

#[rstest]
fn fail_for_unknown_extension(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let extensions_dir = workspace_dir.path().join("extensions");

    run_plz_command(&extensions_dir, &["extension", "uninstall", "ghost"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: extension 'ghost' not found"));

    Ok(())
}

#[rstest]
fn refuse_to_uninstall_outside_the_directory(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let extensions_dir = workspace_dir.path().join("extensions");
    let victim = workspace_dir.path().join("victim");
    write_script(&victim, "true\n", true);

    run_plz_command(&extensions_dir, &["extension", "uninstall", "../victim"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "error: extension name cannot contain path separators",
        ));

    assert!(victim.exists());

    Ok(())
}
