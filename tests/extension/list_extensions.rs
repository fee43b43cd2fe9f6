use crate::common::command::{run_plz_command, workspace_dir};
use crate::common::file::write_script;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

const EMPTY_LISTING: &str = "No extensions installed.\n\nTo install an extension, use:\n  plz extension install <source-path> [name]\n";

#[rstest]
fn explain_how_to_install_when_directory_is_missing(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let extensions_dir = workspace_dir.path().join("never-created");

    let actual_output = run_plz_command(&extensions_dir, &["extension", "list"])
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    assert_eq!(actual_output, EMPTY_LISTING);

    Ok(())
}

#[rstest]
fn ignore_non_executable_files(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let extensions_dir = workspace_dir.path().join("extensions");
    write_script(&extensions_dir.join("notes"), "not a program\n", false);
    std::fs::create_dir_all(extensions_dir.join("nested"))?;

    let actual_output = run_plz_command(&extensions_dir, &["extension", "list"])
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    assert_eq!(actual_output, EMPTY_LISTING);

    Ok(())
}

#[rstest]
fn list_installed_extensions_by_name_with_size(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let extensions_dir = workspace_dir.path().join("extensions");
    let source = workspace_dir.path().join("source.sh");
    write_script(&source, "echo hi\n", true);
    let size = std::fs::metadata(&source)?.len();

    for name in ["zeta", "alpha"] {
        run_plz_command(
            &extensions_dir,
            &["extension", "install", &source.to_string_lossy(), name],
        )
        .assert()
        .success();
    }

    let expected_output = format!(
        "Installed extensions:\n  alpha                (executable, {size} bytes)\n  zeta                 (executable, {size} bytes)\n\nRun an extension with: plz <extension-name> [args...]\n"
    );

    let actual_output = run_plz_command(&extensions_dir, &["ext", "list"])
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
