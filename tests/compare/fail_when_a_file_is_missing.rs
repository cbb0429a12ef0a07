use crate::common::command::{run_diffcheck_command, workspace_dir_with_rust_files};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_when_a_file_is_missing(workspace_dir_with_rust_files: TempDir) {
    let dir = workspace_dir_with_rust_files;

    run_diffcheck_command(dir.path(), &["compare", "a.rs", "missing.rs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read missing.rs"));
}

#[rstest]
fn fail_when_both_sides_read_stdin(workspace_dir_with_rust_files: TempDir) {
    let dir = workspace_dir_with_rust_files;

    run_diffcheck_command(dir.path(), &["compare", "-", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Only one side"));
}
