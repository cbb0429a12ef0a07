use crate::common::command::{file_a, run_diffcheck_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn print_nothing_for_identical_files(workspace_dir: TempDir, file_a: String) {
    write_file(FileSpec::new(workspace_dir.path().join("left.rs"), file_a.clone()));
    write_file(FileSpec::new(workspace_dir.path().join("right.rs"), file_a));

    run_diffcheck_command(
        workspace_dir.path(),
        &["compare", "--exit-code", "left.rs", "right.rs"],
    )
    .assert()
    .success()
    .stdout("");
}
