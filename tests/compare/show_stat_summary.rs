use crate::common::command::{run_diffcheck_command, workspace_dir_with_rust_files};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_stat_summary(workspace_dir_with_rust_files: TempDir) {
    let dir = workspace_dir_with_rust_files;

    run_diffcheck_command(dir.path(), &["compare", "--format", "stat", "a.rs", "b.rs"])
        .assert()
        .success()
        .stdout("3 insertions(+), 4 deletions(-), 15 unchanged\n");
}
