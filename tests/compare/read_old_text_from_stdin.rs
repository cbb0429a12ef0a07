use crate::common::command::{run_diffcheck_command, workspace_dir};
use crate::common::file::{FileSpec, fixed_mtime_header, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn read_old_text_from_stdin(workspace_dir: TempDir) {
    write_file(FileSpec::new(
        workspace_dir.path().join("new.txt"),
        "a\nx\nc\nd\ne".to_string(),
    ));

    let expected_output = format!(
        "--- -\n+++ new.txt\t{}\n@@ -1,3 +1,3 @@\n a\n-b\n+x\n c\n",
        fixed_mtime_header()
    );

    run_diffcheck_command(workspace_dir.path(), &["compare", "-U", "1", "-", "new.txt"])
        .write_stdin("a\r\nb\r\nc\r\nd\r\ne")
        .assert()
        .success()
        .stdout(expected_output);
}
