use crate::common::command::{run_diffcheck_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case(&["compare", "-i", "-w", "old.txt", "new.txt"], true)]
#[case(&["compare", "-i", "old.txt", "new.txt"], false)]
#[case(&["compare", "-w", "old.txt", "new.txt"], false)]
#[case(&["compare", "--ignore-case", "--ignore-whitespace", "old.txt", "new.txt"], true)]
fn ignore_case_and_whitespace_differences(
    workspace_dir: TempDir,
    #[case] args: &[&str],
    #[case] identical: bool,
) {
    write_file(FileSpec::new(
        workspace_dir.path().join("old.txt"),
        "Hello   World\nSecond\tLine\n".to_string(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("new.txt"),
        "hello world\nsecond line".to_string(),
    ));

    let assert = run_diffcheck_command(workspace_dir.path(), args).assert().success();

    if identical {
        assert.stdout("");
    } else {
        assert.stdout(predicate::str::contains("@@"));
    }
}
