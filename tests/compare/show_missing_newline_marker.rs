use crate::common::command::{run_diffcheck_command, stdout_of, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("a\nb\n", "a\nc\n", "@@ -1,2 +1,2 @@\n a\n-b\n+c\n")]
#[case(
    "a\nb",
    "a\nb\n",
    "@@ -1,2 +1,2 @@\n a\n-b\n\\ No newline at end of file\n+b\n"
)]
#[case(
    "a\nb\n",
    "a\nb",
    "@@ -1,2 +1,2 @@\n a\n-b\n+b\n\\ No newline at end of file\n"
)]
fn show_missing_newline_marker(
    workspace_dir: TempDir,
    #[case] old: &str,
    #[case] new: &str,
    #[case] expected_hunks: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(workspace_dir.path().join("old.txt"), old.to_string()));
    write_file(FileSpec::new(workspace_dir.path().join("new.txt"), new.to_string()));

    let actual_output = stdout_of(&mut run_diffcheck_command(
        workspace_dir.path(),
        &["compare", "old.txt", "new.txt"],
    ))?;

    let hunks = actual_output
        .split_once("@@")
        .map(|(_, hunks)| format!("@@{hunks}"))
        .unwrap_or_default();
    pretty_assertions::assert_eq!(hunks, expected_hunks);

    Ok(())
}

#[rstest]
fn count_newline_terminated_lines_in_stat(workspace_dir: TempDir) {
    write_file(FileSpec::new(
        workspace_dir.path().join("old.txt"),
        "a\nb\n".to_string(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("new.txt"),
        "a\nc\n".to_string(),
    ));

    run_diffcheck_command(
        workspace_dir.path(),
        &["compare", "--format", "stat", "old.txt", "new.txt"],
    )
    .assert()
    .success()
    .stdout("1 insertion(+), 1 deletion(-), 1 unchanged\n");
}

#[rstest]
fn print_nothing_when_both_files_end_with_newline(workspace_dir: TempDir) {
    write_file(FileSpec::new(
        workspace_dir.path().join("old.txt"),
        "same\ntext\n".to_string(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("new.txt"),
        "same\ntext\n".to_string(),
    ));

    run_diffcheck_command(
        workspace_dir.path(),
        &["compare", "--exit-code", "old.txt", "new.txt"],
    )
    .assert()
    .success()
    .stdout("");
}
