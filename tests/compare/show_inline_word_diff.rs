use crate::common::command::{run_diffcheck_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("word", "The [-quick-]{+quack+} brown fox\n")]
#[case("char", "The qu[-i-]{+a+}ck brown fox\n")]
fn show_inline_word_diff(
    workspace_dir: TempDir,
    #[case] granularity: &str,
    #[case] expected: &str,
) {
    write_file(FileSpec::new(
        workspace_dir.path().join("old.txt"),
        "The quick brown fox".to_string(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("new.txt"),
        "The quack brown fox".to_string(),
    ));

    run_diffcheck_command(
        workspace_dir.path(),
        &["compare", "-g", granularity, "old.txt", "new.txt"],
    )
    .assert()
    .success()
    .stdout(expected.to_string());
}
