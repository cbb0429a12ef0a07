use crate::common::command::{
    diff_hunks_output, run_diffcheck_command, stdout_of, workspace_dir_with_rust_files,
};
use crate::common::file::fixed_mtime_header;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_unified_patch_with_file_headers(
    workspace_dir_with_rust_files: TempDir,
    diff_hunks_output: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir_with_rust_files;
    let mtime = fixed_mtime_header();

    let expected_output = format!(
        "--- a.rs\t{mtime}\n+++ b.rs\t{mtime}\n{}",
        diff_hunks_output
    );
    let actual_output = stdout_of(&mut run_diffcheck_command(
        dir.path(),
        &["compare", "a.rs", "b.rs"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn show_single_hunk_with_one_line_of_context(
    workspace_dir_with_rust_files: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir_with_rust_files;

    let actual_output = stdout_of(&mut run_diffcheck_command(
        dir.path(),
        &["compare", "-U", "1", "a.rs", "b.rs"],
    ))?;

    let hunk_headers = actual_output
        .lines()
        .filter(|line| line.starts_with("@@"))
        .collect::<Vec<_>>();
    pretty_assertions::assert_eq!(hunk_headers, vec!["@@ -3,5 +3,2 @@", "@@ -15,3 +12,5 @@"]);

    Ok(())
}
