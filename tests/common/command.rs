use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn file_a() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();
    for i in 0..1000000000 {
        println!("{}",  s);
    }

    println!("Done");

    let tx = std::thread::spawn(move || {
        for i in 0..10 {
            println!("Thread: {}", i);
        }
    });

    tx.join().unwrap();

    println!("All threads completed");
}"#
    .to_string()
}

#[fixture]
pub fn file_b() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();

    println!("Done");

    let tx = std::thread::spawn(move || {
        for i in 0..10 {
            println!("Thread: {}", i);
        }
    });

    if let Err(e) = tx.join() {
        eprintln!("Thread error: {}", e);
    }

    println!("All threads completed");
}"#
    .to_string()
}

#[fixture]
pub fn diff_hunks_output() -> String {
    "@@ -1,9 +1,6 @@\n fn main() {\n     let s = String::new();\n     std::io::stdin().read_line(&mut s).unwrap();\n-    for i in 0..1000000000 {\n-        println!(\"{}\",  s);\n-    }\n \n     println!(\"Done\");\n \n@@ -13,7 +10,9 @@\n         }\n     });\n \n-    tx.join().unwrap();\n+    if let Err(e) = tx.join() {\n+        eprintln!(\"Thread error: {}\", e);\n+    }\n \n     println!(\"All threads completed\");\n }\n"
    .to_string()
}

#[fixture]
pub fn workspace_dir_with_rust_files(
    workspace_dir: TempDir,
    file_a: String,
    file_b: String,
) -> TempDir {
    write_file(FileSpec::new(workspace_dir.path().join("a.rs"), format!("{file_a}\n")));
    write_file(FileSpec::new(workspace_dir.path().join("b.rs"), format!("{file_b}\n")));

    workspace_dir
}

pub fn run_diffcheck_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("diffcheck").expect("Failed to find diffcheck binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("DIFFCHECK_COLOR", "never")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> Result<String, Box<dyn std::error::Error>> {
    let output = cmd.assert().get_output().stdout.clone();
    Ok(String::from_utf8(output)?)
}
