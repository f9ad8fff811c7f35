use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn write_file(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn cli_writes_tree_and_target_contents() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("proj");

    write_file(&root.join("a.py"), "x=1");
    write_file(&root.join("README"), "hello");
    write_file(&root.join("node_modules/skip.js"), "module.exports = 1;");
    write_file(&root.join(".git/config"), "[core]");

    let out = dir.path().join("report.txt");
    let output = Command::new(env!("CARGO_BIN_EXE_treecat"))
        .args(["--dir", root.to_str().unwrap(), "--out", out.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Done. Output written to:"));
    assert!(stdout.contains("report.txt"));

    let report = fs::read_to_string(&out).unwrap();
    let expected = "=== Directory Structure ===\n\
                    proj\n\
                    ├── README\n\
                    ├── a.py\n\
                    \n\
                    === File Contents ===\n\
                    --- README ---\n\
                    hello\n\
                    --- a.py ---\n\
                    x=1\n";
    assert_eq!(report, expected);
}

#[test]
fn cli_short_flags_and_empty_match() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("assets");

    write_file(&root.join("logo.png"), "not really a png");
    write_file(&root.join("fonts/font.ttf"), "");

    let out = dir.path().join("out.txt");
    let output = Command::new(env!("CARGO_BIN_EXE_treecat"))
        .args(["-d", root.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());

    let report = fs::read_to_string(&out).unwrap();
    assert!(report.contains("assets\n├── fonts\n│   └── font.ttf\n└── logo.png\n"));
    assert!(report.ends_with("=== File Contents ===\n"));
}

#[test]
fn cli_defaults_to_current_dir_and_output_txt() {
    let dir = tempdir().unwrap();

    write_file(&dir.path().join("main.rs"), "fn main() {}\n");

    let output = Command::new(env!("CARGO_BIN_EXE_treecat"))
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());

    let report = fs::read_to_string(dir.path().join("output.txt")).unwrap();
    assert!(report.contains("--- main.rs ---\nfn main() {}\n\n"));
    assert!(!report.contains("--- output.txt ---"));
}

#[test]
fn cli_normalizes_parent_dirs_in_paths() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("proj");

    write_file(&root.join("main.rs"), "fn main() {}\n");
    write_file(&root.join("output.txt"), "previous run");

    let output = Command::new(env!("CARGO_BIN_EXE_treecat"))
        .current_dir(&root)
        .args(["-d", "sub/..", "-o", "sub/../output.txt"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains(".."));
    assert!(stdout.trim_end().ends_with("output.txt"));

    let report = fs::read_to_string(root.join("output.txt")).unwrap();
    assert!(report.starts_with("=== Directory Structure ===\nproj\n"));
    assert!(report.contains("--- main.rs ---\nfn main() {}\n"));
    assert!(!report.contains("--- output.txt ---"));
    assert!(!report.contains("previous run"));
}

#[cfg(unix)]
#[test]
fn cli_unreadable_file_is_reported_inline() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("src");

    write_file(&root.join("b.rs"), "fn b() {}");
    std::os::unix::fs::symlink(root.join("gone.rs"), root.join("a.rs")).unwrap();

    let out = dir.path().join("out.txt");
    let output = Command::new(env!("CARGO_BIN_EXE_treecat"))
        .args(["-d", root.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());

    let report = fs::read_to_string(&out).unwrap();
    assert!(report.contains("--- a.rs ---\n[read error: "));
    assert!(report.ends_with("--- b.rs ---\nfn b() {}\n"));
}

#[test]
fn cli_missing_dir_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let out = dir.path().join("out.txt");

    let output = Command::new(env!("CARGO_BIN_EXE_treecat"))
        .args(["-d", missing.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error: path not found"));
    assert!(!out.exists());
}

#[test]
fn cli_unwritable_output_fails() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("a.py"), "x=1");
    let out = dir.path().join("no-such-dir").join("out.txt");

    let output = Command::new(env!("CARGO_BIN_EXE_treecat"))
        .args(["-d", dir.path().to_str().unwrap(), "-o", out.to_str().unwrap()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn cli_rejects_unknown_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_treecat"))
        .arg("--bogus")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn cli_has_no_version_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_treecat"))
        .arg("--version")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}
