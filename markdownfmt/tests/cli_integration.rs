//! Integration tests for markdownfmt CLI

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::tempdir;

const UNFORMATTED: &str = "# Title\n\n*  item\n";
const FORMATTED: &str = "# Title\n\n- item\n";

fn run_markdownfmt(args: &[&str], stdin: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_markdownfmt"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

fn diff_available() -> bool {
    Command::new("diff").arg("--version").output().is_ok()
}

#[test]
fn test_cli_help() {
    let (stdout, _, code) = run_markdownfmt(&["--help"], "");

    assert_eq!(code, 0);
    assert!(stdout.contains("markdownfmt [flags] [path ...]"));
    assert!(stdout.contains("-l"));
    assert!(stdout.contains("-w"));
    assert!(stdout.contains("-d"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let (_, stderr, code) = run_markdownfmt(&["--bogus"], "");

    assert_eq!(code, 2);
    assert!(!stderr.is_empty());
}

#[test]
fn test_stdin_is_formatted() {
    let (stdout, stderr, code) = run_markdownfmt(&[], UNFORMATTED);

    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(stdout, FORMATTED);
}

#[test]
fn test_formatted_input_is_reproduced() {
    let (stdout, _, code) = run_markdownfmt(&[], FORMATTED);

    assert_eq!(code, 0);
    assert_eq!(stdout, FORMATTED);
}

#[test]
fn test_list_mode() {
    let temp = tempdir().unwrap();
    let changed = temp.path().join("changed.md");
    let clean = temp.path().join("clean.md");
    fs::write(&changed, UNFORMATTED).unwrap();
    fs::write(&clean, FORMATTED).unwrap();

    let (stdout, _, code) = run_markdownfmt(&["-l", &path_arg(temp.path())], "");

    assert_eq!(code, 0);
    assert_eq!(stdout, format!("{}\n", changed.display()));
}

#[test]
fn test_write_mode() {
    let temp = tempdir().unwrap();
    let doc = temp.path().join("doc.md");
    fs::write(&doc, UNFORMATTED).unwrap();

    let (stdout, _, code) = run_markdownfmt(&["-w", &path_arg(&doc)], "");

    assert_eq!(code, 0);
    assert!(stdout.is_empty());
    assert_eq!(fs::read_to_string(&doc).unwrap(), FORMATTED);
}

#[test]
fn test_write_mode_on_stdin_fails() {
    let (stdout, stderr, code) = run_markdownfmt(&["-w"], UNFORMATTED);

    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("<standard input>"));
}

#[test]
fn test_diff_mode() {
    if !diff_available() {
        return;
    }
    let temp = tempdir().unwrap();
    let doc = temp.path().join("doc.md");
    fs::write(&doc, UNFORMATTED).unwrap();
    let name = path_arg(&doc);

    let (stdout, _, code) = run_markdownfmt(&["-d", &name], "");

    assert_eq!(code, 1);
    assert!(stdout.starts_with(&format!("diff {name} markdownfmt/{name}\n")));
    assert!(stdout.contains("-*  item"));
    assert!(stdout.contains("+- item"));
    assert_eq!(fs::read_to_string(&doc).unwrap(), UNFORMATTED);
}

#[test]
fn test_diff_mode_clean_file() {
    let temp = tempdir().unwrap();
    let doc = temp.path().join("doc.md");
    fs::write(&doc, FORMATTED).unwrap();

    let (stdout, _, code) = run_markdownfmt(&["-d", &path_arg(&doc)], "");

    assert_eq!(code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn test_vendor_dirs_are_pruned() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("vendor/dep")).unwrap();
    fs::create_dir_all(temp.path().join("node_modules/pkg")).unwrap();
    fs::write(temp.path().join("vendor/dep/README.md"), UNFORMATTED).unwrap();
    fs::write(temp.path().join("node_modules/pkg/README.md"), UNFORMATTED).unwrap();

    let (stdout, _, code) = run_markdownfmt(&["-l", &path_arg(temp.path())], "");

    assert_eq!(code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn test_explicit_file_ignores_suffix() {
    let temp = tempdir().unwrap();
    let notes = temp.path().join("notes.txt");
    fs::write(&notes, UNFORMATTED).unwrap();

    let (stdout, _, code) = run_markdownfmt(&[&path_arg(&notes)], "");

    assert_eq!(code, 0);
    assert_eq!(stdout, FORMATTED);
}

#[test]
fn test_invalid_path() {
    let (_, stderr, code) = run_markdownfmt(&["/nonexistent/path.md"], "");

    assert_eq!(code, 2);
    assert!(stderr.contains("/nonexistent/path.md"));
}

#[test]
fn test_error_outranks_diff() {
    let temp = tempdir().unwrap();
    let doc = temp.path().join("doc.md");
    fs::write(&doc, UNFORMATTED).unwrap();
    let bad = temp.path().join("bad.md");
    fs::write(&bad, b"ok\n\xff\n").unwrap();

    let (_, stderr, code) = run_markdownfmt(&["-d", &path_arg(temp.path())], "");

    assert_eq!(code, 2);
    assert!(stderr.contains("bad.md:2:1: invalid UTF-8 sequence"));
}

#[test]
fn test_verbose_logs_files() {
    let temp = tempdir().unwrap();
    let doc = temp.path().join("doc.md");
    fs::write(&doc, FORMATTED).unwrap();

    let (_, stderr, code) = run_markdownfmt(&["-v", "-l", &path_arg(&doc)], "");

    assert_eq!(code, 0);
    assert!(stderr.contains("doc.md"));
}
