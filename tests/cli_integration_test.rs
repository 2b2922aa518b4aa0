//! Integration tests for the sigtable binary.

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_scope(root: &Path, package: &str, json: &str) {
    let dir = root.join(package);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("scope.json"), json).unwrap();
}

/// A manifest tree with `io`, `os` and `fmt`, where `io` and `os` share a shape.
fn sample_scopes() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_scope(
        root,
        "io",
        r#"{"declarations": [
            {"name": "Closer", "kind": "interface", "methods": ["Close() error"]},
            {"name": "Reader", "kind": "interface", "methods": ["Read(p []byte) (n int, err error)"]},
            {"name": "pipe", "kind": "interface", "methods": ["pipe()"]}
        ]}"#,
    );
    write_scope(
        root,
        "os",
        r#"{"declarations": [
            {"name": "Closer", "kind": "interface", "methods": ["Close() error"]},
            {"name": "WalkFunc", "kind": "func", "signature": "func(path string) error"}
        ]}"#,
    );
    write_scope(
        root,
        "fmt",
        r#"{"declarations": [
            {"name": "Stringer", "kind": "interface", "methods": ["String() string"]},
            {"name": "Println", "kind": "func", "signature": "func(a ...any) (n int, err error)"}
        ]}"#,
    );
    temp_dir
}

fn sigtable(scopes: &Path, cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sigtable").unwrap();
    cmd.current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("SIGTABLE_SCOPES")
        .arg("--scopes")
        .arg(scopes);
    cmd
}

#[test]
fn test_generates_go_table_on_stdout() {
    let scopes = sample_scopes();
    let output = sigtable(scopes.path(), scopes.path())
        .write_stdin("fmt\nos\nio\nunsafe\ncrypto/internal/foo\n")
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected = indoc::indoc! {r#"
        // Generated by sigtable

        package interfacer

        var stdPkgs = map[string]struct{}{
        	"io": struct{}{},
        	"os": struct{}{},
        	"fmt": struct{}{},
        	"unsafe": struct{}{},
        	"crypto/internal/foo": struct{}{},
        }

        var stdIfaces = map[string]string{
        	"Error() string": "error",
        	"Close() error": "io.Closer",
        	"Read(p []byte) (n int, err error)": "io.Reader",
        	"String() string": "fmt.Stringer",
        }

        var stdFuncs = map[string]string{
        	"func(path string) error": "os.WalkFunc",
        	"func(a ...any) (n int, err error)": "fmt.Println",
        }
    "#};
    pretty_assertions::assert_eq!(stdout, expected);
}

#[test]
fn test_output_file_and_json_format() {
    let scopes = sample_scopes();
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("table.json");

    sigtable(scopes.path(), scopes.path())
        .args(["--format", "json", "-o"])
        .arg(&out_path)
        .write_stdin("io\nos\n")
        .assert()
        .success()
        .stdout("");

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(json["packages"], serde_json::json!(["io", "os"]));
    assert_eq!(json["interfaces"][1]["name"], "io.Closer");
}

#[test]
fn test_unresolvable_package_fails_without_output() {
    let scopes = sample_scopes();
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("std.go");

    let output = sigtable(scopes.path(), scopes.path())
        .arg("-o")
        .arg(&out_path)
        .write_stdin("io\nos\ndoes/not/exist\n")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.contains("does/not/exist"), "stderr: {stderr}");
    assert!(!out_path.exists());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unreadable_input_fails_without_output() {
    let scopes = sample_scopes();
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("std.go");

    let output = sigtable(scopes.path(), scopes.path())
        .arg("-o")
        .arg(&out_path)
        .write_stdin(vec![b'i', b'o', b'\n', 0xff, 0xfe, b'\n'])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read package list"), "stderr: {stderr}");
    assert!(!out_path.exists());
}

#[test]
fn test_unwritable_destination_fails() {
    let scopes = sample_scopes();
    let out_path = scopes.path().join("missing-dir").join("std.go");

    sigtable(scopes.path(), scopes.path())
        .arg("-o")
        .arg(&out_path)
        .write_stdin("io\n")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_empty_input_is_valid() {
    let scopes = sample_scopes();
    let output = sigtable(scopes.path(), scopes.path())
        .write_stdin("")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\t\"Error() string\": \"error\",\n"));
}

#[test]
fn test_discovered_config_is_applied() {
    let scopes = sample_scopes();
    let work_dir = TempDir::new().unwrap();
    fs::write(
        work_dir.path().join(".sigtable.toml"),
        "[exclude]\npaths = [\"os\"]\n\n[output]\npackage = \"sigs\"\n",
    )
    .unwrap();

    let output = sigtable(scopes.path(), work_dir.path())
        .write_stdin("io\nos\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("package sigs\n"));
    assert!(!stdout.contains("os.WalkFunc"));
}

#[test]
fn test_invalid_explicit_config_fails() {
    let scopes = sample_scopes();
    let config = scopes.path().join("bad.toml");
    fs::write(&config, "[exclude\n").unwrap();

    sigtable(scopes.path(), scopes.path())
        .arg("--config")
        .arg(&config)
        .write_stdin("io\n")
        .assert()
        .failure()
        .code(1);
}
