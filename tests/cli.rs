#![cfg(unix)]

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use tempfile::tempdir;

fn setup_root(root: &std::path::Path, cases: &[(&str, &str, &str)]) {
    let cases_dir = root.join("auto").join("cases");
    fs::create_dir_all(&cases_dir).unwrap();
    for (name, definition, expected) in cases {
        fs::write(cases_dir.join(format!("{name}.zt")), definition).unwrap();
        fs::write(cases_dir.join(format!("words-{name}.txt")), "").unwrap();
        fs::write(cases_dir.join(format!("expected-{name}.txt")), expected).unwrap();
    }
}

fn cat_script(dir: &std::path::Path) -> std::path::PathBuf {
    let script = dir.join("cat.sh");
    fs::write(&script, "#!/bin/sh\ncat \"$1\"\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

#[test]
fn all_passing_exits_zero_and_keeps_stdout_clean() {
    let dir = tempdir().unwrap();
    let script = cat_script(dir.path());
    setup_root(dir.path(), &[("hello", "Hello World", "Hello World\n")]);

    let output = Command::cargo_bin("golden-test")
        .unwrap()
        .env_remove("RUST_LOG")
        .arg(&script)
        .arg(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Test hello passed"));
    assert!(stderr.contains("1 passed, 0 failed"));
    assert!(dir.path().join("auto/output/actual-hello.txt").is_file());
}

#[test]
fn a_failure_exits_one() {
    let dir = tempdir().unwrap();
    let script = cat_script(dir.path());
    setup_root(
        dir.path(),
        &[("good", "ok", "ok\n"), ("order", "b\na\n", "a\nb\n")],
    );

    let output = Command::cargo_bin("golden-test")
        .unwrap()
        .env_remove("RUST_LOG")
        .args(["--no-color"])
        .arg(&script)
        .arg(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Test good passed\nTest order failed\n"));
    assert!(stderr.contains("1 passed, 1 failed"));
    assert!(dir.path().join("auto/output/order.diff").is_file());
}

#[test]
fn missing_cases_dir_is_fatal() {
    let dir = tempdir().unwrap();
    let output = Command::cargo_bin("golden-test")
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("/bin/true")
        .arg(dir.path().join("absent"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("cases directory"));
    assert!(!stderr.contains("passed,"));
}

#[test]
fn empty_case_set_exits_zero() {
    let dir = tempdir().unwrap();
    setup_root(dir.path(), &[]);
    let output = Command::cargo_bin("golden-test")
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("/bin/true")
        .arg(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("0 passed, 0 failed"));
}

#[test]
fn fatal_error_is_printed_even_with_logging_off() {
    let dir = tempdir().unwrap();
    let output = Command::cargo_bin("golden-test")
        .unwrap()
        .env("RUST_LOG", "off")
        .arg("/bin/true")
        .arg(dir.path().join("absent"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("test run aborted: cases directory"));
    assert!(stderr.contains("cannot be read"));
}
