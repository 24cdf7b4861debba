use std::process::Command;

use tempfile::TempDir;

fn sitesnap() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sitesnap"))
}

#[test]
fn capture_rejects_invalid_url_with_fatal_exit_code() {
    let dir = TempDir::new().expect("tempdir");

    let output = sitesnap()
        .current_dir(dir.path())
        .args(["capture", "not a url"])
        .output()
        .expect("run sitesnap");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("[ERROR]"),
        "expected error banner, got: {stderr}"
    );
}

#[test]
fn capture_fails_fast_when_node_command_is_missing() {
    let dir = TempDir::new().expect("tempdir");
    let cfg_path = dir.path().join("sitesnap.toml");
    std::fs::write(
        &cfg_path,
        "[capture]\nnode_command = \"definitely-not-a-binary\"\n",
    )
    .expect("write config");

    let output = sitesnap()
        .current_dir(dir.path())
        .args(["capture", "--config", cfg_path.to_str().unwrap()])
        .output()
        .expect("run sitesnap");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Hint:"),
        "expected a remediation hint, got: {stderr}"
    );
}

#[test]
fn capture_creates_the_output_directory_before_capturing() {
    let dir = TempDir::new().expect("tempdir");
    let cfg_path = dir.path().join("sitesnap.toml");
    std::fs::write(
        &cfg_path,
        "[capture]\nnode_command = \"definitely-not-a-binary\"\n",
    )
    .expect("write config");

    let _ = sitesnap()
        .current_dir(dir.path())
        .args(["capture", "--config", cfg_path.to_str().unwrap()])
        .output()
        .expect("run sitesnap");

    // The numbered path is computed (and the directory created) before the
    // browser is driven.
    assert!(dir.path().join("temporary screenshots").is_dir());
}

#[test]
fn invalid_config_file_is_a_fatal_error() {
    let dir = TempDir::new().expect("tempdir");
    let cfg_path = dir.path().join("sitesnap.toml");
    std::fs::write(&cfg_path, "[server]\nprot = 8080\n").expect("write config");

    let output = sitesnap()
        .current_dir(dir.path())
        .args(["serve", "--config", cfg_path.to_str().unwrap()])
        .output()
        .expect("run sitesnap");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("sitesnap.toml"),
        "expected the offending file to be named, got: {stderr}"
    );
}

#[test]
fn missing_config_file_is_a_fatal_error() {
    let output = sitesnap()
        .args(["serve", "--config", "/definitely/missing.toml"])
        .output()
        .expect("run sitesnap");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn version_flag_exits_cleanly() {
    let output = sitesnap().arg("--version").output().expect("run sitesnap");
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sitesnap"));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let output = sitesnap().arg("screenshot").output().expect("run sitesnap");
    assert_eq!(output.status.code(), Some(2));
}
