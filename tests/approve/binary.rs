use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the built binary with an isolated HOME and the given env overrides.
fn idbctl(home: &TempDir, env: &[(&str, &str)], args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_idbctl"));
    cmd.args(args)
        .env("HOME", home.path())
        .env_remove("IDBCTL_UDID")
        .env_remove("IDBCTL_BACKEND")
        .env_remove("IDBCTL_XCRUN")
        .env_remove("IDBCTL_TIMEOUT_SECS")
        .env_remove("IDBCTL_LOG_LEVEL");
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("binary should run")
}

const DRY_RUN: &[(&str, &str)] = &[("IDBCTL_BACKEND", "dry-run")];

#[test]
fn success_is_silent_on_stdout() {
    let home = TempDir::new().unwrap();
    let out = idbctl(&home, DRY_RUN, &["approve", "com.example.app", "camera"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}

#[test]
fn url_without_scheme_prints_hint_and_exits_one() {
    let home = TempDir::new().unwrap();
    let out = idbctl(&home, DRY_RUN, &["approve", "com.example.app", "url"]);

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("You need to specify"), "stdout: {stdout}");
    assert!(stdout.contains("--scheme"), "stdout: {stdout}");
}

#[test]
fn out_of_vocabulary_permission_is_usage_error() {
    let home = TempDir::new().unwrap();
    let out = idbctl(&home, DRY_RUN, &["approve", "com.example.app", "microphone"]);

    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn missing_permissions_is_usage_error() {
    let home = TempDir::new().unwrap();
    let out = idbctl(&home, DRY_RUN, &["approve", "com.example.app"]);

    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn unreachable_client_tool_propagates_its_exit_code() {
    let home = TempDir::new().unwrap();
    let out = idbctl(
        &home,
        &[
            ("IDBCTL_BACKEND", "simctl"),
            ("IDBCTL_XCRUN", "idbctl-test-no-such-xcrun"),
        ],
        &["approve", "com.example.app", "photos"],
    );

    assert_eq!(out.status.code(), Some(69));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("failed to spawn idbctl-test-no-such-xcrun"),
        "stderr: {stderr}"
    );
    assert!(!String::from_utf8_lossy(&out.stdout).contains("--scheme"));
}

#[test]
fn config_file_selects_backend() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".idbctl");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[client]\nbackend = \"dry-run\"\n").unwrap();

    let out = idbctl(&home, &[], &["approve", "com.example.app", "contacts"]);

    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn invalid_config_exits_with_config_code() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".idbctl");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[client]\ncommand_timeout_secs = 0\n").unwrap();

    let out = idbctl(&home, &[], &["approve", "com.example.app", "contacts"]);

    assert_eq!(out.status.code(), Some(78));
}
