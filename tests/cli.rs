use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_console() {
    Command::cargo_bin("avstat-cli")
        .expect("binary should build")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interactive terminal report console",
        ));
}

#[test]
fn malformed_config_fails_with_exit_code_one() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("config.toml"), "profiles = 3").expect("write config");

    Command::cargo_bin("avstat-cli")
        .expect("binary should build")
        .args(["--config-dir", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error loading config"));
}

#[test]
fn missing_profile_fails_with_exit_code_one() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("config.toml"), "").expect("write config");

    Command::cargo_bin("avstat-cli")
        .expect("binary should build")
        .args([
            "--config-dir",
            dir.path().to_str().unwrap(),
            "--profile",
            "nonexistent",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("profile 'nonexistent' not found"));
}
