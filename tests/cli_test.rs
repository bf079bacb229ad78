use assert_cmd::Command;
use ksctl::test_support::{host, member, no_token, set_file_config};
use predicates::prelude::*;
use serial_test::serial;

#[test]
#[serial]
fn lists_clusters_without_printing_tokens() {
    let config_file = set_file_config(&[host(&[]), member(&[])]);

    Command::cargo_bin("ksctl")
        .unwrap()
        .arg("--config")
        .arg(config_file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("member1"))
        .stdout(predicate::str::contains("cool-server.com"))
        .stdout(predicate::str::contains("cool-token").not());
}

#[test]
#[serial]
fn resolves_requested_cluster() {
    let config_file = set_file_config(&[host(&[]), member(&[])]);

    Command::cargo_bin("ksctl")
        .unwrap()
        .args(["-n", "member1", "-c"])
        .arg(config_file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("--server=https://cool-server.com"));
}

#[test]
#[serial]
fn fails_when_token_is_missing() {
    let config_file = set_file_config(&[host(&[no_token()])]);

    Command::cargo_bin("ksctl")
        .unwrap()
        .args(["--cluster-name", "host", "--config"])
        .arg(config_file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("the token in your ksctl.yaml file"));
}

#[test]
fn fails_when_config_file_is_missing() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("ksctl")
        .unwrap()
        .arg("--config")
        .arg(dir.path().join("missing.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}
