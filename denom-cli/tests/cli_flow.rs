//! End-to-end CLI tests against a scratch project directory.

use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn denom_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("denom").expect("denom binary");
    cmd.current_dir(dir);
    cmd
}

fn read_manifest(dir: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(dir.join("denom.json")).expect("read denom.json");
    serde_json::from_str(&raw).expect("parse denom.json")
}

// ---------------------------------------------------------------------------
// version
// ---------------------------------------------------------------------------

#[test]
fn version_prints_target_and_version_lines() {
    let dir = TempDir::new().expect("tempdir");
    let assert = denom_cmd(dir.path()).arg("version").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let lines: Vec<&str> = stdout.trim_end().lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("denom-"));
    assert_eq!(lines[1], "version@0.0.1");
}

#[test]
fn version_flag_and_alias_agree_with_subcommand() {
    let dir = TempDir::new().expect("tempdir");
    let canonical = denom_cmd(dir.path()).arg("version").output().expect("run");
    for invocation in [vec!["-v"], vec!["--version"], vec!["v"]] {
        let other = denom_cmd(dir.path()).args(&invocation).output().expect("run");
        assert_eq!(canonical.stdout, other.stdout, "{invocation:?}");
    }
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_with_defaults_writes_the_manifest() {
    let dir = TempDir::new().expect("tempdir");
    denom_cmd(dir.path())
        .args(["init", "--yes", "--skip-install"])
        .assert()
        .success()
        .stdout(contains("Generating denom.json"));

    let manifest = read_manifest(dir.path());
    assert_eq!(manifest["name"], "MyDenomProject");
    assert_eq!(manifest["version"], "0.0.1");
    assert_eq!(manifest["author"], "Unknown");
    assert_eq!(manifest["main"]["entry"], "main.ts");
}

#[test]
fn init_takes_answers_from_stdin() {
    let dir = TempDir::new().expect("tempdir");
    denom_cmd(dir.path())
        .args(["init", "--skip-install"])
        .write_stdin("my-app\n1.2.3\nAda Lovelace\napp.ts\n")
        .assert()
        .success();

    let manifest = read_manifest(dir.path());
    assert_eq!(manifest["name"], "my-app");
    assert_eq!(manifest["version"], "1.2.3");
    assert_eq!(manifest["author"], "Ada Lovelace");
    assert_eq!(manifest["main"]["entry"], "app.ts");
}

#[test]
fn init_empty_answers_fall_back_to_defaults() {
    let dir = TempDir::new().expect("tempdir");
    denom_cmd(dir.path())
        .args(["init", "--skip-install"])
        .write_stdin("\n\n\n\n")
        .assert()
        .success();

    let manifest = read_manifest(dir.path());
    assert_eq!(manifest["name"], "MyDenomProject");
    assert_eq!(manifest["main"]["entry"], "main.ts");
}

#[test]
fn reinit_asks_for_confirmation_and_declining_keeps_the_manifest() {
    let dir = TempDir::new().expect("tempdir");
    denom_cmd(dir.path())
        .args(["init", "--skip-install"])
        .write_stdin("original-name\n\n\n\n")
        .assert()
        .success();

    denom_cmd(dir.path())
        .args(["init", "--skip-install"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Project already initialized"));

    assert_eq!(read_manifest(dir.path())["name"], "original-name");
}

#[test]
fn reinit_with_yes_overwrites_without_asking() {
    let dir = TempDir::new().expect("tempdir");
    denom_cmd(dir.path())
        .args(["init", "--skip-install"])
        .write_stdin("original-name\n\n\n\n")
        .assert()
        .success();

    denom_cmd(dir.path())
        .args(["init", "--yes", "--skip-install"])
        .assert()
        .success();

    assert_eq!(read_manifest(dir.path())["name"], "MyDenomProject");
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

#[test]
fn run_without_manifest_names_the_manifest_file() {
    let dir = TempDir::new().expect("tempdir");
    denom_cmd(dir.path())
        .arg("run")
        .assert()
        .failure()
        .stderr(contains("denom.json"));
}

#[test]
fn run_unknown_script_selector_is_fatal() {
    let dir = TempDir::new().expect("tempdir");
    denom_cmd(dir.path())
        .args(["init", "--yes", "--skip-install"])
        .assert()
        .success();

    denom_cmd(dir.path())
        .args(["run", "$nope"])
        .assert()
        .failure()
        .stderr(contains("no script named 'nope' in denom.json"));
}

#[test]
fn run_missing_entry_file_is_fatal() {
    let dir = TempDir::new().expect("tempdir");
    denom_cmd(dir.path())
        .args(["init", "--yes", "--skip-install"])
        .assert()
        .success();

    denom_cmd(dir.path())
        .arg("run")
        .assert()
        .failure()
        .stderr(contains("main.ts"))
        .stderr(contains("does not exist"));
}

#[test]
fn run_without_installed_runtime_points_at_denom() {
    let dir = TempDir::new().expect("tempdir");
    denom_cmd(dir.path())
        .args(["init", "--yes", "--skip-install"])
        .assert()
        .success();
    std::fs::write(dir.path().join("main.ts"), "console.log('hi');\n").expect("write entry");

    denom_cmd(dir.path())
        .arg("run")
        .assert()
        .failure()
        .stderr(contains("deno binary not found"));
}

// ---------------------------------------------------------------------------
// dispatch
// ---------------------------------------------------------------------------

#[test]
fn unknown_subcommand_fails() {
    let dir = TempDir::new().expect("tempdir");
    denom_cmd(dir.path()).arg("frobnicate").assert().failure();
}

#[test]
fn update_without_manifest_fails() {
    let dir = TempDir::new().expect("tempdir");
    denom_cmd(dir.path())
        .arg("update")
        .assert()
        .failure()
        .stderr(contains("denom.json"));
}
