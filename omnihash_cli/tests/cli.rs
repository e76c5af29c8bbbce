//! End-to-end CLI tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with config isolated to a per-test directory
fn omnihash(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("omnihash").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_text_outputs_known_digests() {
    let home = TempDir::new().unwrap();
    omnihash(&home)
        .args(["text", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("900150983cd24fb0d6963f7d28e17f72"))
        .stdout(predicate::str::contains(
            "a9993e364706816aba3e25717850c26c9cd0d89d",
        ))
        .stdout(predicate::str::contains("YWJj"));
}

#[test]
fn test_uppercase_flag_leaves_base64_untouched() {
    let home = TempDir::new().unwrap();
    omnihash(&home)
        .args(["--uppercase", "text", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("900150983CD24FB0D6963F7D28E17F72"))
        .stdout(predicate::str::contains("YWJj"));
}

#[test]
fn test_case_choice_is_persisted_across_runs() {
    let home = TempDir::new().unwrap();

    omnihash(&home)
        .args(["--uppercase", "text", "abc"])
        .assert()
        .success();

    // No flag on the second run; the persisted setting applies.
    omnihash(&home)
        .args(["text", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("900150983CD24FB0D6963F7D28E17F72"));

    omnihash(&home)
        .args(["--lowercase", "text", "abc"])
        .assert()
        .success();

    omnihash(&home)
        .args(["text", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("900150983cd24fb0d6963f7d28e17f72"));
}

#[test]
fn test_file_matches_text_results() {
    let home = TempDir::new().unwrap();
    let data_dir = TempDir::new().unwrap();
    let path = data_dir.path().join("input.txt");
    std::fs::write(&path, "abc").unwrap();

    let text_run = omnihash(&home).args(["text", "abc"]).assert().success();
    let file_run = omnihash(&home)
        .arg("file")
        .arg(&path)
        .assert()
        .success();

    assert_eq!(
        text_run.get_output().stdout,
        file_run.get_output().stdout
    );
}

#[test]
fn test_missing_file_reports_error() {
    let home = TempDir::new().unwrap();
    omnihash(&home)
        .args(["file", "/nonexistent/omnihash-input.bin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_json_format_emits_all_results() {
    let home = TempDir::new().unwrap();
    let output = omnihash(&home)
        .args(["--format", "json", "text", "abc"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let results = parsed.as_array().unwrap();
    assert_eq!(results.len(), 22);
    assert_eq!(results[4]["output"], "900150983cd24fb0d6963f7d28e17f72");
}

#[test]
fn test_algorithms_lists_registry() {
    let home = TempDir::new().unwrap();
    omnihash(&home)
        .arg("algorithms")
        .assert()
        .success()
        .stdout(predicate::str::contains("CRC16"))
        .stdout(predicate::str::contains("HAVAL-256"))
        .stdout(predicate::str::contains("Base64"));
}

#[test]
fn test_config_set_and_show() {
    let home = TempDir::new().unwrap();

    omnihash(&home)
        .args(["config", "set-uppercase", "true"])
        .assert()
        .success();

    omnihash(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("display.show_uppercase = true"));

    omnihash(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("omnihash"));
}

#[test]
fn test_config_rejects_zero_chunk_size() {
    let home = TempDir::new().unwrap();
    omnihash(&home)
        .args(["config", "set-chunk-size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-zero"));
}
