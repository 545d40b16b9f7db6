//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Write an essay into a fresh temp dir and return (dir, file path).
fn essay(content: &str) -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("essay.txt");
    std::fs::write(&path, content).unwrap();
    let path = path.to_str().unwrap().to_string();
    (dir, path)
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Rank Command
// =============================================================================

#[test]
fn rank_prints_top_words() {
    let (_dir, path) = essay("the cat sat on the mat the cat ran");
    cmd()
        .args(["rank", &path, "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("the"))
        .stdout(predicate::str::contains("cat"))
        .stdout(predicate::str::contains("(9 words, 6 distinct)"));
}

#[test]
fn rank_json_output_is_ordered_and_counted() {
    let (_dir, path) = essay("the cat sat on the mat the cat ran");
    let output = cmd()
        .args(["rank", &path, "-n", "2", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("rank --json should output valid JSON");

    assert_eq!(json["words"][0]["word"], "the");
    assert_eq!(json["words"][0]["count"], 3);
    assert_eq!(json["words"][1]["word"], "cat");
    assert_eq!(json["words"][1]["count"], 2);
    assert_eq!(json["total_words"], 9);
    assert_eq!(json["distinct_words"], 6);
}

#[test]
fn rank_normalizes_case_and_punctuation() {
    let (_dir, path) = essay("Hello, hello! HELLO.");
    let output = cmd()
        .args(["rank", &path, "-n", "1", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["words"][0]["word"], "hello");
    assert_eq!(json["words"][0]["count"], 3);
    assert_eq!(json["words"].as_array().unwrap().len(), 1);
}

#[test]
fn rank_empty_file_returns_no_words() {
    let (_dir, path) = essay("");
    let output = cmd()
        .args(["rank", &path, "-n", "5", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(json["words"].as_array().unwrap().is_empty());
    assert_eq!(json["total_words"], 0);
}

#[test]
fn rank_count_zero_returns_no_words() {
    let (_dir, path) = essay("some words here");
    let output = cmd()
        .args(["rank", &path, "-n", "0", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(json["words"].as_array().unwrap().is_empty());
    assert_eq!(json["total_words"], 3);
}

#[test]
fn rank_output_is_deterministic() {
    let (_dir, path) = essay("pear plum pear fig plum apple fig pear");
    let run = || {
        let output = cmd()
            .args(["rank", &path, "-n", "4", "--json"])
            .assert()
            .success();
        String::from_utf8_lossy(&output.get_output().stdout).into_owned()
    };
    assert_eq!(run(), run());
}

#[test]
fn rank_min_word_len_filters() {
    let (_dir, path) = essay("a a a cat cat");
    let output = cmd()
        .args(["rank", &path, "-n", "5", "--min-word-len", "3", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["words"][0]["word"], "cat");
    assert_eq!(json["words"].as_array().unwrap().len(), 1);
}

#[test]
fn rank_missing_file_fails() {
    cmd()
        .args(["rank", "/no/such/essay.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn rank_negative_count_rejected_by_parser() {
    let (_dir, path) = essay("some words");
    cmd()
        .args(["rank", &path, "--count=-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn rank_non_integer_count_rejected_by_parser() {
    let (_dir, path) = essay("some words");
    cmd()
        .args(["rank", &path, "--count", "2.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn rank_uses_default_count_from_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("essay-rank.toml"),
        "default_top_words = 1\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("essay.txt"), "tea tea coffee").unwrap();

    let output = cmd()
        .args(["-C", dir.path().to_str().unwrap(), "rank", "essay.txt", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["words"].as_array().unwrap().len(), 1);
    assert_eq!(json["words"][0]["word"], "tea");
}

#[test]
fn explicit_config_flag_wins() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("override.toml");
    std::fs::write(&config_path, "max_input_bytes = 4\n").unwrap();
    let (_essay_dir, path) = essay("far too many words for four bytes");

    cmd()
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "rank",
            &path,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["default_top_words"], 10);
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
