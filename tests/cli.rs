//! CLI argument and precondition tests — no network I/O.
//!
//! Every failure here must happen before a generation request could be sent.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dalle-demo");
    cmd.env("DALLE_DEMO_CONFIG", "/nonexistent/dalle-demo/config.toml")
        .env_remove("DALLE_DEMO_REPLAY")
        .env_remove("DALLE_DEMO_REC")
        .current_dir(std::env::temp_dir());
    cmd
}

#[test]
fn missing_api_key_fails_before_request() {
    cmd()
        .env_remove("OPENAI_API_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY environment variable not set"))
        .stdout(predicate::str::contains("Generating image").not());
}

#[test]
fn empty_api_key_counts_as_missing() {
    cmd()
        .env("OPENAI_API_KEY", "")
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY environment variable not set"));
}

#[test]
fn invalid_size_exits_with_error() {
    cmd()
        .env_remove("OPENAI_API_KEY")
        .args(["--size", "512x512", "a cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported size"));
}

#[test]
fn invalid_quality_exits_with_error() {
    cmd()
        .env_remove("OPENAI_API_KEY")
        .args(["--quality", "ultra", "a cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported quality"));
}

#[test]
fn count_out_of_range_exits_with_error() {
    cmd()
        .env_remove("OPENAI_API_KEY")
        .args(["-n", "11", "a cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported count 11"));
}

#[test]
fn unparsable_config_file_exits_with_error() {
    let path = std::env::temp_dir().join("dalle_demo_cli_bad_config.toml");
    std::fs::write(&path, "[defaults\nmodel = ").unwrap();

    cmd()
        .env("DALLE_DEMO_CONFIG", path.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn prompt_and_prompt_file_conflict() {
    cmd().args(["-p", "prompt.txt", "a cat"]).assert().failure().stderr(
        predicate::str::contains("cannot be used with"),
    );
}
