//! CLI surface tests: help/version output, subcommand dispatch, and the
//! exit-code contract ("exit code 0 on success, 1 on any failure;
//! unknown subcommand prints usage and exits 1").

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn zenoc_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_zenoc"))
}

#[test]
fn help_output_mentions_the_subcommands() {
    zenoc_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run").and(predicate::str::contains("compile")).and(predicate::str::contains("lint")));
}

#[test]
fn version_output_contains_the_crate_version() {
    zenoc_bin().arg("--version").assert().success().stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_exits_with_failure() {
    zenoc_bin().arg("frobnicate").assert().failure().code(1);
}

#[test]
fn compile_writes_emitted_source_next_to_the_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("hello_world.zeno");
    std::fs::copy(fixtures_dir().join("hello_world.zeno"), &input).unwrap();
    std::fs::create_dir_all(dir.path().join("std")).unwrap();
    std::fs::copy(fixtures_dir().join("std/fmt.zeno"), dir.path().join("std/fmt.zeno")).unwrap();

    zenoc_bin()
        .arg("compile")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("compiled"));

    let output = input.with_extension("go");
    assert!(output.exists(), "expected {} to exist", output.display());
    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.contains("package main"));
}

#[test]
fn compile_on_a_file_with_unused_variable_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("unused_variable.zeno");
    std::fs::copy(fixtures_dir().join("unused_variable.zeno"), &input).unwrap();

    zenoc_bin().arg("compile").arg(&input).assert().failure();
}

#[test]
fn lint_reports_findings_with_the_documented_line_shape() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("main.zeno");
    std::fs::write(&input, "fn BadName() { }\nfn main() { }\n").unwrap();

    zenoc_bin()
        .arg("lint")
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::is_match(r"^.+:\d+:\d+: \[.+\] .+$").unwrap());
}

#[test]
fn lint_on_a_clean_file_succeeds() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("main.zeno");
    std::fs::write(&input, "fn main() { }\n").unwrap();

    zenoc_bin().arg("lint").arg(&input).assert().success();
}

#[test]
fn missing_input_file_fails_rather_than_panicking() {
    zenoc_bin().arg("compile").arg("/nonexistent/path/to/input.zeno").assert().failure();
}
