//! Full-pipeline compilation tests driving the `zenoc` binary end to
//! end: source file in, emitted Go source (or a documented failure)
//! out.

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

fn copy_fixture_with_std(name: &str, dir: &std::path::Path) -> PathBuf {
    let input = dir.join(name);
    std::fs::copy(fixtures_dir().join(name), &input).unwrap();
    std::fs::create_dir_all(dir.join("std")).unwrap();
    for std_file in ["fmt.zeno", "result.zeno"] {
        std::fs::copy(fixtures_dir().join("std").join(std_file), dir.join("std").join(std_file)).unwrap();
    }
    input
}

#[test]
fn hello_world_compiles_to_go_source() {
    let dir = TempDir::new().unwrap();
    let input = copy_fixture_with_std("hello_world.zeno", dir.path());

    zenoc_bin().arg("compile").arg(&input).assert().success();

    let generated = std::fs::read_to_string(input.with_extension("go")).unwrap();
    assert!(generated.contains("package main"));
    assert!(generated.contains("func main() {"));
    assert!(generated.contains("Println(\"Hello, world!\")"));
}

#[test]
fn cross_module_call_compiles_and_inlines_the_callee() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("std")).unwrap();
    std::fs::copy(fixtures_dir().join("std/fmt.zeno"), dir.path().join("std/fmt.zeno")).unwrap();
    std::fs::write(dir.path().join("math.zeno"), "pub fn add(a: int, b: int): int { return a + b }\n").unwrap();
    let input = dir.path().join("main.zeno");
    std::fs::write(
        &input,
        "import {add} from \"./math\"\nimport {println} from \"std/fmt\"\nfn main() { println(add(2,3)) }\n",
    )
    .unwrap();

    zenoc_bin().arg("compile").arg(&input).assert().success();

    let generated = std::fs::read_to_string(input.with_extension("go")).unwrap();
    assert!(generated.contains("func Add(a int, b int) int {"));
    assert!(generated.contains("Add(2, 3)"));
}

#[test]
fn missing_import_reports_the_expected_module() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing_import.zeno");
    std::fs::copy(fixtures_dir().join("missing_import.zeno"), &input).unwrap();

    zenoc_bin()
        .arg("compile")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("println").and(predicate::str::contains("std/fmt")));
}

#[test]
fn unused_variable_reports_the_binding_name() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("unused_variable.zeno");
    std::fs::copy(fixtures_dir().join("unused_variable.zeno"), &input).unwrap();

    zenoc_bin()
        .arg("compile")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unused variables found"));
}

#[test]
fn variadic_not_last_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("main.zeno");
    std::fs::write(&input, "fn f(...a: int, b: int) { }\nfn main() { }\n").unwrap();

    zenoc_bin().arg("compile").arg(&input).assert().failure();
}

#[test]
fn empty_program_compiles_to_an_empty_main() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.zeno");
    std::fs::write(&input, "").unwrap();

    zenoc_bin().arg("compile").arg(&input).assert().success();
    let generated = std::fs::read_to_string(input.with_extension("go")).unwrap();
    assert!(generated.contains("func main() {\n}\n"));
}

#[test]
fn secondary_language_flag_appends_a_translated_line() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("unused_variable.zeno");
    std::fs::copy(fixtures_dir().join("unused_variable.zeno"), &input).unwrap();

    zenoc_bin()
        .args(["--lang", "id", "compile"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ditemukan variabel yang tidak terpakai"));
}

#[test]
fn arithmetic_program_compiles_successfully() {
    let dir = TempDir::new().unwrap();
    let input = copy_fixture_with_std("arithmetic.zeno", dir.path());

    zenoc_bin().arg("compile").arg(&input).assert().success();
    let generated = std::fs::read_to_string(input.with_extension("go")).unwrap();
    assert!(generated.contains("func add(a int, b int) int {"));
}
