//! Scenario coverage for the analyzer: unused bindings, call validation,
//! cross-module resolution, the `std/result` auto-import, non-iterable
//! `for..in`, and import cycles.

use std::fs;

use tempfile::TempDir;
use zenoc_par::parse_source;
use zenoc_util::{FileId, Handler, SourceMap, Symbol};

use crate::analyze;
use crate::infer::{infer_expr, CallContext, FnSig};
use crate::scope::SymbolTable;
use crate::types::Type;
use indexmap::IndexMap;

fn parse(source: &str) -> zenoc_par::Program {
    let handler = Handler::new();
    let mut map = SourceMap::new();
    let file_id: FileId = map.add_file("<test>", source);
    let (program, errors, _) = parse_source(source, file_id, &handler);
    assert!(errors.is_empty(), "unexpected parse errors: {errors:?}");
    program
}

/// Sets up `<root>/std/{fmt,result}.zeno` and returns `(root, std_dir)`.
fn std_fixture() -> (TempDir, std::path::PathBuf) {
    let root = TempDir::new().expect("tempdir");
    let std_dir = root.path().join("std");
    fs::create_dir_all(&std_dir).unwrap();
    fs::write(
        std_dir.join("fmt.zeno"),
        "pub fn print(msg: string) { }\npub fn println(msg: string) { }\n",
    )
    .unwrap();
    fs::write(
        std_dir.join("result.zeno"),
        "type Result<T> = { ok: bool, value: T, error: string }\npub fn isOk(r: int): bool { return true }\n",
    )
    .unwrap();
    (root, std_dir)
}

#[test]
fn unused_variable_is_reported() {
    let program = parse("let a = 1\nfn main() { }\n");
    let root = TempDir::new().unwrap();
    let (_std_root, std_dir) = std_fixture();
    let handler = Handler::new();
    let err = analyze(&program, root.path(), &std_dir, &handler).unwrap_err();
    assert!(err.iter().any(|e| e.to_string().contains("Unused variables found: a")));
}

#[test]
fn underscore_is_exempt_from_unused_check() {
    let program = parse("let _ = 1\nfn main() { }\n");
    let root = TempDir::new().unwrap();
    let (_std_root, std_dir) = std_fixture();
    let handler = Handler::new();
    assert!(analyze(&program, root.path(), &std_dir, &handler).is_ok());
}

#[test]
fn unimported_println_is_an_error() {
    let program = parse("fn main() { println(\"hi\") }\n");
    let root = TempDir::new().unwrap();
    let (_std_root, std_dir) = std_fixture();
    let handler = Handler::new();
    let err = analyze(&program, root.path(), &std_dir, &handler).unwrap_err();
    assert!(err.iter().any(|e| e.to_string().contains("println") && e.to_string().contains("std/fmt")));
}

#[test]
fn imported_println_is_fine() {
    let program = parse("import { println } from \"std/fmt\"\nfn main() { println(\"hi\") }\n");
    let root = TempDir::new().unwrap();
    let (_std_root, std_dir) = std_fixture();
    let handler = Handler::new();
    assert!(analyze(&program, root.path(), &std_dir, &handler).is_ok());
}

#[test]
fn cross_module_import_resolves_public_function() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("math.zeno"), "pub fn add(a: int, b: int): int { return a + b }\n").unwrap();
    let (_std_root, std_dir) = std_fixture();
    let program = parse(
        "import { add } from \"./math\"\nimport { println } from \"std/fmt\"\nfn main() { println(add(2, 3)) }\n",
    );
    let handler = Handler::new();
    let ctx = analyze(&program, root.path(), &std_dir, &handler).expect("should resolve");
    assert_eq!(ctx.imports.len(), 2);
    let math_import = ctx.imports.iter().find(|r| r.written_path == "./math").unwrap();
    let module = ctx.module_asts.get(&math_import.canonical_path).unwrap();
    assert!(module.exports.functions.contains_key(&Symbol::intern("add")));
}

#[test]
fn importing_from_unexported_name_is_an_error() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("math.zeno"), "fn helper(a: int): int { return a }\n").unwrap();
    let (_std_root, std_dir) = std_fixture();
    let program = parse("import { helper } from \"./math\"\nfn main() { }\n");
    let handler = Handler::new();
    let err = analyze(&program, root.path(), &std_dir, &handler).unwrap_err();
    assert!(err.iter().any(|e| e.to_string().contains("not exported")));
}

#[test]
fn result_type_auto_imported_from_std_result() {
    let program = parse("import { isOk } from \"std/result\"\nfn main() { }\n");
    let root = TempDir::new().unwrap();
    let (_std_root, std_dir) = std_fixture();
    let handler = Handler::new();
    let ctx = analyze(&program, root.path(), &std_dir, &handler).expect("should resolve");
    assert!(ctx.needs_result_type);
    let rec = ctx.imports.iter().find(|r| r.written_path == "std/result").unwrap();
    assert!(rec.type_names.iter().any(|t| t.as_str() == "Result"));
}

#[test]
fn for_in_over_int_is_not_iterable() {
    let program = parse("fn main() { let x = 5\nfor y in x { }\n }\n");
    let root = TempDir::new().unwrap();
    let (_std_root, std_dir) = std_fixture();
    let handler = Handler::new();
    let err = analyze(&program, root.path(), &std_dir, &handler).unwrap_err();
    assert!(err.iter().any(|e| e.to_string().contains("not iterable")));
}

#[test]
fn import_cycle_is_reported() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("a.zeno"), "import { b } from \"./b\"\npub fn a_fn(): int { return 1 }\n").unwrap();
    fs::write(root.path().join("b.zeno"), "import { a_fn } from \"./a\"\npub fn b(): int { return 1 }\n").unwrap();
    let (_std_root, std_dir) = std_fixture();
    let program = parse("import { a_fn } from \"./a\"\nfn main() { }\n");
    let handler = Handler::new();
    let err = analyze(&program, root.path(), &std_dir, &handler).unwrap_err();
    assert!(err.iter().any(|e| e.to_string().to_lowercase().contains("cycle")));
}

#[test]
fn missing_return_type_on_value_returning_function_is_an_error() {
    let program = parse("fn compute() { return 1 }\nfn main() { compute() }\n");
    let root = TempDir::new().unwrap();
    let (_std_root, std_dir) = std_fixture();
    let handler = Handler::new();
    let err = analyze(&program, root.path(), &std_dir, &handler).unwrap_err();
    assert!(err.iter().any(|e| e.to_string().contains("returns a value")));
}

#[test]
fn unused_private_function_is_an_error_but_main_and_pub_are_exempt() {
    let program = parse("fn helper(): int { return 1 }\npub fn exported(): int { return 1 }\nfn main() { }\n");
    let root = TempDir::new().unwrap();
    let (_std_root, std_dir) = std_fixture();
    let handler = Handler::new();
    let err = analyze(&program, root.path(), &std_dir, &handler).unwrap_err();
    assert!(err.iter().any(|e| e.to_string().contains("Unused functions found: helper")));
}

#[test]
fn arithmetic_promotes_to_float_when_either_operand_does() {
    let source = parse("let x = 1 + 2.5\n");
    let let_stmt = match &source.stmts[0] {
        zenoc_par::Stmt::Let(l) => l,
        _ => unreachable!(),
    };
    let scope = SymbolTable::new();
    let local_fns: IndexMap<Symbol, FnSig> = IndexMap::new();
    let calls = CallContext { local_fns: &local_fns, imported_modules: &[] };
    let handler = Handler::new();
    assert_eq!(infer_expr(&let_stmt.value, &scope, &calls, &handler), Type::Float);
}

#[test]
fn comparison_always_infers_bool() {
    let source = parse("let x = 1 < 2\n");
    let let_stmt = match &source.stmts[0] {
        zenoc_par::Stmt::Let(l) => l,
        _ => unreachable!(),
    };
    let scope = SymbolTable::new();
    let local_fns: IndexMap<Symbol, FnSig> = IndexMap::new();
    let calls = CallContext { local_fns: &local_fns, imported_modules: &[] };
    let handler = Handler::new();
    assert_eq!(infer_expr(&let_stmt.value, &scope, &calls, &handler), Type::Bool);
}

#[test]
fn unresolved_call_defaults_to_int_with_a_warning() {
    let source = parse("let x = mystery()\n");
    let let_stmt = match &source.stmts[0] {
        zenoc_par::Stmt::Let(l) => l,
        _ => unreachable!(),
    };
    let scope = SymbolTable::new();
    let local_fns: IndexMap<Symbol, FnSig> = IndexMap::new();
    let calls = CallContext { local_fns: &local_fns, imported_modules: &[] };
    let handler = Handler::new();
    assert_eq!(infer_expr(&let_stmt.value, &scope, &calls, &handler), Type::Int);
    assert_eq!(handler.warning_count(), 1);
}
