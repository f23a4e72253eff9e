//! The fixed prelude every emitted program carries: package declaration,
//! standard imports, and the native helper routines. Emitted unconditionally
//! per the component design — an unused helper is dead code the target
//! toolchain eliminates, not something the generator tracks.

use std::fmt::Write;

/// Writes `package main`, the standard imports, and every native helper
/// routine (`ReadFile`, `WriteFile`, `Print`, `Println`, `Remove`,
/// `GetCurrentDirectory`, `JsonParse`, `JsonStringify`) into `out`.
pub fn emit_prelude(out: &mut String) {
    out.push_str("package main\n\n");
    out.push_str("import (\n\t\"encoding/json\"\n\t\"fmt\"\n\t\"os\"\n)\n\n");

    writeln!(out, "func Print(args ...interface{{}}) {{").unwrap();
    writeln!(out, "\tfmt.Print(args...)").unwrap();
    writeln!(out, "}}\n").unwrap();

    writeln!(out, "func Println(args ...interface{{}}) {{").unwrap();
    writeln!(out, "\tfmt.Println(args...)").unwrap();
    writeln!(out, "}}\n").unwrap();

    writeln!(out, "func ReadFile(path string) (string, error) {{").unwrap();
    writeln!(out, "\tdata, err := os.ReadFile(path)").unwrap();
    writeln!(out, "\treturn string(data), err").unwrap();
    writeln!(out, "}}\n").unwrap();

    writeln!(out, "func WriteFile(path string, content string) error {{").unwrap();
    writeln!(out, "\treturn os.WriteFile(path, []byte(content), 0644)").unwrap();
    writeln!(out, "}}\n").unwrap();

    writeln!(out, "func Remove(path string) error {{").unwrap();
    writeln!(out, "\treturn os.Remove(path)").unwrap();
    writeln!(out, "}}\n").unwrap();

    writeln!(out, "func GetCurrentDirectory() (string, error) {{").unwrap();
    writeln!(out, "\treturn os.Getwd()").unwrap();
    writeln!(out, "}}\n").unwrap();

    writeln!(out, "func JsonParse(s string) (interface{{}}, error) {{").unwrap();
    writeln!(out, "\tvar v interface{{}}").unwrap();
    writeln!(out, "\terr := json.Unmarshal([]byte(s), &v)").unwrap();
    writeln!(out, "\treturn v, err").unwrap();
    writeln!(out, "}}\n").unwrap();

    writeln!(out, "func JsonStringify(v interface{{}}) (string, error) {{").unwrap();
    writeln!(out, "\tb, err := json.Marshal(v)").unwrap();
    writeln!(out, "\treturn string(b), err").unwrap();
    writeln!(out, "}}\n").unwrap();
}

/// The generic `Result<T>` record, emitted only when the program imports
/// `Result` from `std/result` (directly or via the auto-import rule).
pub fn emit_result_type(out: &mut String) {
    out.push_str("type Result[T any] struct {\n");
    out.push_str("\tOk    bool\n");
    out.push_str("\tValue T\n");
    out.push_str("\tError string\n");
    out.push_str("}\n\n");
}
