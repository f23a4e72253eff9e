//! zenoc-gen - target-language code generator.
//!
//! Consumes the [`zenoc_sem::CompileContext`] produced by the collect pass
//! together with the original [`zenoc_par::Program`] and emits a single
//! self-contained Go source program: the fixed prelude, the generic
//! `Result<T>` record when needed, opaque type aliases for imported
//! types, inlined bodies of imported public functions, every
//! user-defined function in source order, and a `main` entry point.

mod context;
mod expr;
mod func;
mod names;
mod prelude;
mod stmt;

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use zenoc_par::{parse_source, Program, Stmt};
use zenoc_sem::analyze;
use zenoc_util::{FileId, Handler, SemaError, Symbol};

pub use context::GenContext;
pub use expr::codegen_expr;
pub use func::codegen_fn;
pub use names::{emitted_fn_name, map_type_name};
pub use prelude::{emit_prelude, emit_result_type};
pub use stmt::{codegen_block, codegen_stmt, rewrite_condition};

/// Everything that can abort compilation before or during emission: the
/// parser's accumulated error list (compilation fails after parsing if
/// any exist, per the propagation policy), or the collect pass's
/// semantic errors (which abort analysis at the point `analyze` gives
/// up and returns).
#[derive(Debug)]
pub enum CompileError {
    Parse(Vec<String>),
    Sema(Vec<SemaError>),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Parse(errors) => write!(f, "{}", errors.join("; ")),
            CompileError::Sema(errors) => {
                let joined: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                write!(f, "{}", joined.join("; "))
            },
        }
    }
}

impl std::error::Error for CompileError {}

/// Runs the full pipeline — lex, parse, analyze, emit — over `source` and
/// returns the generated Go program as a string. `current_dir` resolves
/// `./`/`../` imports; `std_dir` resolves `std/...` imports. Diagnostics
/// from every phase are reported through the shared `handler` in addition
/// to being returned as a [`CompileError`].
pub fn generate(
    source: &str,
    file_id: FileId,
    current_dir: &Path,
    std_dir: &Path,
    handler: &Handler,
) -> Result<String, CompileError> {
    let (program, parse_errors, _rich) = parse_source(source, file_id, handler);
    if !parse_errors.is_empty() {
        return Err(CompileError::Parse(parse_errors));
    }

    let sem_ctx = analyze(&program, current_dir, std_dir, handler).map_err(CompileError::Sema)?;

    let mut gen = GenContext::new(&sem_ctx, handler);
    let mut out = String::new();

    emit_prelude(&mut out);
    if sem_ctx.needs_result_type {
        emit_result_type(&mut out);
    }
    emit_imported_type_aliases(&sem_ctx, &mut out);

    for def in gen.inlineable_imports() {
        codegen_fn(def, &mut gen, &mut out, None);
    }

    for stmt in &program.stmts {
        if let Stmt::FnDef(def) = stmt {
            if def.name.as_str() != "main" {
                codegen_fn(def, &mut gen, &mut out, None);
            }
        }
    }

    emit_main(&program, &mut gen, &mut out);

    Ok(out)
}

/// Every type imported from another module gets an opaque alias to the
/// dynamic-map representation, `Result` excepted (it has its own
/// generic record emitted by [`emit_result_type`]). A type imported by
/// more than one `import` statement is only aliased once.
fn emit_imported_type_aliases(sem_ctx: &zenoc_sem::CompileContext, out: &mut String) {
    let result_sym = Symbol::intern("Result");
    let mut emitted: HashSet<Symbol> = HashSet::new();
    for import in &sem_ctx.imports {
        for &type_name in &import.type_names {
            if type_name == result_sym || !emitted.insert(type_name) {
                continue;
            }
            out.push_str(&format!("type {} = map[string]interface{{}}\n\n", type_name.as_str()));
        }
    }
}

/// Splices the user's own `main` body in verbatim if one was declared;
/// otherwise wraps any top-level non-function, non-import statements in
/// a synthesized `main`; otherwise emits an empty one.
fn emit_main(program: &Program, ctx: &mut GenContext, out: &mut String) {
    if let Some(user_main) = program.stmts.iter().find_map(|s| match s {
        Stmt::FnDef(def) if def.name.as_str() == "main" => Some(def),
        _ => None,
    }) {
        codegen_fn(user_main, ctx, out, Some("main"));
        return;
    }

    out.push('\n');
    out.push_str("func main() {\n");
    let top_level: Vec<&Stmt> = program
        .stmts
        .iter()
        .filter(|s| !matches!(s, Stmt::Import(_) | Stmt::TypeDecl(_) | Stmt::FnDef(_)))
        .collect();
    if !top_level.is_empty() {
        ctx.table.push_scope();
        for stmt in top_level {
            codegen_stmt(stmt, ctx, out, 1);
        }
        ctx.table.pop_scope();
    }
    out.push_str("}\n");
}
