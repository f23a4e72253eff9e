//! Function emission: the `PROLOGUE -> SIGNATURE -> BODY -> EPILOGUE` state
//! machine from the component design. A [`ScopeGuard`] pushes the child
//! scope on construction and pops it on `Drop`, so the symbol table is
//! restored on every exit path out of `BODY` — including the early
//! `return` a future caller might add — without every call site having to
//! remember to pop.

use std::fmt::Write;

use zenoc_par::FnDef;
use zenoc_sem::{emitted_fn_name, Type};

use crate::context::GenContext;
use crate::stmt::codegen_stmt;

struct ScopeGuard<'t, 'a> {
    ctx: &'t mut GenContext<'a>,
}

impl<'t, 'a> ScopeGuard<'t, 'a> {
    fn enter(ctx: &'t mut GenContext<'a>) -> Self {
        ctx.table.push_scope();
        Self { ctx }
    }
}

impl Drop for ScopeGuard<'_, '_> {
    fn drop(&mut self) {
        self.ctx.table.pop_scope();
    }
}

/// Emits one function definition. `forced_name`, when set, overrides the
/// visibility-derived emitted name — used for `main`, whose body is
/// spliced from a user `fn main` definition but must keep the literal
/// name `main` regardless of the definition's own visibility.
pub fn codegen_fn(def: &FnDef, ctx: &mut GenContext, out: &mut String, forced_name: Option<&str>) {
    // PROLOGUE: nothing precedes a Go top-level function but a blank line
    // separating it from whatever was emitted before.
    out.push('\n');

    // SIGNATURE.
    let name = forced_name.map(str::to_string).unwrap_or_else(|| emitted_fn_name(def.name.as_str(), def.is_public));
    let params: Vec<String> = def
        .params
        .iter()
        .map(|p| {
            let ty = crate::names::map_type_name(&Type::from_type_expr(&p.ty));
            if p.variadic {
                format!("{} ...{}", p.name.as_str(), ty)
            } else {
                format!("{} {}", p.name.as_str(), ty)
            }
        })
        .collect();
    let ret = def.ret_type.as_ref().map(|t| crate::names::map_type_name(&Type::from_type_expr(t))).unwrap_or_default();
    if ret.is_empty() {
        writeln!(out, "func {name}({}) {{", params.join(", ")).unwrap();
    } else {
        writeln!(out, "func {name}({}) {ret} {{", params.join(", ")).unwrap();
    }

    // BODY.
    {
        let mut guard = ScopeGuard::enter(ctx);
        for param in &def.params {
            guard.ctx.declare_param(param);
        }
        for stmt in &def.body.stmts {
            codegen_stmt(stmt, guard.ctx, out, 1);
        }
    } // scope popped here unconditionally (ScopeGuard::drop)

    // EPILOGUE.
    writeln!(out, "}}").unwrap();
}
