//! Emission-time context: the analyzer's [`CompileContext`] plus a symbol
//! table the generator rebuilds as it walks function bodies a second time.
//!
//! The collect pass already validated every name and type; this table
//! exists purely so condition rewriting and call-name resolution can ask
//! "what type does this identifier have *here*" while emitting, mirroring
//! exactly the scope-push/pop sequence `zenoc_sem::Analyzer` used, without
//! making `zenoc-gen` depend on the analyzer's internal state.

use indexmap::IndexMap;
use zenoc_par::{Expr, FnDef};
use zenoc_sem::{infer_expr, CallContext, CompileContext, FnSig, ResolvedModule, SymbolTable, Type};
use zenoc_util::{Handler, Symbol};

pub struct GenContext<'a> {
    pub sem: &'a CompileContext,
    pub table: SymbolTable,
    pub handler: &'a Handler,
}

impl<'a> GenContext<'a> {
    pub fn new(sem: &'a CompileContext, handler: &'a Handler) -> Self {
        Self { sem, table: SymbolTable::new(), handler }
    }

    pub fn declare_param(&mut self, param: &zenoc_par::Param) {
        self.table.declare(param.name, Type::from_type_expr(&param.ty));
    }

    pub fn infer(&self, expr: &Expr) -> Type {
        let local_fns: IndexMap<Symbol, FnSig> = self.sem.local_fn_sigs.clone();
        let borrowed: Vec<(Vec<Symbol>, &ResolvedModule)> = self
            .sem
            .imports
            .iter()
            .filter_map(|rec| self.sem.module_asts.get(&rec.canonical_path).map(|m| (rec.value_names.clone(), m)))
            .collect();
        let calls = CallContext { local_fns: &local_fns, imported_modules: borrowed.as_slice() };
        infer_expr(expr, &self.table, &calls, self.handler)
    }

    /// The emitted callee expression for a call to `name`: the user's own
    /// function (including one that shadows a built-in), a native helper,
    /// or an inlined import's capitalized emitted name.
    pub fn call_name(&self, name: Symbol) -> String {
        if let Some(emitted) = self.sem.declared_fns.get(&name) {
            return emitted.clone();
        }
        match native_helper(name.as_str()) {
            Some(helper) => helper.to_string(),
            None => zenoc_sem::emitted_fn_name(name.as_str(), true),
        }
    }

    /// A non-std imported module's public function, resolved by name, for
    /// the inlining pass. Returns `None` for names belonging to a `std/*`
    /// import (those are covered by the prelude's native helpers).
    pub fn inlineable_imports(&self) -> Vec<&'a FnDef> {
        let mut out = Vec::new();
        for rec in &self.sem.imports {
            if rec.written_path.starts_with("std/") {
                continue;
            }
            let Some(module) = self.sem.module_asts.get(&rec.canonical_path) else { continue };
            for stmt in &module.program.stmts {
                if let zenoc_par::Stmt::FnDef(def) = stmt {
                    if def.is_public && rec.value_names.contains(&def.name) {
                        out.push(def);
                    }
                }
            }
        }
        out
    }
}

fn native_helper(name: &str) -> Option<&'static str> {
    match name {
        "print" => Some("Print"),
        "println" => Some("Println"),
        "readFile" => Some("ReadFile"),
        "writeFile" => Some("WriteFile"),
        "remove" => Some("Remove"),
        "getCurrentDirectory" => Some("GetCurrentDirectory"),
        "jsonParse" => Some("JsonParse"),
        "jsonStringify" => Some("JsonStringify"),
        _ => None,
    }
}
