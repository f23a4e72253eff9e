//! The collect pass: walks a parsed [`Program`], resolving its imports,
//! building the symbol/usage tables described by the data model, and
//! validating everything that can be checked without emitting code.
//!
//! Two sub-passes over the same `Program`: [`collect_signatures`] records
//! every top-level function's name and declared return type so a call
//! can resolve a function defined later in the file, then [`Analyzer`]
//! walks the whole tree (including nested blocks) to register variables,
//! check usage, and validate calls.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};
use zenoc_par::{
    AssignStmt, Block, Expr, FnDef, ForInStmt, IfStmt, ImportStmt, LetStmt, Program, Stmt, WhileStmt,
};
use zenoc_util::{DiagnosticBuilder, Handler, ModuleError, SemaError, Span, Symbol};

use crate::infer::{infer_expr, CallContext, FnSig};
use crate::module::{validate_exported, ModuleResolver, ResolvedModule};
use crate::scope::SymbolTable;
use crate::types::Type;

/// One resolved `import { ... } from "..."` statement, in source order.
#[derive(Debug, Clone)]
pub struct ImportRecord {
    pub written_path: String,
    pub canonical_path: String,
    pub value_names: Vec<Symbol>,
    pub type_names: Vec<Symbol>,
    pub span: Span,
}

/// Every piece of state a compilation accumulates, per the data model's
/// "program state" — constructed fresh per compile, mutated monotonically
/// by the collect pass, then threaded (not mutated further) into codegen.
#[derive(Default)]
pub struct CompileContext {
    pub imports: Vec<ImportRecord>,
    pub declared_vars: IndexSet<Symbol>,
    pub used_vars: HashSet<Symbol>,
    /// Local (this program's) top-level functions: Zeno name -> emitted name.
    pub declared_fns: IndexMap<Symbol, String>,
    pub used_fns: HashSet<Symbol>,
    pub local_fn_sigs: IndexMap<Symbol, FnSig>,
    pub module_asts: IndexMap<String, ResolvedModule>,
    pub needs_result_type: bool,
}

/// Maps `print`/`println` to the standard-library module they're
/// conventionally imported from, for the "not imported from '<module>'"
/// diagnostic. These two names get no other special treatment: calling
/// either without importing it from `std/fmt` is a validation error like
/// any other name (see DESIGN.md on this point).
fn builtin_home(name: &str) -> Option<&'static str> {
    match name {
        "print" | "println" => Some("std/fmt"),
        _ => None,
    }
}

/// Case-folds a function's Zeno name into its emitted name: `main` is
/// preserved verbatim, a public function's first letter is capitalized,
/// a private one's is lowercased.
pub fn emitted_fn_name(name: &str, is_public: bool) -> String {
    if name == "main" {
        return "main".to_string();
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let folded: String =
                if is_public { first.to_uppercase().collect() } else { first.to_lowercase().collect() };
            format!("{folded}{}", chars.as_str())
        },
        None => String::new(),
    }
}

/// Runs the collect pass over `program`, resolving `current_dir`-relative
/// and `std/...` imports against `std_dir`. Returns the populated
/// context; semantic errors are reported through `handler` and also
/// returned so the caller (the generator) can abort before emission.
pub fn analyze(
    program: &Program,
    current_dir: &Path,
    std_dir: &Path,
    handler: &Handler,
) -> Result<CompileContext, Vec<SemaError>> {
    let mut ctx = CompileContext::default();
    let mut resolver = ModuleResolver::new(std_dir.to_path_buf(), handler);
    let mut errors = Vec::new();

    resolve_imports(program, current_dir, &mut resolver, &mut ctx, handler, &mut errors);
    collect_signatures(program, &mut ctx);

    let mut table = SymbolTable::new();
    let mut analyzer = Analyzer { ctx: &mut ctx, table: &mut table, handler, errors: &mut errors };
    for stmt in &program.stmts {
        analyzer.visit_stmt(stmt);
    }

    check_unused(&ctx, &mut errors);

    if errors.is_empty() {
        Ok(ctx)
    } else {
        Err(errors)
    }
}

fn resolve_imports(
    program: &Program,
    current_dir: &Path,
    resolver: &mut ModuleResolver<'_>,
    ctx: &mut CompileContext,
    handler: &Handler,
    errors: &mut Vec<SemaError>,
) {
    for stmt in &program.stmts {
        let Stmt::Import(import) = stmt else { continue };
        if let Err(e) = resolve_one_import(import, current_dir, resolver, ctx, handler) {
            let message = e.to_string();
            DiagnosticBuilder::error(message.clone()).span(import.span).emit(handler);
            errors.push(SemaError::UndefinedName(message));
        }
    }
}

fn resolve_one_import(
    import: &ImportStmt,
    current_dir: &Path,
    resolver: &mut ModuleResolver<'_>,
    ctx: &mut CompileContext,
    _handler: &Handler,
) -> Result<(), ModuleError> {
    let written_path = import.module.as_str().to_string();
    let canonical = resolver.resolve(&written_path, current_dir)?;
    let module = resolver.get(&canonical).expect("just resolved").clone();

    let mut value_names = Vec::new();
    let mut type_names = Vec::new();
    for item in &import.items {
        if item.is_type {
            type_names.push(item.name);
        } else {
            value_names.push(item.name);
        }
    }

    validate_exported(
        &module.exports,
        value_names.iter().map(|n| (*n, false)).chain(type_names.iter().map(|n| (*n, true))),
        &written_path,
    )?;

    // Auto-import: any value pulled from std/result implicitly brings in
    // the `Result` type even if the import list didn't name it.
    if written_path == "std/result" && !value_names.is_empty() {
        let result_sym = Symbol::intern("Result");
        if !type_names.contains(&result_sym) {
            type_names.push(result_sym);
        }
        ctx.needs_result_type = true;
    }
    if type_names.iter().any(|t| t.as_str() == "Result") {
        ctx.needs_result_type = true;
    }

    ctx.module_asts.entry(canonical.clone()).or_insert(module);
    ctx.imports.push(ImportRecord { written_path, canonical_path: canonical, value_names, type_names, span: import.span });
    Ok(())
}

/// Records every top-level function's emitted name and signature so
/// forward references resolve regardless of source order.
fn collect_signatures(program: &Program, ctx: &mut CompileContext) {
    for stmt in &program.stmts {
        if let Stmt::FnDef(def) = stmt {
            let emitted = emitted_fn_name(def.name.as_str(), def.is_public);
            ctx.declared_fns.insert(def.name, emitted);
            ctx.local_fn_sigs.insert(def.name, FnSig::from_def(def));
        }
    }
}

fn check_unused(ctx: &CompileContext, errors: &mut Vec<SemaError>) {
    let underscore = Symbol::intern("_");
    let mut unused_vars: Vec<&str> =
        ctx.declared_vars.iter().filter(|v| **v != underscore && !ctx.used_vars.contains(*v)).map(|v| v.as_str()).collect();
    if !unused_vars.is_empty() {
        unused_vars.sort_unstable();
        errors.push(SemaError::UnusedVariables(unused_vars.join(", ")));
    }

    let main_sym = Symbol::intern("main");
    let mut unused_fns: Vec<&str> = ctx
        .declared_fns
        .keys()
        .filter(|f| {
            **f != underscore
                && **f != main_sym
                && !ctx.local_fn_sigs.get(*f).map(|s| s.is_public).unwrap_or(false)
                && !ctx.used_fns.contains(*f)
        })
        .map(|f| f.as_str())
        .collect();
    if !unused_fns.is_empty() {
        unused_fns.sort_unstable();
        errors.push(SemaError::UnusedFunctions(unused_fns.join(", ")));
    }
}

struct Analyzer<'a> {
    ctx: &'a mut CompileContext,
    table: &'a mut SymbolTable,
    handler: &'a Handler,
    errors: &'a mut Vec<SemaError>,
}

impl<'a> Analyzer<'a> {
    fn call_context(&self) -> CallContextOwned {
        let imported_modules: Vec<(Vec<Symbol>, String)> = self
            .ctx
            .imports
            .iter()
            .map(|rec| (rec.value_names.clone(), rec.canonical_path.clone()))
            .collect();
        CallContextOwned { local_fns: self.ctx.local_fn_sigs.clone(), imported_modules }
    }

    fn infer(&self, expr: &Expr) -> Type {
        let owned = self.call_context();
        let borrowed: Vec<(Vec<Symbol>, &ResolvedModule)> = owned
            .imported_modules
            .iter()
            .filter_map(|(names, canonical)| {
                self.ctx.module_asts.get(canonical).map(|m| (names.clone(), m))
            })
            .collect();
        let calls = CallContext { local_fns: &owned.local_fns, imported_modules: borrowed.as_slice() };
        infer_expr(expr, self.table, &calls, self.handler)
    }

    fn mark_usage(&mut self, expr: &Expr) {
        match expr {
            Expr::Ident(name, _) => {
                self.ctx.used_vars.insert(*name);
            },
            Expr::Unary(_, inner, _) => self.mark_usage(inner),
            Expr::Binary(lhs, _, rhs, _) => {
                self.mark_usage(lhs);
                self.mark_usage(rhs);
            },
            Expr::Array(elems, _) => elems.iter().for_each(|e| self.mark_usage(e)),
            Expr::Map(entries, _) | Expr::Struct(_, entries, _) => {
                entries.iter().for_each(|(_, v)| self.mark_usage(v))
            },
            Expr::Member(obj, _, _) => self.mark_usage(obj),
            Expr::Call(name, args, span) => {
                self.ctx.used_fns.insert(*name);
                self.validate_call(*name, *span);
                args.iter().for_each(|a| self.mark_usage(a));
            },
            Expr::Int(..) | Expr::Float(..) | Expr::Str(..) | Expr::Bool(..) => {},
        }
    }

    fn validate_call(&mut self, name: Symbol, span: Span) {
        if self.ctx.declared_fns.contains_key(&name) {
            return;
        }
        if self.ctx.imports.iter().any(|rec| rec.value_names.contains(&name)) {
            return;
        }
        let module = builtin_home(name.as_str()).unwrap_or("").to_string();
        let error = SemaError::CallNotImported { name: name.as_str().to_string(), module };
        DiagnosticBuilder::error(error.to_string()).span(span).emit(self.handler);
        self.errors.push(error);
    }

    fn visit_block(&mut self, block: &Block) {
        self.table.push_scope();
        for stmt in &block.stmts {
            self.visit_stmt(stmt);
        }
        self.table.pop_scope();
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Import(_) | Stmt::TypeDecl(_) | Stmt::Break(_) | Stmt::Continue(_) => {},
            Stmt::Let(let_stmt) => self.visit_let(let_stmt),
            Stmt::Assign(assign) => self.visit_assign(assign),
            Stmt::Expr(expr) => self.mark_usage(expr),
            Stmt::FnDef(def) => self.visit_fn(def),
            Stmt::Return(value, _) => {
                if let Some(expr) = value {
                    self.mark_usage(expr);
                }
            },
            Stmt::If(if_stmt) => self.visit_if(if_stmt),
            Stmt::While(while_stmt) => self.visit_while(while_stmt),
            Stmt::ForIn(for_stmt) => self.visit_for(for_stmt),
            Stmt::Block(block) => self.visit_block(block),
        }
    }

    fn visit_let(&mut self, let_stmt: &LetStmt) {
        self.mark_usage(&let_stmt.value);
        let ty = match &let_stmt.ty {
            Some(annotated) => Type::from_type_expr(annotated),
            None => self.infer(&let_stmt.value),
        };
        self.table.declare(let_stmt.name, ty);
        self.ctx.declared_vars.insert(let_stmt.name);
    }

    fn visit_assign(&mut self, assign: &AssignStmt) {
        self.ctx.used_vars.insert(assign.target);
        self.mark_usage(&assign.value);
    }

    fn visit_fn(&mut self, def: &FnDef) {
        // `collect_signatures` only walks top-level statements, so a `fn`
        // nested inside a block (the grammar allows one anywhere a
        // statement can appear) registers itself here instead, on first
        // visit, so calls to it still resolve and it still gets an unused
        // check regardless of where in the tree it's defined.
        self.ctx.declared_fns.entry(def.name).or_insert_with(|| emitted_fn_name(def.name.as_str(), def.is_public));
        self.ctx.local_fn_sigs.entry(def.name).or_insert_with(|| FnSig::from_def(def));

        self.table.push_scope();
        for param in &def.params {
            self.table.declare(param.name, Type::from_type_expr(&param.ty));
        }
        if def.ret_type.is_none() && block_returns_value(&def.body) {
            let error = SemaError::MissingReturnType(def.name.as_str().to_string());
            DiagnosticBuilder::error(error.to_string()).span(def.span).emit(self.handler);
            self.errors.push(error);
        }
        for stmt in &def.body.stmts {
            self.visit_stmt(stmt);
        }
        self.table.pop_scope();
    }

    fn visit_if(&mut self, if_stmt: &IfStmt) {
        self.mark_usage(&if_stmt.cond);
        self.visit_block(&if_stmt.then_block);
        for (cond, block) in &if_stmt.else_ifs {
            self.mark_usage(cond);
            self.visit_block(block);
        }
        if let Some(block) = &if_stmt.else_block {
            self.visit_block(block);
        }
    }

    fn visit_while(&mut self, while_stmt: &WhileStmt) {
        self.mark_usage(&while_stmt.cond);
        self.visit_block(&while_stmt.body);
    }

    fn visit_for(&mut self, for_stmt: &ForInStmt) {
        self.mark_usage(&for_stmt.iter);
        let iter_ty = self.infer(&for_stmt.iter);
        if !iter_ty.is_iterable() {
            let error = SemaError::NotIterable(for_stmt.var.as_str().to_string());
            DiagnosticBuilder::error(error.to_string()).span(for_stmt.span).emit(self.handler);
            self.errors.push(error);
        }
        let elem_ty = match &iter_ty {
            Type::Array(elem) => (**elem).clone(),
            _ => Type::Any,
        };
        self.table.push_scope();
        self.table.declare(for_stmt.var, elem_ty);
        for stmt in &for_stmt.body.stmts {
            self.visit_stmt(stmt);
        }
        self.table.pop_scope();
    }
}

/// Helper clone of [`CallContext`] that owns its data, since `CallContext`
/// itself only borrows — used to build the owned pieces once per
/// inference site without fighting the borrow checker over `self.ctx`.
struct CallContextOwned {
    local_fns: IndexMap<Symbol, FnSig>,
    imported_modules: Vec<(Vec<Symbol>, String)>,
}

/// True if `block`, including nested `if`/`while`/`for`/`block`
/// statements, contains a `return <expr>` anywhere in its body.
fn block_returns_value(block: &Block) -> bool {
    block.stmts.iter().any(stmt_returns_value)
}

fn stmt_returns_value(stmt: &Stmt) -> bool {
    match stmt {
        Stmt::Return(Some(_), _) => true,
        Stmt::Return(None, _) => false,
        Stmt::If(if_stmt) => {
            block_returns_value(&if_stmt.then_block)
                || if_stmt.else_ifs.iter().any(|(_, b)| block_returns_value(b))
                || if_stmt.else_block.as_ref().map(block_returns_value).unwrap_or(false)
        },
        Stmt::While(w) => block_returns_value(&w.body),
        Stmt::ForIn(f) => block_returns_value(&f.body),
        Stmt::Block(b) => block_returns_value(b),
        _ => false,
    }
}
