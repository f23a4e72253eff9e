//! Statement emission. Each function writes directly into the output
//! buffer at the given indent depth via `write!`-into-`&mut String`
//! rather than building an intermediate tree of fragments.

use std::fmt::Write;

use zenoc_par::{AssignStmt, Block, Expr, ForInStmt, IfStmt, LetStmt, Stmt, WhileStmt};
use zenoc_sem::Type;

use crate::context::GenContext;
use crate::expr::codegen_expr;

/// Type-aware condition rewriting: a condition whose inferred type
/// isn't already `bool` gets an explicit zero/empty comparison so the
/// emitted Go expression type-checks as a boolean.
pub fn rewrite_condition(expr: &Expr, ctx: &GenContext) -> String {
    let code = codegen_expr(expr, ctx);
    match ctx.infer(expr) {
        Type::Bool => code,
        Type::Int => format!("({code} != 0)"),
        Type::Float => format!("({code} != 0.0)"),
        Type::String => format!("({code} != \"\")"),
        _ => code,
    }
}

pub fn codegen_block(block: &Block, ctx: &mut GenContext, out: &mut String, indent: usize) {
    ctx.table.push_scope();
    for stmt in &block.stmts {
        codegen_stmt(stmt, ctx, out, indent);
    }
    ctx.table.pop_scope();
}

pub fn codegen_stmt(stmt: &Stmt, ctx: &mut GenContext, out: &mut String, indent: usize) {
    let pad = "\t".repeat(indent);
    match stmt {
        // Imports, nested type declarations, and nested function
        // definitions are resolved/emitted at the top level; nothing to
        // do for them at statement position.
        Stmt::Import(_) | Stmt::TypeDecl(_) | Stmt::FnDef(_) => {},
        Stmt::Let(let_stmt) => codegen_let(let_stmt, ctx, out, indent, &pad),
        Stmt::Assign(assign) => codegen_assign(assign, ctx, out, &pad),
        Stmt::Expr(expr) => {
            writeln!(out, "{pad}{}", codegen_expr(expr, ctx)).unwrap();
        },
        Stmt::Return(value, _) => match value {
            Some(expr) => writeln!(out, "{pad}return {}", codegen_expr(expr, ctx)).unwrap(),
            None => writeln!(out, "{pad}return").unwrap(),
        },
        Stmt::If(if_stmt) => codegen_if(if_stmt, ctx, out, indent, &pad),
        Stmt::While(while_stmt) => codegen_while(while_stmt, ctx, out, indent, &pad),
        Stmt::ForIn(for_stmt) => codegen_for(for_stmt, ctx, out, indent, &pad),
        Stmt::Block(block) => {
            writeln!(out, "{pad}{{").unwrap();
            codegen_block(block, ctx, out, indent + 1);
            writeln!(out, "{pad}}}").unwrap();
        },
        Stmt::Break(_) => writeln!(out, "{pad}break").unwrap(),
        Stmt::Continue(_) => writeln!(out, "{pad}continue").unwrap(),
    }
}

fn codegen_let(let_stmt: &LetStmt, ctx: &mut GenContext, out: &mut String, _indent: usize, pad: &str) {
    let ty = match &let_stmt.ty {
        Some(annotated) => Type::from_type_expr(annotated),
        None => ctx.infer(&let_stmt.value),
    };
    let value = codegen_expr(&let_stmt.value, ctx);
    writeln!(out, "{pad}{} := {value}", let_stmt.name.as_str()).unwrap();
    ctx.table.declare(let_stmt.name, ty);
}

fn codegen_assign(assign: &AssignStmt, ctx: &mut GenContext, out: &mut String, pad: &str) {
    let value = codegen_expr(&assign.value, ctx);
    writeln!(out, "{pad}{} = {value}", assign.target.as_str()).unwrap();
}

fn codegen_if(if_stmt: &IfStmt, ctx: &mut GenContext, out: &mut String, indent: usize, pad: &str) {
    writeln!(out, "{pad}if {} {{", rewrite_condition(&if_stmt.cond, ctx)).unwrap();
    codegen_block(&if_stmt.then_block, ctx, out, indent + 1);
    for (cond, block) in &if_stmt.else_ifs {
        writeln!(out, "{pad}}} else if {} {{", rewrite_condition(cond, ctx)).unwrap();
        codegen_block(block, ctx, out, indent + 1);
    }
    if let Some(block) = &if_stmt.else_block {
        writeln!(out, "{pad}}} else {{").unwrap();
        codegen_block(block, ctx, out, indent + 1);
    }
    writeln!(out, "{pad}}}").unwrap();
}

fn codegen_while(while_stmt: &WhileStmt, ctx: &mut GenContext, out: &mut String, indent: usize, pad: &str) {
    writeln!(out, "{pad}for {} {{", rewrite_condition(&while_stmt.cond, ctx)).unwrap();
    codegen_block(&while_stmt.body, ctx, out, indent + 1);
    writeln!(out, "{pad}}}").unwrap();
}

fn codegen_for(for_stmt: &ForInStmt, ctx: &mut GenContext, out: &mut String, indent: usize, pad: &str) {
    let iter_ty = ctx.infer(&for_stmt.iter);
    let elem_ty = match &iter_ty {
        Type::Array(elem) => (**elem).clone(),
        _ => Type::Any,
    };
    let iter = codegen_expr(&for_stmt.iter, ctx);
    writeln!(out, "{pad}for _, {} := range {iter} {{", for_stmt.var.as_str()).unwrap();
    ctx.table.push_scope();
    ctx.table.declare(for_stmt.var, elem_ty);
    for stmt in &for_stmt.body.stmts {
        codegen_stmt(stmt, ctx, out, indent + 1);
    }
    ctx.table.pop_scope();
    writeln!(out, "{pad}}}").unwrap();
}
