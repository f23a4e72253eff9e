//! Pre-order AST traversal: call the visitor's hook for a node, then
//! recurse into its children in source order. An error from a hook or a
//! child is wrapped, once per level, with a context string naming the
//! enclosing construct — so an error raised deep inside a `while` body
//! inside `fn main` surfaces the whole chain on its way back out.

use zenoc_par::{Block, Expr, Program, Stmt};

use crate::error::LintError;
use crate::visitor::Visitor;

pub fn walk_program(visitor: &mut dyn Visitor, program: &Program) -> Result<(), LintError> {
    visitor.visit_program(program)?;
    for stmt in &program.stmts {
        walk_stmt(visitor, stmt)?;
    }
    Ok(())
}

pub fn walk_block(visitor: &mut dyn Visitor, block: &Block) -> Result<(), LintError> {
    visitor.visit_block(block).map_err(|e| e.context("block"))?;
    for stmt in &block.stmts {
        walk_stmt(visitor, stmt).map_err(|e| e.context("block"))?;
    }
    Ok(())
}

pub fn walk_stmt(visitor: &mut dyn Visitor, stmt: &Stmt) -> Result<(), LintError> {
    visitor.visit_stmt(stmt)?;
    match stmt {
        Stmt::Import(s) => visitor.visit_import(s).map_err(|e| e.context("import"))?,
        Stmt::TypeDecl(s) => visitor.visit_type_decl(s).map_err(|e| e.context(format!("type '{}'", s.name.as_str())))?,
        Stmt::Let(s) => {
            visitor.visit_let(s).map_err(|e| e.context(format!("let '{}'", s.name.as_str())))?;
            walk_expr(visitor, &s.value).map_err(|e| e.context(format!("let '{}'", s.name.as_str())))?;
        },
        Stmt::Assign(s) => {
            visitor.visit_assign(s).map_err(|e| e.context(format!("assignment to '{}'", s.target.as_str())))?;
            walk_expr(visitor, &s.value).map_err(|e| e.context(format!("assignment to '{}'", s.target.as_str())))?;
        },
        Stmt::Expr(e) => walk_expr(visitor, e)?,
        Stmt::FnDef(def) => {
            let ctx = format!("function '{}'", def.name.as_str());
            visitor.visit_fn_def(def).map_err(|e| e.context(ctx.clone()))?;
            walk_block(visitor, &def.body).map_err(|e| e.context(ctx))?;
        },
        Stmt::Return(expr, _) => {
            if let Some(e) = expr {
                walk_expr(visitor, e).map_err(|e| e.context("return"))?;
            }
        },
        Stmt::If(s) => {
            visitor.visit_if(s).map_err(|e| e.context("if statement"))?;
            walk_expr(visitor, &s.cond).map_err(|e| e.context("if statement"))?;
            walk_block(visitor, &s.then_block).map_err(|e| e.context("if statement"))?;
            for (cond, block) in &s.else_ifs {
                walk_expr(visitor, cond).map_err(|e| e.context("else if"))?;
                walk_block(visitor, block).map_err(|e| e.context("else if"))?;
            }
            if let Some(else_block) = &s.else_block {
                walk_block(visitor, else_block).map_err(|e| e.context("else"))?;
            }
        },
        Stmt::While(s) => {
            visitor.visit_while(s).map_err(|e| e.context("while loop"))?;
            walk_expr(visitor, &s.cond).map_err(|e| e.context("while loop"))?;
            walk_block(visitor, &s.body).map_err(|e| e.context("while loop"))?;
        },
        Stmt::ForIn(s) => {
            let ctx = format!("for '{}' in loop", s.var.as_str());
            visitor.visit_for_in(s).map_err(|e| e.context(ctx.clone()))?;
            walk_expr(visitor, &s.iter).map_err(|e| e.context(ctx.clone()))?;
            walk_block(visitor, &s.body).map_err(|e| e.context(ctx))?;
        },
        Stmt::Block(block) => walk_block(visitor, block)?,
        Stmt::Break(_) | Stmt::Continue(_) => {},
    }
    Ok(())
}

pub fn walk_expr(visitor: &mut dyn Visitor, expr: &Expr) -> Result<(), LintError> {
    visitor.visit_expr(expr)?;
    match expr {
        Expr::Int(..) | Expr::Float(..) | Expr::Str(..) | Expr::Bool(..) | Expr::Ident(..) => {},
        Expr::Unary(_, inner, _) => walk_expr(visitor, inner).map_err(|e| e.context("unary expression"))?,
        Expr::Binary(lhs, _, rhs, _) => {
            walk_expr(visitor, lhs).map_err(|e| e.context("binary expression"))?;
            walk_expr(visitor, rhs).map_err(|e| e.context("binary expression"))?;
        },
        Expr::Array(elems, _) => {
            for e in elems {
                walk_expr(visitor, e).map_err(|e| e.context("array literal"))?;
            }
        },
        Expr::Map(pairs, _) => {
            for (_, v) in pairs {
                walk_expr(visitor, v).map_err(|e| e.context("map literal"))?;
            }
        },
        Expr::Struct(name, fields, _) => {
            for (_, v) in fields {
                walk_expr(visitor, v).map_err(|e| e.context(format!("struct literal '{}'", name.as_str())))?;
            }
        },
        Expr::Call(name, args, _) => {
            for a in args {
                walk_expr(visitor, a).map_err(|e| e.context(format!("call to '{}'", name.as_str())))?;
            }
        },
        Expr::Member(base, _, _) => walk_expr(visitor, base).map_err(|e| e.context("member access"))?,
    }
    Ok(())
}
