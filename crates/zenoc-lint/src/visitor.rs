//! The hooks a lint rule implements. Every method has a no-op default so a
//! rule only overrides the node kinds it cares about; the walker in
//! [`crate::walker`] calls the hook for a node, then — regardless of
//! whether the rule did anything — recurses into that node's children.

use zenoc_par::{
    AssignStmt, Block, Expr, FnDef, ForInStmt, IfStmt, ImportStmt, LetStmt, Program, Stmt, TypeDeclStmt, WhileStmt,
};

use crate::error::LintError;

pub trait Visitor {
    fn visit_program(&mut self, _program: &Program) -> Result<(), LintError> {
        Ok(())
    }

    fn visit_stmt(&mut self, _stmt: &Stmt) -> Result<(), LintError> {
        Ok(())
    }

    fn visit_block(&mut self, _block: &Block) -> Result<(), LintError> {
        Ok(())
    }

    fn visit_import(&mut self, _stmt: &ImportStmt) -> Result<(), LintError> {
        Ok(())
    }

    fn visit_type_decl(&mut self, _stmt: &TypeDeclStmt) -> Result<(), LintError> {
        Ok(())
    }

    fn visit_let(&mut self, _stmt: &LetStmt) -> Result<(), LintError> {
        Ok(())
    }

    fn visit_assign(&mut self, _stmt: &AssignStmt) -> Result<(), LintError> {
        Ok(())
    }

    fn visit_fn_def(&mut self, _def: &FnDef) -> Result<(), LintError> {
        Ok(())
    }

    fn visit_if(&mut self, _stmt: &IfStmt) -> Result<(), LintError> {
        Ok(())
    }

    fn visit_while(&mut self, _stmt: &WhileStmt) -> Result<(), LintError> {
        Ok(())
    }

    fn visit_for_in(&mut self, _stmt: &ForInStmt) -> Result<(), LintError> {
        Ok(())
    }

    fn visit_expr(&mut self, _expr: &Expr) -> Result<(), LintError> {
        Ok(())
    }
}
