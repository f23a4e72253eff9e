use std::collections::HashSet;

use zenoc_par::{Expr, LetStmt};
use zenoc_util::{Span, Symbol};

use crate::error::LintError;
use crate::finding::LintFinding;
use crate::rules::LintRule;
use crate::visitor::Visitor;

/// Flags a `let` binding that's never read anywhere in the file. Named
/// for what it *doesn't* flag: `let _ = compute()` is the accepted way
/// to discard a value, so `_` is never collected as a declaration here.
pub struct UnusedUnderscoreOk {
    declared: Vec<(Symbol, Span)>,
    used: HashSet<Symbol>,
    findings: Vec<LintFinding>,
}

impl UnusedUnderscoreOk {
    pub fn new() -> Self {
        Self { declared: Vec::new(), used: HashSet::new(), findings: Vec::new() }
    }
}

impl Default for UnusedUnderscoreOk {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for UnusedUnderscoreOk {
    fn visit_let(&mut self, stmt: &LetStmt) -> Result<(), LintError> {
        if stmt.name.as_str() != "_" {
            self.declared.push((stmt.name, stmt.span));
        }
        Ok(())
    }

    fn visit_expr(&mut self, expr: &Expr) -> Result<(), LintError> {
        if let Expr::Ident(name, _) = expr {
            self.used.insert(*name);
        }
        Ok(())
    }
}

impl LintRule for UnusedUnderscoreOk {
    fn name(&self) -> &'static str {
        "unused-underscore-ok"
    }

    fn take_findings(&mut self) -> Vec<LintFinding> {
        for (name, span) in &self.declared {
            if !self.used.contains(name) {
                self.findings.push(LintFinding::new(
                    *span,
                    "unused-underscore-ok",
                    format!("'{}' is never used — name it '_' to discard intentionally", name.as_str()),
                ));
            }
        }
        self.declared.clear();
        self.used.clear();
        std::mem::take(&mut self.findings)
    }
}
