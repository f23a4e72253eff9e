use zenoc_par::{FnDef, LetStmt};

use crate::error::LintError;
use crate::finding::LintFinding;
use crate::rules::LintRule;
use crate::visitor::Visitor;

/// Flags a declared `let` or `fn` name that isn't `snake_case`. The
/// underscore identifier `_` is exempt, matching the same exemption the
/// analyzer makes for unused-variable checks.
pub struct SnakeCaseNames {
    findings: Vec<LintFinding>,
}

impl SnakeCaseNames {
    pub fn new() -> Self {
        Self { findings: Vec::new() }
    }

    fn check(&mut self, name: &str, span: zenoc_util::Span, kind: &str) {
        if name == "_" || is_snake_case(name) {
            return;
        }
        self.findings.push(LintFinding::new(
            span,
            "snake-case-names",
            format!("{kind} '{name}' should be snake_case"),
        ));
    }
}

impl Default for SnakeCaseNames {
    fn default() -> Self {
        Self::new()
    }
}

fn is_snake_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {},
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

impl Visitor for SnakeCaseNames {
    fn visit_let(&mut self, stmt: &LetStmt) -> Result<(), LintError> {
        self.check(stmt.name.as_str(), stmt.span, "variable");
        Ok(())
    }

    fn visit_fn_def(&mut self, def: &FnDef) -> Result<(), LintError> {
        if def.name.as_str() != "main" {
            self.check(def.name.as_str(), def.span, "function");
        }
        Ok(())
    }
}

impl LintRule for SnakeCaseNames {
    fn name(&self) -> &'static str {
        "snake-case-names"
    }

    fn take_findings(&mut self) -> Vec<LintFinding> {
        std::mem::take(&mut self.findings)
    }
}
