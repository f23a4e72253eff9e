use zenoc_par::Program;
use zenoc_util::Handler;

use crate::error::LintError;
use crate::finding::LintFinding;
use crate::rules::{default_rules, LintRule};
use crate::walker::walk_program;

/// Drives the rule registry over one program. Each rule runs its own
/// full walk — rules don't see each other's state, so a third-party
/// rule can't be perturbed by the order the registry lists them in.
pub struct Linter {
    rules: Vec<Box<dyn LintRule>>,
}

impl Linter {
    pub fn new() -> Self {
        Self { rules: default_rules() }
    }

    pub fn with_rules(rules: Vec<Box<dyn LintRule>>) -> Self {
        Self { rules }
    }

    /// Walks `program` with every registered rule, reports each finding
    /// to `handler` as a warning (so `lint` shares the same diagnostic
    /// stack as `compile`/`build`/`run`), and returns the findings sorted
    /// by source position for the CLI to render.
    pub fn lint_program(&mut self, program: &Program, handler: &Handler) -> Result<Vec<LintFinding>, LintError> {
        let mut findings = Vec::new();
        for rule in &mut self.rules {
            walk_program(rule.as_mut(), program)?;
            findings.extend(rule.take_findings());
        }
        findings.sort_by_key(|f| (f.span.line, f.span.column));
        for finding in &findings {
            handler.warning(format!("[{}] {}", finding.rule_name, finding.message), finding.span);
        }
        Ok(findings)
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}
