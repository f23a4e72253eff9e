//! zenoc-lint - AST walker and rule registry for the `lint` subcommand.
//!
//! The walker (pre-order [`Visitor`] dispatch) is core; the rules that
//! ride on it are ordinary collaborator-supplied `Visitor` impls,
//! with two shipped by default so `lint` has something to do out of the
//! box. Every finding also reaches the shared [`Handler`](zenoc_util::Handler)
//! as a warning, so `lint` diagnostics render through the same pipeline
//! as parse/semantic errors.

mod error;
mod finding;
mod linter;
mod rules;
mod visitor;
mod walker;

pub use error::LintError;
pub use finding::LintFinding;
pub use linter::Linter;
pub use rules::{default_rules, LintRule, SnakeCaseNames, UnusedUnderscoreOk};
pub use visitor::Visitor;
pub use walker::{walk_block, walk_expr, walk_program, walk_stmt};

#[cfg(test)]
mod tests {
    use super::*;
    use zenoc_par::parse_source;
    use zenoc_util::{FileId, Handler};

    fn parse(source: &str) -> zenoc_par::Program {
        let handler = Handler::new();
        let (program, errors, _) = parse_source(source, FileId(0), &handler);
        assert!(errors.is_empty(), "unexpected parse errors: {errors:?}");
        program
    }

    #[test]
    fn flags_non_snake_case_let_and_fn_names() {
        let program = parse("let myValue = 1\nfn DoThing() { }\nfn main() { }\n");
        let handler = Handler::new();
        let findings = Linter::new().lint_program(&program, &handler).expect("walk succeeds");
        assert!(findings.iter().any(|f| f.rule_name == "snake-case-names" && f.message.contains("myValue")));
        assert!(findings.iter().any(|f| f.rule_name == "snake-case-names" && f.message.contains("DoThing")));
    }

    #[test]
    fn main_is_exempt_from_naming_check() {
        let program = parse("fn main() { }\n");
        let handler = Handler::new();
        let findings = Linter::new().lint_program(&program, &handler).expect("walk succeeds");
        assert!(findings.is_empty());
    }

    #[test]
    fn underscore_binding_is_never_flagged_as_unused() {
        let program = parse("fn main() { let _ = 1\n }\n");
        let handler = Handler::new();
        let findings = Linter::new().lint_program(&program, &handler).expect("walk succeeds");
        assert!(!findings.iter().any(|f| f.rule_name == "unused-underscore-ok"));
    }

    #[test]
    fn unused_let_binding_is_flagged() {
        let program = parse("fn main() { let a = 1\n }\n");
        let handler = Handler::new();
        let findings = Linter::new().lint_program(&program, &handler).expect("walk succeeds");
        assert!(findings.iter().any(|f| f.rule_name == "unused-underscore-ok" && f.message.contains('a')));
    }

    #[test]
    fn used_let_binding_is_not_flagged() {
        let program = parse("import { println } from \"std/fmt\"\nfn main() { let a = 1\nprintln(a)\n }\n");
        let handler = Handler::new();
        let findings = Linter::new().lint_program(&program, &handler).expect("walk succeeds");
        assert!(!findings.iter().any(|f| f.rule_name == "unused-underscore-ok"));
    }

    #[test]
    fn findings_are_also_reported_through_the_shared_handler() {
        let program = parse("fn main() { let a = 1\n }\n");
        let handler = Handler::new();
        let findings = Linter::new().lint_program(&program, &handler).expect("walk succeeds");
        assert_eq!(handler.warning_count(), findings.len());
    }

    struct AlwaysFails;

    impl Visitor for AlwaysFails {
        fn visit_fn_def(&mut self, _def: &zenoc_par::FnDef) -> Result<(), LintError> {
            Err(LintError::Rule("simulated rule failure".to_string()))
        }
    }

    #[test]
    fn a_hook_error_is_wrapped_with_its_enclosing_construct() {
        let program = parse("fn broken() { }\nfn main() { }\n");
        let err = walk_program(&mut AlwaysFails, &program).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("broken"));
        assert!(message.contains("simulated rule failure"));
    }
}
