//! Error type for the AST walker.
//!
//! A `Visitor` hook may abort traversal by returning `Err`; the walker
//! wraps it once per enclosing construct on the way back up, so the
//! top-level error names every construct between the failure and the
//! program root.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LintError {
    #[error("while visiting {context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<LintError>,
    },

    #[error("{0}")]
    Rule(String),
}

impl LintError {
    pub fn context(self, context: impl Into<String>) -> LintError {
        LintError::Context { context: context.into(), source: Box::new(self) }
    }
}
