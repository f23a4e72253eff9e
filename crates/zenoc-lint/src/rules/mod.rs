//! A lint rule is an ordinary [`Visitor`] that accumulates findings
//! instead of aborting traversal — the walker doesn't know rules exist,
//! it just drives whatever `Visitor` it's handed.

mod snake_case;
mod unused_underscore;

pub use snake_case::SnakeCaseNames;
pub use unused_underscore::UnusedUnderscoreOk;

use crate::finding::LintFinding;
use crate::visitor::Visitor;

pub trait LintRule: Visitor {
    /// Short identifier shown in `[<rule>]` output.
    fn name(&self) -> &'static str;

    /// Drains this rule's accumulated findings. Called once per file,
    /// after the walk completes.
    fn take_findings(&mut self) -> Vec<LintFinding>;
}

/// The rules shipped out of the box so `lint` has something to do
/// without any collaborator-supplied configuration.
pub fn default_rules() -> Vec<Box<dyn LintRule>> {
    vec![Box::new(SnakeCaseNames::new()), Box::new(UnusedUnderscoreOk::new())]
}
