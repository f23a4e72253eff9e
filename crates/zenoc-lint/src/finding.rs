use zenoc_util::Span;

/// One rule's complaint about one location. The CLI collaborator owns
/// turning this into the `<abspath>:<line>:<col>: [<rule>] <message>`
/// line — this crate only knows the span within the file it was given.
#[derive(Debug, Clone)]
pub struct LintFinding {
    pub span: Span,
    pub rule_name: &'static str,
    pub message: String,
}

impl LintFinding {
    pub fn new(span: Span, rule_name: &'static str, message: impl Into<String>) -> Self {
        Self { span, rule_name, message: message.into() }
    }
}
