//! Renders `zenoc_par::ParseError` and `zenoc_util::Diagnostic` into a
//! rich text format:
//!
//! ```text
//! error: <message>
//!   --> line <L>, column <C>
//!    | <context>
//!    = expected <X>, but got <Y>
//! help: <suggestion>
//! ```
//!
//! with each field line omitted when the underlying value is blank.

use std::fmt::Write as _;

use zenoc_par::ParseError;
use zenoc_util::Diagnostic;

use crate::translate::append_translation;

pub fn render_parse_error(err: &ParseError, lang: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "error: {}", err.message);
    let _ = writeln!(out, "  --> line {}, column {}", err.line, err.column);
    if !err.context.is_empty() {
        let _ = writeln!(out, "   | {}", err.context);
    }
    if let Some(expected) = &err.expected {
        let _ = writeln!(out, "   = expected {}, but got {}", expected, err.got);
    }
    if let Some(suggestion) = &err.suggestion {
        let _ = writeln!(out, "help: {suggestion}");
    }
    match lang {
        Some(lang) => append_translation(out.trim_end(), lang),
        None => out.trim_end().to_string(),
    }
}

pub fn render_diagnostic(diag: &Diagnostic, lang: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", diag.level, diag.message);
    if diag.span.line != 0 {
        let _ = writeln!(out, "  --> line {}, column {}", diag.span.line, diag.span.column);
    }
    for note in &diag.notes {
        let _ = writeln!(out, "   | {note}");
    }
    for help in &diag.helps {
        let _ = writeln!(out, "help: {help}");
    }
    match lang {
        Some(lang) => append_translation(out.trim_end(), lang),
        None => out.trim_end().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_error() -> ParseError {
        ParseError {
            message: "unexpected token".to_string(),
            line: 3,
            column: 5,
            token: "}".to_string(),
            expected: Some("an expression".to_string()),
            got: "}".to_string(),
            context: "while parsing a call argument list".to_string(),
            suggestion: Some("remove the trailing comma".to_string()),
        }
    }

    #[test]
    fn renders_every_field_present() {
        let rendered = render_parse_error(&sample_error(), None);
        assert!(rendered.starts_with("error: unexpected token\n"));
        assert!(rendered.contains("line 3, column 5"));
        assert!(rendered.contains("while parsing a call argument list"));
        assert!(rendered.contains("expected an expression, but got }"));
        assert!(rendered.contains("help: remove the trailing comma"));
    }

    #[test]
    fn blank_fields_are_omitted() {
        let mut err = sample_error();
        err.context = String::new();
        err.expected = None;
        err.suggestion = None;
        let rendered = render_parse_error(&err, None);
        assert!(!rendered.contains("   |"));
        assert!(!rendered.contains("   ="));
        assert!(!rendered.contains("help:"));
    }

    #[test]
    fn translation_is_appended_when_a_language_is_given() {
        let mut err = sample_error();
        err.message = "Unused variables found: a".to_string();
        let rendered = render_parse_error(&err, Some("id"));
        assert!(rendered.contains("Ditemukan variabel yang tidak terpakai"));
    }
}
