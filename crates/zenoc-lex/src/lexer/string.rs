//! String literal lexing.
//!
//! The lexer consumes escape sequences (a backslash followed by exactly one
//! character) without interpreting them — the token's text carries the
//! escapes verbatim. [`unescape`] is the separate post-processing step the
//! parser runs when it ingests a string token.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal delimited by `"`. An unterminated string (EOF
    /// or newline before the closing quote) yields `TokenKind::Illegal`.
    pub fn lex_string(&mut self) -> Token {
        let start = self.token_start();
        self.cursor.advance(); // opening '"'

        loop {
            if self.cursor.is_at_end() {
                self.report_error("unterminated string literal".to_string());
                let text = self.cursor.slice_from(start);
                return self.emit_token(TokenKind::Illegal, text);
            }

            let c = self.cursor.current_char();

            if c == '"' {
                self.cursor.advance();
                break;
            }

            if c == '\n' {
                self.report_error("unterminated string literal".to_string());
                let text = self.cursor.slice_from(start);
                return self.emit_token(TokenKind::Illegal, text);
            }

            if c == '\\' {
                self.cursor.advance();
                if !self.cursor.is_at_end() {
                    self.cursor.advance(); // the escaped character, uninterpreted
                }
            } else {
                self.cursor.advance();
            }
        }

        // Token text keeps the surrounding quotes (the full source lexeme),
        // so concatenating token literals reconstructs valid source; the
        // parser strips them and calls `unescape` on the inner content.
        let full = self.cursor.slice_from(start);
        self.emit_token(TokenKind::String, full)
    }
}

/// Strips the surrounding `"` from a string token's literal text.
pub fn strip_quotes(literal: &str) -> &str {
    literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(literal)
}

/// Interprets `\n \t \r \\ \"` in a raw (lexer-produced) string token's
/// text. Any other backslash escape is passed through verbatim (the
/// backslash and following character are both kept), matching the lexer's
/// policy of not validating escapes at lex time.
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            },
            None => out.push('\\'),
        }
    }
    out
}
