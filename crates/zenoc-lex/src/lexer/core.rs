//! Core lexer implementation: the main `Lexer` struct and token dispatch.

use zenoc_util::{DiagnosticBuilder, FileId, Handler, Span, Symbol};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for Zeno source text.
///
/// Produces one [`Token`] at a time from a source string, skipping
/// whitespace and comments between tokens. Lexical errors (unterminated
/// strings, unrecognized bytes) are reported through the shared
/// [`Handler`], the same diagnostic sink the parser and later passes use.
pub struct Lexer<'a> {
    pub cursor: Cursor<'a>,
    pub file_id: FileId,
    pub handler: &'a Handler,

    /// Byte offset of the token currently being scanned.
    token_start: usize,
    token_start_line: u32,
    token_start_column: u32,

    bom_checked: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self::with_file(source, FileId(0), handler)
    }

    pub fn with_file(source: &'a str, file_id: FileId, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            file_id,
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            bom_checked: false,
        }
    }

    pub(crate) fn report_error(&mut self, message: String) {
        DiagnosticBuilder::error(message)
            .span(self.make_span())
            .emit(self.handler);
    }

    fn make_span(&self) -> Span {
        Span::with_file(
            self.token_start,
            self.cursor.position(),
            self.file_id,
            self.token_start_line,
            self.token_start_column,
        )
    }

    fn token(&self, kind: TokenKind, text: &str) -> Token {
        Token::new(kind, Symbol::intern(text), self.make_span())
    }

    /// Returns the next token from the source, or a `TokenKind::Eof` token
    /// at end of input.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return self.token(TokenKind::Eof, "");
        }

        let c = self.cursor.current_char();

        if crate::unicode::is_ascii_ident_start(c) {
            return self.lex_identifier();
        }
        if c.is_ascii_digit() {
            return self.lex_number();
        }
        if c == '"' {
            return self.lex_string();
        }

        match c {
            '(' => self.single(TokenKind::LParen, "("),
            ')' => self.single(TokenKind::RParen, ")"),
            '{' => self.single(TokenKind::LBrace, "{"),
            '}' => self.single(TokenKind::RBrace, "}"),
            '[' => self.single(TokenKind::LBracket, "["),
            ']' => self.single(TokenKind::RBracket, "]"),
            ',' => self.single(TokenKind::Comma, ","),
            ';' => self.single(TokenKind::Semicolon, ";"),
            '?' => self.single(TokenKind::Question, "?"),
            ':' => self.single(TokenKind::Colon, ":"),
            '.' => self.lex_dot(),
            '+' => self.single(TokenKind::Plus, "+"),
            '-' => self.single(TokenKind::Minus, "-"),
            '*' => self.single(TokenKind::Star, "*"),
            '%' => self.single(TokenKind::Percent, "%"),
            '/' => self.single(TokenKind::Slash, "/"),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '&' => self.lex_ampersand(),
            '|' => self.lex_pipe(),
            other => {
                self.cursor.advance();
                self.report_error(format!("unrecognized character '{other}'"));
                self.token(TokenKind::Illegal, &other.to_string())
            },
        }
    }

    fn single(&mut self, kind: TokenKind, text: &str) -> Token {
        self.cursor.advance();
        self.token(kind, text)
    }

    fn lex_dot(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.current_char() == '.' && self.cursor.peek_char(1) == '.' {
            self.cursor.advance();
            self.cursor.advance();
            self.token(TokenKind::Ellipsis, "...")
        } else {
            self.token(TokenKind::Dot, ".")
        }
    }

    fn lex_equals(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.token(TokenKind::EqEq, "==")
        } else {
            self.token(TokenKind::Assign, "=")
        }
    }

    fn lex_bang(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.token(TokenKind::NotEq, "!=")
        } else {
            self.token(TokenKind::Bang, "!")
        }
    }

    fn lex_less(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.token(TokenKind::LtEq, "<=")
        } else {
            self.token(TokenKind::Lt, "<")
        }
    }

    fn lex_greater(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.token(TokenKind::GtEq, ">=")
        } else {
            self.token(TokenKind::Gt, ">")
        }
    }

    fn lex_ampersand(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('&') {
            self.token(TokenKind::AndAnd, "&&")
        } else {
            self.report_error("unrecognized character '&'".to_string());
            self.token(TokenKind::Illegal, "&")
        }
    }

    fn lex_pipe(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('|') {
            self.token(TokenKind::OrOr, "||")
        } else {
            self.report_error("unrecognized character '|'".to_string());
            self.token(TokenKind::Illegal, "|")
        }
    }

    pub(crate) fn token_start(&self) -> usize {
        self.token_start
    }

    pub(crate) fn emit_token(&self, kind: TokenKind, text: &str) -> Token {
        self.token(kind, text)
    }
}

/// Produces the full token stream for a source string, including the
/// trailing `Eof`. Convenience entry point used by the parser and tests.
pub fn lex_all(source: &str) -> (Vec<Token>, Handler) {
    let handler = Handler::new();
    let mut tokens = Vec::new();
    {
        let mut lexer = Lexer::new(source, &handler);
        loop {
            let tok = lexer.next_token();
            let is_eof = tok.is_eof();
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
    }
    (tokens, handler)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        lex_all(src).0.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn punctuation() {
        assert_eq!(
            kinds("(){}[],:;.?=...").as_slice(),
            &[
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Comma,
                TokenKind::Colon,
                TokenKind::Semicolon,
                TokenKind::Dot,
                TokenKind::Question,
                TokenKind::Assign,
                TokenKind::Ellipsis,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn two_char_operators() {
        assert_eq!(
            kinds("== != <= >= && ||").as_slice(),
            &[
                TokenKind::EqEq,
                TokenKind::NotEq,
                TokenKind::LtEq,
                TokenKind::GtEq,
                TokenKind::AndAnd,
                TokenKind::OrOr,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn line_comment_skipped() {
        assert_eq!(
            kinds("1 // trailing comment\n2").as_slice(),
            &[TokenKind::Int, TokenKind::Int, TokenKind::Eof]
        );
    }

    #[test]
    fn unterminated_block_comment_reaches_eof_silently() {
        let (tokens, handler) = lex_all("1 /* never closes");
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Int, TokenKind::Eof]
        );
        assert!(!handler.has_errors());
    }

    #[test]
    fn illegal_byte_is_reported() {
        let (tokens, handler) = lex_all("@");
        assert_eq!(tokens[0].kind, TokenKind::Illegal);
        assert!(handler.has_errors());
    }
}
