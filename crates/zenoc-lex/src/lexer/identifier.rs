//! Identifier and keyword lexing.

use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::unicode::is_ascii_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers match `[A-Za-z_][A-Za-z_0-9]*`. After reading the run,
    /// checks the keyword table; anything not a reserved lexeme becomes
    /// `TokenKind::Ident`.
    pub fn lex_identifier(&mut self) -> Token {
        while is_ascii_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start());
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Ident);
        self.emit_token(kind, text)
    }
}

#[cfg(test)]
mod tests {
    use zenoc_util::Handler;

    use crate::token::TokenKind;
    use crate::Lexer;

    fn lex_ident(source: &str) -> TokenKind {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, &handler);
        lexer.lex_identifier().kind
    }

    #[test]
    fn simple_identifier() {
        assert_eq!(lex_ident("foo"), TokenKind::Ident);
    }

    #[test]
    fn identifier_with_underscore() {
        assert_eq!(lex_ident("foo_bar_123"), TokenKind::Ident);
    }

    #[test]
    fn all_keywords_recognized() {
        let pairs = [
            ("let", TokenKind::Let),
            ("pub", TokenKind::Pub),
            ("fn", TokenKind::Fn),
            ("import", TokenKind::Import),
            ("from", TokenKind::From),
            ("if", TokenKind::If),
            ("else", TokenKind::Else),
            ("while", TokenKind::While),
            ("for", TokenKind::For),
            ("in", TokenKind::In),
            ("return", TokenKind::Return),
            ("true", TokenKind::True),
            ("false", TokenKind::False),
            ("type", TokenKind::Type),
            ("break", TokenKind::Break),
            ("continue", TokenKind::Continue),
        ];
        for (text, expected) in pairs {
            assert_eq!(lex_ident(text), expected, "keyword {text}");
        }
    }

    #[test]
    fn underscore_alone_is_identifier() {
        assert_eq!(lex_ident("_"), TokenKind::Ident);
    }
}
