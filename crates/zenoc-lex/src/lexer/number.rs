//! Number literal lexing.
//!
//! A run of digits is `INT`; if followed by `.` and another digit, the `.`
//! and the following digit run are consumed too and the token becomes
//! `FLOAT`. There is no separate hex/octal/binary or exponent notation —
//! Zeno numeric literals are plain decimal.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    pub fn lex_number(&mut self) -> Token {
        let start = self.token_start();

        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let is_float =
            self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit();

        if is_float {
            self.cursor.advance(); // consume '.'
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
            let text = self.cursor.slice_from(start);
            self.emit_token(TokenKind::Float, text)
        } else {
            let text = self.cursor.slice_from(start);
            self.emit_token(TokenKind::Int, text)
        }
    }
}

#[cfg(test)]
mod tests {
    use zenoc_util::Handler;

    use crate::token::TokenKind;
    use crate::Lexer;

    fn lex_num(source: &str) -> (TokenKind, String) {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, &handler);
        let tok = lexer.lex_number();
        (tok.kind, tok.text.as_str().to_string())
    }

    #[test]
    fn decimal_integer() {
        assert_eq!(lex_num("42"), (TokenKind::Int, "42".to_string()));
        assert_eq!(lex_num("0"), (TokenKind::Int, "0".to_string()));
    }

    #[test]
    fn float_with_fraction() {
        assert_eq!(lex_num("3.14"), (TokenKind::Float, "3.14".to_string()));
    }

    #[test]
    fn dot_not_followed_by_digit_stays_int() {
        // "1." with no trailing digit: the INT token is just "1"; the '.'
        // is left for the next token (e.g. a member-access expression).
        assert_eq!(lex_num("1.len"), (TokenKind::Int, "1".to_string()));
    }
}
