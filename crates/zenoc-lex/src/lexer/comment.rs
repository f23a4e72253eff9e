//! Comment skipping.
//!
//! `//` runs to end of line. `/* … */` is not nested; an unterminated
//! block comment is tolerated by consuming silently to `EOF` rather than
//! reporting an error.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a block comment. Called with the cursor positioned just past
    /// the opening `/*`.
    pub fn skip_block_comment(&mut self) {
        while !self.cursor.is_at_end() {
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return;
            }
            self.cursor.advance();
        }
        // Ran off the end of input: tolerated silently, no diagnostic.
    }

    pub(crate) fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }

    /// Skips whitespace and comments. Called before lexing each token.
    pub fn skip_whitespace_and_comments(&mut self) {
        loop {
            if self.cursor.is_at_end() {
                return;
            }

            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.cursor.advance();
                },
                '/' => match self.cursor.peek_char(1) {
                    '/' => self.skip_line_comment(),
                    '*' => {
                        self.cursor.advance();
                        self.cursor.advance();
                        self.skip_block_comment();
                    },
                    _ => return,
                },
                _ => return,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use zenoc_util::Handler;

    use crate::token::TokenKind;
    use crate::Lexer;

    fn next_kind(source: &str) -> TokenKind {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, &handler);
        lexer.next_token().kind
    }

    #[test]
    fn skip_leading_whitespace() {
        assert_eq!(next_kind("   hello"), TokenKind::Ident);
    }

    #[test]
    fn skip_line_comment_then_token() {
        assert_eq!(next_kind("// comment\nhello"), TokenKind::Ident);
    }

    #[test]
    fn skip_block_comment_then_token() {
        assert_eq!(next_kind("/* comment */hello"), TokenKind::Ident);
    }

    #[test]
    fn unterminated_block_comment_consumes_to_eof() {
        assert_eq!(next_kind("/* never closes"), TokenKind::Eof);
    }
}
