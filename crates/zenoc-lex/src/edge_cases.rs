//! Edge case tests for zenoc-lex.

#[cfg(test)]
mod tests {
    use zenoc_util::Handler;

    use crate::token::TokenKind;
    use crate::{lex_all, Lexer};

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source)
            .0
            .into_iter()
            .filter(|t| t.kind != TokenKind::Eof)
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn empty_source() {
        assert!(kinds("").is_empty());
    }

    #[test]
    fn single_char_ident() {
        assert_eq!(kinds("x"), vec![TokenKind::Ident]);
    }

    #[test]
    fn long_identifier() {
        let name = "a".repeat(10_000);
        let (tokens, _) = lex_all(&format!("let {name} = 1"));
        assert!(tokens
            .iter()
            .any(|t| t.kind == TokenKind::Ident && t.text.as_str() == name));
    }

    #[test]
    fn keywords_not_idents() {
        assert_eq!(kinds("fn let if"), vec![
            TokenKind::Fn,
            TokenKind::Let,
            TokenKind::If
        ]);
    }

    #[test]
    fn every_keyword_recognized() {
        let src =
            "let pub fn import from if else while for in return true false type break continue";
        assert_eq!(kinds(src), vec![
            TokenKind::Let,
            TokenKind::Pub,
            TokenKind::Fn,
            TokenKind::Import,
            TokenKind::From,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::For,
            TokenKind::In,
            TokenKind::Return,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Type,
            TokenKind::Break,
            TokenKind::Continue,
        ]);
    }

    #[test]
    fn empty_string_literal() {
        let (tokens, _) = lex_all("\"\"");
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text.as_str(), "\"\"");
    }

    #[test]
    fn all_operators() {
        let ks = kinds("+ - * / % == != < > <= >= && || !");
        assert!(ks.contains(&TokenKind::Plus));
        assert!(ks.contains(&TokenKind::EqEq));
        assert!(ks.contains(&TokenKind::AndAnd));
        assert!(ks.contains(&TokenKind::Bang));
    }

    #[test]
    fn all_delimiters() {
        let ks = kinds("( ) { } [ ] , ; : . ...");
        assert!(ks.contains(&TokenKind::LParen));
        assert!(ks.contains(&TokenKind::Ellipsis));
    }

    #[test]
    fn nested_parens() {
        let ks = kinds("((()))");
        assert_eq!(
            ks.iter().filter(|k| **k == TokenKind::LParen).count(),
            3
        );
    }

    #[test]
    fn case_sensitivity() {
        assert_eq!(kinds("Fn fn"), vec![TokenKind::Ident, TokenKind::Fn]);
    }

    #[test]
    fn bools() {
        assert_eq!(kinds("true false"), vec![TokenKind::True, TokenKind::False]);
    }

    #[test]
    fn underscore_is_plain_identifier() {
        assert_eq!(kinds("_"), vec![TokenKind::Ident]);
    }

    #[test]
    fn float_literals() {
        let (tokens, _) = lex_all("1.5 0.0");
        assert!(tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Float)
            .count()
            == 2);
    }

    #[test]
    fn large_integer_kept_as_text() {
        let (tokens, _) = lex_all("18446744073709551615999");
        assert_eq!(tokens[0].kind, TokenKind::Int);
        assert_eq!(tokens[0].text.as_str(), "18446744073709551615999");
    }

    #[test]
    fn unterminated_string_is_illegal_and_reported() {
        let handler = Handler::new();
        let tok = Lexer::new("\"unterminated", &handler).next_token();
        assert_eq!(tok.kind, TokenKind::Illegal);
        assert!(handler.has_errors());
    }

    #[test]
    fn unrecognized_bytes_are_reported() {
        let handler = Handler::new();
        let mut lex = Lexer::new("@#$%", &handler);
        while !lex.next_token().is_eof() {}
        assert!(handler.has_errors());
    }

    #[test]
    fn consecutive_operators_stay_distinct() {
        assert_eq!(kinds("+++").len(), 3);
    }

    #[test]
    fn whitespace_variations() {
        let ks = kinds("let\tx\n=\n1");
        assert!(ks.contains(&TokenKind::Let));
        assert!(ks.contains(&TokenKind::Int));
    }

    #[test]
    fn leading_zeros_still_lex() {
        assert_eq!(kinds("007"), vec![TokenKind::Int]);
    }
}
