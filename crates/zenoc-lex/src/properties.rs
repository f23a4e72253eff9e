//! Quickcheck-driven properties for the lexer.

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use crate::{lex_all, TokenKind};

    /// Re-lexing the literal text of every non-trivial token, joined by a
    /// single space, reproduces the same token *kinds* (modulo the
    /// whitespace/comments the lexer already discards).
    #[quickcheck]
    fn relexing_joined_literals_preserves_kinds(seed: u8) -> bool {
        let sources = [
            "let x = 1",
            "fn add(a: int, b: int): int { return a + b }",
            "if x { print(\"y\") } else { print(\"n\") }",
            "import { println } from \"std/fmt\"",
        ];
        let source = sources[(seed as usize) % sources.len()];

        let (tokens, _) = lex_all(source);
        let kinds_before: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

        let joined = tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Eof)
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let (retokens, _) = lex_all(&joined);
        let kinds_after: Vec<TokenKind> = retokens.iter().map(|t| t.kind).collect();

        kinds_before == kinds_after
    }

    #[quickcheck]
    fn lexer_never_panics_on_arbitrary_bytes(bytes: Vec<u8>) -> bool {
        // Only feed valid UTF-8 in; the lexer's contract starts at `&str`.
        if let Ok(s) = String::from_utf8(bytes) {
            let _ = lex_all(&s);
        }
        true
    }
}
