//! Quickcheck-driven properties for the parser.

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;
    use zenoc_util::{FileId, Handler};

    use crate::parse_source;

    #[quickcheck]
    fn parser_never_panics_on_arbitrary_bytes(bytes: Vec<u8>) -> bool {
        if let Ok(s) = String::from_utf8(bytes) {
            let handler = Handler::new();
            let _ = parse_source(&s, FileId::DUMMY, &handler);
        }
        true
    }

    /// Truncating a well-formed source at an arbitrary byte boundary must
    /// still return a `Program` and never panic, since recovery has to
    /// cope with any partial construct.
    #[quickcheck]
    fn truncated_valid_source_never_panics(cut: u8) -> bool {
        let source = "fn add(a: int, b: int): int { return a + b } let x = add(1, 2);";
        let cut = (cut as usize) % (source.len() + 1);
        let truncated = &source[..cut];
        let handler = Handler::new();
        let (_program, _errors, _rich) = parse_source(truncated, FileId::DUMMY, &handler);
        true
    }
}
