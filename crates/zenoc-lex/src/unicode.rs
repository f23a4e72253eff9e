//! Character classification for identifiers.
//!
//! Zeno identifiers match `[A-Za-z_][A-Za-z_0-9]*`: ASCII only, no Unicode
//! identifier extensions.

/// Checks if a character may start an identifier.
pub fn is_ascii_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character may continue an identifier.
pub fn is_ascii_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_accepts_letters_and_underscore() {
        assert!(is_ascii_ident_start('a'));
        assert!(is_ascii_ident_start('Z'));
        assert!(is_ascii_ident_start('_'));
        assert!(!is_ascii_ident_start('1'));
        assert!(!is_ascii_ident_start('α'));
    }

    #[test]
    fn continue_accepts_alphanumeric_and_underscore() {
        assert!(is_ascii_ident_continue('a'));
        assert!(is_ascii_ident_continue('1'));
        assert!(is_ascii_ident_continue('_'));
        assert!(!is_ascii_ident_continue('-'));
    }
}
