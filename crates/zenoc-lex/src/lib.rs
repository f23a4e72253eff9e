//! zenoc-lex - Zeno lexical analyzer.
//!
//! Turns a Zeno source string into a stream of [`Token`]s. Whitespace and
//! comments are skipped between tokens; lexical errors (unterminated
//! strings, unrecognized bytes) are reported through a shared
//! [`zenoc_util::Handler`] rather than returned, matching the diagnostic
//! model every later compiler phase uses.

pub mod cursor;
mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;
#[cfg(test)]
mod properties;

pub use lexer::{lex_all, strip_quotes, unescape, Lexer};
pub use token::{keyword_from_ident, Token, TokenKind};
