//! Operator and punctuation dispatch.
//!
//! Zeno's operator set is small enough (single-char punctuation plus the
//! six greedily-matched two-char operators `== != <= >= && ||`) that the
//! dispatch lives directly on `Lexer::next_token` in `core.rs` rather than
//! in one method per operator here. Operator-focused tests live alongside
//! the dispatch in `core.rs`.
