//! zenoc-util - core utilities shared across the zenoc compiler crates.
//!
//! This crate has no dependency on any other zenoc crate. It provides the
//! three things every compiler phase needs: an interned [`Symbol`] type for
//! identifiers and keywords, a [`Span`]/[`SourceMap`] pair for tracking source
//! locations, and a [`diagnostic`] stack for building and collecting rich
//! error/warning messages.

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use error::{
    DiagnosticError, DiagnosticResult, GenError, GenResult, ModuleError, ModuleResult, SemaError,
    SemaResult, SourceMapError, SourceMapResult, SymbolError, SymbolResult,
};
pub use span::{FileId, SourceFile, SourceMap, Span};
pub use symbol::Symbol;
