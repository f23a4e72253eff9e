//! Core error types for zenoc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for symbol interning operations
#[derive(Debug, Error)]
pub enum SymbolError {
    /// Failed to intern a symbol
    #[error("Failed to intern symbol: {0}")]
    InternFailed(String),

    /// Symbol not found in the interner
    #[error("Symbol not found: index {index}")]
    NotFound { index: u32 },
}

/// Error type for source map operations
#[derive(Debug, Error)]
pub enum SourceMapError {
    /// File not found in the source map
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Span out of bounds for file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        file_len: usize,
        span_start: usize,
        span_end: usize,
    },

    /// Invalid line number
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber { line: usize, max_lines: usize },

    /// Failed to extract source snippet
    #[error("Failed to extract source: {0}")]
    ExtractFailed(String),
}

/// Error type for diagnostic operations
#[derive(Debug, Error)]
pub enum DiagnosticError {
    /// Failed to format diagnostic
    #[error("Failed to format diagnostic: {0}")]
    FormatFailed(String),

    /// Invalid diagnostic code
    #[error("Invalid diagnostic code: {0}")]
    InvalidCode(String),
}

/// Error type for module resolution
#[derive(Debug, Error)]
pub enum ModuleError {
    /// The requested module path doesn't resolve to a file on disk
    #[error("module not found: {0}")]
    NotFound(String),

    /// Importing a module would close a cycle in the import graph
    #[error("Import cycle detected: {0}")]
    ImportCycle(String),

    /// A `std/...` import doesn't match any known standard module
    #[error("unknown standard module: {0}")]
    UnknownStdModule(String),

    /// Reading the module's source file failed
    #[error("failed to read module {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The inner module itself failed to parse
    #[error("module '{path}' failed to parse: {messages}")]
    ParseFailed { path: String, messages: String },

    /// An imported name isn't declared public (or isn't a declared type) in
    /// the module it was imported from
    #[error("{kind} '{name}' is not exported from module '{path}'")]
    NotExported {
        kind: &'static str,
        name: String,
        path: String,
    },
}

/// Error type for semantic analysis (symbol/type/usage checking)
#[derive(Debug, Error)]
pub enum SemaError {
    /// A reference to a name with no declaration in scope
    #[error("undefined name: {0}")]
    UndefinedName(String),

    /// The same name was declared twice in the same scope
    #[error("{0} is already declared in this scope")]
    DuplicateDeclaration(String),

    /// Two sides of an operation or assignment disagree in type
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// `for ... in` iterated over a value whose inferred type isn't an
    /// array or `any`
    #[error("'{0}' is not iterable")]
    NotIterable(String),

    /// A call site didn't supply the number of arguments the callee expects
    #[error("{name} expects {expected} argument(s), found {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    /// A called function name isn't declared locally, a recognized
    /// built-in, or exported by any imported module
    #[error("Function '{name}' is not imported from '{module}'")]
    CallNotImported { name: String, module: String },

    /// At least one declared variable was never read
    #[error("Unused variables found: {0}")]
    UnusedVariables(String),

    /// At least one declared (non-`main`, non-public) function was never
    /// called
    #[error("Unused functions found: {0}")]
    UnusedFunctions(String),

    /// A non-`main` function parameter has no `: Type` annotation
    #[error("parameter '{param}' of function '{func}' is missing a type annotation")]
    MissingParamType { func: String, param: String },

    /// A function returns a value somewhere in its body but declares no
    /// return type
    #[error("function '{0}' returns a value but has no declared return type")]
    MissingReturnType(String),
}

/// Error type for code generation
#[derive(Debug, Error)]
pub enum GenError {
    /// The generator was asked to target a language it has no emitter for
    #[error("no emitter registered for target language: {0}")]
    UnsupportedTarget(String),

    /// A type reached codegen that the analyzer should have rejected
    #[error("cannot lower type to target: {0}")]
    UnlowerableType(String),

    /// Writing to the output buffer failed
    #[error("failed to write generated output: {0}")]
    WriteFailed(String),
}

/// Result type alias for symbol operations
pub type SymbolResult<T> = std::result::Result<T, SymbolError>;

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;

/// Result type alias for module resolution
pub type ModuleResult<T> = std::result::Result<T, ModuleError>;

/// Result type alias for semantic analysis
pub type SemaResult<T> = std::result::Result<T, SemaError>;

/// Result type alias for code generation
pub type GenResult<T> = std::result::Result<T, GenError>;
