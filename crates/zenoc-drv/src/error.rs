//! Error handling for the `zenoc` CLI.
//!
//! Every library crate (`zenoc_par`, `zenoc_sem`, `zenoc_gen`, `zenoc_lint`)
//! already returns its own `thiserror` enum; `CliError` is the outermost
//! layer that adds the concerns only the driver has (config loading,
//! toolchain invocation, file discovery) and converts everything into one
//! type the binary can report and exit on.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Compile(#[from] zenoc_gen::CompileError),

    #[error("lint failed: {0}")]
    Lint(#[from] zenoc_lint::LintError),

    #[error("the target toolchain ('{tool}') exited with a failure status")]
    ToolchainFailed { tool: String },

    #[error("failed to invoke the target toolchain ('{tool}'): {source}")]
    ToolchainUnavailable {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no such path: {0}")]
    NotFound(String),

    #[error("unrecognized source file extension on '{0}' (expected .zeno or .zn)")]
    BadExtension(String),

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    /// Argument parsing failed; clap has already printed its own usage
    /// text to stderr, so the binary should exit 1 without an
    /// additional "error: ..." line.
    #[error("")]
    Usage,
}

pub type Result<T> = std::result::Result<T, CliError>;
