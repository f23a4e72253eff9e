//! Command-line surface for `zenoc`, modeled on `faxt/src/main.rs`'s
//! `Cli`/`Commands` derive shape: one top-level parser with global flags
//! and a subcommand enum, clap handling usage/version/unknown-subcommand
//! behavior.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Zeno compiler front-end and code generator.
#[derive(Parser, Debug)]
#[command(name = "zenoc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compiles Zeno source to a target systems language", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Raise the tracing filter from `info` to `debug`.
    #[arg(short, long, global = true, env = "ZENOC_VERBOSE")]
    pub verbose: bool,

    /// Override `zeno.toml` discovery with an explicit path.
    #[arg(short, long, global = true, env = "ZENOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable ANSI color in rendered diagnostics.
    #[arg(long, global = true, env = "ZENOC_NO_COLOR")]
    pub no_color: bool,

    /// Append a translated line to diagnostics in the given language
    /// (currently only `id` has a bundled phrase table).
    #[arg(long, global = true, env = "ZENOC_LANG")]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile and immediately execute a file via the target toolchain.
    Run {
        file: PathBuf,
    },

    /// Compile a file, writing the emitted source next to it.
    Compile {
        file: PathBuf,
    },

    /// Compile a file and invoke the target toolchain to build an executable.
    Build {
        file: PathBuf,
    },

    /// Recursively lint `.zeno`/`.zn` files under the given paths.
    Lint {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_with_a_file() {
        let cli = Cli::parse_from(["zenoc", "run", "main.zeno"]);
        match cli.command {
            Commands::Run { file } => assert_eq!(file, PathBuf::from("main.zeno")),
            _ => panic!("expected Run"),
        }
    }

    #[test]
    fn parses_lint_with_multiple_paths() {
        let cli = Cli::parse_from(["zenoc", "lint", "src", "tests"]);
        match cli.command {
            Commands::Lint { paths } => assert_eq!(paths, vec![PathBuf::from("src"), PathBuf::from("tests")]),
            _ => panic!("expected Lint"),
        }
    }

    #[test]
    fn global_flags_parse_before_the_subcommand() {
        let cli = Cli::parse_from(["zenoc", "--verbose", "--no-color", "--lang", "id", "compile", "main.zeno"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.lang, Some("id".to_string()));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        let result = Cli::try_parse_from(["zenoc", "frobnicate"]);
        assert!(result.is_err());
    }
}
