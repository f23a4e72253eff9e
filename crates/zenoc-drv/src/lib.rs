//! zenoc-drv - compiler driver: CLI parsing, configuration, and dispatch
//! to the pipeline operations.
//!
//! Every library crate (`zenoc-lex`, `zenoc-par`, `zenoc-sem`, `zenoc-gen`,
//! `zenoc-lint`) is a pure, collaborator-agnostic compiler phase; this
//! crate is the one piece of the workspace that is the CLI's problem:
//! argument parsing, config discovery, logging setup, diagnostic
//! rendering, and invoking the target toolchain.

mod cli;
mod config;
mod diagnostics;
mod error;
mod logging;
mod pipeline;
mod translate;

use clap::Parser;

pub use cli::{Cli, Commands};
pub use config::{Config, LintConfig, CONFIG_FILE_NAME};
pub use error::{CliError, Result};
pub use pipeline::{compile_file, run_build, run_compile, run_lint, run_run};

/// Parses arguments, loads configuration (merging the global CLI flags
/// over whatever `zeno.toml` supplied), initializes logging, and
/// dispatches to the subcommand's pipeline operation. The binary's
/// `main` turns an `Err` into a stderr message and exit code 1: exit
/// code 0 on success, 1 on any failure, including an unknown
/// subcommand. `--help`/`--version` still take clap's own exit-0 path;
/// everything else funnels through this `Result` so the exit code is
/// always 1, never clap's default 2 for usage errors.
pub fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            eprint!("{err}");
            return Err(CliError::Usage);
        },
        Err(err) => {
            // `--help`/`--version`: clap wants these on stdout and exit 0.
            print!("{err}");
            std::process::exit(0);
        },
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if cli.verbose {
        config.verbose = true;
    }
    if cli.no_color {
        config.no_color = true;
    }
    if cli.lang.is_some() {
        config.lang = cli.lang.clone();
    }

    logging::init(config.verbose, config.no_color)?;

    match &cli.command {
        Commands::Run { file } => run_run(file, &config),
        Commands::Compile { file } => run_compile(file, &config),
        Commands::Build { file } => run_build(file, &config),
        Commands::Lint { paths } => run_lint(paths, &config),
    }
}
