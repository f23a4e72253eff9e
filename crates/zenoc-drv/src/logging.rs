//! `tracing`/`tracing-subscriber` initialization, modeled on
//! `faxt/src/main.rs::init_logging`: an env-filter driven subscriber,
//! `-v` raising the default level from `info` to `debug`, ANSI disabled
//! by `--no-color`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{CliError, Result};

pub fn init(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

    let subscriber = fmt::layer().with_ansi(!no_color).with_target(false).with_thread_ids(false).with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
