use zenoc_drv::CliError;

/// Returning `Err` here exits 1 via the standard `Termination` impl:
/// exit code 0 on success, 1 on any failure. `Usage` means clap already
/// printed its own message to stderr, so that one case exits directly
/// instead of letting anyhow print a second line.
fn main() -> anyhow::Result<()> {
    match zenoc_drv::main() {
        Err(CliError::Usage) => std::process::exit(1),
        result => Ok(result?),
    }
}
