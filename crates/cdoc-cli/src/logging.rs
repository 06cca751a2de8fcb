use crate::cli::LogFlags;

/// Install the global subscriber: `CDOC_LOG` if set, otherwise the level
/// chosen by `-q`/`-v`. Output goes to stderr so stdout stays clean.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_tracing(flags: LogFlags) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("CDOC_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(flags.level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
