use tracing_subscriber::EnvFilter;

/// Initialize tracing for the CLI.
///
/// Respects `RUST_LOG`, defaulting to `info`. Output goes to stderr so
/// stdout stays clean for list output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}
