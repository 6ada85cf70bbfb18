/// Initialize logging for the CLI.
///
/// Honours `RUST_LOG`; without it the brain's decision telemetry logs at
/// debug and everything else at info. Safe to call more than once; later
/// calls are no-ops.
pub fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stackfish_brain=debug"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
