use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `EMBER_LOG=trace`.
pub(crate) const LOG_ENV: &str = "EMBER_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr subscriber. Stdout stays reserved for program output.
pub(crate) fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
