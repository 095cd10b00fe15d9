use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs the global fmt subscriber.
///
/// Logs go to stderr; stdout is reserved for the stdio transport and for
/// `--call` output. An explicit filter wins over `RUST_LOG`.
pub fn init(filter: Option<&str>) {
    let env_filter = filter.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        EnvFilter::new,
    );
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
