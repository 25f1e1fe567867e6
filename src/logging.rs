use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise warnings only, or debug output with `verbose`.
/// Calling this more than once is harmless.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "schema_tree=debug"
    } else {
        "schema_tree=warn"
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
