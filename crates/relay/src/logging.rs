use tracing_subscriber::EnvFilter;

/// Subscriber for the Lambda function. CloudWatch Logs timestamps every
/// line, so the formatter leaves time out. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();
}

/// Subscriber for command line tools. Logs go to stderr so stdout stays
/// clean for JSON output.
pub fn init_cli(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .init();
}
