use super::AppConfig;

/// Installs the global tracing subscriber.
///
/// Events go to stderr so they never interleave with the menu on stdout.
/// `RUST_LOG` overrides the configured default filter.
pub fn setup_tracing(config: &AppConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.default_log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
