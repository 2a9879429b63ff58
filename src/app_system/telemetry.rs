/// Installs the global tracing subscriber.
///
/// Verbosity follows `RUST_LOG` (default `info`). Output goes to stderr so it
/// never interleaves with the form rendered on stdout:
///
/// ```bash
/// RUST_LOG=debug user_card
/// RUST_LOG=user_card::form_actor=debug,info user_card
/// ```
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
