use tracing_subscriber::EnvFilter;

// Installs the global subscriber. RUST_LOG overrides `default_level`; json
// output is meant for log collectors, plain output for terminals.
pub fn setup_tracing(default_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.with_ansi(false).json().init();
    } else {
        builder.init();
    }
}
