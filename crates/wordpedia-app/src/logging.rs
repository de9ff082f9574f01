use tracing_subscriber::EnvFilter;

/// Log filter variable, e.g. `WORDPEDIA_LOG=debug`
const LOG_ENV: &str = "WORDPEDIA_LOG";

/// Install the global subscriber. Logs go to stderr so they never mix
/// with rendered results.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}
