use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Filter variables, most specific first.
const FILTER_VARS: [&str; 2] = ["RPCPULSE_LOG", "RUST_LOG"];

/// Our own events at `info` (`debug` when verbose); dependencies such as
/// reqwest and hyper only surface warnings.
const fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "warn,rpcpulse=debug"
    } else {
        "warn,rpcpulse=info"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    FILTER_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directives(verbose)))
}

/// Installs the global subscriber. `RPCPULSE_LOG` wins over `RUST_LOG`; an
/// unset or unparsable filter falls back to the crate defaults.
pub fn init_logging(verbose: bool, no_color: bool) {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter(verbose))
        .with_ansi(!no_color)
        .with_target(false)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}
