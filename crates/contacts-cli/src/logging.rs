// Logging setup for the contacts binary

use tracing_subscriber::EnvFilter;

use contacts_config::LoggingConfig;

/// Directive used when neither `RUST_LOG` nor `--verbose` says otherwise
pub fn default_directive(config: &LoggingConfig, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        config.level.to_ascii_lowercase()
    }
}

/// Install the global tracing subscriber on stderr
///
/// `RUST_LOG` takes precedence over the configured level. Installing twice
/// is a no-op, which keeps repeated in-process runs (tests) quiet.
pub fn init_logging(config: &LoggingConfig, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config, verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr);

    let _ = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
