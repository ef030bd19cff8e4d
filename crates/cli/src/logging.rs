use alloysim_config::{LogConfig, LogFormat};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;


/// Environment variable checked before `RUST_LOG`.
const LOG_ENV: &str = "ALLOYSIM_LOG";

/// Directive used when `log.level` does not parse.
const FALLBACK_LEVEL: &str = "info";

/// Installs the global subscriber. Logs go to stderr so stdout stays
/// machine-readable.
pub fn setup_tracing(config: &LogConfig, verbose: bool) {
	let mut rejected = None;
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.or_else(|_| EnvFilter::try_from_default_env())
		.unwrap_or_else(|_| {
			if verbose {
				EnvFilter::new("alloysim=trace,debug")
			} else {
				let (filter, error) = level_filter(&config.level);
				rejected = error;
				filter
			}
		});

	let builder = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true);

	match config.format {
		LogFormat::Pretty => builder.init(),
		LogFormat::Json => builder.json().init(),
	}

	if let Some(error) = rejected {
		tracing::warn!(
			level = %config.level,
			%error,
			fallback = FALLBACK_LEVEL,
			"invalid log.level directive"
		);
	}
	tracing::debug!(format = ?config.format, "tracing initialized");
}

/// Builds the filter for the configured `log.level`, falling back to
/// [`FALLBACK_LEVEL`] and returning the parse error when it is invalid.
fn level_filter(level: &str) -> (EnvFilter, Option<ParseError>) {
	match EnvFilter::try_new(level) {
		Ok(filter) => (filter, None),
		Err(error) => (EnvFilter::new(FALLBACK_LEVEL), Some(error)),
	}
}
