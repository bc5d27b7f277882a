//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Maps the `-v` count to a default filter directive.
pub fn filter_directive(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbosity: u8) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)));

	let _ = fmt().with_env_filter(filter).with_target(true).with_writer(std::io::stderr).try_init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_maps_to_levels() {
		assert_eq!(filter_directive(0), "warn");
		assert_eq!(filter_directive(1), "info");
		assert_eq!(filter_directive(2), "debug");
		assert_eq!(filter_directive(9), "trace");
	}
}
