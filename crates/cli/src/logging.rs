use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Initializes tracing from `-v` counts.
///
/// An explicit `RUST_LOG` wins over the verbosity flag. Diagnostics go to
/// stderr so stdout stays clean command output.
pub fn init_logging(verbosity: u8) {
	// 0 = errors only
	// 1 (-v) = info for the shell crates
	// 2+ (-vv) = debug for everything
	let filter = match verbosity {
		0 => "error",
		1 => "error,wsim=info,wsim_cli=info",
		_ => "debug",
	};

	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr.with_max_level(tracing::Level::TRACE))
		.with_target(true)
		.with_level(true)
		.compact()
		.init();
}
