//! Error types for the page-host boundary.

use thiserror::Error;

/// Result type alias for page-host operations.
pub type Result<T> = std::result::Result<T, HostError>;

/// Errors a page-host implementation may surface to the shell.
#[derive(Debug, Error)]
pub enum HostError {
	/// The engine rejected or could not start a navigation.
	#[error("navigation failed for '{url}': {message}")]
	Navigation {
		/// Target URL of the failed navigation.
		url: String,
		/// Engine-provided reason.
		message: String,
	},

	/// Script submission failed before the page could run it.
	///
	/// A script that runs but resolves to nothing is not an error; hosts
	/// report that as an absent result instead.
	#[error("script execution failed: {0}")]
	ScriptFailed(String),

	/// The page behind this handle is gone.
	#[error("target closed: cannot operate on a disposed page")]
	TargetClosed,
}
