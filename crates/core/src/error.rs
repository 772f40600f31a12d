//! Error taxonomy for the shell core.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	/// Profile directories could not be created or purged. Fatal at startup;
	/// the caller aborts rather than run without persistence.
	#[error("profile storage failed at {path}")]
	Storage {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// User-supplied value rejected before any side effect. Recoverable;
	/// the caller may re-prompt.
	#[error("invalid input: {0}")]
	Validation(String),

	/// A project-scoped operation was requested while the current URL does
	/// not carry a `/project/<id>` segment.
	#[error("no active project in the current URL")]
	NoActiveProject,

	#[error(transparent)]
	Host(#[from] wsim_host::HostError),
}

impl Error {
	/// Shorthand for a [`Error::Validation`] with a formatted message.
	pub fn validation(msg: impl Into<String>) -> Self {
		Self::Validation(msg.into())
	}
}
