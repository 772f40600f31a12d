//! Shell configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::headers::DEFAULT_CHROME_VERSION;
use crate::plugin::PluginRef;

/// URL the shell opens at startup and on "home".
pub const DEFAULT_START_URL: &str = "https://websim.ai";

/// Delay between the first successful load and the one-shot forced reload.
pub const DEFAULT_RELOAD_DELAY: Duration = Duration::from_millis(1000);

/// Default HTTP cache ceiling (100 MiB).
pub const DEFAULT_CACHE_MAX_BYTES: u64 = 100 * 1024 * 1024;

/// Fully owned shell configuration.
///
/// This type is the stable handoff between the embedding binary and the
/// session/controller internals. All fields have working defaults; a file
/// round-trips through serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
	/// URL loaded at startup and by the home action.
	pub start_url: String,
	/// Profile base directory. `None` resolves to the per-user local-data
	/// root at session init.
	pub storage_dir: Option<PathBuf>,
	/// Chrome version string used for the user agent and client hints.
	pub chrome_version: String,
	/// Plugin whose presence in a loaded URL triggers the feedback badge.
	pub watched_plugin: PluginRef,
	/// Delay before the one-shot reload after the first successful load.
	pub reload_delay: Duration,
	/// HTTP cache ceiling in bytes.
	pub cache_max_bytes: u64,
}

impl Default for ShellConfig {
	fn default() -> Self {
		Self {
			start_url: DEFAULT_START_URL.to_string(),
			storage_dir: None,
			chrome_version: DEFAULT_CHROME_VERSION.to_string(),
			watched_plugin: PluginRef::new("@Trey6383", "test123")
				.expect("default watched plugin is valid"),
			reload_delay: DEFAULT_RELOAD_DELAY,
			cache_max_bytes: DEFAULT_CACHE_MAX_BYTES,
		}
	}
}

impl ShellConfig {
	/// Creates the default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Overrides the profile base directory.
	pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.storage_dir = Some(dir.into());
		self
	}

	/// Overrides the badge-watched plugin.
	pub fn with_watched_plugin(mut self, plugin: PluginRef) -> Self {
		self.watched_plugin = plugin;
		self
	}

	/// Overrides the one-shot reload delay.
	pub fn with_reload_delay(mut self, delay: Duration) -> Self {
		self.reload_delay = delay;
		self
	}
}
