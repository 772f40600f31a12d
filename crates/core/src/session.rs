//! Persistent browsing profile: cookies, cache, identity headers.
//!
//! One [`Session`] per process. On-disk layout under the profile base:
//!
//! ```text
//! <base>/cache/           HTTP cache, purged by clear_cache
//! <base>/cookies/         cookie store, never purged
//! <base>/visited_links    engine history file, purged by clear_cache
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::ShellConfig;
use crate::error::{Error, Result};
use crate::headers::{ACCEPT_LANGUAGE, InjectedHeaderSet, user_agent};

/// Profile directory name under the per-user local-data root.
pub const PROFILE_DIR_NAME: &str = "WsimShell";

const CACHE_DIR: &str = "cache";
const COOKIES_DIR: &str = "cookies";
const VISITED_LINKS_FILE: &str = "visited_links";

/// Cache size bounds accepted from the settings surface, in MiB.
pub const CACHE_MIB_RANGE: std::ops::RangeInclusive<u64> = 50..=1000;

/// Cookie persistence policy applied to the engine profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CookiePolicy {
	/// Cookies die with the process.
	NoPersistent,
	/// The engine decides per cookie.
	AllowPersistent,
	/// Every cookie is written to disk, session cookies included.
	ForcePersistent,
}

/// User-adjustable settings, as handed over by the settings dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsUpdate {
	pub javascript_enabled: bool,
	/// Cache ceiling in MiB; must fall within [`CACHE_MIB_RANGE`].
	pub cache_max_mib: u64,
}

/// The persistent browsing profile.
///
/// Created once at process start via [`Session::initialize`]; mutated only
/// by [`Session::apply_settings`] and [`Session::clear_cache`]. The on-disk
/// state outlives the process.
#[derive(Debug, Clone)]
pub struct Session {
	storage_dir: PathBuf,
	cache_path: PathBuf,
	cookie_path: PathBuf,
	cache_max_bytes: u64,
	user_agent: String,
	accept_language: String,
	javascript_enabled: bool,
	cookie_policy: CookiePolicy,
	headers: InjectedHeaderSet,
}

impl Session {
	/// Creates the profile directory tree and the identity the engine
	/// adopts.
	///
	/// Idempotent over an existing tree. Fails with [`Error::Storage`] when
	/// a directory cannot be created; callers treat that as fatal and abort
	/// startup.
	pub fn initialize(config: &ShellConfig) -> Result<Self> {
		let storage_dir = match &config.storage_dir {
			Some(dir) => dir.clone(),
			None => default_storage_dir(),
		};
		let cache_path = storage_dir.join(CACHE_DIR);
		let cookie_path = storage_dir.join(COOKIES_DIR);

		for dir in [&storage_dir, &cache_path, &cookie_path] {
			fs::create_dir_all(dir).map_err(|source| Error::Storage {
				path: dir.clone(),
				source,
			})?;
		}

		tracing::info!(path = %storage_dir.display(), "Profile storage ready");

		Ok(Self {
			storage_dir,
			cache_path,
			cookie_path,
			cache_max_bytes: config.cache_max_bytes,
			user_agent: user_agent(&config.chrome_version),
			accept_language: ACCEPT_LANGUAGE.to_string(),
			javascript_enabled: true,
			cookie_policy: CookiePolicy::ForcePersistent,
			headers: InjectedHeaderSet::for_version(&config.chrome_version),
		})
	}

	/// Profile base directory.
	pub fn storage_dir(&self) -> &Path {
		&self.storage_dir
	}

	/// HTTP cache directory.
	pub fn cache_path(&self) -> &Path {
		&self.cache_path
	}

	/// Cookie store directory.
	pub fn cookie_path(&self) -> &Path {
		&self.cookie_path
	}

	/// Visited-link history file maintained by the engine.
	pub fn visited_links_path(&self) -> PathBuf {
		self.storage_dir.join(VISITED_LINKS_FILE)
	}

	/// Cache ceiling in bytes.
	pub fn cache_max_bytes(&self) -> u64 {
		self.cache_max_bytes
	}

	/// User-agent string the engine advertises.
	pub fn user_agent(&self) -> &str {
		&self.user_agent
	}

	/// `Accept-Language` the engine advertises.
	pub fn accept_language(&self) -> &str {
		&self.accept_language
	}

	/// Whether page JavaScript is enabled.
	pub fn javascript_enabled(&self) -> bool {
		self.javascript_enabled
	}

	/// Cookie persistence policy.
	pub fn cookie_policy(&self) -> CookiePolicy {
		self.cookie_policy
	}

	/// The client-hint interceptor the engine must run per outgoing request.
	pub fn header_interceptor(&self) -> &InjectedHeaderSet {
		&self.headers
	}

	/// Applies user-chosen settings. Affects subsequent requests only.
	///
	/// The cache ceiling is validated against [`CACHE_MIB_RANGE`];
	/// out-of-range values are an [`Error::Validation`] and change nothing.
	pub fn apply_settings(&mut self, update: SettingsUpdate) -> Result<()> {
		if !CACHE_MIB_RANGE.contains(&update.cache_max_mib) {
			return Err(Error::validation(format!(
				"cache size {} MiB is outside {}..={} MiB",
				update.cache_max_mib,
				CACHE_MIB_RANGE.start(),
				CACHE_MIB_RANGE.end()
			)));
		}
		self.javascript_enabled = update.javascript_enabled;
		self.cache_max_bytes = update.cache_max_mib * 1024 * 1024;
		tracing::debug!(
			javascript = update.javascript_enabled,
			cache_mib = update.cache_max_mib,
			"Settings applied"
		);
		Ok(())
	}

	/// Purges the HTTP cache contents and the visited-link history.
	///
	/// The cookie store is never touched; staying logged in across a cache
	/// clear is the point of the persistent profile. Idempotent: an empty
	/// cache is a no-op.
	pub fn clear_cache(&self) -> Result<()> {
		remove_dir_contents(&self.cache_path).map_err(|source| Error::Storage {
			path: self.cache_path.clone(),
			source,
		})?;

		let visited = self.visited_links_path();
		match fs::remove_file(&visited) {
			Ok(()) => {}
			Err(e) if e.kind() == io::ErrorKind::NotFound => {}
			Err(source) => {
				return Err(Error::Storage {
					path: visited,
					source,
				});
			}
		}

		tracing::info!(path = %self.cache_path.display(), "Cache cleared");
		Ok(())
	}

	/// Summarizes the on-disk profile for status display.
	pub fn status(&self) -> Result<ProfileStatus> {
		Ok(ProfileStatus {
			storage_dir: self.storage_dir.clone(),
			cache_bytes: dir_size(&self.cache_path).map_err(|source| Error::Storage {
				path: self.cache_path.clone(),
				source,
			})?,
			cookie_bytes: dir_size(&self.cookie_path).map_err(|source| Error::Storage {
				path: self.cookie_path.clone(),
				source,
			})?,
			visited_links_present: self.visited_links_path().exists(),
		})
	}
}

/// On-disk profile summary.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileStatus {
	pub storage_dir: PathBuf,
	pub cache_bytes: u64,
	pub cookie_bytes: u64,
	pub visited_links_present: bool,
}

/// Platform default profile base, `<local-data>/WsimShell`.
pub fn default_storage_dir() -> PathBuf {
	dirs::data_local_dir()
		.unwrap_or_else(|| PathBuf::from("."))
		.join(PROFILE_DIR_NAME)
}

fn remove_dir_contents(dir: &Path) -> io::Result<()> {
	let entries = match fs::read_dir(dir) {
		Ok(entries) => entries,
		Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
		Err(e) => return Err(e),
	};
	for entry in entries {
		let entry = entry?;
		let path = entry.path();
		if entry.file_type()?.is_dir() {
			fs::remove_dir_all(&path)?;
		} else {
			fs::remove_file(&path)?;
		}
	}
	Ok(())
}

fn dir_size(dir: &Path) -> io::Result<u64> {
	let mut total = 0;
	let entries = match fs::read_dir(dir) {
		Ok(entries) => entries,
		Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
		Err(e) => return Err(e),
	};
	for entry in entries {
		let entry = entry?;
		let meta = entry.metadata()?;
		if meta.is_dir() {
			total += dir_size(&entry.path())?;
		} else {
			total += meta.len();
		}
	}
	Ok(total)
}
