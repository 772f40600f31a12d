//! Plugin references and `plugin` query-parameter composition.
//!
//! A plugin is identified by an owner handle and a plugin name. The site
//! activates it when the URL carries `?plugin=@<owner>/<name>`; the URL is
//! the single source of truth for "plugin active". Composition always
//! replaces any existing parameter, so at most one `?plugin=` ever appears.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Marker that introduces the plugin parameter in a URL.
pub const PLUGIN_QUERY_PREFIX: &str = "?plugin=";

/// Known plugin presets, as `(owner, name)` pairs.
pub const PRESETS: &[(&str, &str)] = &[
	("@Trey6383", "test123"),
	("@Trey6383", "injectify"),
	("@hintbl0ck", "edit5"),
	("@Trey6383", "edit6-real"),
];

/// A validated owner/name plugin reference.
///
/// The owner is always stored `@`-prefixed; both parts are non-empty and
/// trimmed. Construct through [`PluginRef::new`], which normalizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginRef {
	owner: String,
	name: String,
}

impl PluginRef {
	/// Builds a reference from raw user input.
	///
	/// `owner` is trimmed and `@`-prefixed when the prefix is missing;
	/// `name` is trimmed. Either part empty after trimming (a bare `"@"`
	/// counts as empty) is an [`Error::Validation`].
	pub fn new(owner: &str, name: &str) -> Result<Self> {
		let owner = normalize_owner(owner)?;
		let name = name.trim();
		if name.is_empty() {
			return Err(Error::validation("plugin name must not be empty"));
		}
		Ok(Self {
			owner,
			name: name.to_string(),
		})
	}

	/// The `@`-prefixed owner handle.
	pub fn owner(&self) -> &str {
		&self.owner
	}

	/// The plugin name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Canonical identifier, `@<owner>/<name>`.
	pub fn id(&self) -> String {
		format!("{}/{}", self.owner, self.name)
	}

	/// The query fragment this reference produces, `plugin=@<owner>/<name>`.
	///
	/// This is also the substring the load controller watches for when
	/// deciding badge injection.
	pub fn query_param(&self) -> String {
		format!("plugin={}", self.id())
	}

	/// Applies this reference to `url`, replacing any existing plugin
	/// parameter.
	pub fn apply_to(&self, url: &str) -> String {
		format!("{}{}{}", strip_plugin(url), PLUGIN_QUERY_PREFIX, self.id())
	}
}

impl std::fmt::Display for PluginRef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}/{}", self.owner, self.name)
	}
}

// Deserialization re-validates, so config files cannot smuggle in an
// un-normalized owner.
impl<'de> Deserialize<'de> for PluginRef {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		#[derive(Deserialize)]
		struct Raw {
			owner: String,
			name: String,
		}
		let raw = Raw::deserialize(deserializer)?;
		PluginRef::new(&raw.owner, &raw.name).map_err(serde::de::Error::custom)
	}
}

/// Normalizes an owner handle: trim, require non-empty, ensure `@` prefix.
///
/// Idempotent: normalizing an already-normalized handle returns it unchanged.
pub fn normalize_owner(owner: &str) -> Result<String> {
	let trimmed = owner.trim();
	let bare = trimmed.strip_prefix('@').unwrap_or(trimmed);
	if bare.is_empty() {
		return Err(Error::validation("plugin owner must not be empty"));
	}
	Ok(format!("@{bare}"))
}

/// Returns `url` truncated at the first plugin parameter, or unchanged when
/// none is present.
pub fn strip_plugin(url: &str) -> &str {
	match url.find(PLUGIN_QUERY_PREFIX) {
		Some(idx) => &url[..idx],
		None => url,
	}
}

/// Composes the URL that activates `owner`/`name` on top of `current_url`.
///
/// Any existing plugin parameter is replaced, never duplicated. Fails with
/// [`Error::Validation`] when owner or name is empty after trimming.
pub fn compose(current_url: &str, owner: &str, name: &str) -> Result<String> {
	let plugin = PluginRef::new(owner, name)?;
	Ok(plugin.apply_to(current_url))
}

/// Looks up a preset by its `@<owner>/<name>` id or bare `<name>`.
pub fn preset(id: &str) -> Option<PluginRef> {
	PRESETS
		.iter()
		.find(|(owner, name)| id == format!("{owner}/{name}") || id == *name)
		.and_then(|(owner, name)| PluginRef::new(owner, name).ok())
}

/// All presets as validated references.
pub fn presets() -> Vec<PluginRef> {
	PRESETS
		.iter()
		.filter_map(|(owner, name)| PluginRef::new(owner, name).ok())
		.collect()
}
