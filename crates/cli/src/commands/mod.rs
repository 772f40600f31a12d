mod headers;
mod plugin;
mod profile;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use wsim::ShellConfig;

use crate::cli::{Cli, Commands, PluginAction, ProfileAction};

pub fn dispatch(cli: Cli) -> Result<()> {
	let Cli {
		format,
		config,
		storage_dir,
		command,
		..
	} = cli;

	match command {
		Commands::Profile(args) => {
			let config = load_config(config.as_deref(), storage_dir)?;
			match args.action {
				ProfileAction::Init => profile::init(&config, format),
				ProfileAction::Status => profile::status(&config, format),
				ProfileAction::Clear => profile::clear(&config, format),
			}
		}
		Commands::Plugin(args) => match args.action {
			PluginAction::Compose {
				url,
				owner,
				name,
				preset,
			} => plugin::compose(
				&url,
				owner.as_deref(),
				name.as_deref(),
				preset.as_deref(),
				format,
			),
			PluginAction::Presets => plugin::presets(format),
		},
		Commands::Headers(args) => {
			let config = load_config(config.as_deref(), storage_dir)?;
			headers::show(&config, args.chrome_version.as_deref(), format)
		}
	}
}

/// Loads the shell configuration the command runs against.
///
/// An explicit `--config` file must exist and parse. Otherwise the default
/// location is consulted and skipped when absent. `--storage-dir` wins over
/// both.
fn load_config(path: Option<&Path>, storage_dir: Option<PathBuf>) -> Result<ShellConfig> {
	let mut config = match path {
		Some(path) => read_config(path)
			.with_context(|| format!("failed to load configuration from {}", path.display()))?,
		None => {
			let default = default_config_path();
			if default.exists() {
				read_config(&default).with_context(|| {
					format!("failed to load configuration from {}", default.display())
				})?
			} else {
				ShellConfig::default()
			}
		}
	};
	if let Some(dir) = storage_dir {
		config = config.with_storage_dir(dir);
	}
	Ok(config)
}

fn read_config(path: &Path) -> Result<ShellConfig> {
	let raw = std::fs::read_to_string(path)?;
	Ok(serde_json::from_str(&raw)?)
}

/// `<config-root>/wsim/config.json`, consulted when `--config` is not given.
pub fn default_config_path() -> PathBuf {
	dirs::config_local_dir()
		.unwrap_or_else(|| PathBuf::from("."))
		.join("wsim")
		.join("config.json")
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::TempDir;

	use super::*;

	#[test]
	fn missing_explicit_config_is_an_error() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("absent.json");

		let err = load_config(Some(&path), None).unwrap_err();
		assert!(err.to_string().contains("failed to load configuration"));
	}

	#[test]
	fn partial_config_file_fills_in_defaults() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("shell.json");
		fs::write(&path, r#"{"chrome_version":"121.0.0.0"}"#).unwrap();

		let config = load_config(Some(&path), None).unwrap();
		assert_eq!(config.chrome_version, "121.0.0.0");
		assert_eq!(config.start_url, "https://websim.ai");
	}

	#[test]
	fn storage_dir_flag_wins_over_config_file() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("shell.json");
		fs::write(&path, r#"{"storage_dir":"/from/file"}"#).unwrap();

		let config = load_config(Some(&path), Some(PathBuf::from("/from/flag"))).unwrap();
		assert_eq!(config.storage_dir, Some(PathBuf::from("/from/flag")));
	}

	#[test]
	fn malformed_config_file_reports_its_path() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("shell.json");
		fs::write(&path, "not json").unwrap();

		let err = load_config(Some(&path), None).unwrap_err();
		assert!(format!("{err:#}").contains("shell.json"));
	}
}
