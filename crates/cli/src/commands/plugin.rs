use anyhow::{Result, anyhow, bail};
use colored::Colorize;
use serde_json::json;
use wsim::PluginRef;

use crate::output::{OutputFormat, print_json};

pub fn compose(
	url: &str,
	owner: Option<&str>,
	name: Option<&str>,
	preset: Option<&str>,
	format: OutputFormat,
) -> Result<()> {
	let plugin = match (preset, owner, name) {
		(Some(id), _, _) => wsim::plugin::preset(id)
			.ok_or_else(|| anyhow!("unknown plugin preset '{id}' (see `wsim plugin presets`)"))?,
		(None, Some(owner), Some(name)) => PluginRef::new(owner, name)?,
		_ => bail!("provide OWNER and NAME, or --preset ID"),
	};
	let composed = plugin.apply_to(url);

	if format.is_json() {
		print_json(&json!({ "url": composed, "plugin": plugin.id() }));
	} else {
		// Bare URL so the output pipes cleanly.
		println!("{composed}");
	}
	Ok(())
}

pub fn presets(format: OutputFormat) -> Result<()> {
	let presets = wsim::plugin::presets();

	if format.is_json() {
		let items: Vec<_> = presets
			.iter()
			.map(|plugin| {
				json!({
					"id": plugin.id(),
					"owner": plugin.owner(),
					"name": plugin.name(),
				})
			})
			.collect();
		print_json(&json!({ "presets": items }));
	} else {
		println!("{}", "Plugin presets:".bold());
		for (i, plugin) in presets.iter().enumerate() {
			println!(
				"  {} {} {}",
				(i + 1).to_string().cyan(),
				plugin.name().bold(),
				format!("({})", plugin.id()).dimmed()
			);
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn compose_requires_owner_and_name_without_preset() {
		let err = compose("https://websim.ai", None, None, None, OutputFormat::Json).unwrap_err();
		assert!(err.to_string().contains("provide OWNER and NAME"));
	}

	#[test]
	fn compose_rejects_unknown_preset() {
		let err = compose(
			"https://websim.ai",
			None,
			None,
			Some("@nobody/nothing"),
			OutputFormat::Json,
		)
		.unwrap_err();
		assert!(err.to_string().contains("unknown plugin preset"));
	}

	#[test]
	fn compose_accepts_preset_by_bare_name() {
		compose(
			"https://websim.ai",
			None,
			None,
			Some("edit5"),
			OutputFormat::Json,
		)
		.unwrap();
	}

	#[test]
	fn compose_surfaces_validation_errors() {
		let err = compose(
			"https://websim.ai",
			Some("@"),
			Some("name"),
			None,
			OutputFormat::Json,
		)
		.unwrap_err();
		assert!(err.to_string().contains("owner"));
	}
}
