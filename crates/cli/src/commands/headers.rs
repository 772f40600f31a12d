use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use wsim::headers::{ACCEPT_LANGUAGE, user_agent};
use wsim::{InjectedHeaderSet, ShellConfig};

use crate::output::{OutputFormat, print_json};

pub fn show(
	config: &ShellConfig,
	chrome_version: Option<&str>,
	format: OutputFormat,
) -> Result<()> {
	let version = chrome_version.unwrap_or(&config.chrome_version);
	let headers = InjectedHeaderSet::for_version(version);
	let ua = user_agent(version);

	if format.is_json() {
		let injected: serde_json::Map<String, serde_json::Value> = headers
			.entries()
			.into_iter()
			.map(|(name, value)| (name.to_string(), json!(value)))
			.collect();
		print_json(&json!({
			"chrome_version": version,
			"user_agent": ua,
			"accept_language": ACCEPT_LANGUAGE,
			"injected_headers": injected,
		}));
	} else {
		println!("{}", "Injected request headers:".bold());
		for (name, value) in headers.entries() {
			println!("  {} {}", format!("{name}:").cyan(), value);
		}
		println!();
		println!("{}", "Session identity:".bold());
		println!("  {} {}", "User-Agent:".cyan(), ua);
		println!("  {} {}", "Accept-Language:".cyan(), ACCEPT_LANGUAGE);
	}
	Ok(())
}
