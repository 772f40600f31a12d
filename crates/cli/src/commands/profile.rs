use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use wsim::{Session, ShellConfig};

use crate::output::{OutputFormat, print_json};

pub fn init(config: &ShellConfig, format: OutputFormat) -> Result<()> {
	let session = Session::initialize(config)?;

	if format.is_json() {
		print_json(&json!({
			"initialized": true,
			"storage_dir": session.storage_dir(),
			"cache_max_bytes": session.cache_max_bytes(),
		}));
	} else {
		println!(
			"{} Profile ready at {}",
			"✓".green(),
			session.storage_dir().display().to_string().cyan()
		);
		println!("  cache limit: {}", human_bytes(session.cache_max_bytes()));
	}
	Ok(())
}

pub fn status(config: &ShellConfig, format: OutputFormat) -> Result<()> {
	let dir = resolved_storage_dir(config);
	if !dir.exists() {
		if format.is_json() {
			print_json(&json!({ "initialized": false, "storage_dir": dir }));
		} else {
			println!(
				"{} No profile at {} (run `wsim profile init`)",
				"○".dimmed(),
				dir.display()
			);
		}
		return Ok(());
	}

	let session = Session::initialize(config)?;
	let status = session.status()?;

	if format.is_json() {
		print_json(&json!({
			"initialized": true,
			"storage_dir": status.storage_dir,
			"cache_bytes": status.cache_bytes,
			"cookie_bytes": status.cookie_bytes,
			"visited_links_present": status.visited_links_present,
		}));
	} else {
		println!("{}", "Profile:".bold());
		println!(
			"  {} {}",
			"✓".green(),
			status.storage_dir.display().to_string().cyan()
		);
		println!();
		println!("{}", "Storage:".bold());
		println!("  cache:   {}", human_bytes(status.cache_bytes));
		println!("  cookies: {}", human_bytes(status.cookie_bytes));
		if status.visited_links_present {
			println!("  {} visited-link history present", "✓".green());
		} else {
			println!("  {} no visited-link history", "○".dimmed());
		}
	}
	Ok(())
}

pub fn clear(config: &ShellConfig, format: OutputFormat) -> Result<()> {
	let dir = resolved_storage_dir(config);
	if !dir.exists() {
		if format.is_json() {
			print_json(&json!({ "cleared": false, "storage_dir": dir }));
		} else {
			println!(
				"{} No profile at {}; nothing to clear",
				"○".dimmed(),
				dir.display()
			);
		}
		return Ok(());
	}

	let session = Session::initialize(config)?;
	let before = session.status()?;
	session.clear_cache()?;

	if format.is_json() {
		print_json(&json!({
			"cleared": true,
			"storage_dir": before.storage_dir,
			"freed_bytes": before.cache_bytes,
		}));
	} else {
		println!(
			"{} Cache cleared, {} freed; cookies kept",
			"✓".green(),
			human_bytes(before.cache_bytes)
		);
	}
	Ok(())
}

fn resolved_storage_dir(config: &ShellConfig) -> PathBuf {
	config
		.storage_dir
		.clone()
		.unwrap_or_else(wsim::session::default_storage_dir)
}

/// Byte count for display, binary units.
fn human_bytes(bytes: u64) -> String {
	const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
	let mut value = bytes as f64;
	let mut unit = 0;
	while value >= 1024.0 && unit < UNITS.len() - 1 {
		value /= 1024.0;
		unit += 1;
	}
	if unit == 0 {
		format!("{bytes} B")
	} else {
		format!("{:.1} {}", value, UNITS[unit])
	}
}
