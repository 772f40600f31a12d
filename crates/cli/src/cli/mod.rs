#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// Root CLI for the wsim maintenance binary.
#[derive(Parser, Debug)]
#[command(name = "wsim")]
#[command(about = "websim.ai shell - profile and plugin maintenance")]
#[command(version)]
#[command(styles = cli_styles())]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format: text (default) or json
	#[arg(short = 'f', long, global = true, value_enum, default_value = "text")]
	pub format: OutputFormat,

	/// Shell configuration file (JSON); built-in defaults apply when absent.
	#[arg(long, global = true, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Profile base directory, overriding the configuration.
	#[arg(long, global = true, value_name = "DIR")]
	pub storage_dir: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Manage the persistent browsing profile on disk.
	Profile(ProfileArgs),
	/// Compose and inspect plugin URL parameters.
	Plugin(PluginArgs),
	/// Show the identity headers injected into outgoing requests.
	Headers(HeadersArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
	#[command(subcommand)]
	pub action: ProfileAction,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ProfileAction {
	/// Create the profile directory tree.
	Init,
	/// Show on-disk profile usage.
	Status,
	/// Purge the HTTP cache and visited-link history. Cookies survive.
	Clear,
}

#[derive(Args, Debug, Clone)]
pub struct PluginArgs {
	#[command(subcommand)]
	pub action: PluginAction,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PluginAction {
	/// Compose the URL that activates a plugin.
	Compose {
		/// Base URL; an existing plugin parameter is replaced.
		#[arg(value_name = "URL")]
		url: String,

		/// Owner handle, with or without the leading @.
		#[arg(value_name = "OWNER", conflicts_with = "preset")]
		owner: Option<String>,

		/// Plugin name.
		#[arg(value_name = "NAME", conflicts_with = "preset")]
		name: Option<String>,

		/// Compose from a known preset (id or bare name) instead.
		#[arg(long, value_name = "ID")]
		preset: Option<String>,
	},
	/// List the known plugin presets.
	Presets,
}

#[derive(Args, Debug, Clone)]
pub struct HeadersArgs {
	/// Impersonated Chrome version, overriding the configuration.
	#[arg(long, value_name = "VERSION")]
	pub chrome_version: Option<String>,
}

/// clap styles matching cargo's help output colors.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().bold())
		.usage(AnsiColor::Green.on_default().bold())
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Cyan.on_default())
		.valid(AnsiColor::Cyan.on_default())
}
