use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn parse_profile_actions() {
	let init = Cli::try_parse_from(vec!["wsim", "profile", "init"]).unwrap();
	assert!(matches!(
		init.command,
		Commands::Profile(ProfileArgs {
			action: ProfileAction::Init
		})
	));

	let status = Cli::try_parse_from(vec!["wsim", "profile", "status"]).unwrap();
	assert!(matches!(
		status.command,
		Commands::Profile(ProfileArgs {
			action: ProfileAction::Status
		})
	));

	let clear = Cli::try_parse_from(vec!["wsim", "profile", "clear"]).unwrap();
	assert!(matches!(
		clear.command,
		Commands::Profile(ProfileArgs {
			action: ProfileAction::Clear
		})
	));
}

#[test]
fn parse_plugin_compose_positional() {
	let args = vec![
		"wsim",
		"plugin",
		"compose",
		"https://websim.ai/project/abc",
		"hintbl0ck",
		"edit5",
	];
	let cli = Cli::try_parse_from(args).unwrap();

	match cli.command {
		Commands::Plugin(args) => match args.action {
			PluginAction::Compose {
				url,
				owner,
				name,
				preset,
			} => {
				assert_eq!(url, "https://websim.ai/project/abc");
				assert_eq!(owner.as_deref(), Some("hintbl0ck"));
				assert_eq!(name.as_deref(), Some("edit5"));
				assert!(preset.is_none());
			}
			_ => panic!("Expected Compose action"),
		},
		_ => panic!("Expected Plugin command"),
	}
}

#[test]
fn parse_plugin_compose_preset_flag() {
	let args = vec![
		"wsim",
		"plugin",
		"compose",
		"https://websim.ai",
		"--preset",
		"edit5",
	];
	let cli = Cli::try_parse_from(args).unwrap();

	match cli.command {
		Commands::Plugin(args) => match args.action {
			PluginAction::Compose { owner, preset, .. } => {
				assert!(owner.is_none());
				assert_eq!(preset.as_deref(), Some("edit5"));
			}
			_ => panic!("Expected Compose action"),
		},
		_ => panic!("Expected Plugin command"),
	}
}

#[test]
fn preset_flag_conflicts_with_positional_owner() {
	let args = vec![
		"wsim",
		"plugin",
		"compose",
		"https://websim.ai",
		"owner",
		"name",
		"--preset",
		"edit5",
	];
	assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn verbose_flag_short_and_long() {
	let short_cli = Cli::try_parse_from(vec!["wsim", "-v", "plugin", "presets"]).unwrap();
	assert_eq!(short_cli.verbose, 1);

	let long_cli = Cli::try_parse_from(vec!["wsim", "--verbose", "plugin", "presets"]).unwrap();
	assert_eq!(long_cli.verbose, 1);

	let double_cli = Cli::try_parse_from(vec!["wsim", "-vv", "plugin", "presets"]).unwrap();
	assert_eq!(double_cli.verbose, 2);
}

#[test]
fn global_flags_parse_after_subcommand() {
	let args = vec![
		"wsim",
		"profile",
		"status",
		"--storage-dir",
		"/tmp/profile",
		"-f",
		"json",
	];
	let cli = Cli::try_parse_from(args).unwrap();

	assert_eq!(cli.storage_dir, Some(PathBuf::from("/tmp/profile")));
	assert_eq!(cli.format, OutputFormat::Json);
}

#[test]
fn parse_config_file_flag() {
	let args = vec!["wsim", "--config", "shell.json", "headers"];
	let cli = Cli::try_parse_from(args).unwrap();
	assert_eq!(cli.config, Some(PathBuf::from("shell.json")));
}

#[test]
fn parse_headers_version_override() {
	let args = vec!["wsim", "headers", "--chrome-version", "121.0.0.0"];
	let cli = Cli::try_parse_from(args).unwrap();

	match cli.command {
		Commands::Headers(args) => {
			assert_eq!(args.chrome_version.as_deref(), Some("121.0.0.0"));
		}
		_ => panic!("Expected Headers command"),
	}
}

#[test]
fn invalid_command_fails() {
	let args = vec!["wsim", "navigate", "https://websim.ai"];
	assert!(Cli::try_parse_from(args).is_err());
}
