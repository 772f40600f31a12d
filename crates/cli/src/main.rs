use clap::Parser;
use colored::Colorize;
use wsim_cli::{cli::Cli, commands, logging};

fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	if let Err(err) = commands::dispatch(cli) {
		// {:#} prints the full context chain on one line.
		eprintln!("{} {err:#}", "error:".red().bold());
		std::process::exit(1);
	}
}
