use clap::ValueEnum;
use serde_json::Value;

/// Wire format for command output on stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable, colored when stdout is a terminal.
	#[default]
	Text,
	/// One pretty-printed JSON object.
	Json,
}

impl OutputFormat {
	pub fn is_json(self) -> bool {
		matches!(self, OutputFormat::Json)
	}
}

/// Prints a JSON payload to stdout.
pub fn print_json(value: &Value) {
	let rendered =
		serde_json::to_string_pretty(value).expect("a json value always serializes");
	println!("{rendered}");
}
