//! Filter rendering entry point.
//!
//! Reads a filter tree in its JSON form from a file or stdin and prints the
//! rendered predicate on stdout. Logs go to stderr or to a file.

use anyhow::{Context, Result};
use clap::Parser;
use data_filter::{
	services::filter::FilterExpression,
	utils::{logging::setup_logging, parse_string_to_bytes_size},
};
use dotenvy::dotenv_override;
use std::{
	env::{set_var, var},
	fs,
	io::{self, Read},
	path::{Path, PathBuf},
};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
	name = "data-filter",
	about = "Renders a JSON filter tree into a parenthesized WHERE-clause predicate.",
	version
)]
struct Cli {
	/// JSON file holding the filter tree (reads stdin when omitted)
	#[arg(long, short, value_name = "PATH")]
	input: Option<PathBuf>,

	/// Write logs to file instead of stderr
	#[arg(long)]
	log_file: bool,

	/// Set log level (trace, debug, info, warn, error)
	#[arg(long, value_name = "LEVEL")]
	log_level: Option<String>,

	/// Path to store log files (default: logs/)
	#[arg(long, value_name = "PATH")]
	log_path: Option<String>,

	/// Maximum log file size before rolling (e.g., "1GB", "500MB", "1024KB")
	#[arg(long, value_name = "SIZE", value_parser = parse_string_to_bytes_size)]
	log_max_size: Option<u64>,
}

impl Cli {
	/// Apply CLI options to environment variables, overriding any existing values
	fn apply_to_env(&self) {
		dotenv_override().ok();

		if self.log_file {
			set_var("LOG_MODE", "file");
		}

		if let Ok(level) = var("RUST_LOG") {
			set_var("LOG_LEVEL", level);
		}

		if let Some(level) = &self.log_level {
			set_var("LOG_LEVEL", level);
			set_var("RUST_LOG", level);
		}

		if let Some(path) = &self.log_path {
			set_var("LOG_DATA_DIR", path);
		}

		if let Some(max_size) = &self.log_max_size {
			set_var("LOG_MAX_SIZE", max_size.to_string());
		}
	}
}

fn read_input(path: Option<&Path>) -> Result<String> {
	match path {
		Some(path) => fs::read_to_string(path)
			.with_context(|| format!("Failed to read filter tree from {}", path.display())),
		None => {
			let mut raw = String::new();
			io::stdin()
				.read_to_string(&mut raw)
				.context("Failed to read filter tree from stdin")?;
			Ok(raw)
		}
	}
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	cli.apply_to_env();

	setup_logging().map_err(|e| anyhow::anyhow!("Failed to setup logging: {}", e))?;

	let raw = read_input(cli.input.as_deref())?;
	let expression = FilterExpression::from_json(&raw)?;
	debug!(
		empty = expression.is_empty(),
		leaf = expression.is_leaf(),
		"Filter tree decoded"
	);

	println!("{}", expression);
	info!("Filter rendered");
	Ok(())
}
