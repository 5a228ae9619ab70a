//! ## Sets up logging by reading configuration from environment variables.
//!
//! Environment variables used:
//! - LOG_MODE: "stderr" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: directory for log files; default is "logs/"
//! - LOG_MAX_SIZE: maximum size of log files in bytes; default is 1GB
//!
//! Console output goes to stderr so that rendered filters on stdout stay clean.

pub mod error;

use chrono::Utc;
use regex::Regex;
use std::{
	env,
	fs::{create_dir_all, metadata},
	path::{Path, PathBuf},
	sync::LazyLock,
};
use tracing::{info, Subscriber};
use tracing_subscriber::{
	filter::EnvFilter,
	fmt::{self, format::Writer, FmtContext, FormatEvent, FormatFields},
	prelude::*,
	registry::LookupSpan,
};

const DEFAULT_LOG_DIR: &str = "logs/";
const DEFAULT_MAX_SIZE: u64 = 1_073_741_824;
const LOG_FILE_NAME: &str = "data-filter.log";

static ANSI_ESCAPE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]").expect("ANSI escape pattern is valid"));

/// Where log output is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
	Stderr,
	File,
}

/// Logging settings resolved from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
	pub mode: LogMode,
	pub level: tracing::Level,
	pub data_dir: PathBuf,
	pub max_size: u64,
}

impl LogConfig {
	/// Reads `LOG_MODE`, `LOG_LEVEL`, `LOG_DATA_DIR` and `LOG_MAX_SIZE`.
	///
	/// Unknown modes fall back to stderr and unknown levels to info.
	pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
		let mode = match env::var("LOG_MODE") {
			Ok(mode) if mode.eq_ignore_ascii_case("file") => LogMode::File,
			_ => LogMode::Stderr,
		};

		let level = env::var("LOG_LEVEL")
			.ok()
			.and_then(|level| level.parse::<tracing::Level>().ok())
			.unwrap_or(tracing::Level::INFO);

		let data_dir = env::var("LOG_DATA_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string());

		Ok(Self {
			mode,
			level,
			data_dir: PathBuf::from(data_dir),
			max_size: parse_log_max_size(env::var("LOG_MAX_SIZE").ok().as_deref())?,
		})
	}
}

/// Custom formatter that strips ANSI escape codes from log output
struct StripAnsiFormatter<T> {
	inner: T,
}

impl<S, N, T> FormatEvent<S, N> for StripAnsiFormatter<T>
where
	S: Subscriber + for<'a> LookupSpan<'a>,
	N: for<'a> FormatFields<'a> + 'static,
	T: FormatEvent<S, N>,
{
	fn format_event(
		&self,
		ctx: &FmtContext<'_, S, N>,
		mut writer: Writer<'_>,
		event: &tracing::Event<'_>,
	) -> std::fmt::Result {
		let mut buf = String::new();
		self.inner.format_event(ctx, Writer::new(&mut buf), event)?;
		write!(writer, "{}", strip_ansi_escapes(&buf))
	}
}

fn strip_ansi_escapes(s: &str) -> String {
	ANSI_ESCAPE.replace_all(s, "").to_string()
}

/// Computes the path of the rolled log file given the base file path and the date string.
pub fn compute_rolled_file_path(base_file_path: &str, date_str: &str, index: u32) -> String {
	let trimmed = base_file_path
		.strip_suffix(".log")
		.unwrap_or(base_file_path);
	format!("{}-{}.{}.log", trimmed, date_str, index)
}

/// Returns the first rolled file path, starting at `file_path`, whose file is
/// missing or not larger than `max_size` bytes.
pub fn space_based_rolling(
	file_path: &str,
	base_file_path: &str,
	date_str: &str,
	max_size: u64,
) -> String {
	let mut final_path = file_path.to_string();
	let mut index = 1;
	while let Ok(metadata) = metadata(&final_path) {
		if metadata.len() > max_size {
			index += 1;
			final_path = compute_rolled_file_path(base_file_path, date_str, index);
		} else {
			break;
		}
	}
	final_path
}

fn create_log_format(with_ansi: bool) -> fmt::format::Format<fmt::format::Compact> {
	fmt::format()
		.with_level(true)
		.with_target(true)
		.with_thread_ids(false)
		.with_thread_names(false)
		.with_ansi(with_ansi)
		.compact()
}

/// Sets up logging by reading configuration from environment variables.
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error>> {
	let config = LogConfig::from_env()?;
	let subscriber = tracing_subscriber::registry().with(EnvFilter::new(config.level.to_string()));

	match config.mode {
		LogMode::File => {
			let date_str = Utc::now().format("%Y-%m-%d").to_string();
			let base_file_path = config.data_dir.join(LOG_FILE_NAME);
			let base_file_path = base_file_path.to_string_lossy();

			let time_based_path = compute_rolled_file_path(&base_file_path, &date_str, 1);
			if let Some(parent) = Path::new(&time_based_path).parent() {
				create_dir_all(parent)?;
			}

			let final_path = space_based_rolling(
				&time_based_path,
				&base_file_path,
				&date_str,
				config.max_size,
			);
			let final_path = Path::new(&final_path);

			let file_appender = tracing_appender::rolling::never(
				final_path.parent().unwrap_or(Path::new(".")),
				final_path.file_name().unwrap_or_default(),
			);

			subscriber
				.with(
					fmt::layer()
						.event_format(StripAnsiFormatter {
							inner: create_log_format(false),
						})
						.with_writer(file_appender)
						.fmt_fields(fmt::format::PrettyFields::new()),
				)
				.try_init()?;
		}
		LogMode::Stderr => {
			subscriber
				.with(
					fmt::layer()
						.event_format(create_log_format(true))
						.with_writer(std::io::stderr)
						.fmt_fields(fmt::format::PrettyFields::new()),
				)
				.try_init()?;
		}
	}

	info!(mode = ?config.mode, level = %config.level, "Logging is successfully configured");
	Ok(())
}

fn parse_log_max_size(raw: Option<&str>) -> Result<u64, String> {
	match raw {
		Some(raw) => raw
			.parse::<u64>()
			.map_err(|e| format!("LOG_MAX_SIZE must be a valid u64 if set: {}", e)),
		None => Ok(DEFAULT_MAX_SIZE),
	}
}
