use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use snipt_core::app_dirs;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "SNIPT_LOG";

/// Route `tracing` output to a file so it never lands on the picker's screen.
///
/// Returns the path being written to.
pub(crate) fn init(log_file: Option<&Path>) -> Result<PathBuf> {
	let path = match log_file {
		Some(path) => path.to_path_buf(),
		None => app_dirs::default_log_file()?,
	};
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}

	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| "info".into()))
		.with_ansi(false)
		.with_writer(Mutex::new(file))
		.init();

	Ok(path)
}
