//! Where `snipt` looks for its `config.toml`, its default snippet tree and its
//! log file.
//!
//! `SNIPT_CONFIG_DIR`, `SNIPT_DATA_DIR` and `SNIPT_CACHE_DIR` each replace one
//! directory outright; otherwise the platform locations are used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "snipt";

const CONFIG_DIR_ENV: &str = "SNIPT_CONFIG_DIR";
const DATA_DIR_ENV: &str = "SNIPT_DATA_DIR";
const CACHE_DIR_ENV: &str = "SNIPT_CACHE_DIR";

const SNIPPETS_DIR_NAME: &str = "snippets";
const LOG_FILE_NAME: &str = "snipt.log";

/// Platform locations for `io.albo.snipt`.
fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for snipt"))
}

/// Directory named by `name`, if that variable is set to something non-empty.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding the user's `config.toml`, layered below the working
/// directory's `.snipt.toml` and `snipt.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory whose `snippets/` child is the root when none is configured.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Directory holding `snipt.log`. Nothing else is cached.
pub fn get_cache_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CACHE_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.cache_dir().to_path_buf())
}

/// Snippet root used when neither the command line nor a config file names one.
pub fn default_snippets_dir() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(SNIPPETS_DIR_NAME))
}

/// Log file written by the binary while the terminal UI owns the screen.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(get_cache_dir()?.join(LOG_FILE_NAME))
}
