//! Layered configuration: defaults, config files, environment, then flags.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail, ensure};
use config::{Config, ConfigError, File};
use directories::BaseDirs;
use serde::Deserialize;
use snipt_core::{Timings, WalkOptions, app_dirs};

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	snippets: SnippetsSection,
	ui: UiSection,
	clipboard: ClipboardSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SnippetsSection {
	root: Option<PathBuf>,
	include_hidden: Option<bool>,
	follow_symlinks: Option<bool>,
	respect_ignore_files: Option<bool>,
	max_depth: Option<usize>,
	extensions: Option<Vec<String>>,
	global_ignores: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	title: Option<String>,
	initial_query: Option<String>,
	theme: Option<String>,
	feedback_ms: Option<u64>,
	close_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ClipboardSection {
	providers: Option<Vec<String>>,
}

/// Settings after every layer has been merged and validated.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub(crate) root: PathBuf,
	pub(crate) walk: WalkOptions,
	pub(crate) title: String,
	pub(crate) initial_query: String,
	pub(crate) theme: String,
	pub(crate) timings: Timings,
	pub(crate) providers: Vec<String>,
}

impl ResolvedConfig {
	pub(crate) fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Root: {}", self.root.display());
		println!("  Include hidden: {}", bool_to_word(self.walk.include_hidden));
		println!("  Follow symlinks: {}", bool_to_word(self.walk.follow_symlinks));
		println!(
			"  Respect ignore files: {}",
			bool_to_word(self.walk.respect_ignore_files)
		);
		match self.walk.max_depth {
			Some(depth) => println!("  Max depth: {depth}"),
			None => println!("  Max depth: unlimited"),
		}
		match &self.walk.allowed_extensions {
			Some(exts) if !exts.is_empty() => println!("  Allowed extensions: {}", exts.join(", ")),
			_ => println!("  Allowed extensions: (all)"),
		}
		if !self.walk.global_ignores.is_empty() {
			println!("  Global ignores: {}", self.walk.global_ignores.join(", "));
		}
		println!("  Prompt title: {}", self.title);
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
		println!("  UI theme: {}", self.theme);
		println!("  Feedback: {} ms", self.timings.feedback.as_millis());
		println!("  Close delay: {} ms", self.timings.close_delay.as_millis());
		println!("  Clipboard providers: {}", self.providers.join(", "));
	}
}

pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("snipt")
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("snippets.extensions")
			.with_list_parse_key("snippets.global_ignores")
			.with_list_parse_key("clipboard.providers"),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".snipt.toml"));
		files.push(current_dir.join("snipt.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(root) = cli.root.clone() {
			self.snippets.root = Some(root);
		}
		if let Some(value) = cli.hidden {
			self.snippets.include_hidden = Some(value);
		}
		if let Some(value) = cli.follow_symlinks {
			self.snippets.follow_symlinks = Some(value);
		}
		if let Some(value) = cli.respect_ignore_files {
			self.snippets.respect_ignore_files = Some(value);
		}
		if let Some(value) = cli.max_depth {
			self.snippets.max_depth = Some(value);
		}
		if let Some(value) = &cli.extensions {
			self.snippets.extensions = Some(value.clone());
		}
		if let Some(value) = &cli.global_ignores {
			self.snippets.global_ignores = Some(value.clone());
		}

		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(value) = cli.feedback_ms {
			self.ui.feedback_ms = Some(value);
		}
		if let Some(value) = cli.close_delay_ms {
			self.ui.close_delay_ms = Some(value);
		}

		if !cli.providers.is_empty() {
			self.clipboard.providers = Some(cli.providers.clone());
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let root = match self.snippets.root {
			Some(path) => path,
			None => app_dirs::default_snippets_dir()
				.context("failed to locate the default snippets directory")?,
		};
		let root = resolve_root(root)?;

		let defaults = WalkOptions::default();
		if let Some(max_depth) = self.snippets.max_depth {
			ensure!(max_depth > 0, "max-depth must be at least 1");
		}
		let walk = WalkOptions {
			include_hidden: self
				.snippets
				.include_hidden
				.unwrap_or(defaults.include_hidden),
			follow_symlinks: self
				.snippets
				.follow_symlinks
				.unwrap_or(defaults.follow_symlinks),
			respect_ignore_files: self
				.snippets
				.respect_ignore_files
				.unwrap_or(defaults.respect_ignore_files),
			max_depth: self.snippets.max_depth,
			allowed_extensions: self
				.snippets
				.extensions
				.map(sanitize_extensions)
				.filter(|exts| !exts.is_empty()),
			global_ignores: self
				.snippets
				.global_ignores
				.map(sanitize_names)
				.unwrap_or(defaults.global_ignores),
		};

		let theme = match self.ui.theme {
			Some(name) => {
				let name = name.trim().to_ascii_lowercase();
				if snipt_tui::style::by_name(&name).is_none() {
					let known: Vec<_> = snipt_tui::style::names().collect();
					bail!("unknown theme '{name}' (available: {})", known.join(", "));
				}
				name
			}
			None => "nord".to_string(),
		};

		let default_timings = Timings::default();
		let timings = Timings {
			feedback: self
				.ui
				.feedback_ms
				.map(Duration::from_millis)
				.unwrap_or(default_timings.feedback),
			close_delay: self
				.ui
				.close_delay_ms
				.map(Duration::from_millis)
				.unwrap_or(default_timings.close_delay),
		};

		let providers = match self.clipboard.providers {
			Some(providers) => {
				let providers = sanitize_names(providers);
				ensure!(
					!providers.is_empty(),
					"at least one clipboard provider must be configured"
				);
				providers
			}
			None => vec!["wl-copy".to_string(), "xclip".to_string()],
		};

		let title = self
			.ui
			.title
			.unwrap_or_else(|| default_title_for(&root));

		Ok(ResolvedConfig {
			root,
			walk,
			title,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			theme,
			timings,
			providers,
		})
	}
}

/// Make `root` absolute and canonical, and require it to be a directory.
fn resolve_root(root: PathBuf) -> Result<PathBuf> {
	let root = expand_home(root);
	let root = if root.is_relative() {
		env::current_dir()
			.context("failed to resolve current directory for root")?
			.join(root)
	} else {
		root
	};

	let root = match fs::canonicalize(&root) {
		Ok(path) => path,
		Err(err) if err.kind() == io::ErrorKind::NotFound => {
			bail!("snippet root {} does not exist", root.display())
		}
		Err(err) => {
			return Err(err)
				.with_context(|| format!("failed to resolve snippet root {}", root.display()));
		}
	};

	let metadata = fs::metadata(&root)
		.with_context(|| format!("failed to inspect snippet root {}", root.display()))?;
	ensure!(
		metadata.is_dir(),
		"snippet root {} is not a directory",
		root.display()
	);

	Ok(root)
}

/// Expand a leading `~` component to the user's home directory. Roots from
/// config files and the environment never pass through a shell.
fn expand_home(path: PathBuf) -> PathBuf {
	let Ok(rest) = path.strip_prefix("~") else {
		return path;
	};
	match BaseDirs::new() {
		Some(dirs) if rest.as_os_str().is_empty() => dirs.home_dir().to_path_buf(),
		Some(dirs) => dirs.home_dir().join(rest),
		None => path,
	}
}

fn sanitize_extensions(values: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut cleaned = Vec::new();
	for value in values {
		let normalized = snipt_core::candidates::normalize_extension(&value);
		if normalized.is_empty() {
			continue;
		}
		if seen.insert(normalized.clone()) {
			cleaned.push(normalized);
		}
	}
	cleaned
}

fn sanitize_names(values: Vec<String>) -> Vec<String> {
	values
		.into_iter()
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
		.collect()
}

/// Show the root relative to the home directory when it lives below it.
fn default_title_for(root: &Path) -> String {
	if let Some(dirs) = BaseDirs::new()
		&& let Ok(rel) = root.strip_prefix(dirs.home_dir())
	{
		if rel.components().next().is_none() {
			return "~".to_string();
		}
		return format!("~{}{}", std::path::MAIN_SEPARATOR, rel.display());
	}
	root.display().to_string()
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
