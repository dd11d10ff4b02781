use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use snipt_core::app_dirs;

fn describe(dir: anyhow::Result<std::path::PathBuf>) -> String {
	match dir {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	}
}

/// Produce the full version banner including the directories snipt reads and writes.
pub(super) fn long_version() -> &'static str {
	let mut details = format!("snipt {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(
		details,
		"config directory: {}",
		describe(app_dirs::get_config_dir())
	);
	let _ = writeln!(
		details,
		"snippets directory: {}",
		describe(app_dirs::default_snippets_dir())
	);
	let _ = writeln!(details, "log file: {}", describe(app_dirs::default_log_file()));

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}
