use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `snipt` binary.
#[derive(Parser, Debug)]
#[command(
	name = "snipt",
	version,
	long_version = long_version(),
	about = "Fuzzy-pick a text snippet and copy it to the clipboard",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "ROOT",
		help = "Directory holding the snippet files (default: <data dir>/snippets)"
	)]
	pub(crate) root: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SNIPT_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the prompt label (default: derived from root)"
	)]
	pub(crate) title: Option<String>,
	#[arg(long, value_name = "THEME", help = "Select a theme by name (default: nord)")]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'H',
		long = "hidden",
		value_parser = BoolishValueParser::new(),
		help = "Include hidden files (default: enabled)"
	)]
	pub(crate) hidden: Option<bool>,
	#[arg(
		short = 's',
		long = "follow-symlinks",
		value_parser = BoolishValueParser::new(),
		help = "Follow symbolic links while scanning (default: disabled)"
	)]
	pub(crate) follow_symlinks: Option<bool>,
	#[arg(
		long = "respect-ignore-files",
		value_parser = BoolishValueParser::new(),
		help = "Respect .ignore and .gitignore files (default: disabled)"
	)]
	pub(crate) respect_ignore_files: Option<bool>,
	#[arg(
		short = 'd',
		long = "max-depth",
		value_name = "NUM",
		help = "Limit directory traversal depth (default: unlimited)"
	)]
	pub(crate) max_depth: Option<usize>,
	#[arg(
		long = "extensions",
		value_delimiter = ',',
		value_name = "EXT",
		help = "Restrict snippets to specific file extensions (default: all)"
	)]
	pub(crate) extensions: Option<Vec<String>>,
	#[arg(
		long = "global-ignores",
		value_delimiter = ',',
		value_name = "NAME",
		help = "Comma-separated directory names to always skip (default: none)"
	)]
	pub(crate) global_ignores: Option<Vec<String>>,
	#[arg(
		long = "provider",
		value_name = "NAME",
		action = ArgAction::Append,
		help = "Clipboard provider to try, in order; repeatable (default: wl-copy, xclip)"
	)]
	pub(crate) providers: Vec<String>,
	#[arg(
		long = "feedback-ms",
		value_name = "MS",
		help = "How long the copy acknowledgment stays visible (default: 300)"
	)]
	pub(crate) feedback_ms: Option<u64>,
	#[arg(
		long = "close-delay-ms",
		value_name = "MS",
		help = "Delay between a successful copy and exit (default: 600)"
	)]
	pub(crate) close_delay_ms: Option<u64>,
	#[arg(
		long = "log-file",
		value_name = "PATH",
		help = "Write logs to this file (default: <cache dir>/snipt.log)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "list",
		help = "Print the snippets that would be offered and exit (default: disabled)"
	)]
	pub(crate) list: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
