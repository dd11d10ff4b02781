mod cli;
mod logging;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use cli::{OutputFormat, exit_code, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use tracing::{error, warn};
use workflow::SnippetWorkflow;

/// Exit status for configuration problems detected before the picker starts.
const CONFIG_ERROR: u8 = 2;

fn main() -> ExitCode {
	let cli = parse_cli();

	if cli.list_themes {
		for name in snipt_tui::style::names() {
			println!("{name}");
		}
		return ExitCode::SUCCESS;
	}

	if let Err(err) = logging::init(cli.log_file.as_deref()) {
		eprintln!("snipt: logging disabled: {err:#}");
	}

	let resolved = match settings::load(&cli) {
		Ok(resolved) => resolved,
		Err(err) => {
			error!(error = %format!("{err:#}"), "invalid configuration");
			eprintln!("snipt: {err:#}");
			return ExitCode::from(CONFIG_ERROR);
		}
	};

	if cli.print_config {
		resolved.print_summary();
	}

	match run(cli.output, cli.list, resolved) {
		Ok(code) => ExitCode::from(code),
		Err(err) => {
			error!(error = %format!("{err:#}"), "snipt failed");
			eprintln!("snipt: {err:#}");
			ExitCode::FAILURE
		}
	}
}

/// Load the snippets, run the picker and print the outcome in the chosen format.
fn run(format: OutputFormat, list_only: bool, settings: ResolvedConfig) -> Result<u8> {
	let workflow = SnippetWorkflow::from_config(settings)?;

	if list_only {
		for candidate in workflow.candidates() {
			println!("{}", candidate.display_name());
		}
		return Ok(0);
	}

	if workflow.candidates().is_empty() {
		warn!("no snippets found; starting with an empty list");
	}

	let outcome = workflow.into_picker().run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(exit_code(&outcome))
}
