use anyhow::Result;
use serde_json::{Value, json};
use snipt_core::SessionOutcome;

/// Print a plain-text representation of the session outcome.
///
/// Failures go to stderr so a copy can be scripted on the exit status alone.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	match outcome {
		SessionOutcome::Copied { candidate, .. } => {
			println!("Copied: {}", candidate.display_name());
		}
		SessionOutcome::Cancelled { .. } => println!("Cancelled"),
		SessionOutcome::Failed { error, .. } => eprintln!("Error: {error}"),
	}
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	let (status, provider, query, error) = match outcome {
		SessionOutcome::Copied { provider, .. } => {
			("copied", Value::from(provider.as_str()), Value::Null, Value::Null)
		}
		SessionOutcome::Cancelled { query } => {
			("cancelled", Value::Null, Value::from(query.as_str()), Value::Null)
		}
		SessionOutcome::Failed { error, .. } => {
			("failed", Value::Null, Value::Null, Value::from(error.to_string()))
		}
	};
	let candidate = outcome.candidate();

	let payload = json!({
		"status": status,
		"snippet": candidate.map(|candidate| candidate.display_name()),
		"path": candidate.map(|candidate| candidate.full_path().display().to_string()),
		"provider": provider,
		"query": query,
		"error": error,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// Process exit status for a finished session: 1 when the copy failed.
pub(crate) fn exit_code(outcome: &SessionOutcome) -> u8 {
	u8::from(outcome.is_failure())
}
