use anyhow::{Context, Result};
use snipt_core::{CandidateSet, Dispatcher, candidates};
use snipt_tui::Picker;
use tracing::info;

use crate::settings::ResolvedConfig;

/// A loaded snippet tree plus the settings needed to pick from it.
pub(crate) struct SnippetWorkflow {
	candidates: CandidateSet,
	settings: ResolvedConfig,
}

impl SnippetWorkflow {
	/// Enumerate the snippets below the configured root.
	pub(crate) fn from_config(settings: ResolvedConfig) -> Result<Self> {
		let candidates = candidates::load(&settings.root, &settings.walk)
			.with_context(|| format!("failed to load snippets from {}", settings.root.display()))?;
		info!(
			root = %settings.root.display(),
			count = candidates.len(),
			"snippets loaded"
		);
		Ok(Self {
			candidates,
			settings,
		})
	}

	pub(crate) fn candidates(&self) -> &CandidateSet {
		&self.candidates
	}

	/// Assemble the picker with the configured providers, labels and timings.
	pub(crate) fn into_picker(self) -> Picker {
		let settings = self.settings;
		Picker::new(self.candidates)
			.with_dispatcher(Dispatcher::from_names(&settings.providers))
			.with_timings(settings.timings)
			.with_prompt(settings.title)
			.with_theme_name(&settings.theme)
			.with_initial_query(settings.initial_query)
	}
}
