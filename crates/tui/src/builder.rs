use std::sync::Arc;

use anyhow::Result;
use snipt_core::{CandidateSet, Dispatcher, FilterView, SelectionController, SessionOutcome, Timings};

use crate::App;
use crate::config::UiLabels;
use crate::style::{StyleConfig, Theme};

/// A small builder for configuring the snippet picker before running it.
pub struct Picker {
	candidates: CandidateSet,
	dispatcher: Dispatcher,
	timings: Timings,
	labels: UiLabels,
	theme: Option<Theme>,
	initial_query: String,
}

impl Picker {
	/// Create a picker over an already loaded candidate set.
	pub fn new(candidates: CandidateSet) -> Self {
		Self {
			candidates,
			dispatcher: Dispatcher::default_chain(),
			timings: Timings::default(),
			labels: UiLabels::default(),
			theme: None,
			initial_query: String::new(),
		}
	}

	pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
		self.dispatcher = dispatcher;
		self
	}

	pub fn with_timings(mut self, timings: Timings) -> Self {
		self.timings = timings;
		self
	}

	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
		self.labels.prompt = prompt.into();
		self
	}

	/// Select a built-in theme by name. Unknown names keep the current theme.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = crate::style::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	/// Number of snippets the picker will offer.
	pub fn len(&self) -> usize {
		self.candidates.len()
	}

	pub fn is_empty(&self) -> bool {
		self.candidates.is_empty()
	}

	/// Assemble the application without touching the terminal.
	pub fn into_app(self) -> App<'static> {
		let view = FilterView::new(Arc::new(self.candidates));
		let controller = SelectionController::new(view, self.dispatcher, self.timings);
		let style = StyleConfig::with_theme(self.theme.unwrap_or_default());
		App::new(controller)
			.with_labels(self.labels)
			.with_style(style)
			.with_initial_query(&self.initial_query)
	}

	/// Run the interactive picker with the configured options.
	pub fn run(self) -> Result<SessionOutcome> {
		let mut app = self.into_app();
		app.run()?;
		Ok(app.into_outcome())
	}
}
