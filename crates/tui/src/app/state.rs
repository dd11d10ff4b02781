use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use snipt_core::{Input, SelectionController, SessionOutcome, SessionState, Timer, TimerQueue};

use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::StyleConfig;

/// Picker state shared between the event loop, input handling and drawing.
pub struct App<'a> {
	pub(crate) controller: SelectionController,
	pub(crate) input: QueryInput<'a>,
	pub(crate) labels: UiLabels,
	pub(crate) style: StyleConfig,
	pub(crate) list_state: ListState,
	pub(crate) status: String,
	pub(crate) feedback_active: bool,
	pub(crate) timers: TimerQueue<Timer>,
	pub(crate) terminated: bool,
	/// Rows the list could show on the last draw; drives page navigation.
	pub(crate) viewport_rows: usize,
	/// Inner area of the list on the last draw, for mouse hit testing.
	pub(crate) list_area: Option<Rect>,
}

impl<'a> App<'a> {
	/// Wrap a controller with default labels and style.
	pub fn new(controller: SelectionController) -> Self {
		let status = controller.view().status().to_string();
		let mut list_state = ListState::default();
		list_state.select(controller.view().cursor());

		let labels = UiLabels::default();
		let style = StyleConfig::default();
		let mut input = QueryInput::default();
		input.set_placeholder(labels.placeholder.clone(), style.theme.empty);

		Self {
			controller,
			input,
			labels,
			style,
			list_state,
			status,
			feedback_active: false,
			timers: TimerQueue::new(),
			terminated: false,
			viewport_rows: 0,
			list_area: None,
		}
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.input
			.set_placeholder(labels.placeholder.clone(), self.style.theme.empty);
		self.labels = labels;
		self
	}

	#[must_use]
	pub fn with_style(mut self, style: StyleConfig) -> Self {
		self.input
			.set_placeholder(self.labels.placeholder.clone(), style.theme.empty);
		self.style = style;
		self
	}

	/// Pre-fill the query and filter the list to it.
	#[must_use]
	pub fn with_initial_query(mut self, query: &str) -> Self {
		if query.is_empty() {
			return self;
		}
		let mut input = QueryInput::new(query);
		input.set_placeholder(self.labels.placeholder.clone(), self.style.theme.empty);
		self.input = input;
		let effects = self.controller.handle(Input::Query(query.to_string()));
		self.apply_effects(effects, Instant::now());
		self
	}

	/// Current query text.
	pub fn query(&self) -> &str {
		self.input.text()
	}

	pub fn status(&self) -> &str {
		&self.status
	}

	pub fn state(&self) -> SessionState {
		self.controller.state()
	}

	/// Whether the acknowledgment highlight is showing.
	pub fn feedback_active(&self) -> bool {
		self.feedback_active
	}

	/// Whether the controller asked for the display to be torn down.
	pub fn is_terminated(&self) -> bool {
		self.terminated
	}

	/// Hand back how the session ended.
	///
	/// A session that never produced an outcome counts as cancelled with the
	/// current query.
	pub fn into_outcome(mut self) -> SessionOutcome {
		self.controller
			.take_outcome()
			.unwrap_or_else(|| SessionOutcome::Cancelled {
				query: self.input.text().to_string(),
			})
	}
}
