//! Selection lifecycle: browse, confirm, dispatch, acknowledge, close.
//!
//! [`SelectionController`] is a pure state machine over the filter view. It
//! consumes abstract [`Input`]s and fired [`Timer`]s and answers with
//! [`Effect`]s for the display to carry out. The only blocking work it does
//! is the bounded read of the chosen file and the clipboard dispatch.
//!
//! ```text
//! Browsing --confirm--> Confirmed --read ok--> Dispatching --copied--> Feedback --close timer--> Closing
//!    |                      |                       |                     |
//!    +------abort-----------+------read error-------+------no sink--------+------abort-----------> Closing
//! ```

mod types;

#[cfg(test)]
mod tests;

use std::fs;

use tracing::{debug, info, warn};

pub use types::{
	Effect, Input, SessionError, SessionOutcome, SessionState, SessionToken, Timer, TimerKind,
	Timings,
};

use crate::candidates::Candidate;
use crate::clipboard::Dispatcher;
use crate::filter::FilterView;

/// Drives one picking session from browsing to shutdown.
#[derive(Debug)]
pub struct SelectionController {
	view: FilterView,
	dispatcher: Dispatcher,
	timings: Timings,
	state: SessionState,
	generation: u64,
	outcome: Option<SessionOutcome>,
}

impl SelectionController {
	pub fn new(view: FilterView, dispatcher: Dispatcher, timings: Timings) -> Self {
		Self {
			view,
			dispatcher,
			timings,
			state: SessionState::Browsing,
			generation: 0,
			outcome: None,
		}
	}

	pub fn state(&self) -> SessionState {
		self.state
	}

	pub fn view(&self) -> &FilterView {
		&self.view
	}

	/// Token of the most recent confirmed selection.
	pub fn token(&self) -> SessionToken {
		SessionToken(self.generation)
	}

	/// How the session ended, once it has reached [`SessionState::Closing`]
	/// (or [`SessionState::Feedback`] after a successful copy).
	pub fn outcome(&self) -> Option<&SessionOutcome> {
		self.outcome.as_ref()
	}

	pub fn take_outcome(&mut self) -> Option<SessionOutcome> {
		self.outcome.take()
	}

	/// Apply one input event.
	pub fn handle(&mut self, input: Input) -> Vec<Effect> {
		match self.state {
			SessionState::Browsing => self.handle_browsing(input),
			SessionState::Feedback => match input {
				Input::Abort => {
					debug!("closing early during feedback");
					self.close()
				}
				_ => Vec::new(),
			},
			SessionState::Confirmed | SessionState::Dispatching | SessionState::Closing => Vec::new(),
		}
	}

	fn handle_browsing(&mut self, input: Input) -> Vec<Effect> {
		match input {
			Input::Query(query) => {
				let snapshot = self.view.on_query_changed(query);
				let status = snapshot.status.to_string();
				vec![Effect::View(snapshot), Effect::Status(status)]
			}
			Input::Up => {
				let moved = self.view.move_up();
				self.cursor_effects(moved)
			}
			Input::Down => {
				let moved = self.view.move_down();
				self.cursor_effects(moved)
			}
			Input::Select(position) => {
				let moved = self.view.select(position);
				self.cursor_effects(moved)
			}
			Input::Confirm => match self.view.current_selection() {
				Some(candidate) => {
					let candidate = candidate.clone();
					self.confirm(candidate)
				}
				None => {
					debug!("confirm ignored: nothing visible");
					Vec::new()
				}
			},
			Input::Abort => {
				info!(query = self.view.query(), "selection cancelled");
				self.outcome = Some(SessionOutcome::Cancelled {
					query: self.view.query().to_string(),
				});
				self.close()
			}
		}
	}

	fn cursor_effects(&self, moved: bool) -> Vec<Effect> {
		if !moved {
			return Vec::new();
		}
		let mut effects = vec![Effect::View(self.view.snapshot())];
		if let Some(candidate) = self.view.current_selection() {
			effects.push(Effect::Status(format!(
				"Selected: {}",
				candidate.display_name()
			)));
		}
		effects
	}

	fn confirm(&mut self, candidate: Candidate) -> Vec<Effect> {
		self.generation += 1;
		let token = self.token();
		self.state = SessionState::Confirmed;
		debug!(snippet = candidate.display_name(), ?token, "selection confirmed");

		let content = match fs::read_to_string(candidate.full_path()) {
			Ok(content) => content,
			Err(source) => {
				let error = SessionError::Read {
					name: candidate.display_name().to_string(),
					path: candidate.full_path().to_path_buf(),
					source,
				};
				return self.fail(candidate, error);
			}
		};

		self.state = SessionState::Dispatching;
		let provider = match self.dispatcher.dispatch(&content) {
			Ok(provider) => provider.to_string(),
			Err(err) => return self.fail(candidate, err.into()),
		};

		self.state = SessionState::Feedback;
		let status = format!("Copied: {}", candidate.display_name());
		self.outcome = Some(SessionOutcome::Copied {
			candidate,
			provider,
		});

		let Timings {
			feedback,
			close_delay,
		} = self.timings;
		vec![
			Effect::Status(status),
			Effect::FeedbackPulse { duration: feedback },
			Effect::Schedule {
				timer: Timer {
					token,
					kind: TimerKind::FeedbackRevert,
				},
				delay: feedback,
			},
			Effect::Schedule {
				timer: Timer {
					token,
					kind: TimerKind::Close,
				},
				delay: close_delay,
			},
		]
	}

	fn fail(&mut self, candidate: Candidate, error: SessionError) -> Vec<Effect> {
		warn!(snippet = candidate.display_name(), error = %error, "selection failed");
		let status = format!("Error: {error}");
		self.outcome = Some(SessionOutcome::Failed { candidate, error });
		let mut effects = vec![Effect::Status(status)];
		effects.extend(self.close());
		effects
	}

	fn close(&mut self) -> Vec<Effect> {
		self.state = SessionState::Closing;
		vec![Effect::Terminate]
	}

	/// Apply a fired timer. Timers from a superseded selection, or arriving
	/// after the session closed, are ignored.
	pub fn on_timer(&mut self, timer: Timer) -> Vec<Effect> {
		if timer.token != self.token() || self.state != SessionState::Feedback {
			debug!(?timer, state = ?self.state, "ignoring stale timer");
			return Vec::new();
		}

		match timer.kind {
			TimerKind::FeedbackRevert => vec![Effect::FeedbackRevert],
			TimerKind::Close => self.close(),
		}
	}
}
