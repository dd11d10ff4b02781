use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::candidates::Candidate;
use crate::clipboard::DispatchError;
use crate::filter::ViewSnapshot;

/// Lifecycle of one picking session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
	/// Query edits and navigation; the initial state.
	Browsing,
	/// The candidate under the cursor was captured and is being read.
	Confirmed,
	/// The content is being handed to the clipboard providers.
	Dispatching,
	/// The copy succeeded and the acknowledgment pulse is showing.
	Feedback,
	/// Terminal. The display has been told to tear down.
	Closing,
}

/// Abstract input events, independent of any key encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
	/// The query text changed to the given value.
	Query(String),
	Up,
	Down,
	/// Move the cursor to a position in the visible list.
	Select(usize),
	Confirm,
	Abort,
}

/// Generation of a confirmed selection. Timers carry the token of the
/// session that scheduled them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SessionToken(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
	/// End of the feedback pulse.
	FeedbackRevert,
	/// Scheduled shutdown after a successful copy.
	Close,
}

/// A fire-once timer owned by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
	pub token: SessionToken,
	pub kind: TimerKind,
}

/// Delays anchored to the copy event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
	/// How long the acknowledgment pulse stays visible.
	pub feedback: Duration,
	/// How long after the copy the session closes.
	pub close_delay: Duration,
}

impl Default for Timings {
	fn default() -> Self {
		Self {
			feedback: Duration::from_millis(300),
			close_delay: Duration::from_millis(600),
		}
	}
}

/// Instructions for the display collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
	/// Visible set or cursor changed.
	View(ViewSnapshot),
	/// Replace the status line.
	Status(String),
	/// Start the acknowledgment highlight.
	FeedbackPulse { duration: Duration },
	/// End the acknowledgment highlight.
	FeedbackRevert,
	/// Arm a fire-once timer and hand it back via `on_timer` when due.
	Schedule { timer: Timer, delay: Duration },
	/// Tear the display down. Emitted exactly once per session.
	Terminate,
}

/// Failures that end a session without a copy.
#[derive(Debug, Error)]
pub enum SessionError {
	/// The chosen snippet could not be read.
	#[error("failed to read {name}: {source}")]
	Read {
		name: String,
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// No clipboard provider accepted the content.
	#[error(transparent)]
	NoSinkAvailable(#[from] DispatchError),
}

/// How a session ended.
#[derive(Debug)]
pub enum SessionOutcome {
	/// The snippet reached the clipboard through `provider`.
	Copied {
		candidate: Candidate,
		provider: String,
	},
	/// The user aborted while browsing.
	Cancelled { query: String },
	/// Reading or dispatching the chosen snippet failed.
	Failed {
		candidate: Candidate,
		error: SessionError,
	},
}

impl SessionOutcome {
	/// The snippet the session settled on, if any.
	pub fn candidate(&self) -> Option<&Candidate> {
		match self {
			Self::Copied { candidate, .. } | Self::Failed { candidate, .. } => Some(candidate),
			Self::Cancelled { .. } => None,
		}
	}

	pub fn is_failure(&self) -> bool {
		matches!(self, Self::Failed { .. })
	}
}
