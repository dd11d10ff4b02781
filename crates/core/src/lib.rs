//! Core engine for the `snipt` snippet picker.
//!
//! The crate is split along the data flow of a picking session: the
//! [`candidates`] store enumerates snippet files once, the [`matcher`] decides
//! which of them survive a query, the [`filter`] view keeps the visible list
//! and cursor consistent, and the [`session`] controller drives confirmation,
//! clipboard dispatch, feedback and shutdown. Nothing in here draws; front-ends
//! react to the [`Effect`]s emitted by the controller.

pub mod app_dirs;
pub mod candidates;
pub mod clipboard;
pub mod filter;
pub mod matcher;
pub mod session;
pub mod timers;

pub use candidates::{Candidate, CandidateSet, StoreError, WalkOptions};
pub use clipboard::{ClipboardSink, DispatchError, Dispatcher, SinkError};
pub use filter::{FilterStatus, FilterView, ViewSnapshot};
pub use matcher::{match_positions, matches};
pub use session::{
	Effect, Input, SelectionController, SessionError, SessionOutcome, SessionState, SessionToken,
	Timer, TimerKind, Timings,
};
pub use timers::TimerQueue;
