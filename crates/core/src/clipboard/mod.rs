//! Ordered-fallback clipboard dispatch.
//!
//! A [`Dispatcher`] holds sink providers in priority order and hands content
//! to the first one that accepts it. Individual provider failures are logged
//! and skipped; only exhausting every provider is reported upward.

mod command;
mod osc52;

use std::fmt;

use thiserror::Error;
use tracing::{debug, info};

pub use command::CommandSink;
pub use osc52::{Osc52Sink, osc52_sequence};

/// A mechanism capable of accepting text for the clipboard.
pub trait ClipboardSink {
	/// Short name used in logs and status messages.
	fn name(&self) -> &str;

	/// Hand `bytes` to the clipboard.
	fn write(&self, bytes: &[u8]) -> Result<(), SinkError>;
}

/// Why a single provider did not take the content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
	/// The mechanism is not present (missing binary, no display, no terminal).
	#[error("{provider} is not available: {reason}")]
	Unavailable { provider: String, reason: String },

	/// The mechanism exists but failed while accepting the content.
	#[error("{provider} failed: {reason}")]
	Failed { provider: String, reason: String },
}

impl SinkError {
	pub fn unavailable(provider: impl Into<String>, reason: impl fmt::Display) -> Self {
		Self::Unavailable {
			provider: provider.into(),
			reason: reason.to_string(),
		}
	}

	pub fn failed(provider: impl Into<String>, reason: impl fmt::Display) -> Self {
		Self::Failed {
			provider: provider.into(),
			reason: reason.to_string(),
		}
	}
}

/// Every provider was tried and none accepted the content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
	#[error("no clipboard provider available{}", describe_attempts(.attempts))]
	NoSinkAvailable { attempts: Vec<SinkError> },
}

fn describe_attempts(attempts: &[SinkError]) -> String {
	if attempts.is_empty() {
		return String::new();
	}
	let reasons: Vec<String> = attempts.iter().map(ToString::to_string).collect();
	format!(" ({})", reasons.join("; "))
}

/// Priority-ordered list of clipboard sinks.
#[derive(Default)]
pub struct Dispatcher {
	sinks: Vec<Box<dyn ClipboardSink>>,
}

impl fmt::Debug for Dispatcher {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Dispatcher")
			.field("providers", &self.providers().collect::<Vec<_>>())
			.finish()
	}
}

impl Dispatcher {
	pub fn new(sinks: Vec<Box<dyn ClipboardSink>>) -> Self {
		Self { sinks }
	}

	/// The compositor-native sink first, then the X11 fallback.
	pub fn default_chain() -> Self {
		Self::from_names(["wl-copy", "xclip"])
	}

	/// Build a chain from provider names.
	///
	/// `wl-copy`, `xclip`, `xsel`, `pbcopy` and `osc52` map onto preset
	/// sinks; any other entry is split on whitespace and run as a custom
	/// command.
	pub fn from_names<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let sinks = names
			.into_iter()
			.filter_map(|name| sink_for_name(name.as_ref()))
			.collect();
		Self { sinks }
	}

	/// Append a lower-priority provider.
	pub fn push(&mut self, sink: impl ClipboardSink + 'static) {
		self.sinks.push(Box::new(sink));
	}

	pub fn providers(&self) -> impl Iterator<Item = &str> + '_ {
		self.sinks.iter().map(|sink| sink.name())
	}

	pub fn is_empty(&self) -> bool {
		self.sinks.is_empty()
	}

	/// Try each provider in order and return the name of the one that took
	/// `content`.
	pub fn dispatch(&self, content: &str) -> Result<&str, DispatchError> {
		let mut attempts = Vec::new();
		for sink in &self.sinks {
			match sink.write(content.as_bytes()) {
				Ok(()) => {
					info!(provider = sink.name(), bytes = content.len(), "copied to clipboard");
					return Ok(sink.name());
				}
				Err(err) => {
					debug!(provider = sink.name(), error = %err, "clipboard provider declined");
					attempts.push(err);
				}
			}
		}
		Err(DispatchError::NoSinkAvailable { attempts })
	}
}

fn sink_for_name(name: &str) -> Option<Box<dyn ClipboardSink>> {
	let name = name.trim();
	let sink: Box<dyn ClipboardSink> = match name {
		"" => return None,
		"wl-copy" => Box::new(CommandSink::new("wl-copy", "wl-copy").requires_env("WAYLAND_DISPLAY")),
		"xclip" => Box::new(CommandSink::new("xclip", "xclip").args(["-selection", "clipboard"])),
		"xsel" => Box::new(CommandSink::new("xsel", "xsel").args(["--clipboard", "--input"])),
		"pbcopy" => Box::new(CommandSink::new("pbcopy", "pbcopy")),
		"osc52" => Box::new(Osc52Sink::new()),
		custom => {
			let mut words = custom.split_whitespace();
			let program = words.next()?;
			Box::new(CommandSink::new(custom, program).args(words))
		}
	};
	Some(sink)
}
