use std::env;
use std::io::{self, IsTerminal, Write};

use base64::Engine;

use super::{ClipboardSink, SinkError};

const NAME: &str = "osc52";

/// Build the OSC 52 "set clipboard" sequence for `text`.
///
/// Inside tmux the sequence is wrapped in a DCS passthrough so it reaches the
/// outer terminal.
pub fn osc52_sequence(text: &[u8], tmux: bool) -> String {
	let encoded = base64::engine::general_purpose::STANDARD.encode(text);
	if tmux {
		format!("\x1bPtmux;\x1b\x1b]52;c;{encoded}\x07\x1b\\")
	} else {
		format!("\x1b]52;c;{encoded}\x07")
	}
}

/// Clipboard provider that asks the terminal emulator to set the clipboard.
///
/// Works over ssh and inside tmux, but only when stdout is a terminal.
#[derive(Debug, Clone, Default)]
pub struct Osc52Sink;

impl Osc52Sink {
	pub fn new() -> Self {
		Self
	}
}

impl ClipboardSink for Osc52Sink {
	fn name(&self) -> &str {
		NAME
	}

	fn write(&self, bytes: &[u8]) -> Result<(), SinkError> {
		let stdout = io::stdout();
		if !stdout.is_terminal() {
			return Err(SinkError::unavailable(NAME, "stdout is not a terminal"));
		}

		let sequence = osc52_sequence(bytes, env::var_os("TMUX").is_some());
		let mut stdout = stdout.lock();
		stdout
			.write_all(sequence.as_bytes())
			.and_then(|()| stdout.flush())
			.map_err(|err| SinkError::failed(NAME, err))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plain_sequence_encodes_payload() {
		assert_eq!(osc52_sequence(b"hi", false), "\x1b]52;c;aGk=\x07");
	}

	#[test]
	fn tmux_sequence_is_wrapped_in_passthrough() {
		let sequence = osc52_sequence(b"hi", true);
		assert!(sequence.starts_with("\x1bPtmux;\x1b\x1b]52;c;aGk="));
		assert!(sequence.ends_with("\x07\x1b\\"));
	}
}
