use std::env;
use std::io::{self, Write};
use std::process::{Child, Command, Stdio};

use super::{ClipboardSink, SinkError};

/// Clipboard provider backed by an external program reading stdin.
///
/// The content is written to the child's stdin, the pipe is closed, and the
/// child is waited on. A missing binary (or a missing required environment
/// variable such as `WAYLAND_DISPLAY`) makes the provider unavailable; a
/// write error or non-zero exit makes it fail.
#[derive(Debug, Clone)]
pub struct CommandSink {
	name: String,
	program: String,
	args: Vec<String>,
	required_env: Option<String>,
}

impl CommandSink {
	pub fn new(name: impl Into<String>, program: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			program: program.into(),
			args: Vec::new(),
			required_env: None,
		}
	}

	#[must_use]
	pub fn args<I, S>(mut self, args: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.args.extend(args.into_iter().map(Into::into));
		self
	}

	/// Only consider this provider when `var` is set to a non-empty value.
	#[must_use]
	pub fn requires_env(mut self, var: impl Into<String>) -> Self {
		self.required_env = Some(var.into());
		self
	}

	fn spawn(&self) -> Result<Child, SinkError> {
		Command::new(&self.program)
			.args(&self.args)
			.stdin(Stdio::piped())
			.stdout(Stdio::null())
			.stderr(Stdio::null())
			.spawn()
			.map_err(|err| match err.kind() {
				io::ErrorKind::NotFound => {
					SinkError::unavailable(&self.name, format!("`{}` not found", self.program))
				}
				_ => SinkError::failed(&self.name, err),
			})
	}
}

impl ClipboardSink for CommandSink {
	fn name(&self) -> &str {
		&self.name
	}

	fn write(&self, bytes: &[u8]) -> Result<(), SinkError> {
		if let Some(var) = &self.required_env
			&& env::var_os(var).is_none_or(|value| value.is_empty())
		{
			return Err(SinkError::unavailable(&self.name, format!("{var} is not set")));
		}

		let mut child = self.spawn()?;
		let written = match child.stdin.take() {
			Some(mut stdin) => stdin.write_all(bytes).and_then(|()| stdin.flush()),
			None => Err(io::Error::other("stdin was not captured")),
		};

		if let Err(err) = written {
			let _ = child.kill();
			let _ = child.wait();
			return Err(SinkError::failed(&self.name, err));
		}

		let status = child
			.wait()
			.map_err(|err| SinkError::failed(&self.name, err))?;
		if status.success() {
			Ok(())
		} else {
			Err(SinkError::failed(&self.name, status))
		}
	}
}
