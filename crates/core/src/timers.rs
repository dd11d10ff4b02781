//! Fire-once timers for single-threaded event loops.
//!
//! Timers are plain values with a deadline. The loop asks for the ones that
//! are due and feeds them back to whoever scheduled them; nothing is ever
//! cancelled; stale timers are filtered by their receiver.

use std::time::{Duration, Instant};

/// Deadline-ordered queue of pending timers.
#[derive(Debug)]
pub struct TimerQueue<T> {
	pending: Vec<(Instant, T)>,
}

impl<T> Default for TimerQueue<T> {
	fn default() -> Self {
		Self {
			pending: Vec::new(),
		}
	}
}

impl<T> TimerQueue<T> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Schedule `timer` to fire at `deadline`.
	pub fn schedule(&mut self, deadline: Instant, timer: T) {
		// Insert after any timer with the same deadline so ties fire in
		// scheduling order.
		let position = self
			.pending
			.partition_point(|(existing, _)| *existing <= deadline);
		self.pending.insert(position, (deadline, timer));
	}

	/// Schedule `timer` to fire `delay` after `now`.
	pub fn schedule_after(&mut self, now: Instant, delay: Duration, timer: T) {
		self.schedule(now + delay, timer);
	}

	/// Remove and return every timer due at `now`, earliest first.
	pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
		let due = self
			.pending
			.partition_point(|(deadline, _)| *deadline <= now);
		self.pending
			.drain(..due)
			.map(|(_, timer)| timer)
			.collect()
	}

	/// Deadline of the next timer to fire.
	pub fn next_deadline(&self) -> Option<Instant> {
		self.pending.first().map(|(deadline, _)| *deadline)
	}

	pub fn len(&self) -> usize {
		self.pending.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}
}
