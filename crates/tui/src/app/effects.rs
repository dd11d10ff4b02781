use std::time::Instant;

use snipt_core::Effect;
use tracing::trace;

use super::App;

impl<'a> App<'a> {
	/// Carry out controller effects. Timers are armed relative to `now`.
	pub fn apply_effects(&mut self, effects: Vec<Effect>, now: Instant) {
		for effect in effects {
			match effect {
				Effect::View(snapshot) => {
					self.list_state.select(snapshot.cursor);
					if snapshot.cursor.is_none() {
						*self.list_state.offset_mut() = 0;
					}
				}
				Effect::Status(status) => self.status = status,
				Effect::FeedbackPulse { .. } => self.feedback_active = true,
				Effect::FeedbackRevert => self.feedback_active = false,
				Effect::Schedule { timer, delay } => {
					trace!(?timer, ?delay, "timer armed");
					self.timers.schedule_after(now, delay, timer);
				}
				Effect::Terminate => self.terminated = true,
			}
		}
	}

	/// Fire every timer due at `now` back into the controller.
	pub fn pump_timers(&mut self, now: Instant) {
		for timer in self.timers.drain_due(now) {
			let effects = self.controller.on_timer(timer);
			self.apply_effects(effects, now);
		}
	}
}
