use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use tempfile::{TempDir, tempdir};

use super::*;
use crate::candidates::{self, WalkOptions};
use crate::clipboard::{ClipboardSink, SinkError};

struct RecordingSink {
	name: &'static str,
	available: bool,
	copied: Rc<RefCell<Vec<String>>>,
}

impl ClipboardSink for RecordingSink {
	fn name(&self) -> &str {
		self.name
	}

	fn write(&self, bytes: &[u8]) -> Result<(), SinkError> {
		if !self.available {
			return Err(SinkError::unavailable(self.name, "not installed"));
		}
		self.copied
			.borrow_mut()
			.push(String::from_utf8_lossy(bytes).into_owned());
		Ok(())
	}
}

struct Fixture {
	_dir: TempDir,
	root: std::path::PathBuf,
	copied: Rc<RefCell<Vec<String>>>,
}

impl Fixture {
	fn new(files: &[(&str, &str)]) -> Self {
		let dir = tempdir().expect("tempdir");
		let root = dir.path().to_path_buf();
		for (name, body) in files {
			let path = root.join(name);
			if let Some(parent) = path.parent() {
				fs::create_dir_all(parent).expect("parent");
			}
			fs::write(path, body).expect("write");
		}
		Self {
			_dir: dir,
			root,
			copied: Rc::new(RefCell::new(Vec::new())),
		}
	}

	fn controller(&self, providers: &[(&'static str, bool)]) -> SelectionController {
		let set = candidates::load(&self.root, &WalkOptions::default()).expect("load");
		let mut dispatcher = Dispatcher::default();
		for &(name, available) in providers {
			dispatcher.push(RecordingSink {
				name,
				available,
				copied: Rc::clone(&self.copied),
			});
		}
		SelectionController::new(
			FilterView::new(Arc::new(set)),
			dispatcher,
			Timings::default(),
		)
	}

	fn root(&self) -> &Path {
		&self.root
	}
}

fn count_terminates(effects: &[Effect]) -> usize {
	effects
		.iter()
		.filter(|effect| matches!(effect, Effect::Terminate))
		.count()
}

fn scheduled(effects: &[Effect]) -> Vec<(TimerKind, Duration)> {
	effects
		.iter()
		.filter_map(|effect| match effect {
			Effect::Schedule { timer, delay } => Some((timer.kind, *delay)),
			_ => None,
		})
		.collect()
}

#[test]
fn query_edits_stay_in_browsing_and_report_status() {
	let fixture = Fixture::new(&[("x.txt", "x"), ("y.txt", "y"), ("z.txt", "z")]);
	let mut controller = fixture.controller(&[("native", true)]);

	let effects = controller.handle(Input::Query("y".into()));
	assert_eq!(controller.state(), SessionState::Browsing);
	assert!(effects.contains(&Effect::Status("Found 1 matching snippets".into())));

	let effects = controller.handle(Input::Query(String::new()));
	assert!(effects.contains(&Effect::Status("Loaded 3 snippets".into())));
}

#[test]
fn navigation_reports_the_selected_snippet() {
	let fixture = Fixture::new(&[("a.txt", "a"), ("b.txt", "b")]);
	let mut controller = fixture.controller(&[("native", true)]);

	let effects = controller.handle(Input::Down);
	assert!(effects.contains(&Effect::Status("Selected: b.txt".into())));
	assert_eq!(controller.view().cursor(), Some(1));

	assert!(controller.handle(Input::Down).is_empty(), "already at the end");
	assert_eq!(controller.state(), SessionState::Browsing);
}

#[test]
fn confirm_with_nothing_visible_is_a_no_op() {
	let fixture = Fixture::new(&[("x.txt", "x")]);
	let mut controller = fixture.controller(&[("native", true)]);
	controller.handle(Input::Query("nothing-matches".into()));

	let effects = controller.handle(Input::Confirm);
	assert!(effects.is_empty());
	assert_eq!(controller.state(), SessionState::Browsing);
	assert!(controller.outcome().is_none());
}

#[test]
fn successful_copy_enters_feedback_and_schedules_both_timers() {
	let fixture = Fixture::new(&[("greeting.txt", "hello there")]);
	let mut controller = fixture.controller(&[("native", true)]);

	let effects = controller.handle(Input::Confirm);
	assert_eq!(controller.state(), SessionState::Feedback);
	assert_eq!(*fixture.copied.borrow(), vec!["hello there".to_string()]);
	assert!(effects.contains(&Effect::Status("Copied: greeting.txt".into())));
	assert!(effects.contains(&Effect::FeedbackPulse {
		duration: Duration::from_millis(300)
	}));
	assert_eq!(
		scheduled(&effects),
		vec![
			(TimerKind::FeedbackRevert, Duration::from_millis(300)),
			(TimerKind::Close, Duration::from_millis(600)),
		]
	);
	assert_eq!(count_terminates(&effects), 0);
}

#[test]
fn second_provider_succeeds_after_first_is_unavailable() {
	let fixture = Fixture::new(&[("snippet.txt", "body")]);
	let mut controller = fixture.controller(&[("wl-copy", false), ("xclip", true)]);

	let effects = controller.handle(Input::Confirm);
	assert_eq!(controller.state(), SessionState::Feedback);
	assert!(
		effects
			.iter()
			.any(|effect| matches!(effect, Effect::FeedbackPulse { .. }))
	);
	match controller.outcome() {
		Some(SessionOutcome::Copied { provider, candidate }) => {
			assert_eq!(provider, "xclip");
			assert_eq!(candidate.display_name(), "snippet.txt");
		}
		other => panic!("expected a copy, got {other:?}"),
	}
}

#[test]
fn exhausted_providers_close_without_feedback() {
	let fixture = Fixture::new(&[("snippet.txt", "body")]);
	let mut controller = fixture.controller(&[("wl-copy", false), ("xclip", false)]);

	let effects = controller.handle(Input::Confirm);
	assert_eq!(controller.state(), SessionState::Closing);
	assert_eq!(count_terminates(&effects), 1);
	assert!(
		!effects
			.iter()
			.any(|effect| matches!(effect, Effect::FeedbackPulse { .. }))
	);
	assert!(scheduled(&effects).is_empty());
	assert!(effects.iter().any(|effect| matches!(
		effect,
		Effect::Status(status) if status.starts_with("Error: no clipboard provider available")
	)));
	assert!(matches!(
		controller.outcome(),
		Some(SessionOutcome::Failed {
			error: SessionError::NoSinkAvailable(_),
			..
		})
	));
}

#[test]
fn unreadable_snippet_closes_without_dispatch() {
	let fixture = Fixture::new(&[("gone.txt", "soon deleted")]);
	let mut controller = fixture.controller(&[("native", true)]);
	fs::remove_file(fixture.root().join("gone.txt")).expect("delete after load");

	let effects = controller.handle(Input::Confirm);
	assert_eq!(controller.state(), SessionState::Closing);
	assert_eq!(count_terminates(&effects), 1);
	assert!(fixture.copied.borrow().is_empty(), "nothing was dispatched");
	let outcome = controller.take_outcome().expect("outcome");
	assert!(outcome.is_failure());
	assert!(matches!(
		outcome,
		SessionOutcome::Failed {
			error: SessionError::Read { .. },
			..
		}
	));
}

#[test]
fn abort_while_browsing_closes_without_reading() {
	let fixture = Fixture::new(&[("a.txt", "a")]);
	let mut controller = fixture.controller(&[("native", true)]);
	controller.handle(Input::Query("a".into()));

	let effects = controller.handle(Input::Abort);
	assert_eq!(effects, vec![Effect::Terminate]);
	assert_eq!(controller.state(), SessionState::Closing);
	assert!(fixture.copied.borrow().is_empty());
	assert!(matches!(
		controller.outcome(),
		Some(SessionOutcome::Cancelled { query }) if query == "a"
	));
}

#[test]
fn feedback_revert_and_close_fire_from_their_own_timers() {
	let fixture = Fixture::new(&[("a.txt", "a")]);
	let mut controller = fixture.controller(&[("native", true)]);
	controller.handle(Input::Confirm);
	let token = controller.token();

	let revert = controller.on_timer(Timer {
		token,
		kind: TimerKind::FeedbackRevert,
	});
	assert_eq!(revert, vec![Effect::FeedbackRevert]);
	assert_eq!(controller.state(), SessionState::Feedback);

	let close = controller.on_timer(Timer {
		token,
		kind: TimerKind::Close,
	});
	assert_eq!(close, vec![Effect::Terminate]);
	assert_eq!(controller.state(), SessionState::Closing);
}

#[test]
fn close_timer_does_not_wait_for_feedback_revert() {
	let fixture = Fixture::new(&[("a.txt", "a")]);
	let mut controller = fixture.controller(&[("native", true)]);
	controller.handle(Input::Confirm);

	let close = controller.on_timer(Timer {
		token: controller.token(),
		kind: TimerKind::Close,
	});
	assert_eq!(close, vec![Effect::Terminate]);
}

#[test]
fn exactly_one_terminate_per_session() {
	let fixture = Fixture::new(&[("a.txt", "a")]);
	let mut controller = fixture.controller(&[("native", true)]);
	let mut effects = controller.handle(Input::Confirm);
	let token = controller.token();

	effects.extend(controller.handle(Input::Abort));
	effects.extend(controller.on_timer(Timer {
		token,
		kind: TimerKind::FeedbackRevert,
	}));
	effects.extend(controller.on_timer(Timer {
		token,
		kind: TimerKind::Close,
	}));
	effects.extend(controller.handle(Input::Confirm));
	effects.extend(controller.handle(Input::Abort));

	assert_eq!(count_terminates(&effects), 1);
	assert_eq!(controller.state(), SessionState::Closing);
}

#[test]
fn timers_from_another_session_are_ignored() {
	let fixture = Fixture::new(&[("a.txt", "a")]);
	let mut controller = fixture.controller(&[("native", true)]);
	controller.handle(Input::Confirm);

	let stale = Timer {
		token: SessionToken(controller.token().0 + 41),
		kind: TimerKind::Close,
	};
	assert!(controller.on_timer(stale).is_empty());
	assert_eq!(controller.state(), SessionState::Feedback);
}

#[test]
fn timers_before_any_confirm_are_ignored() {
	let fixture = Fixture::new(&[("a.txt", "a")]);
	let mut controller = fixture.controller(&[("native", true)]);

	let effects = controller.on_timer(Timer {
		token: controller.token(),
		kind: TimerKind::Close,
	});
	assert!(effects.is_empty());
	assert_eq!(controller.state(), SessionState::Browsing);
}

#[test]
fn input_during_feedback_is_ignored() {
	let fixture = Fixture::new(&[("a.txt", "a"), ("b.txt", "b")]);
	let mut controller = fixture.controller(&[("native", true)]);
	controller.handle(Input::Confirm);

	assert!(controller.handle(Input::Query("b".into())).is_empty());
	assert!(controller.handle(Input::Down).is_empty());
	assert!(controller.handle(Input::Confirm).is_empty());
	assert_eq!(fixture.copied.borrow().len(), 1);
	assert_eq!(controller.view().query(), "");
}
