use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use snipt_core::{
	ClipboardSink, Dispatcher, FilterView, SelectionController, SessionOutcome, SessionState,
	SinkError, Timings, WalkOptions, candidates,
};
use tempfile::{TempDir, tempdir};

use super::App;

struct SharedSink {
	available: bool,
	copied: Rc<RefCell<Vec<String>>>,
}

impl ClipboardSink for SharedSink {
	fn name(&self) -> &str {
		"test"
	}

	fn write(&self, bytes: &[u8]) -> Result<(), SinkError> {
		if !self.available {
			return Err(SinkError::unavailable("test", "disabled"));
		}
		self.copied
			.borrow_mut()
			.push(String::from_utf8_lossy(bytes).into_owned());
		Ok(())
	}
}

fn fixture(files: &[(&str, &str)]) -> TempDir {
	let dir = tempdir().expect("tempdir");
	for (name, body) in files {
		let path = dir.path().join(name);
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).expect("parent dirs");
		}
		fs::write(path, body).expect("write snippet");
	}
	dir
}

fn app_for(dir: &TempDir, available: bool) -> (App<'static>, Rc<RefCell<Vec<String>>>) {
	let set = candidates::load(dir.path(), &WalkOptions::default()).expect("load");
	let copied = Rc::new(RefCell::new(Vec::new()));
	let mut dispatcher = Dispatcher::default();
	dispatcher.push(SharedSink {
		available,
		copied: Rc::clone(&copied),
	});
	let controller = SelectionController::new(
		FilterView::new(Arc::new(set)),
		dispatcher,
		Timings::default(),
	);
	(App::new(controller), copied)
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
	KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		app.handle_key(key(KeyCode::Char(ch)));
	}
}

fn buffer_to_string(buffer: &Buffer) -> String {
	let area = buffer.area;
	let mut out = String::new();
	for y in area.y..area.y + area.height {
		for x in area.x..area.x + area.width {
			out.push_str(buffer[(x, y)].symbol());
		}
		out.push('\n');
	}
	out
}

fn render(app: &mut App<'_>, width: u16, height: u16) -> String {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	buffer_to_string(terminal.backend().buffer())
}

#[test]
fn initial_status_counts_every_snippet() {
	let dir = fixture(&[("a.txt", "a"), ("b.txt", "b"), ("c.txt", "c")]);
	let (app, _) = app_for(&dir, true);
	insta::assert_snapshot!(app.status(), @"Loaded 3 snippets");
}

#[test]
fn typing_filters_the_rendered_list() {
	let dir = fixture(&[
		("docker.sh", "d"),
		("git/commit.txt", "c"),
		("git/push.txt", "p"),
	]);
	let (mut app, _) = app_for(&dir, true);

	let screen = render(&mut app, 50, 10);
	assert!(screen.contains("docker.sh"));
	assert!(screen.contains("Snippets (3/3)"));

	type_text(&mut app, "push");
	assert_eq!(app.query(), "push");
	insta::assert_snapshot!(app.status(), @"Found 1 matching snippets");

	let screen = render(&mut app, 50, 10);
	assert!(screen.contains("git/push.txt"));
	assert!(!screen.contains("docker.sh"));
	assert!(screen.contains("Snippets (1/3)"));
	assert!(screen.contains("▶ "));
}

#[test]
fn empty_result_shows_message() {
	let dir = fixture(&[("a.txt", "a")]);
	let (mut app, _) = app_for(&dir, true);
	type_text(&mut app, "zzz");

	let screen = render(&mut app, 50, 10);
	assert!(screen.contains("No matching snippets"));
	insta::assert_snapshot!(app.status(), @"No matching snippets found");
}

#[test]
fn navigation_keys_move_the_cursor() {
	let dir = fixture(&[("a.txt", "a"), ("b.txt", "b"), ("c.txt", "c")]);
	let (mut app, _) = app_for(&dir, true);

	app.handle_key(key(KeyCode::Down));
	app.handle_key(ctrl('n'));
	assert_eq!(app.list_state.selected(), Some(2));
	assert_eq!(app.status(), "Selected: c.txt");

	app.handle_key(ctrl('p'));
	assert_eq!(app.list_state.selected(), Some(1));

	app.handle_key(key(KeyCode::PageUp));
	assert_eq!(app.list_state.selected(), Some(0));
}

#[test]
fn page_down_jumps_by_the_visible_rows() {
	let names: Vec<String> = (0..30).map(|i| format!("s{i:02}.txt")).collect();
	let files: Vec<(&str, &str)> = names.iter().map(|name| (name.as_str(), "x")).collect();
	let dir = fixture(&files);
	let (mut app, _) = app_for(&dir, true);

	render(&mut app, 40, 12);
	let page = app.viewport_rows;
	assert!(page > 0);

	app.handle_key(key(KeyCode::PageDown));
	assert_eq!(app.list_state.selected(), Some(page));

	let screen = render(&mut app, 40, 12);
	assert!(screen.contains(&names[page]));
}

#[test]
fn enter_copies_then_timers_close_the_session() {
	let dir = fixture(&[("greeting.txt", "hello")]);
	let (mut app, copied) = app_for(&dir, true);

	app.handle_key(key(KeyCode::Enter));
	assert_eq!(*copied.borrow(), vec!["hello".to_string()]);
	assert_eq!(app.state(), SessionState::Feedback);
	assert!(app.feedback_active());
	assert!(!app.is_terminated());
	assert_eq!(app.status(), "Copied: greeting.txt");

	let start = Instant::now();
	app.pump_timers(start + Duration::from_millis(350));
	assert!(!app.feedback_active());
	assert!(!app.is_terminated());

	app.pump_timers(start + Duration::from_secs(1));
	assert!(app.is_terminated());

	match app.into_outcome() {
		SessionOutcome::Copied { provider, candidate } => {
			assert_eq!(provider, "test");
			assert_eq!(candidate.display_name(), "greeting.txt");
		}
		other => panic!("expected a copy, got {other:?}"),
	}
}

#[test]
fn keys_during_feedback_do_not_edit_or_copy_again() {
	let dir = fixture(&[("a.txt", "a")]);
	let (mut app, copied) = app_for(&dir, true);
	app.handle_key(key(KeyCode::Enter));

	app.handle_key(key(KeyCode::Enter));
	app.handle_key(key(KeyCode::Down));
	assert_eq!(copied.borrow().len(), 1);
	assert_eq!(app.state(), SessionState::Feedback);
}

#[test]
fn failed_copy_terminates_immediately() {
	let dir = fixture(&[("a.txt", "a")]);
	let (mut app, _) = app_for(&dir, false);

	app.handle_key(key(KeyCode::Enter));
	assert!(app.is_terminated());
	assert!(!app.feedback_active());
	assert!(app.status().starts_with("Error: "));
	assert!(app.into_outcome().is_failure());
}

#[test]
fn escape_and_ctrl_c_cancel() {
	let dir = fixture(&[("a.txt", "a")]);

	let (mut app, _) = app_for(&dir, true);
	type_text(&mut app, "a");
	app.handle_key(key(KeyCode::Esc));
	assert!(app.is_terminated());
	assert!(matches!(
		app.into_outcome(),
		SessionOutcome::Cancelled { query } if query == "a"
	));

	let (mut app, copied) = app_for(&dir, true);
	app.handle_key(ctrl('c'));
	assert!(app.is_terminated());
	assert!(copied.borrow().is_empty());
}

#[test]
fn initial_query_is_applied_before_first_draw() {
	let dir = fixture(&[("alpha.txt", "a"), ("beta.txt", "b")]);
	let (app, _) = app_for(&dir, true);
	let mut app = app.with_initial_query("bet");

	assert_eq!(app.query(), "bet");
	let screen = render(&mut app, 40, 8);
	assert!(screen.contains("beta.txt"));
	assert!(!screen.contains("alpha.txt"));
}

#[test]
fn clicking_a_row_selects_it() {
	let dir = fixture(&[("a.txt", "a"), ("b.txt", "b"), ("c.txt", "c")]);
	let (mut app, _) = app_for(&dir, true);
	render(&mut app, 40, 10);
	let area = app.list_area.expect("list drawn");

	app.handle_mouse(MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column: area.x + 2,
		row: area.y + 2,
		modifiers: KeyModifiers::NONE,
	});
	assert_eq!(app.list_state.selected(), Some(2));

	app.handle_mouse(MouseEvent {
		kind: MouseEventKind::ScrollUp,
		column: area.x,
		row: area.y,
		modifiers: KeyModifiers::NONE,
	});
	assert_eq!(app.list_state.selected(), Some(1));
}
