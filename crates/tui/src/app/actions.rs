use std::time::Instant;

use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use snipt_core::{Input, SessionState};

use super::App;

impl<'a> App<'a> {
	/// Translate a key press into controller input.
	pub fn handle_key(&mut self, key: KeyEvent) {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		let input = match key.code {
			KeyCode::Esc => Some(Input::Abort),
			KeyCode::Char('c') if ctrl => Some(Input::Abort),
			KeyCode::Enter => Some(Input::Confirm),
			KeyCode::Up => Some(Input::Up),
			KeyCode::Char('p' | 'k') if ctrl => Some(Input::Up),
			KeyCode::Down => Some(Input::Down),
			KeyCode::Char('n' | 'j') if ctrl => Some(Input::Down),
			KeyCode::PageUp => Some(Input::Select(self.page_target(false))),
			KeyCode::PageDown => Some(Input::Select(self.page_target(true))),
			// The query is frozen once a snippet has been confirmed.
			_ if self.controller.state() != SessionState::Browsing => None,
			_ => self
				.input
				.input(key)
				.then(|| Input::Query(self.input.text().to_string())),
		};

		if let Some(input) = input {
			self.send(input);
		}
	}

	/// Scroll wheel moves the cursor; a left click selects the row under it.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		let input = match mouse.kind {
			MouseEventKind::ScrollUp => Some(Input::Up),
			MouseEventKind::ScrollDown => Some(Input::Down),
			MouseEventKind::Down(MouseButton::Left) => {
				self.row_at(mouse.column, mouse.row).map(Input::Select)
			}
			_ => None,
		};
		if let Some(input) = input {
			self.send(input);
		}
	}

	fn send(&mut self, input: Input) {
		let effects = self.controller.handle(input);
		self.apply_effects(effects, Instant::now());
	}

	fn page_target(&self, forward: bool) -> usize {
		let cursor = self.controller.view().cursor().unwrap_or(0);
		let page = self.viewport_rows.max(1);
		if forward {
			cursor.saturating_add(page)
		} else {
			cursor.saturating_sub(page)
		}
	}

	fn row_at(&self, column: u16, row: u16) -> Option<usize> {
		let area = self.list_area?;
		let inside = column >= area.x
			&& column < area.x.saturating_add(area.width)
			&& row >= area.y
			&& row < area.y.saturating_add(area.height);
		if !inside {
			return None;
		}
		let position = self.list_state.offset() + usize::from(row - area.y);
		(position < self.controller.view().visible().len()).then_some(position)
	}
}
