use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::{Block, Borders};

use super::App;
use crate::components::list::{ListView, render_list};
use crate::components::prompt::render_prompt;
use crate::components::status::render_status;

impl<'a> App<'a> {
	/// Draw the prompt, the candidate list and the status line.
	pub fn draw(&mut self, frame: &mut Frame) {
		let theme = self.style.theme;
		let [prompt_area, list_area, status_area] = Layout::vertical([
			Constraint::Length(3),
			Constraint::Min(3),
			Constraint::Length(1),
		])
		.areas(frame.area());

		let prompt_block = Block::default()
			.borders(Borders::ALL)
			.border_style(theme.header);
		let prompt_inner = prompt_block.inner(prompt_area);
		frame.render_widget(prompt_block, prompt_area);
		render_prompt(frame, prompt_inner, &self.labels.prompt, &self.input, &theme);

		let view = self.controller.view();
		let title = self
			.labels
			.list_title_with_counts(view.visible().len(), view.candidates().len());
		let list_view = ListView {
			title,
			candidates: view.visible_candidates().collect(),
			query: view.query(),
			empty_message: &self.labels.empty_message,
			feedback: self.feedback_active,
		};
		self.viewport_rows = render_list(frame, list_area, list_view, &mut self.list_state, &theme);
		self.list_area = Some(Block::default().borders(Borders::ALL).inner(list_area));

		render_status(frame, status_area, &self.status, &theme);
	}
}
