//! The query line at the top of the screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

/// Render the prompt label followed by the editable query.
pub fn render_prompt(
	frame: &mut Frame,
	area: Rect,
	label: &str,
	input: &QueryInput<'_>,
	theme: &Theme,
) {
	if label.is_empty() {
		input.render(frame, area);
		return;
	}

	let prefix = format!("{label} > ");
	let width = u16::try_from(prefix.width()).unwrap_or(u16::MAX);
	let [label_area, input_area] =
		Layout::horizontal([Constraint::Length(width), Constraint::Min(1)]).areas(area);

	frame.render_widget(Span::styled(prefix, theme.prompt), label_area);
	input.render(frame, input_area);
}
