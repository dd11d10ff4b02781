//! Candidate list with cursor and scrollbar.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use snipt_core::Candidate;

use super::highlight::highlight_line;
use super::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;

/// Marker drawn in front of the row under the cursor.
pub const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Everything the list needs to draw one frame.
pub struct ListView<'a> {
	pub title: String,
	pub candidates: Vec<&'a Candidate>,
	pub query: &'a str,
	pub empty_message: &'a str,
	/// Use the acknowledgment style for the row under the cursor.
	pub feedback: bool,
}

/// Render the list into `area`, keeping `state` in sync with the viewport.
///
/// Returns the number of rows that fit inside the border.
pub fn render_list(
	frame: &mut Frame,
	area: Rect,
	view: ListView<'_>,
	state: &mut ListState,
	theme: &Theme,
) -> usize {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.header)
		.title(Line::styled(view.title, theme.header));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let viewport = usize::from(inner.height);
	if view.candidates.is_empty() {
		*state.offset_mut() = 0;
		frame.render_widget(
			Paragraph::new(Line::styled(view.empty_message.to_string(), theme.empty)),
			inner,
		);
		return viewport;
	}

	let metrics = ScrollMetrics::compute(view.candidates.len(), viewport);
	let mut content = inner;
	if metrics.needs_scrollbar {
		keep_cursor_visible(state, metrics);
		let mut bar = metrics.state(state.offset());
		content = render_scrollbar(frame, inner, &mut bar, theme);
	}

	let name_width = usize::from(content.width)
		.saturating_sub(unicode_width::UnicodeWidthStr::width(HIGHLIGHT_SYMBOL));
	let items: Vec<ListItem> = view
		.candidates
		.iter()
		.map(|candidate| {
			ListItem::new(highlight_line(
				candidate.display_name(),
				view.query,
				Some(name_width),
				theme.row,
				theme.highlight,
			))
		})
		.collect();

	let selected_style = if view.feedback {
		theme.feedback
	} else {
		theme.row_highlight
	};
	let list = List::new(items)
		.highlight_symbol(HIGHLIGHT_SYMBOL)
		.highlight_style(selected_style);
	frame.render_stateful_widget(list, content, state);

	viewport
}

fn keep_cursor_visible(state: &mut ListState, metrics: ScrollMetrics) {
	let Some(selected) = state.selected() else {
		return;
	};
	let offset = state.offset();
	if selected < offset {
		*state.offset_mut() = selected;
	} else if selected >= offset + metrics.viewport_len {
		*state.offset_mut() = selected + 1 - metrics.viewport_len;
	}
	*state.offset_mut() = state.offset().min(metrics.max_scroll);
}
