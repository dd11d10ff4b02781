//! Match highlighting for candidate names.

use std::mem;

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use snipt_core::match_positions;
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "…";

/// Build a line for `name` with the characters matching `query` styled with
/// `highlight`.
///
/// Names wider than `max_width` are truncated from the start so the file name
/// stays visible, with the match positions shifted to follow.
#[must_use]
pub fn highlight_line(
	name: &str,
	query: &str,
	max_width: Option<usize>,
	base: Style,
	highlight: Style,
) -> Line<'static> {
	let positions = if query.is_empty() {
		None
	} else {
		match_positions(query, name)
	};

	let (display, positions) = match max_width {
		Some(width) => truncate_start(name, positions, width),
		None => (name.to_string(), positions),
	};

	let Some(positions) = positions.filter(|positions| !positions.is_empty()) else {
		return Line::from(Span::styled(display, base));
	};

	let mut next = positions.into_iter().peekable();
	let mut buffer = String::new();
	let mut highlighted = false;
	let mut spans = Vec::new();
	let style_for = |highlighted: bool| if highlighted { highlight } else { base };

	for (idx, ch) in display.chars().enumerate() {
		let should_highlight = next.peek().copied() == Some(idx);
		if should_highlight {
			next.next();
		}
		if should_highlight != highlighted {
			if !buffer.is_empty() {
				spans.push(Span::styled(mem::take(&mut buffer), style_for(highlighted)));
			}
			highlighted = should_highlight;
		}
		buffer.push(ch);
	}
	if !buffer.is_empty() {
		spans.push(Span::styled(buffer, style_for(highlighted)));
	}

	Line::from(spans)
}

fn truncate_start(
	text: &str,
	positions: Option<Vec<usize>>,
	max_width: usize,
) -> (String, Option<Vec<usize>>) {
	if max_width == 0 {
		return (String::new(), None);
	}
	if text.width() <= max_width {
		return (text.to_string(), positions);
	}

	let ellipsis_width = ELLIPSIS.width();
	if max_width <= ellipsis_width {
		return (ELLIPSIS.to_string(), None);
	}

	let (slice, _) = text.unicode_truncate_start(max_width - ellipsis_width);
	let slice_len = slice.chars().count();
	let trimmed = text.chars().count().saturating_sub(slice_len);
	let positions = positions.map(|positions| {
		positions
			.into_iter()
			.filter_map(|idx| idx.checked_sub(trimmed))
			.filter(|&idx| idx < slice_len)
			.map(|idx| idx + 1)
			.collect::<Vec<_>>()
	});

	(format!("{ELLIPSIS}{slice}"), positions)
}
