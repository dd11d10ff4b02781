use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;

use crate::style::Theme;

/// Render the single status line.
pub fn render_status(frame: &mut Frame, area: Rect, status: &str, theme: &Theme) {
	frame.render_widget(Line::styled(status.to_string(), theme.status), area);
}
