use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for various UI elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Style for borders and titles.
	pub header: Style,
	/// Base style for list rows.
	pub row: Style,
	/// Style for the row under the cursor.
	pub row_highlight: Style,
	/// Style for the row under the cursor while a copy is being acknowledged.
	pub feedback: Style,
	/// Style for the prompt label.
	pub prompt: Style,
	/// Style for the placeholder and empty states.
	pub empty: Style,
	/// Style for matched characters.
	pub highlight: Style,
	/// Style for the status line.
	pub status: Style,
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

pub const NORD: Theme = Theme {
	header: Style::new().fg(Color::Rgb(76, 86, 106)),
	row: Style::new().fg(Color::Rgb(216, 222, 233)),
	row_highlight: Style::new()
		.fg(Color::Rgb(236, 239, 244))
		.bg(Color::Rgb(94, 129, 172)),
	feedback: Style::new()
		.fg(Color::Rgb(236, 239, 244))
		.bg(Color::Rgb(129, 161, 193))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(136, 192, 208)),
	empty: Style::new().fg(Color::Rgb(97, 110, 136)),
	highlight: Style::new()
		.fg(Color::Rgb(235, 203, 139))
		.add_modifier(Modifier::BOLD),
	status: Style::new().fg(Color::Rgb(216, 222, 233)),
};

pub const LIGHT: Theme = Theme {
	header: Style::new().fg(Color::Rgb(15, 23, 42)),
	row: Style::new().fg(Color::Rgb(30, 41, 59)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	feedback: Style::new()
		.bg(Color::Rgb(0, 102, 153))
		.fg(Color::Rgb(248, 250, 252))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	status: Style::new().fg(Color::Rgb(51, 65, 85)),
};

struct BuiltinTheme {
	name: &'static str,
	aliases: &'static [&'static str],
	theme: Theme,
}

const BUILTINS: &[BuiltinTheme] = &[
	BuiltinTheme {
		name: "nord",
		aliases: &["dark", "default"],
		theme: NORD,
	},
	BuiltinTheme {
		name: "light",
		aliases: &[],
		theme: LIGHT,
	},
];

/// Get the default built-in theme.
#[must_use]
pub fn default_theme() -> Theme {
	NORD
}

/// Canonical names of the built-in themes, in registration order.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUILTINS.iter().map(|builtin| builtin.name)
}

/// Look a theme up by name or alias, ignoring case and surrounding whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = name.trim().to_ascii_lowercase();
	BUILTINS
		.iter()
		.find(|builtin| builtin.name == wanted || builtin.aliases.contains(&wanted.as_str()))
		.map(|builtin| builtin.theme)
}
