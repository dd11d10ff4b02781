//! Visual styling utilities.
//!
//! Themes carry the color scheme for every element the picker draws; the
//! [`StyleConfig`] wrapper leaves room for non-color knobs next to them.

/// Built-in themes and name lookup.
pub mod theme;

pub use theme::{Theme, by_name, default_theme, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	/// Creates a new style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
