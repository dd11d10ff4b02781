//! Interactive terminal front-end for the `snipt` snippet picker.
//!
//! [`Picker`] assembles a [`snipt_core::SelectionController`] with labels and
//! a theme and drives it from a ratatui event loop. The [`App`] it builds can
//! also be driven directly, which is how the tests render frames without a
//! terminal.

mod app;
mod builder;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

pub use app::App;
pub use builder::Picker;
pub use config::UiLabels;

pub use crate::input::QueryInput;
pub use crate::style::{StyleConfig, Theme, default_theme};
