//! Application state and behavior for the interactive picker.
//!
//! [`App`] owns the selection controller and everything needed to show it:
//! the query editor, the list widget state, the status line and the timers
//! the controller asked for. Submodules split input handling, effect
//! application and drawing.

mod actions;
mod effects;
mod render;
mod state;

#[cfg(test)]
mod tests;

pub use state::App;
