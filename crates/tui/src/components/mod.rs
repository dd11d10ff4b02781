//! Reusable widgets for the picker screen.

pub mod highlight;
pub mod list;
pub mod prompt;
pub mod scrollbar;
pub mod status;
