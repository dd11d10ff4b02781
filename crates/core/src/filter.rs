//! The query-driven view over the candidate set.
//!
//! [`FilterView`] owns the current query and derives the visible subset and
//! cursor from it. Every query change is a full recompute in candidate order,
//! and the cursor is reset to the first visible entry.

use std::fmt;
use std::sync::Arc;

use crate::candidates::{Candidate, CandidateSet};
use crate::matcher::matches;

/// Status line describing the visible set for the current query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStatus {
	/// Query is empty; everything that was loaded is visible.
	Loaded { total: usize },
	/// Query is non-empty and nothing survived it.
	NoMatches,
	/// Query is non-empty and `count` candidates survived it.
	Found { count: usize },
}

impl fmt::Display for FilterStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Loaded { total } => write!(f, "Loaded {total} snippets"),
			Self::NoMatches => f.write_str("No matching snippets found"),
			Self::Found { count } => write!(f, "Found {count} matching snippets"),
		}
	}
}

/// Copy of the view handed to the display after each change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
	/// Indices into the candidate set, in candidate order.
	pub visible: Vec<usize>,
	/// Position within `visible`, `None` when it is empty.
	pub cursor: Option<usize>,
	pub status: FilterStatus,
}

/// Current query plus the visible subset and cursor derived from it.
#[derive(Debug, Clone)]
pub struct FilterView {
	candidates: Arc<CandidateSet>,
	query: String,
	visible: Vec<usize>,
	cursor: Option<usize>,
}

impl FilterView {
	/// Start with an empty query, showing every candidate.
	pub fn new(candidates: Arc<CandidateSet>) -> Self {
		let mut view = Self {
			candidates,
			query: String::new(),
			visible: Vec::new(),
			cursor: None,
		};
		view.recompute();
		view
	}

	/// Replace the query and recompute the visible set from scratch.
	pub fn on_query_changed(&mut self, query: impl Into<String>) -> ViewSnapshot {
		self.query = query.into();
		self.recompute();
		self.snapshot()
	}

	fn recompute(&mut self) {
		let query = self.query.as_str();
		self.visible = self
			.candidates
			.iter()
			.enumerate()
			.filter(|(_, candidate)| matches(query, candidate.display_name()))
			.map(|(index, _)| index)
			.collect();
		self.cursor = if self.visible.is_empty() { None } else { Some(0) };
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn candidates(&self) -> &CandidateSet {
		&self.candidates
	}

	/// Indices into the candidate set that currently match the query.
	pub fn visible(&self) -> &[usize] {
		&self.visible
	}

	pub fn cursor(&self) -> Option<usize> {
		self.cursor
	}

	/// The candidate under the cursor.
	pub fn current_selection(&self) -> Option<&Candidate> {
		let position = self.cursor?;
		let index = *self.visible.get(position)?;
		self.candidates.get(index)
	}

	/// Iterate the visible candidates in display order.
	pub fn visible_candidates(&self) -> impl Iterator<Item = &Candidate> + '_ {
		self.visible
			.iter()
			.filter_map(|&index| self.candidates.get(index))
	}

	pub fn status(&self) -> FilterStatus {
		if self.query.is_empty() {
			FilterStatus::Loaded {
				total: self.candidates.len(),
			}
		} else if self.visible.is_empty() {
			FilterStatus::NoMatches
		} else {
			FilterStatus::Found {
				count: self.visible.len(),
			}
		}
	}

	pub fn snapshot(&self) -> ViewSnapshot {
		ViewSnapshot {
			visible: self.visible.clone(),
			cursor: self.cursor,
			status: self.status(),
		}
	}

	/// Move the cursor one entry up. Returns whether it moved.
	pub fn move_up(&mut self) -> bool {
		match self.cursor {
			Some(position) if position > 0 => {
				self.cursor = Some(position - 1);
				true
			}
			_ => false,
		}
	}

	/// Move the cursor one entry down. Returns whether it moved.
	pub fn move_down(&mut self) -> bool {
		match self.cursor {
			Some(position) if position + 1 < self.visible.len() => {
				self.cursor = Some(position + 1);
				true
			}
			_ => false,
		}
	}

	/// Place the cursor at `position`, clamped into the visible range.
	/// Returns whether it moved.
	pub fn select(&mut self, position: usize) -> bool {
		let Some(last) = self.visible.len().checked_sub(1) else {
			return false;
		};
		let target = Some(position.min(last));
		let moved = self.cursor != target;
		self.cursor = target;
		moved
	}
}
