//! Bounded undo/redo stacks.
//!
//! ```text
//! past (oldest .. newest)      current      future (newest redo .. oldest)
//! ┌───┬───┬───┐                ┌───┐        ┌───┬───┐
//! │ 0 │ 1 │ 2 │ ◄── undo ───── │ s │ ─ redo►│ 4 │ 3 │
//! └───┴───┴───┘                └───┘        └───┴───┘
//! ```
//!
//! Both stacks evict their oldest entry once they hold more than `limit`
//! snapshots.

use std::collections::VecDeque;

/// Snapshot stacks for undo and redo.
#[derive(Debug, Clone)]
pub struct History<T> {
	/// Prior states, newest at the back.
	past: VecDeque<T>,
	/// Undone states, next redo at the back.
	future: VecDeque<T>,
	limit: usize,
}

impl<T: Clone> History<T> {
	/// Creates empty stacks holding at most `limit` entries each. A limit of
	/// zero is treated as one; [`EditorConfig`](crate::EditorConfig) refuses
	/// it before it gets here.
	pub fn new(limit: usize) -> Self {
		Self {
			past: VecDeque::new(),
			future: VecDeque::new(),
			limit: limit.max(1),
		}
	}

	pub fn limit(&self) -> usize {
		self.limit
	}

	pub fn past_len(&self) -> usize {
		self.past.len()
	}

	pub fn future_len(&self) -> usize {
		self.future.len()
	}

	pub fn can_undo(&self) -> bool {
		!self.past.is_empty()
	}

	pub fn can_redo(&self) -> bool {
		!self.future.is_empty()
	}

	/// Records the state an edit is about to replace.
	///
	/// Any redo branch is discarded.
	pub fn record(&mut self, prior: T) {
		Self::push_bounded(&mut self.past, prior, self.limit);
		self.future.clear();
	}

	/// Steps back: returns the previous state and parks `current` for redo.
	pub fn undo(&mut self, current: &T) -> Option<T> {
		let prior = self.past.pop_back()?;
		Self::push_bounded(&mut self.future, current.clone(), self.limit);
		Some(prior)
	}

	/// Steps forward: returns the undone state and parks `current` for undo.
	pub fn redo(&mut self, current: &T) -> Option<T> {
		let next = self.future.pop_back()?;
		Self::push_bounded(&mut self.past, current.clone(), self.limit);
		Some(next)
	}

	fn push_bounded(stack: &mut VecDeque<T>, entry: T, limit: usize) {
		stack.push_back(entry);
		while stack.len() > limit {
			stack.pop_front();
		}
	}
}
