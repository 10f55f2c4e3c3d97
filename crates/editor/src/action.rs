use std::fmt;

use arbor_primitives::{Cursor, Dir, Exp, Grammar, Select, Zipper};

/// Everything the editor can be asked to do.
///
/// Handlers are total: an action either produces a new state or is
/// rejected, never half-applied.
pub enum Action<G: Grammar> {
	/// Move the cursor; collapses a selection first.
	MoveCursor(Dir),
	/// Grow or shrink the selection; opens one from a cursor.
	MoveSelect(Dir),
	SetCursor(Cursor<G>),
	SetSelect(Select<G>),
	/// Overwrite the focused subtree. Cursor mode only.
	Replace(Exp<G>),
	/// Wrap the focus in the given steps, innermost first.
	Insert(Zipper<G>),
	Undo,
	Redo,
	Copy,
	Cut,
	Paste,
	Delete,
	/// Collapse a selection to a cursor.
	Escape,
}

impl<G: Grammar> Action<G> {
	/// Stable name for logging.
	pub fn name(&self) -> &'static str {
		match self {
			Self::MoveCursor(_) => "move_cursor",
			Self::MoveSelect(_) => "move_select",
			Self::SetCursor(_) => "set_cursor",
			Self::SetSelect(_) => "set_select",
			Self::Replace(_) => "replace",
			Self::Insert(_) => "insert",
			Self::Undo => "undo",
			Self::Redo => "redo",
			Self::Copy => "copy",
			Self::Cut => "cut",
			Self::Paste => "paste",
			Self::Delete => "delete",
			Self::Escape => "escape",
		}
	}
}

/// Clipboard payload.
pub enum Clip<G: Grammar> {
	/// A subtree taken from cursor mode.
	Exp(Exp<G>),
	/// A selected path, innermost step first.
	Steps(Zipper<G>),
}

impl<G: Grammar> Clone for Action<G> {
	fn clone(&self) -> Self {
		match self {
			Self::MoveCursor(dir) => Self::MoveCursor(*dir),
			Self::MoveSelect(dir) => Self::MoveSelect(*dir),
			Self::SetCursor(cursor) => Self::SetCursor(cursor.clone()),
			Self::SetSelect(select) => Self::SetSelect(select.clone()),
			Self::Replace(exp) => Self::Replace(exp.clone()),
			Self::Insert(zipper) => Self::Insert(zipper.clone()),
			Self::Undo => Self::Undo,
			Self::Redo => Self::Redo,
			Self::Copy => Self::Copy,
			Self::Cut => Self::Cut,
			Self::Paste => Self::Paste,
			Self::Delete => Self::Delete,
			Self::Escape => Self::Escape,
		}
	}
}

impl<G: Grammar> PartialEq for Action<G> {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::MoveCursor(a), Self::MoveCursor(b)) => a == b,
			(Self::MoveSelect(a), Self::MoveSelect(b)) => a == b,
			(Self::SetCursor(a), Self::SetCursor(b)) => a == b,
			(Self::SetSelect(a), Self::SetSelect(b)) => a == b,
			(Self::Replace(a), Self::Replace(b)) => a == b,
			(Self::Insert(a), Self::Insert(b)) => a == b,
			(Self::Undo, Self::Undo)
			| (Self::Redo, Self::Redo)
			| (Self::Copy, Self::Copy)
			| (Self::Cut, Self::Cut)
			| (Self::Paste, Self::Paste)
			| (Self::Delete, Self::Delete)
			| (Self::Escape, Self::Escape) => true,
			_ => false,
		}
	}
}

impl<G: Grammar> fmt::Debug for Action<G> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MoveCursor(dir) => f.debug_tuple("MoveCursor").field(dir).finish(),
			Self::MoveSelect(dir) => f.debug_tuple("MoveSelect").field(dir).finish(),
			Self::SetCursor(cursor) => f.debug_tuple("SetCursor").field(cursor).finish(),
			Self::SetSelect(select) => f.debug_tuple("SetSelect").field(select).finish(),
			Self::Replace(exp) => f.debug_tuple("Replace").field(exp).finish(),
			Self::Insert(zipper) => f.debug_tuple("Insert").field(zipper).finish(),
			Self::Undo => f.write_str("Undo"),
			Self::Redo => f.write_str("Redo"),
			Self::Copy => f.write_str("Copy"),
			Self::Cut => f.write_str("Cut"),
			Self::Paste => f.write_str("Paste"),
			Self::Delete => f.write_str("Delete"),
			Self::Escape => f.write_str("Escape"),
		}
	}
}

impl<G: Grammar> Clone for Clip<G> {
	fn clone(&self) -> Self {
		match self {
			Self::Exp(exp) => Self::Exp(exp.clone()),
			Self::Steps(steps) => Self::Steps(steps.clone()),
		}
	}
}

impl<G: Grammar> PartialEq for Clip<G> {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Exp(a), Self::Exp(b)) => a == b,
			(Self::Steps(a), Self::Steps(b)) => a == b,
			_ => false,
		}
	}
}

impl<G: Grammar> fmt::Debug for Clip<G> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Exp(exp) => f.debug_tuple("Exp").field(exp).finish(),
			Self::Steps(steps) => f.debug_tuple("Steps").field(steps).finish(),
		}
	}
}
