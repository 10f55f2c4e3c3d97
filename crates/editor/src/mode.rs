use std::fmt;

use arbor_primitives::{Cursor, Exp, Grammar, Select};

/// Where the editor's focus currently is.
pub enum Mode<G: Grammar> {
	/// A single subtree is focused.
	Cursor(Cursor<G>),
	/// A path-shaped range between two positions is focused.
	Select(Select<G>),
}

/// Payload-free tag of a [`Mode`], used in rejections and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
	Cursor,
	Select,
}

impl fmt::Display for ModeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Cursor => f.write_str("cursor"),
			Self::Select => f.write_str("select"),
		}
	}
}

impl<G: Grammar> Mode<G> {
	pub fn kind(&self) -> ModeKind {
		match self {
			Self::Cursor(_) => ModeKind::Cursor,
			Self::Select(_) => ModeKind::Select,
		}
	}

	/// The focused subtree: the cursor's expression, or the innermost
	/// selected subtree.
	pub fn focus(&self) -> &Exp<G> {
		match self {
			Self::Cursor(cursor) => &cursor.exp,
			Self::Select(select) => select.exp(),
		}
	}

	/// Reassembles the whole document.
	pub fn root_exp(&self) -> Exp<G> {
		match self {
			Self::Cursor(cursor) => cursor.root_exp(),
			Self::Select(select) => select.root_exp(),
		}
	}

	pub fn as_cursor(&self) -> Option<&Cursor<G>> {
		match self {
			Self::Cursor(cursor) => Some(cursor),
			Self::Select(_) => None,
		}
	}

	pub fn as_select(&self) -> Option<&Select<G>> {
		match self {
			Self::Cursor(_) => None,
			Self::Select(select) => Some(select),
		}
	}
}

impl<G: Grammar> Clone for Mode<G> {
	fn clone(&self) -> Self {
		match self {
			Self::Cursor(cursor) => Self::Cursor(cursor.clone()),
			Self::Select(select) => Self::Select(select.clone()),
		}
	}
}

impl<G: Grammar> PartialEq for Mode<G> {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Cursor(a), Self::Cursor(b)) => a == b,
			(Self::Select(a), Self::Select(b)) => a == b,
			_ => false,
		}
	}
}

impl<G: Grammar> fmt::Debug for Mode<G> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Cursor(cursor) => f.debug_tuple("Cursor").field(cursor).finish(),
			Self::Select(select) => f.debug_tuple("Select").field(select).finish(),
		}
	}
}
