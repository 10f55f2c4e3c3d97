//! Error types for action handling and configuration.

use std::fmt::Debug;

use arbor_primitives::{Grammar, GrammarError};
use thiserror::Error;

use crate::mode::ModeKind;

/// Why an action was rejected. The editor state is unchanged whenever one
/// of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection<M: Debug, R: Debug> {
	/// A movement ran off the edge of the tree or the traversal.
	#[error("movement hit a boundary")]
	Boundary,

	/// The action has no meaning in the current mode.
	#[error("action is not available in {0} mode")]
	WrongMode(ModeKind),

	/// Paste with nothing on the clipboard.
	#[error("clipboard is empty")]
	EmptyClipboard,

	/// Undo with an empty history.
	#[error("nothing to undo")]
	NothingToUndo,

	/// Redo with an empty future.
	#[error("nothing to redo")]
	NothingToRedo,

	/// The grammar refused a cursor or selection position.
	#[error("position rejected by the grammar")]
	InvalidPosition,

	/// A query string had no interpretation at the focus.
	#[error("query {0:?} has no interpretation here")]
	UnrecognizedQuery(String),

	/// The subtree or context on offer has the wrong category for where it
	/// would go.
	#[error("does not fit here: {0}")]
	CategoryMismatch(GrammarError<M, R>),

	/// The action would have built an ill-formed tree, or the grammar
	/// contradicts itself.
	#[error("grammar invariant violated: {0}")]
	Invariant(GrammarError<M, R>),
}

/// [`Rejection`] specialised to a grammar's metas and rules.
pub type RejectionFor<G> = Rejection<<G as Grammar>::Meta, <G as Grammar>::Rule>;

impl<M: Debug, R: Debug> From<GrammarError<M, R>> for Rejection<M, R> {
	fn from(error: GrammarError<M, R>) -> Self {
		Self::Invariant(error)
	}
}

/// Errors that can occur when loading an [`EditorConfig`](crate::EditorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// The undo history must hold at least one entry.
	#[error("history_limit must be at least 1")]
	ZeroHistoryLimit,
}
