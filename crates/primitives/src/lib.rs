//! Core types for structured editing: grammars, expressions, zippers,
//! cursors, selections and movement.

/// Single-point focus.
pub mod cursor;
/// Movement directions.
pub mod direction;
/// Immutable expression trees.
pub mod expr;
/// Grammar trait and validation errors.
pub mod grammar;
/// Grammar-aware movement and the linear traversal.
pub mod movement;
/// Range focus.
pub mod select;
#[cfg(test)]
pub(crate) mod strategies;
/// Lambda-calculus grammar used by tests.
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
/// One-hole contexts and persistent zippers.
pub mod zipper;

pub use cursor::Cursor;
pub use direction::Dir;
pub use expr::Exp;
pub use grammar::{Grammar, GrammarError, GrammarErrorFor};
pub use movement::{move_bot_left, move_bot_right, move_cursor, move_next, move_prev, move_select};
pub use select::{Between, Orient, Select, between_cursors};
pub use zipper::{Step, Zipper};
