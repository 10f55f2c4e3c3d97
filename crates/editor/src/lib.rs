#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Structured editor engine.
//!
//! Drives a tree described by an [`arbor_primitives::Grammar`] through a
//! closed set of [`Action`]s. Every mutation goes through
//! [`Editor::apply_action`], which either commits a new [`EditorState`] and
//! snapshots the previous one, or rejects the action and leaves everything
//! untouched.
//!
//! # Main Types
//!
//! - [`Editor`] - Owns the grammar, the live state and the undo history
//! - [`EditorState`] - Mode plus clipboard; the unit of undo
//! - [`Action`] - Everything a front end can ask the editor to do
//! - [`Rejection`] - Why an action left the state unchanged
//!
//! # Architecture
//!
//! ```text
//! Editor
//! ├── grammar: G                      // Tree shape rules
//! ├── state: EditorState              // Mode (cursor | select) + clipboard
//! └── history: History<EditorState>   // Bounded past / future snapshots
//! ```
//!
//! Snapshots are cheap because expressions and zippers share structure.

/// Action set and clipboard payloads.
pub mod action;
/// Editor configuration.
pub mod config;
/// Editor front door: state, history and queries.
pub mod editor;
/// Rejection and configuration errors.
pub mod error;
/// Bounded undo/redo stacks.
pub mod history;
/// Cursor and selection modes.
pub mod mode;
/// Query string interpretation.
pub mod query;
/// Pure action handlers over editor state.
pub mod state;

pub use action::{Action, Clip};
pub use config::{DEFAULT_HISTORY_LIMIT, EditorConfig, InvariantPolicy};
pub use editor::Editor;
pub use error::{ConfigError, Rejection, RejectionFor};
pub use history::History;
pub use mode::{Mode, ModeKind};
pub use query::{interpret_query, pick_candidate};
pub use state::EditorState;
