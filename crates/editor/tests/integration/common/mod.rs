//! Common utilities for editor integration tests.

use arbor_editor::{Action, Editor, EditorConfig, InvariantPolicy};
use arbor_primitives::test_helpers::{Lambda, app, lam, spine, var};
use arbor_primitives::{Dir, Exp};
use proptest::prelude::*;

/// Editor over the test grammar that rejects ill-formed edits instead of
/// panicking.
pub fn editor(root: Exp<Lambda>) -> Editor<Lambda> {
	let _ = tracing_subscriber::fmt::try_init();
	let config = EditorConfig::default().with_invariants(InvariantPolicy::Reject);
	Editor::with_config(Lambda::default(), root, config).unwrap()
}

/// A handful of documents with different shapes and categories.
pub fn arb_document() -> impl Strategy<Value = Exp<Lambda>> {
	prop_oneof![
		Just(spine()),
		Just(lam("x", app(var("x"), var("y")))),
		Just(app(lam("f", var("f")), app(var("a"), var("b")))),
		Just(var("z")),
	]
}

pub fn arb_dir() -> impl Strategy<Value = Dir> {
	prop_oneof![
		Just(Dir::Up),
		Just(Dir::Down),
		Just(Dir::Left),
		Just(Dir::Right),
		Just(Dir::Next),
		Just(Dir::Prev),
	]
}

/// Actions that need no payload beyond a direction.
pub fn arb_action() -> impl Strategy<Value = Action<Lambda>> {
	prop_oneof![
		4 => arb_dir().prop_map(Action::MoveCursor),
		3 => arb_dir().prop_map(Action::MoveSelect),
		1 => Just(Action::Copy),
		1 => Just(Action::Cut),
		1 => Just(Action::Paste),
		1 => Just(Action::Delete),
		1 => Just(Action::Escape),
	]
}
