use arbor_editor::{Action, Mode, Rejection};
use arbor_primitives::test_helpers::{Lambda, app, hole, spine, var};
use arbor_primitives::{Cursor, Dir, Orient, Select, Zipper};
use pretty_assertions::assert_eq;

use crate::common::editor;

#[test]
fn descend_twice_then_climb_once() {
	let mut ed = editor(spine());
	ed.apply_action(Action::MoveCursor(Dir::Down)).unwrap();
	ed.apply_action(Action::MoveCursor(Dir::Down)).unwrap();
	assert_eq!(*ed.focus(), app(var("a"), var("b")));

	ed.apply_action(Action::MoveCursor(Dir::Up)).unwrap();
	assert_eq!(*ed.focus(), app(app(var("a"), var("b")), var("c")));
	assert_eq!(ed.root_exp(), spine());
}

#[test]
fn typing_a_label_fills_a_hole() {
	let mut ed = editor(app(hole(), var("c")));
	ed.apply_action(Action::MoveCursor(Dir::Down)).unwrap();
	let zipper = ed.cursor().unwrap().zipper.clone();

	let candidates = ed.query("b");
	assert_eq!(candidates, vec![Action::Replace(var("b"))]);
	ed.submit_query("b", 0).unwrap();

	let cursor = ed.cursor().unwrap();
	assert_eq!(cursor.exp, var("b"));
	assert_eq!(cursor.zipper, zipper);
	assert_eq!(ed.root_exp(), app(var("b"), var("c")));
}

#[test]
fn space_wraps_the_focus_in_an_application() {
	let inner = app(app(var("a"), var("b")), var("c"));
	let mut outcomes = Vec::new();
	for index in 0..2 {
		let mut ed = editor(inner.clone());
		ed.apply_action(Action::MoveCursor(Dir::Down)).unwrap();
		ed.apply_action(Action::MoveCursor(Dir::Right)).unwrap();
		assert_eq!(*ed.focus(), var("c"));

		assert_eq!(ed.query(" ").len(), 2);
		ed.submit_query(" ", index).unwrap();

		// The focus stays on the original expression, now one level deeper.
		assert_eq!(*ed.focus(), var("c"));
		outcomes.push(ed.root_exp());
	}

	assert_eq!(outcomes[0], app(app(var("a"), var("b")), app(var("c"), hole())));
	assert_eq!(outcomes[1], app(app(var("a"), var("b")), app(hole(), var("c"))));
	assert_ne!(outcomes[0], outcomes[1]);
}

#[test]
fn candidate_index_wraps() {
	let mut ed = editor(var("c"));
	ed.submit_query(" ", 3).unwrap();
	assert_eq!(ed.root_exp(), app(hole(), var("c")));
}

#[test]
fn escape_reassembles_a_top_selection() {
	let mut ed = editor(spine());
	let root = Cursor::root(spine());
	let outer = root.move_down(0).unwrap();
	let c = outer.move_down(1).unwrap();
	assert_eq!(c.exp, var("c"));

	let (inner_step, _) = c.zipper.pop().unwrap();
	let select = Select::new(
		outer.zipper.clone(),
		Zipper::new().push(inner_step),
		c.exp.clone(),
		Orient::Top,
	);
	ed.apply_action(Action::SetSelect(select)).unwrap();
	assert_eq!(*ed.focus(), var("c"));

	ed.apply_action(Action::Escape).unwrap();
	let cursor = ed.cursor().unwrap();
	assert_eq!(*cursor, outer);
	assert_eq!(cursor.exp, app(app(var("a"), var("b")), var("c")));
	assert_eq!(ed.root_exp(), spine());
}

#[test]
fn selection_round_trip_through_the_clipboard() {
	let mut ed = editor(spine());
	ed.apply_action(Action::MoveCursor(Dir::Down)).unwrap();
	ed.apply_action(Action::MoveSelect(Dir::Down)).unwrap();
	ed.apply_action(Action::MoveSelect(Dir::Down)).unwrap();
	assert!(matches!(ed.mode(), Mode::Select(_)));
	assert_eq!(*ed.focus(), var("a"));

	ed.apply_action(Action::Cut).unwrap();
	assert_eq!(ed.root_exp(), app(var("a"), var("d")));
	assert_eq!(ed.apply_action(Action::Escape), Err(Rejection::WrongMode(arbor_editor::ModeKind::Cursor)));

	ed.apply_action(Action::Paste).unwrap();
	assert_eq!(ed.root_exp(), spine());
	assert_eq!(*ed.focus(), var("a"));
}

#[test]
fn invalid_positions_are_refused() {
	use arbor_editor::{Editor, EditorConfig, InvariantPolicy};
	use arbor_primitives::test_helpers::lam;

	let config = EditorConfig::default().with_invariants(InvariantPolicy::Reject);
	let doc = app(lam("x", var("x")), var("y"));
	let mut ed = Editor::with_config(Lambda::hiding_binders(), doc.clone(), config).unwrap();
	let binder = Cursor::root(doc).move_down(0).unwrap().move_down(0).unwrap();
	assert_eq!(ed.apply_action(Action::SetCursor(binder)), Err(Rejection::InvalidPosition));

	// The traversal stops above the hidden binder, then moves on to `y`.
	ed.apply_action(Action::MoveCursor(Dir::Next)).unwrap();
	assert_eq!(*ed.focus(), lam("x", var("x")));
	ed.apply_action(Action::MoveCursor(Dir::Next)).unwrap();
	assert_eq!(*ed.focus(), var("y"));
	assert_eq!(ed.apply_action(Action::MoveCursor(Dir::Next)), Err(Rejection::Boundary));
}
