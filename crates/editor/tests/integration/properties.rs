use arbor_editor::{Action, DEFAULT_HISTORY_LIMIT};
use arbor_primitives::Dir;
use arbor_primitives::test_helpers::spine;
use proptest::prelude::*;

use crate::common::{arb_action, arb_dir, arb_document, editor};

#[test]
fn history_is_capped_at_the_default_limit() {
	let mut ed = editor(spine());
	for _ in 0..DEFAULT_HISTORY_LIMIT + 100 {
		ed.apply_action(Action::Copy).unwrap();
	}
	assert_eq!(ed.history_len(), DEFAULT_HISTORY_LIMIT);

	for _ in 0..DEFAULT_HISTORY_LIMIT {
		ed.apply_action(Action::Undo).unwrap();
	}
	assert!(!ed.can_undo());
	assert_eq!(ed.future_len(), DEFAULT_HISTORY_LIMIT);
}

proptest! {
	#[test]
	fn prop_undo_inverts_every_applied_action(
		doc in arb_document(),
		actions in prop::collection::vec(arb_action(), 1..40),
	) {
		let mut ed = editor(doc);
		for action in actions {
			let before = ed.state().clone();
			if ed.apply_action(action).is_err() {
				prop_assert_eq!(ed.state(), &before);
				continue;
			}
			let after = ed.state().clone();

			ed.apply_action(Action::Undo).unwrap();
			prop_assert_eq!(ed.state(), &before);
			ed.apply_action(Action::Redo).unwrap();
			prop_assert_eq!(ed.state(), &after);
		}
	}

	#[test]
	fn prop_edits_keep_the_document_well_formed(
		doc in arb_document(),
		actions in prop::collection::vec(arb_action(), 1..40),
	) {
		let mut ed = editor(doc);
		for action in actions {
			let _ = ed.apply_action(action);
			prop_assert_eq!(ed.root_exp().validate(ed.grammar()), Ok(()));
		}
	}

	#[test]
	fn prop_cut_then_paste_restores_the_focus(
		doc in arb_document(),
		moves in prop::collection::vec(arb_dir(), 0..12),
	) {
		let mut ed = editor(doc);
		for dir in moves {
			let _ = ed.apply_action(Action::MoveCursor(dir));
		}
		let focus = ed.focus().clone();
		let root = ed.root_exp();

		ed.apply_action(Action::Cut).unwrap();
		prop_assert!(ed.focus().is_hole(ed.grammar()));
		ed.apply_action(Action::Paste).unwrap();
		prop_assert_eq!(ed.focus(), &focus);
		prop_assert_eq!(ed.root_exp(), root);
	}

	#[test]
	fn prop_next_and_prev_round_trip_from_a_leaf(
		doc in arb_document(),
		moves in prop::collection::vec(arb_dir(), 0..12),
	) {
		let mut ed = editor(doc);
		for dir in moves {
			let _ = ed.apply_action(Action::MoveCursor(dir));
		}
		prop_assume!(ed.focus().arity() == 0);
		let start = ed.cursor().cloned();
		if ed.apply_action(Action::MoveCursor(Dir::Next)).is_ok() {
			ed.apply_action(Action::MoveCursor(Dir::Prev)).unwrap();
			prop_assert_eq!(ed.cursor().cloned(), start);
		}
	}
}
