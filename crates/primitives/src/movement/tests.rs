use proptest::prelude::*;

use super::*;
use crate::expr::Exp;
use crate::select::Orient;
use crate::strategies::arb_cursor;
use crate::test_helpers::{Lambda, app, lam, spine, var};

fn at(exp: Exp<Lambda>, path: &[usize]) -> Cursor<Lambda> {
	path.iter().fold(Cursor::root(exp), |c, &i| c.move_down(i).unwrap())
}

fn walk(g: &Lambda, start: Cursor<Lambda>, step: fn(&Lambda, &Cursor<Lambda>) -> Option<Cursor<Lambda>>) -> Vec<Exp<Lambda>> {
	let mut seen = vec![start.exp.clone()];
	let mut cur = start;
	while let Some(next) = step(g, &cur) {
		seen.push(next.exp.clone());
		cur = next;
	}
	seen
}

#[test]
fn next_descends_then_slides_right() {
	let g = Lambda::default();
	let order = walk(&g, Cursor::root(spine()), move_next);
	assert_eq!(order, vec![spine(), var("a"), var("b"), var("c"), var("d")]);
	assert_eq!(move_next(&g, &Cursor::root(spine())).unwrap(), at(spine(), &[0, 0, 0]));
}

#[test]
fn prev_slides_left_then_descends_right() {
	let g = Lambda::default();
	let order = walk(&g, at(spine(), &[1]), move_prev);
	assert_eq!(order, vec![var("d"), var("c"), var("b"), var("a")]);
}

#[test]
fn next_lands_on_the_bottom_left_of_the_right_sibling() {
	let g = Lambda::default();
	let doc = app(var("f"), app(app(var("x"), var("y")), var("z")));
	let next = move_next(&g, &at(doc.clone(), &[0])).unwrap();
	assert_eq!(next, at(doc.clone(), &[1, 0, 0]));
	assert_eq!(move_prev(&g, &next).unwrap(), at(doc, &[0]));
}

#[test]
fn traversal_skips_invalid_positions() {
	let g = Lambda::hiding_binders();
	let doc = app(lam("x", var("x")), var("y"));

	// Bot-left stops at the abstraction because its first child is a binder.
	let first = move_next(&g, &Cursor::root(doc.clone())).unwrap();
	assert_eq!(first, at(doc.clone(), &[0]));
	assert_eq!(move_next(&g, &first).unwrap().exp, var("y"));

	let body = at(doc, &[0, 1]);
	assert!(move_prev(&g, &body).is_none());
	assert_eq!(move_prev(&Lambda::default(), &body).unwrap().index(), Some(0));

	// Nothing below the root is reachable without crossing the binder.
	assert!(move_next(&g, &Cursor::root(lam("x", var("x")))).is_none());
}

#[test]
fn ends_of_the_traversal_are_absent() {
	let g = Lambda::default();
	assert!(move_prev(&g, &Cursor::root(spine())).is_none());
	assert!(move_prev(&g, &at(spine(), &[0, 0, 0])).is_none());
	assert!(move_next(&g, &at(spine(), &[1])).is_none());
	assert!(move_next(&g, &Cursor::root(var("a"))).is_none());
}

#[test]
fn bot_left_and_bot_right_descend_spines() {
	let g = Lambda::default();
	let root = Cursor::root(spine());
	assert_eq!(move_bot_left(&g, &root).exp, var("a"));
	assert_eq!(move_bot_left(&g, &root).depth(), 3);
	assert_eq!(move_bot_right(&g, &root).exp, var("d"));
	assert_eq!(move_bot_right(&g, &root).depth(), 1);

	let leaf = at(spine(), &[1]);
	assert_eq!(move_bot_left(&g, &leaf), leaf);
}

#[test]
fn bot_left_stops_above_invalid_positions() {
	let g = Lambda::hiding_binders();
	let root = Cursor::root(lam("x", var("x")));
	assert_eq!(move_bot_left(&g, &root), root);
	assert_eq!(move_bot_right(&g, &root).exp, var("x"));
}

#[test]
fn structural_moves_respect_validity() {
	let g = Lambda::hiding_binders();
	let body = at(lam("x", var("x")), &[1]);
	assert!(move_cursor(&g, &body, Dir::Left).is_none());
	assert!(move_cursor(&Lambda::default(), &body, Dir::Left).is_some());
	assert_eq!(move_cursor(&g, &body, Dir::Up).unwrap().depth(), 0);
}

#[test]
fn linear_select_extends_from_the_fixed_boundary() {
	let g = Lambda::default();
	let anchor = at(spine(), &[0, 0]);

	let Some(Between::Select(grown)) = move_select(&g, &Select::enter(&anchor, Orient::Bot), Dir::Next) else {
		panic!("expected a selection");
	};
	assert_eq!(grown.orient(), Orient::Bot);
	assert_eq!(*grown.exp(), var("a"));
	assert_eq!(grown.outer_cursor(), anchor);

	let Some(Between::Select(sibling)) = move_select(&g, &grown, Dir::Next) else {
		panic!("expected a selection");
	};
	assert_eq!(*sibling.exp(), var("b"));
	assert_eq!(move_select(&g, &sibling, Dir::Prev), Some(Between::Select(grown.clone())));

	// `c` lies outside the anchor's subtree.
	assert!(move_select(&g, &sibling, Dir::Next).is_none());
	assert!(move_select(&g, &grown, Dir::Prev).is_none());
}

#[test]
fn linear_select_onto_the_fixed_boundary_closes_the_range() {
	let g = Lambda::default();
	let leaf = at(spine(), &[0, 0, 0]);
	let raised = Select::enter(&leaf, Orient::Top).move_boundary(Dir::Up).unwrap();
	assert_eq!(raised.orient(), Orient::Top);
	assert_eq!(raised.inner_cursor(), leaf);

	assert_eq!(move_select(&g, &raised, Dir::Next), Some(Between::Empty));
	assert!(move_select(&g, &raised, Dir::Prev).is_none());
}

proptest! {
	#[test]
	fn prop_next_and_prev_are_inverse_on_leaves(cursor in arb_cursor()) {
		let g = Lambda::default();
		prop_assume!(cursor.exp.arity() == 0);
		if let Some(next) = move_next(&g, &cursor) {
			prop_assert_eq!(move_prev(&g, &next), Some(cursor.clone()));
		}
		if let Some(prev) = move_prev(&g, &cursor) {
			prop_assert_eq!(move_next(&g, &prev), Some(cursor));
		}
	}

	#[test]
	fn prop_moves_preserve_the_root(cursor in arb_cursor()) {
		let g = Lambda::default();
		let root = cursor.root_exp();
		for dir in [Dir::Up, Dir::Down, Dir::Left, Dir::Right, Dir::Next, Dir::Prev] {
			if let Some(moved) = move_cursor(&g, &cursor, dir) {
				prop_assert_eq!(moved.root_exp(), root.clone());
			}
		}
	}
}
