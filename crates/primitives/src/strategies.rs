//! Proptest strategies over the test grammar.

use proptest::prelude::*;

use crate::cursor::Cursor;
use crate::expr::Exp;
use crate::test_helpers::{Lambda, app, hole, lam, var};

pub fn arb_exp() -> impl Strategy<Value = Exp<Lambda>> {
	let leaf = prop_oneof![3 => "[a-e]".prop_map(|s| var(&s)), 1 => Just(hole())];
	leaf.prop_recursive(5, 48, 2, |inner| {
		prop_oneof![
			3 => (inner.clone(), inner.clone()).prop_map(|(f, a)| app(f, a)),
			1 => ("[x-z]", inner).prop_map(|(b, body)| lam(&b, body)),
		]
	})
}

/// A tree plus a cursor at an arbitrary position in it.
pub fn arb_cursor() -> impl Strategy<Value = Cursor<Lambda>> {
	(arb_exp(), prop::collection::vec(0..2usize, 0..8)).prop_map(|(exp, path)| {
		let mut cursor = Cursor::root(exp);
		for index in path {
			match cursor.move_down(index) {
				Some(down) => cursor = down,
				None => break,
			}
		}
		cursor
	})
}
