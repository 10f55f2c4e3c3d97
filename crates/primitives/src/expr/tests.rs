use proptest::prelude::*;

use super::*;
use crate::grammar::GrammarError;
use crate::strategies::arb_exp;
use crate::test_helpers::{Lambda, Meta, Rule, app, hole, lam, spine, var};

#[test]
fn hole_is_a_leaf_of_the_hole_rule() {
	let g = Lambda::default();
	let h = Exp::hole(&g, Meta::Bind);
	assert_eq!(*h.rule(), Rule::BindHole);
	assert_eq!(h.arity(), 0);
	assert!(h.is_hole(&g));
}

#[test]
fn template_fills_every_slot_with_a_hole() {
	let g = Lambda::default();
	let t = Exp::template_default(&g, Meta::Exp, Rule::Lam);
	assert_eq!(t.arity(), 2);
	assert_eq!(*t.kids()[0].rule(), Rule::BindHole);
	assert_eq!(*t.kids()[1].rule(), Rule::Hole);
	assert_eq!(t.validate(&g), Ok(()));
}

#[test]
fn structural_equality() {
	assert_eq!(spine(), spine());
	assert_ne!(var("a"), var("b"));
	assert_ne!(app(var("a"), var("b")), app(var("b"), var("a")));
	assert_ne!(var("a"), Exp::new(Meta::Exp, Rule::Var, "a".into(), [hole()]));
}

#[test]
fn shared_subtrees_compare_by_pointer() {
	let shared = spine();
	let a = app(shared.clone(), var("x"));
	let b = app(shared, var("x"));
	assert!(a.kids()[0].ptr_eq(&b.kids()[0]));
	assert_eq!(a, b);
}

#[test]
fn validate_reports_arity() {
	let g = Lambda::default();
	let bad = Exp::new(Meta::Exp, Rule::App, String::new(), [var("a")]);
	assert_eq!(
		app(var("f"), bad).validate(&g),
		Err(GrammarError::ArityMismatch {
			rule: Rule::App,
			expected: 2,
			found: 1,
		})
	);
}

#[test]
fn validate_reports_meta_mismatch() {
	let g = Lambda::default();
	let bad = Exp::new(Meta::Exp, Rule::Lam, String::new(), [var("x"), var("y")]);
	assert_eq!(
		bad.validate(&g),
		Err(GrammarError::MetaMismatch {
			rule: Rule::Lam,
			index: 0,
			expected: Meta::Bind,
			found: Meta::Exp,
		})
	);
}

#[test]
fn validate_reports_unknown_rule() {
	let g = Lambda::default();
	let bad = Exp::new(Meta::Bind, Rule::Var, "x".into(), []);
	assert_eq!(
		bad.validate(&g),
		Err(GrammarError::UnknownRule {
			meta: Meta::Bind,
			rule: Rule::Var,
		})
	);
}

#[test]
fn zip_into_rejects_out_of_range() {
	assert!(var("a").zip_into(0).is_none());
	assert!(spine().zip_into(2).is_none());
}

#[test]
fn zip_into_exposes_child() {
	let e = lam("x", var("x"));
	let (step, kid) = e.zip_into(1).unwrap();
	assert_eq!(kid, var("x"));
	assert_eq!(step.index(), 1);
	assert_eq!(step.left().len(), 1);
	assert!(step.right().is_empty());
}

#[test]
fn size_counts_nodes() {
	assert_eq!(spine().size(), 7);
	assert_eq!(hole().size(), 1);
}

proptest! {
	#[test]
	fn prop_zip_round_trip(exp in arb_exp(), index in 0..2usize) {
		if let Some((step, kid)) = exp.zip_into(index) {
			prop_assert_eq!(step.zip_out(kid), exp);
		} else {
			prop_assert!(index >= exp.arity());
		}
	}

	#[test]
	fn prop_generated_trees_are_well_formed(exp in arb_exp()) {
		prop_assert_eq!(exp.validate(&Lambda::default()), Ok(()));
	}
}
