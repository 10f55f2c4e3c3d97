//! Grammar description consulted by every tree operation.
//!
//! A [`Grammar`] is a static, side-effect free description of which node
//! shapes are legal. It is supplied by the embedding application; the engine
//! ships no built-in grammars.

use std::fmt::Debug;

use thiserror::Error;

use crate::cursor::Cursor;
use crate::select::Select;

/// Legal node shapes for one family of trees.
///
/// The four required lookups must be mutually consistent: every rule returned
/// by [`rules`] reports [`children`] made of valid metas, and [`hole_rule`]
/// is one of [`rules`] for the same meta. Inconsistencies are not checked
/// eagerly; they surface as a [`GrammarError`] the first time the offending
/// pair is validated.
///
/// The provided methods are policy hooks. Their defaults accept every
/// position and interpret no queries.
///
/// [`rules`]: Grammar::rules
/// [`children`]: Grammar::children
/// [`hole_rule`]: Grammar::hole_rule
pub trait Grammar: Sized {
	/// Node category tag.
	type Meta: Clone + Eq + Debug;
	/// Production tag. Each rule belongs to exactly one meta.
	type Rule: Clone + Eq + Debug;
	/// Payload carried by a rule instance. Opaque to the engine.
	type Value: Clone + PartialEq + Debug;

	/// Rules legal for `meta`.
	fn rules(&self, meta: &Self::Meta) -> Vec<Self::Rule>;

	/// Ordered arity vector of `rule`.
	fn children(&self, rule: &Self::Rule) -> Vec<Self::Meta>;

	/// Payload used when `rule` is instantiated without one.
	fn default_value(&self, rule: &Self::Rule) -> Self::Value;

	/// Placeholder rule marking an incomplete subtree of `meta`.
	fn hole_rule(&self, meta: &Self::Meta) -> Self::Rule;

	/// Whether `cursor` is a position the user may focus.
	fn is_valid_cursor(&self, _cursor: &Cursor<Self>) -> bool {
		true
	}

	/// Whether `select` is a range the user may focus.
	fn is_valid_select(&self, _select: &Select<Self>) -> bool {
		true
	}

	/// Interprets partial user input typed at a focus of category `meta`.
	fn parse_query(&self, _meta: &Self::Meta, _query: &str) -> Option<(Self::Rule, Self::Value)> {
		None
	}

	/// Picks the cursor a selection collapses to on escape.
	fn escape_select(&self, select: &Select<Self>) -> Cursor<Self> {
		select.escape()
	}
}

/// A tree or context that does not match its grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError<M: Debug, R: Debug> {
	/// The rule is not listed for the node's meta.
	#[error("rule {rule:?} is not legal for {meta:?}")]
	UnknownRule {
		/// Category of the offending node.
		meta: M,
		/// Rule the node carries.
		rule: R,
	},

	/// The node has the wrong number of children for its rule.
	#[error("rule {rule:?} expects {expected} children, found {found}")]
	ArityMismatch {
		/// Rule the node carries.
		rule: R,
		/// Arity declared by the grammar.
		expected: usize,
		/// Arity found in the tree.
		found: usize,
	},

	/// A child (or the occupant of a hole) has the wrong category.
	#[error("slot {index} of {rule:?} expects {expected:?}, found {found:?}")]
	MetaMismatch {
		/// Rule of the parent node.
		rule: R,
		/// Child slot index.
		index: usize,
		/// Meta declared by the grammar for that slot.
		expected: M,
		/// Meta of the expression occupying the slot.
		found: M,
	},

	/// A step exposes a hole past the end of its rule's arity.
	#[error("hole index {index} out of range for {rule:?} with arity {arity}")]
	HoleIndexOutOfRange {
		/// Rule of the step.
		rule: R,
		/// Index of the exposed hole.
		index: usize,
		/// Arity declared by the grammar.
		arity: usize,
	},
}

/// [`GrammarError`] instantiated for a concrete grammar.
pub type GrammarErrorFor<G> = GrammarError<<G as Grammar>::Meta, <G as Grammar>::Rule>;

/// Checks that `rule` is legal for `meta` and that `kid_metas` fit its arity.
///
/// Shared by expression and step validation.
pub(crate) fn check_node<G: Grammar>(
	grammar: &G,
	meta: &G::Meta,
	rule: &G::Rule,
	kid_metas: impl ExactSizeIterator<Item = Option<G::Meta>>,
) -> Result<(), GrammarErrorFor<G>> {
	if !grammar.rules(meta).contains(rule) {
		return Err(GrammarError::UnknownRule {
			meta: meta.clone(),
			rule: rule.clone(),
		});
	}

	let expected = grammar.children(rule);
	if expected.len() != kid_metas.len() {
		return Err(GrammarError::ArityMismatch {
			rule: rule.clone(),
			expected: expected.len(),
			found: kid_metas.len(),
		});
	}

	// `None` marks the hole of a step, checked by the caller.
	for (index, (want, got)) in expected.into_iter().zip(kid_metas).enumerate() {
		if let Some(got) = got
			&& got != want
		{
			return Err(GrammarError::MetaMismatch {
				rule: rule.clone(),
				index,
				expected: want,
				found: got,
			});
		}
	}

	Ok(())
}
