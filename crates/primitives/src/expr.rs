//! Immutable, reference-counted expression trees.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::grammar::{Grammar, GrammarErrorFor, check_node};
use crate::zipper::Step;

#[cfg(test)]
mod tests;

/// Child storage. Most grammars have small arities.
pub type Kids<G> = SmallVec<[Exp<G>; 2]>;

/// A node of a typed tree: meta, rule, value and one child per arity slot.
///
/// Expressions are persistent values. Cloning is O(1) and every edit builds
/// a new node that shares all untouched subtrees with the old one, which is
/// what keeps history snapshots cheap.
pub struct Exp<G: Grammar> {
	node: Arc<Node<G>>,
}

struct Node<G: Grammar> {
	meta: G::Meta,
	rule: G::Rule,
	value: G::Value,
	kids: Kids<G>,
}

impl<G: Grammar> Exp<G> {
	/// Creates a node from its parts. Arity is not checked; see [`Exp::validate`].
	pub fn new(meta: G::Meta, rule: G::Rule, value: G::Value, kids: impl IntoIterator<Item = Exp<G>>) -> Self {
		Self {
			node: Arc::new(Node {
				meta,
				rule,
				value,
				kids: kids.into_iter().collect(),
			}),
		}
	}

	/// Builds the placeholder of category `meta`.
	///
	/// Holes are always built as leaves, whatever arity the grammar declares
	/// for the hole rule. A hole rule with children therefore yields a hole
	/// that fails [`Exp::validate`].
	pub fn hole(grammar: &G, meta: G::Meta) -> Self {
		let rule = grammar.hole_rule(&meta);
		let value = grammar.default_value(&rule);
		Self::new(meta, rule, value, [])
	}

	/// Builds an empty skeleton of `rule`: every child slot holds a hole.
	pub fn template(grammar: &G, meta: G::Meta, rule: G::Rule, value: G::Value) -> Self {
		let kids: Kids<G> = grammar.children(&rule).into_iter().map(|kid_meta| Self::hole(grammar, kid_meta)).collect();
		Self::new(meta, rule, value, kids)
	}

	/// Like [`Exp::template`] with the rule's default value.
	pub fn template_default(grammar: &G, meta: G::Meta, rule: G::Rule) -> Self {
		let value = grammar.default_value(&rule);
		Self::template(grammar, meta, rule, value)
	}

	#[inline]
	pub fn meta(&self) -> &G::Meta {
		&self.node.meta
	}

	#[inline]
	pub fn rule(&self) -> &G::Rule {
		&self.node.rule
	}

	#[inline]
	pub fn value(&self) -> &G::Value {
		&self.node.value
	}

	#[inline]
	pub fn kids(&self) -> &[Exp<G>] {
		&self.node.kids
	}

	/// Returns the child at `index`, if any.
	pub fn kid(&self, index: usize) -> Option<&Exp<G>> {
		self.node.kids.get(index)
	}

	/// Number of children this node actually has.
	#[inline]
	pub fn arity(&self) -> usize {
		self.node.kids.len()
	}

	/// Whether this node is the hole of its category.
	pub fn is_hole(&self, grammar: &G) -> bool {
		*self.rule() == grammar.hole_rule(self.meta())
	}

	/// Whether both handles point at the same allocation.
	#[inline]
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.node, &other.node)
	}

	/// Opens a hole at child `index`, returning the context and the child.
	///
	/// Returns `None` when `index` is outside the node's arity.
	pub fn zip_into(&self, index: usize) -> Option<(Step<G>, Exp<G>)> {
		let kids = self.kids();
		let kid = kids.get(index)?.clone();
		let step = Step::new(
			self.meta().clone(),
			self.rule().clone(),
			self.value().clone(),
			kids[..index].iter().rev().cloned(),
			kids[index + 1..].iter().cloned(),
		);
		Some((step, kid))
	}

	/// Checks this tree against `grammar`.
	///
	/// Walks with an explicit stack so deep trees do not recurse.
	pub fn validate(&self, grammar: &G) -> Result<(), GrammarErrorFor<G>> {
		let mut pending = vec![self];
		while let Some(exp) = pending.pop() {
			check_node(
				grammar,
				exp.meta(),
				exp.rule(),
				exp.kids().iter().map(|kid| Some(kid.meta().clone())),
			)?;
			pending.extend(exp.kids().iter().rev());
		}
		Ok(())
	}

	/// Total number of nodes in the tree.
	pub fn size(&self) -> usize {
		let mut count = 0;
		let mut pending = vec![self];
		while let Some(exp) = pending.pop() {
			count += 1;
			pending.extend(exp.kids());
		}
		count
	}
}

impl<G: Grammar> Clone for Exp<G> {
	fn clone(&self) -> Self {
		Self {
			node: Arc::clone(&self.node),
		}
	}
}

impl<G: Grammar> PartialEq for Exp<G> {
	fn eq(&self, other: &Self) -> bool {
		let mut pending = vec![(self, other)];
		while let Some((a, b)) = pending.pop() {
			if a.ptr_eq(b) {
				continue;
			}
			if a.meta() != b.meta()
				|| a.rule() != b.rule()
				|| a.value() != b.value()
				|| a.arity() != b.arity()
			{
				return false;
			}
			pending.extend(a.kids().iter().zip(b.kids()));
		}
		true
	}
}

impl<G: Grammar> fmt::Debug for Exp<G> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}({:?})", self.rule(), self.value())?;
		if !self.kids().is_empty() {
			f.debug_list().entries(self.kids()).finish()?;
		}
		Ok(())
	}
}
