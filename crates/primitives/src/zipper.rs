//! One-hole contexts ([`Step`]) and chains of them ([`Zipper`]).
//!
//! A [`Step`] is a node with exactly one child replaced by a hole. A
//! [`Zipper`] is a chain of steps read innermost first: the head is the
//! context immediately enclosing a focus, the last step is the one nearest
//! the root.
//!
//! ```text
//!        app            zipper = [ app(□, c) , app(□, d) ]   (innermost first)
//!       /   \           focus  = app(a, b)
//!     app    d
//!    /   \
//!  [app]  c
//!  /   \
//! a     b
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::expr::{Exp, Kids};
use crate::grammar::{Grammar, GrammarError, GrammarErrorFor, check_node};


/// A node with one child slot replaced by a hole.
///
/// `left` holds the siblings before the hole, nearest first; `right` holds
/// the siblings after it in order. The hole sits at index `left.len()`.
pub struct Step<G: Grammar> {
	meta: G::Meta,
	rule: G::Rule,
	value: G::Value,
	left: Kids<G>,
	right: Kids<G>,
}

impl<G: Grammar> Step<G> {
	/// Creates a step. `left` is given nearest sibling first.
	pub fn new(
		meta: G::Meta,
		rule: G::Rule,
		value: G::Value,
		left: impl IntoIterator<Item = Exp<G>>,
		right: impl IntoIterator<Item = Exp<G>>,
	) -> Self {
		Self {
			meta,
			rule,
			value,
			left: left.into_iter().collect(),
			right: right.into_iter().collect(),
		}
	}

	/// Builds a step of `rule` whose hole is at `index` and whose other slots
	/// hold holes. Returns `None` when `index` is outside the rule's arity.
	pub fn template(grammar: &G, meta: G::Meta, rule: G::Rule, value: G::Value, index: usize) -> Option<Self> {
		let slots = grammar.children(&rule);
		if index >= slots.len() {
			return None;
		}
		let mut holes: Kids<G> = slots.into_iter().map(|m| Exp::hole(grammar, m)).collect();
		let right: Kids<G> = holes.drain(index + 1..).collect();
		holes.truncate(index);
		holes.reverse();
		Some(Self {
			meta,
			rule,
			value,
			left: holes,
			right,
		})
	}

	#[inline]
	pub fn meta(&self) -> &G::Meta {
		&self.meta
	}

	#[inline]
	pub fn rule(&self) -> &G::Rule {
		&self.rule
	}

	#[inline]
	pub fn value(&self) -> &G::Value {
		&self.value
	}

	/// Siblings left of the hole, nearest first.
	#[inline]
	pub fn left(&self) -> &[Exp<G>] {
		&self.left
	}

	/// Siblings right of the hole, in order.
	#[inline]
	pub fn right(&self) -> &[Exp<G>] {
		&self.right
	}

	/// Child index of the hole.
	#[inline]
	pub fn index(&self) -> usize {
		self.left.len()
	}

	/// Arity of the node this step was cut from.
	#[inline]
	pub fn arity(&self) -> usize {
		self.left.len() + 1 + self.right.len()
	}

	/// Category the grammar expects in the hole.
	pub fn hole_meta(&self, grammar: &G) -> Option<G::Meta> {
		grammar.children(&self.rule).into_iter().nth(self.index())
	}

	/// Plugs `exp` into the hole, rebuilding the parent node.
	pub fn zip_out(&self, exp: Exp<G>) -> Exp<G> {
		let kids = self
			.left
			.iter()
			.rev()
			.cloned()
			.chain(std::iter::once(exp))
			.chain(self.right.iter().cloned());
		Exp::new(self.meta.clone(), self.rule.clone(), self.value.clone(), kids)
	}

	/// Moves the hole one slot left, swapping `exp` back into the old slot.
	///
	/// Returns the new step and the sibling that was uncovered, or `None` at
	/// the leftmost slot.
	pub fn slide_left(&self, exp: Exp<G>) -> Option<(Step<G>, Exp<G>)> {
		let (uncovered, rest) = self.left.split_first()?;
		let right = std::iter::once(exp).chain(self.right.iter().cloned());
		let step = Self::new(self.meta.clone(), self.rule.clone(), self.value.clone(), rest.iter().cloned(), right);
		Some((step, uncovered.clone()))
	}

	/// Moves the hole one slot right. Mirror of [`Step::slide_left`].
	pub fn slide_right(&self, exp: Exp<G>) -> Option<(Step<G>, Exp<G>)> {
		let (uncovered, rest) = self.right.split_first()?;
		let left = std::iter::once(exp).chain(self.left.iter().cloned());
		let step = Self::new(self.meta.clone(), self.rule.clone(), self.value.clone(), left, rest.iter().cloned());
		Some((step, uncovered.clone()))
	}

	/// Checks the step's own shape: rule legal for its meta, arity, and the
	/// metas of every filled slot. The hole itself is not checked here.
	pub fn validate(&self, grammar: &G) -> Result<(), GrammarErrorFor<G>> {
		let slots = grammar.children(&self.rule);
		if self.index() >= slots.len() {
			return Err(GrammarError::HoleIndexOutOfRange {
				rule: self.rule.clone(),
				index: self.index(),
				arity: slots.len(),
			});
		}
		let metas = self
			.left
			.iter()
			.rev()
			.map(|kid| Some(kid.meta().clone()))
			.chain(std::iter::once(None))
			.chain(self.right.iter().map(|kid| Some(kid.meta().clone())))
			.collect::<SmallVec<[Option<G::Meta>; 4]>>();
		check_node(grammar, &self.meta, &self.rule, metas.into_iter())?;
		for kid in self.left.iter().chain(&self.right) {
			kid.validate(grammar)?;
		}
		Ok(())
	}
}

impl<G: Grammar> Clone for Step<G> {
	fn clone(&self) -> Self {
		Self {
			meta: self.meta.clone(),
			rule: self.rule.clone(),
			value: self.value.clone(),
			left: self.left.clone(),
			right: self.right.clone(),
		}
	}
}

impl<G: Grammar> PartialEq for Step<G> {
	fn eq(&self, other: &Self) -> bool {
		self.meta == other.meta
			&& self.rule == other.rule
			&& self.value == other.value
			&& self.left == other.left
			&& self.right == other.right
	}
}

impl<G: Grammar> fmt::Debug for Step<G> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}({:?})", self.rule, self.value)?;
		let mut list = f.debug_list();
		list.entries(self.left.iter().rev());
		list.entry(&format_args!("□"));
		list.entries(self.right.iter());
		list.finish()
	}
}

/// A persistent chain of steps, innermost first.
///
/// Backed by a shared singly linked list: cloning, [`Zipper::push`] and
/// [`Zipper::pop`] are O(1) and share the tail with the original.
pub struct Zipper<G: Grammar> {
	head: Option<Arc<Link<G>>>,
	len: usize,
}

struct Link<G: Grammar> {
	step: Step<G>,
	next: Option<Arc<Link<G>>>,
}

impl<G: Grammar> Zipper<G> {
	/// The empty zipper: a focus at the root.
	pub fn new() -> Self {
		Self { head: None, len: 0 }
	}

	/// Builds a zipper from steps listed root first.
	pub fn from_root_first(steps: impl IntoIterator<Item = Step<G>>) -> Self {
		steps.into_iter().fold(Self::new(), |zipper, step| zipper.push(step))
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// The innermost step.
	pub fn first(&self) -> Option<&Step<G>> {
		self.head.as_deref().map(|link| &link.step)
	}

	/// Wraps one more (inner) step around the focus side of this zipper.
	#[must_use]
	pub fn push(&self, step: Step<G>) -> Self {
		Self {
			head: Some(Arc::new(Link {
				step,
				next: self.head.clone(),
			})),
			len: self.len + 1,
		}
	}

	/// Splits off the innermost step.
	pub fn pop(&self) -> Option<(Step<G>, Zipper<G>)> {
		let link = self.head.as_deref()?;
		let rest = Self {
			head: link.next.clone(),
			len: self.len - 1,
		};
		Some((link.step.clone(), rest))
	}

	/// Iterates steps innermost first.
	pub fn iter(&self) -> Iter<'_, G> {
		Iter {
			link: self.head.as_deref(),
			remaining: self.len,
		}
	}

	/// The same steps in the opposite order.
	#[must_use]
	pub fn reversed(&self) -> Self {
		self.iter().cloned().fold(Self::new(), |zipper, step| zipper.push(step))
	}

	/// Composes contexts: `inner` sits below `outer`.
	///
	/// The result is `inner`'s steps followed by `outer`'s, so only `inner`
	/// is copied.
	pub fn concat(inner: &Self, outer: &Self) -> Self {
		let steps: Vec<&Step<G>> = inner.iter().collect();
		steps.into_iter().rev().cloned().fold(outer.clone(), |zipper, step| zipper.push(step))
	}

	/// Plugs `exp` through every step, innermost first, returning the root.
	pub fn unzip(&self, exp: Exp<G>) -> Exp<G> {
		self.iter().fold(exp, |exp, step| step.zip_out(exp))
	}

	/// Checks every step and that each hole is filled by the right category.
	///
	/// `focus` is the meta of whatever will occupy the innermost hole.
	pub fn validate_around(&self, grammar: &G, focus: &G::Meta) -> Result<(), GrammarErrorFor<G>> {
		let mut below = focus.clone();
		for step in self.iter() {
			step.validate(grammar)?;
			// `validate` already rejected an out-of-range hole.
			if let Some(expected) = step.hole_meta(grammar)
				&& expected != below
			{
				return Err(GrammarError::MetaMismatch {
					rule: step.rule().clone(),
					index: step.index(),
					expected,
					found: below,
				});
			}
			below = step.meta().clone();
		}
		Ok(())
	}

	/// Category of the outermost step, i.e. what the zipper presents upward.
	pub fn outer_meta(&self) -> Option<&G::Meta> {
		self.iter().last().map(Step::meta)
	}
}

impl<G: Grammar> Default for Zipper<G> {
	fn default() -> Self {
		Self::new()
	}
}

impl<G: Grammar> Clone for Zipper<G> {
	fn clone(&self) -> Self {
		Self {
			head: self.head.clone(),
			len: self.len,
		}
	}
}

impl<G: Grammar> PartialEq for Zipper<G> {
	fn eq(&self, other: &Self) -> bool {
		if self.len != other.len {
			return false;
		}
		let mut a = self.head.as_ref();
		let mut b = other.head.as_ref();
		while let (Some(x), Some(y)) = (a, b) {
			if Arc::ptr_eq(x, y) {
				return true;
			}
			if x.step != y.step {
				return false;
			}
			a = x.next.as_ref();
			b = y.next.as_ref();
		}
		true
	}
}

impl<G: Grammar> fmt::Debug for Zipper<G> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<G: Grammar> FromIterator<Step<G>> for Zipper<G> {
	/// Collects steps given innermost first.
	fn from_iter<I: IntoIterator<Item = Step<G>>>(iter: I) -> Self {
		let steps: Vec<Step<G>> = iter.into_iter().collect();
		Self::from_root_first(steps.into_iter().rev())
	}
}

impl<'a, G: Grammar> IntoIterator for &'a Zipper<G> {
	type Item = &'a Step<G>;
	type IntoIter = Iter<'a, G>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<G: Grammar> Drop for Zipper<G> {
	// Unlink uniquely owned links one at a time so long chains do not
	// recurse in the default drop glue.
	fn drop(&mut self) {
		let mut next = self.head.take();
		while let Some(link) = next {
			match Arc::try_unwrap(link) {
				Ok(mut link) => next = link.next.take(),
				Err(_) => break,
			}
		}
	}
}

/// Iterator over a [`Zipper`]'s steps, innermost first.
pub struct Iter<'a, G: Grammar> {
	link: Option<&'a Link<G>>,
	remaining: usize,
}

impl<'a, G: Grammar> Iterator for Iter<'a, G> {
	type Item = &'a Step<G>;

	fn next(&mut self) -> Option<Self::Item> {
		let link = self.link?;
		self.link = link.next.as_deref();
		self.remaining -= 1;
		Some(&link.step)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl<G: Grammar> ExactSizeIterator for Iter<'_, G> {}

impl<G: Grammar> FusedIterator for Iter<'_, G> {}
