//! Single-point focus on a tree.

use std::fmt;

use crate::expr::Exp;
use crate::grammar::Grammar;
use crate::zipper::Zipper;

/// A focused subtree together with the contexts enclosing it up to the root.
///
/// Structural moves never fail loudly: at the root, at a leaf, or at either
/// end of a sibling list they return `None` and leave `self` untouched.
pub struct Cursor<G: Grammar> {
	/// Enclosing contexts, innermost first.
	pub zipper: Zipper<G>,
	/// The focused subtree.
	pub exp: Exp<G>,
}

impl<G: Grammar> Cursor<G> {
	pub fn new(zipper: Zipper<G>, exp: Exp<G>) -> Self {
		Self { zipper, exp }
	}

	/// A cursor on the root of `exp`.
	pub fn root(exp: Exp<G>) -> Self {
		Self::new(Zipper::new(), exp)
	}

	/// Nesting depth of the focus (0 at the root).
	#[inline]
	pub fn depth(&self) -> usize {
		self.zipper.len()
	}

	#[inline]
	pub fn is_root(&self) -> bool {
		self.zipper.is_empty()
	}

	/// Child index of the focus within its parent.
	pub fn index(&self) -> Option<usize> {
		self.zipper.first().map(|step| step.index())
	}

	/// Reassembles the whole tree.
	pub fn root_exp(&self) -> Exp<G> {
		self.zipper.unzip(self.exp.clone())
	}

	/// Same position, different subtree.
	#[must_use]
	pub fn with_exp(&self, exp: Exp<G>) -> Self {
		Self::new(self.zipper.clone(), exp)
	}

	pub fn move_up(&self) -> Option<Self> {
		let (step, zipper) = self.zipper.pop()?;
		Some(Self::new(zipper, step.zip_out(self.exp.clone())))
	}

	/// Focuses child `index` of the current node.
	pub fn move_down(&self, index: usize) -> Option<Self> {
		let (step, kid) = self.exp.zip_into(index)?;
		Some(Self::new(self.zipper.push(step), kid))
	}

	/// Focuses the last child of the current node.
	pub fn move_down_last(&self) -> Option<Self> {
		self.move_down(self.exp.arity().checked_sub(1)?)
	}

	pub fn move_left(&self) -> Option<Self> {
		let (step, zipper) = self.zipper.pop()?;
		let (step, exp) = step.slide_left(self.exp.clone())?;
		Some(Self::new(zipper.push(step), exp))
	}

	pub fn move_right(&self) -> Option<Self> {
		let (step, zipper) = self.zipper.pop()?;
		let (step, exp) = step.slide_right(self.exp.clone())?;
		Some(Self::new(zipper.push(step), exp))
	}
}

impl<G: Grammar> Clone for Cursor<G> {
	fn clone(&self) -> Self {
		Self::new(self.zipper.clone(), self.exp.clone())
	}
}

impl<G: Grammar> PartialEq for Cursor<G> {
	fn eq(&self, other: &Self) -> bool {
		self.exp == other.exp && self.zipper == other.zipper
	}
}

impl<G: Grammar> fmt::Debug for Cursor<G> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Cursor").field("zipper", &self.zipper).field("exp", &self.exp).finish()
	}
}
