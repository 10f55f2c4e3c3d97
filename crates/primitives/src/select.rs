//! Range focus between two points on one root-to-leaf path.

use std::fmt;

use crate::cursor::Cursor;
use crate::direction::Dir;
use crate::expr::Exp;
use crate::grammar::{Grammar, GrammarError, GrammarErrorFor};
use crate::zipper::{Step, Zipper};


/// Which boundary of a [`Select`] is movable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orient {
	/// The outer boundary (nearest the root) moves.
	Top,
	/// The inner boundary (the focused subtree) moves.
	Bot,
}

/// A selected one-hole context.
///
/// `top` leads from the outer boundary (the anchor) up to the root; `bot`
/// leads from the anchor down to `exp`, the inner boundary. The steps of
/// `bot` are what a selection covers.
///
/// `bot` is stored so that the movable end is its head: innermost first
/// when oriented [`Orient::Bot`], outermost first when oriented
/// [`Orient::Top`]. Use [`Select::bot`] for the natural (innermost first)
/// order.
pub struct Select<G: Grammar> {
	top: Zipper<G>,
	bot: Zipper<G>,
	exp: Exp<G>,
	orient: Orient,
}

/// Result of spanning two cursors with [`between_cursors`].
pub enum Between<G: Grammar> {
	/// Both cursors are at the same position.
	Empty,
	/// The range between them.
	Select(Select<G>),
}

impl<G: Grammar> Select<G> {
	/// Creates a selection; `bot` is given innermost first.
	pub fn new(top: Zipper<G>, bot: Zipper<G>, exp: Exp<G>, orient: Orient) -> Self {
		let bot = match orient {
			Orient::Bot => bot,
			Orient::Top => bot.reversed(),
		};
		Self { top, bot, exp, orient }
	}

	/// Opens a zero-width selection at `cursor`.
	pub fn enter(cursor: &Cursor<G>, orient: Orient) -> Self {
		Self {
			top: cursor.zipper.clone(),
			bot: Zipper::new(),
			exp: cursor.exp.clone(),
			orient,
		}
	}

	#[inline]
	pub fn top(&self) -> &Zipper<G> {
		&self.top
	}

	/// The selected steps, innermost first.
	pub fn bot(&self) -> Zipper<G> {
		match self.orient {
			Orient::Bot => self.bot.clone(),
			Orient::Top => self.bot.reversed(),
		}
	}

	#[inline]
	pub fn exp(&self) -> &Exp<G> {
		&self.exp
	}

	#[inline]
	pub fn orient(&self) -> Orient {
		self.orient
	}

	/// Whether the selection covers no steps.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.bot.is_empty()
	}

	/// Same range, other boundary movable.
	#[must_use]
	pub fn with_orient(&self, orient: Orient) -> Self {
		if orient == self.orient {
			return self.clone();
		}
		Self {
			top: self.top.clone(),
			bot: self.bot.reversed(),
			exp: self.exp.clone(),
			orient,
		}
	}

	/// The outermost selected step.
	fn outer_step(&self) -> Option<Step<G>> {
		match self.orient {
			Orient::Top => self.bot.first().cloned(),
			Orient::Bot => self.bot.iter().last().cloned(),
		}
	}

	/// Category presented at the outer boundary.
	pub fn anchor_meta(&self) -> &G::Meta {
		match self.orient {
			Orient::Top => self.bot.first().map_or(self.exp.meta(), Step::meta),
			Orient::Bot => self.bot.outer_meta().unwrap_or(self.exp.meta()),
		}
	}

	/// Whether both boundaries have the same category, so the selected
	/// context can be removed without retyping the hole above it.
	pub fn is_category_preserving(&self) -> bool {
		self.anchor_meta() == self.exp.meta()
	}

	/// Errors unless the selected context can be spliced out.
	pub fn check_splice(&self) -> Result<(), GrammarErrorFor<G>> {
		match self.outer_step() {
			Some(step) if !self.is_category_preserving() => Err(GrammarError::MetaMismatch {
				rule: step.rule().clone(),
				index: step.index(),
				expected: step.meta().clone(),
				found: self.exp.meta().clone(),
			}),
			_ => Ok(()),
		}
	}

	/// Cursor at the outer boundary with the selection zipped back up.
	pub fn outer_cursor(&self) -> Cursor<G> {
		Cursor::new(self.top.clone(), self.bot().unzip(self.exp.clone()))
	}

	/// Cursor at the inner boundary.
	pub fn inner_cursor(&self) -> Cursor<G> {
		Cursor::new(Zipper::concat(&self.bot(), &self.top), self.exp.clone())
	}

	/// Cursor at the boundary that stays put while the other one moves.
	pub fn fixed_cursor(&self) -> Cursor<G> {
		match self.orient {
			Orient::Top => self.inner_cursor(),
			Orient::Bot => self.outer_cursor(),
		}
	}

	/// Collapses to a cursor at the boundary named by the orientation.
	pub fn escape(&self) -> Cursor<G> {
		match self.orient {
			Orient::Top => self.outer_cursor(),
			Orient::Bot => self.inner_cursor(),
		}
	}

	/// Reassembles the whole tree.
	pub fn root_exp(&self) -> Exp<G> {
		self.outer_cursor().root_exp()
	}

	/// Moves the movable boundary one structural step.
	///
	/// Moving the inner boundary above the anchor (or the outer boundary
	/// below the focus) flips the orientation and carries on with the other
	/// boundary. Linear directions are not structural and return `None`.
	pub fn move_boundary(&self, dir: Dir) -> Option<Self> {
		match (self.orient, dir) {
			(Orient::Bot, Dir::Down) => {
				let (step, kid) = self.exp.zip_into(0)?;
				Some(Self {
					bot: self.bot.push(step),
					exp: kid,
					..self.clone()
				})
			}
			(Orient::Bot, Dir::Up) => match self.bot.pop() {
				Some((step, bot)) => Some(Self {
					bot,
					exp: step.zip_out(self.exp.clone()),
					..self.clone()
				}),
				None => self.with_orient(Orient::Top).move_boundary(Dir::Up),
			},
			(Orient::Bot, Dir::Left | Dir::Right) => {
				let (step, bot) = self.bot.pop()?;
				let (step, exp) = match dir {
					Dir::Left => step.slide_left(self.exp.clone())?,
					_ => step.slide_right(self.exp.clone())?,
				};
				Some(Self {
					bot: bot.push(step),
					exp,
					..self.clone()
				})
			}
			(Orient::Top, Dir::Up) => {
				let (step, top) = self.top.pop()?;
				Some(Self {
					top,
					bot: self.bot.push(step),
					..self.clone()
				})
			}
			(Orient::Top, Dir::Down) => match self.bot.pop() {
				Some((step, bot)) => Some(Self {
					top: self.top.push(step),
					bot,
					..self.clone()
				}),
				None => self.with_orient(Orient::Bot).move_boundary(Dir::Down),
			},
			(Orient::Top, Dir::Left | Dir::Right) | (_, Dir::Next | Dir::Prev) => None,
		}
	}
}

/// Spans the range between two cursors on one root path.
///
/// Returns `None` when the cursors sit in different branches. The cursor
/// that is deeper supplies the focus; the orientation points at `end`, so
/// `end` is the movable boundary.
pub fn between_cursors<G: Grammar>(start: &Cursor<G>, end: &Cursor<G>) -> Option<Between<G>> {
	let start_path: Vec<&Step<G>> = start.zipper.iter().collect();
	let end_path: Vec<&Step<G>> = end.zipper.iter().collect();

	// Root first.
	let mut start_steps = start_path.into_iter().rev().peekable();
	let mut end_steps = end_path.into_iter().rev().peekable();
	let mut shared = Vec::new();
	while let (Some(a), Some(b)) = (start_steps.peek(), end_steps.peek()) {
		if a != b {
			return None;
		}
		shared.push((*a).clone());
		start_steps.next();
		end_steps.next();
	}
	let top = Zipper::from_root_first(shared);

	match (start_steps.peek().is_some(), end_steps.peek().is_some()) {
		(false, false) => Some(Between::Empty),
		(false, true) => {
			let bot = Zipper::from_root_first(end_steps.cloned());
			Some(Between::Select(Select::new(top, bot, end.exp.clone(), Orient::Bot)))
		}
		(true, false) => {
			let bot = Zipper::from_root_first(start_steps.cloned());
			Some(Between::Select(Select::new(top, bot, start.exp.clone(), Orient::Top)))
		}
		(true, true) => unreachable!("lock-step walk stops only when a path is exhausted"),
	}
}

impl<G: Grammar> Clone for Select<G> {
	fn clone(&self) -> Self {
		Self {
			top: self.top.clone(),
			bot: self.bot.clone(),
			exp: self.exp.clone(),
			orient: self.orient,
		}
	}
}

impl<G: Grammar> PartialEq for Select<G> {
	fn eq(&self, other: &Self) -> bool {
		self.orient == other.orient && self.exp == other.exp && self.bot == other.bot && self.top == other.top
	}
}

impl<G: Grammar> fmt::Debug for Select<G> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Select")
			.field("top", &self.top)
			.field("bot", &self.bot())
			.field("exp", &self.exp)
			.field("orient", &self.orient)
			.finish()
	}
}

impl<G: Grammar> Clone for Between<G> {
	fn clone(&self) -> Self {
		match self {
			Self::Empty => Self::Empty,
			Self::Select(select) => Self::Select(select.clone()),
		}
	}
}

impl<G: Grammar> PartialEq for Between<G> {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Empty, Self::Empty) => true,
			(Self::Select(a), Self::Select(b)) => a == b,
			_ => false,
		}
	}
}

impl<G: Grammar> fmt::Debug for Between<G> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Empty => f.write_str("Empty"),
			Self::Select(select) => f.debug_tuple("Select").field(select).finish(),
		}
	}
}
