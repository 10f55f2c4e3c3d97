//! Editor state and the pure action handlers over it.
//!
//! Each handler maps a state to a new state or a [`Rejection`]. States are
//! never mutated in place; a rejected action leaves its input untouched,
//! which is what lets the editor snapshot states for undo.

use arbor_primitives::{
	Between, Cursor, Dir, Exp, Grammar, GrammarError, GrammarErrorFor, Orient, Select, Zipper, move_cursor,
	move_select,
};
use tracing::{debug, warn};

use crate::action::{Action, Clip};
use crate::config::InvariantPolicy;
use crate::error::{Rejection, RejectionFor};
use crate::mode::{Mode, ModeKind};

/// Everything an edit can change: the focus and the clipboard.
pub struct EditorState<G: Grammar> {
	pub mode: Mode<G>,
	pub clipboard: Option<Clip<G>>,
}

type Outcome<G> = Result<EditorState<G>, RejectionFor<G>>;

impl<G: Grammar> EditorState<G> {
	/// Cursor at the root of `root`, empty clipboard.
	pub fn new(root: Exp<G>) -> Self {
		Self {
			mode: Mode::Cursor(Cursor::root(root)),
			clipboard: None,
		}
	}

	/// Same clipboard, new mode.
	#[must_use]
	pub fn with_mode(&self, mode: Mode<G>) -> Self {
		Self {
			mode,
			clipboard: self.clipboard.clone(),
		}
	}

	/// Applies one action.
	///
	/// A bare state carries no history, so [`Action::Undo`] and
	/// [`Action::Redo`] are always rejected here; [`Editor`](crate::Editor)
	/// handles them against its own stacks.
	pub fn apply(&self, grammar: &G, policy: InvariantPolicy, action: &Action<G>) -> Outcome<G> {
		let handler = Handler { grammar, policy };
		match action {
			Action::MoveCursor(dir) => handler.move_cursor(self, *dir),
			Action::MoveSelect(dir) => handler.move_select(self, *dir),
			Action::SetCursor(cursor) => handler.set_cursor(self, cursor),
			Action::SetSelect(select) => handler.set_select(self, select),
			Action::Replace(exp) => handler.replace(self, exp),
			Action::Insert(steps) => handler.insert(self, steps),
			Action::Undo => Err(Rejection::NothingToUndo),
			Action::Redo => Err(Rejection::NothingToRedo),
			Action::Copy => Ok(handler.copy(self)),
			Action::Cut => handler.cut(self),
			Action::Paste => handler.paste(self),
			Action::Delete => handler.delete(self),
			Action::Escape => handler.escape(self),
		}
	}
}

struct Handler<'a, G: Grammar> {
	grammar: &'a G,
	policy: InvariantPolicy,
}

impl<G: Grammar> Handler<'_, G> {
	fn move_cursor(&self, state: &EditorState<G>, dir: Dir) -> Outcome<G> {
		let moved = match &state.mode {
			Mode::Cursor(cursor) => move_cursor(self.grammar, cursor, dir).ok_or(RejectionFor::<G>::Boundary)?,
			// Collapsing always commits, even when the move itself fails.
			Mode::Select(select) => {
				let collapsed = self.grammar.escape_select(select);
				move_cursor(self.grammar, &collapsed, dir).unwrap_or(collapsed)
			}
		};
		Ok(state.with_mode(Mode::Cursor(moved)))
	}

	fn move_select(&self, state: &EditorState<G>, dir: Dir) -> Outcome<G> {
		let select = match &state.mode {
			Mode::Cursor(cursor) => {
				let orient = match dir {
					Dir::Up | Dir::Prev => Orient::Top,
					_ => Orient::Bot,
				};
				Select::enter(cursor, orient)
			}
			Mode::Select(select) => select.clone(),
		};
		let mode = match move_select(self.grammar, &select, dir).ok_or(RejectionFor::<G>::Boundary)? {
			Between::Select(moved) => Mode::Select(moved),
			Between::Empty => Mode::Cursor(select.fixed_cursor()),
		};
		Ok(state.with_mode(mode))
	}

	fn set_cursor(&self, state: &EditorState<G>, cursor: &Cursor<G>) -> Outcome<G> {
		if !self.grammar.is_valid_cursor(cursor) {
			return Err(Rejection::InvalidPosition);
		}
		Ok(state.with_mode(Mode::Cursor(cursor.clone())))
	}

	fn set_select(&self, state: &EditorState<G>, select: &Select<G>) -> Outcome<G> {
		if !self.grammar.is_valid_select(select) {
			return Err(Rejection::InvalidPosition);
		}
		Ok(state.with_mode(Mode::Select(select.clone())))
	}

	fn replace(&self, state: &EditorState<G>, exp: &Exp<G>) -> Outcome<G> {
		let Mode::Cursor(cursor) = &state.mode else {
			return Err(Rejection::WrongMode(ModeKind::Select));
		};
		self.enforce(exp.validate(self.grammar))?;
		self.fit(check_slot(&cursor.zipper, cursor.exp.meta(), exp.meta(), exp.rule()))?;
		Ok(state.with_mode(Mode::Cursor(cursor.with_exp(exp.clone()))))
	}

	fn insert(&self, state: &EditorState<G>, steps: &Zipper<G>) -> Outcome<G> {
		for step in steps.iter() {
			self.enforce(step.validate(self.grammar))?;
		}
		match &state.mode {
			Mode::Cursor(cursor) => {
				self.fit(self.check_wrap(steps, cursor.exp.meta(), &cursor.zipper, cursor.exp.meta()))?;
				let zipper = Zipper::concat(steps, &cursor.zipper);
				Ok(state.with_mode(Mode::Cursor(Cursor::new(zipper, cursor.exp.clone()))))
			}
			Mode::Select(select) => {
				// New steps go in at the movable end of the range.
				let bot = match select.orient() {
					Orient::Bot => Zipper::concat(steps, &select.bot()),
					Orient::Top => Zipper::concat(&select.bot(), steps),
				};
				self.fit(self.check_wrap(&bot, select.exp().meta(), select.top(), select.anchor_meta()))?;
				let grown = Select::new(select.top().clone(), bot, select.exp().clone(), select.orient());
				if !self.grammar.is_valid_select(&grown) {
					return Err(Rejection::InvalidPosition);
				}
				Ok(state.with_mode(Mode::Select(grown)))
			}
		}
	}

	fn delete(&self, state: &EditorState<G>) -> Outcome<G> {
		let cursor = match &state.mode {
			Mode::Cursor(cursor) => self.hole_at(cursor)?,
			Mode::Select(select) => self.splice(select)?,
		};
		Ok(state.with_mode(Mode::Cursor(cursor)))
	}

	fn copy(&self, state: &EditorState<G>) -> EditorState<G> {
		EditorState {
			mode: state.mode.clone(),
			clipboard: Some(clip_of(&state.mode)),
		}
	}

	fn cut(&self, state: &EditorState<G>) -> Outcome<G> {
		let cursor = match &state.mode {
			Mode::Cursor(cursor) => self.hole_at(cursor)?,
			Mode::Select(select) => self.splice(select)?,
		};
		Ok(EditorState {
			mode: Mode::Cursor(cursor),
			clipboard: Some(clip_of(&state.mode)),
		})
	}

	fn paste(&self, state: &EditorState<G>) -> Outcome<G> {
		match (&state.mode, &state.clipboard) {
			(_, None) => Err(Rejection::EmptyClipboard),
			(Mode::Cursor(_), Some(Clip::Exp(exp))) => self.replace(state, exp),
			(Mode::Select(_), Some(Clip::Exp(_))) => Err(Rejection::WrongMode(ModeKind::Select)),
			(_, Some(Clip::Steps(steps))) => self.insert(state, steps),
		}
	}

	fn escape(&self, state: &EditorState<G>) -> Outcome<G> {
		match &state.mode {
			Mode::Cursor(_) => Err(Rejection::WrongMode(ModeKind::Cursor)),
			Mode::Select(select) => Ok(state.with_mode(Mode::Cursor(self.grammar.escape_select(select)))),
		}
	}

	/// Holes are built as leaves, so a hole rule that declares children
	/// fails validation here.
	fn hole_at(&self, cursor: &Cursor<G>) -> Result<Cursor<G>, RejectionFor<G>> {
		let hole = Exp::hole(self.grammar, cursor.exp.meta().clone());
		self.enforce(hole.validate(self.grammar))?;
		Ok(cursor.with_exp(hole))
	}

	/// Removes the selected context, leaving its inner subtree at the outer
	/// boundary.
	fn splice(&self, select: &Select<G>) -> Result<Cursor<G>, RejectionFor<G>> {
		self.fit(select.check_splice())?;
		Ok(Cursor::new(select.top().clone(), select.exp().clone()))
	}

	/// Checks that `steps` can wrap a subtree of category `inner` and then
	/// sit in the slot of `context` currently holding category `outer`.
	///
	/// Callers validate each step first, so any error left is a category
	/// mismatch.
	fn check_wrap(
		&self,
		steps: &Zipper<G>,
		inner: &G::Meta,
		context: &Zipper<G>,
		outer: &G::Meta,
	) -> Result<(), GrammarErrorFor<G>> {
		steps.validate_around(self.grammar, inner)?;
		match steps.iter().last() {
			Some(step) => check_slot(context, outer, step.meta(), step.rule()),
			None => Ok(()),
		}
	}

	/// Turns a category error the user asked for into a plain rejection.
	fn fit(&self, checked: Result<(), GrammarErrorFor<G>>) -> Result<(), RejectionFor<G>> {
		checked.map_err(|error| {
			debug!(%error, "edit does not fit the focus");
			Rejection::CategoryMismatch(error)
		})
	}

	/// Applies the invariant policy to a malformed tree or grammar.
	fn enforce(&self, checked: Result<(), GrammarErrorFor<G>>) -> Result<(), RejectionFor<G>> {
		let Err(error) = checked else {
			return Ok(());
		};
		match self.policy {
			InvariantPolicy::Panic => panic!("grammar invariant violated: {error}"),
			InvariantPolicy::Reject => {
				warn!(%error, "grammar invariant violated, action rejected");
				Err(error.into())
			}
		}
	}
}

/// Errors unless a node of `found` can replace one of `current` under
/// `context`.
fn check_slot<G: Grammar>(
	context: &Zipper<G>,
	current: &G::Meta,
	found: &G::Meta,
	rule: &G::Rule,
) -> Result<(), GrammarErrorFor<G>> {
	if found == current {
		return Ok(());
	}
	Err(match context.first() {
		Some(parent) => GrammarError::MetaMismatch {
			rule: parent.rule().clone(),
			index: parent.index(),
			expected: current.clone(),
			found: found.clone(),
		},
		None => GrammarError::UnknownRule {
			meta: current.clone(),
			rule: rule.clone(),
		},
	})
}

fn clip_of<G: Grammar>(mode: &Mode<G>) -> Clip<G> {
	match mode {
		Mode::Cursor(cursor) => Clip::Exp(cursor.exp.clone()),
		Mode::Select(select) => Clip::Steps(select.bot()),
	}
}

impl<G: Grammar> Clone for EditorState<G> {
	fn clone(&self) -> Self {
		Self {
			mode: self.mode.clone(),
			clipboard: self.clipboard.clone(),
		}
	}
}

impl<G: Grammar> PartialEq for EditorState<G> {
	fn eq(&self, other: &Self) -> bool {
		self.mode == other.mode && self.clipboard == other.clipboard
	}
}

impl<G: Grammar> std::fmt::Debug for EditorState<G> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EditorState")
			.field("mode", &self.mode)
			.field("clipboard", &self.clipboard)
			.finish()
	}
}
