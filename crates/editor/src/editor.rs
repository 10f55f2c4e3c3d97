//! The editor front door.
//!
//! [`Editor`] owns a grammar, the live [`EditorState`] and a bounded
//! [`History`] of prior states. [`Editor::apply_action`] is the only way to
//! change any of them.

use arbor_primitives::{Cursor, Exp, Grammar, Select};
use tracing::{debug, trace};

use crate::action::{Action, Clip};
use crate::config::EditorConfig;
use crate::error::{ConfigError, Rejection, RejectionFor};
use crate::history::History;
use crate::mode::Mode;
use crate::query::{interpret_query, pick_candidate};
use crate::state::EditorState;

/// A structured editor over trees of grammar `G`.
pub struct Editor<G: Grammar> {
	grammar: G,
	config: EditorConfig,
	state: EditorState<G>,
	history: History<EditorState<G>>,
}

impl<G: Grammar> Editor<G> {
	/// Opens `root` with the cursor at its root and default configuration.
	pub fn new(grammar: G, root: Exp<G>) -> Self {
		Self::build(grammar, root, EditorConfig::default())
	}

	/// Opens `root` with an explicit configuration.
	///
	/// The configuration is validated the same way
	/// [`EditorConfig::from_toml_str`] validates it, so a hand-built config
	/// with `history_limit == 0` is refused rather than adjusted.
	pub fn with_config(grammar: G, root: Exp<G>, config: EditorConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self::build(grammar, root, config))
	}

	fn build(grammar: G, root: Exp<G>, config: EditorConfig) -> Self {
		Self {
			history: History::new(config.history_limit),
			grammar,
			config,
			state: EditorState::new(root),
		}
	}

	/// Applies one action.
	///
	/// On success every action except undo and redo snapshots the prior
	/// state and clears the redo stack. On rejection nothing changes.
	pub fn apply_action(&mut self, action: Action<G>) -> Result<(), RejectionFor<G>> {
		let name = action.name();
		let result = match action {
			Action::Undo => self.undo(),
			Action::Redo => self.redo(),
			action => self.commit(&action),
		};
		match &result {
			Ok(()) => trace!(
				action = name,
				past = self.history.past_len(),
				future = self.history.future_len(),
				"action applied"
			),
			Err(rejection) => debug!(action = name, %rejection, "action rejected"),
		}
		result
	}

	fn commit(&mut self, action: &Action<G>) -> Result<(), RejectionFor<G>> {
		let next = self.state.apply(&self.grammar, self.config.invariants, action)?;
		let prior = std::mem::replace(&mut self.state, next);
		self.history.record(prior);
		Ok(())
	}

	fn undo(&mut self) -> Result<(), RejectionFor<G>> {
		let prior = self.history.undo(&self.state).ok_or(RejectionFor::<G>::NothingToUndo)?;
		self.state = prior;
		Ok(())
	}

	fn redo(&mut self) -> Result<(), RejectionFor<G>> {
		let next = self.history.redo(&self.state).ok_or(RejectionFor::<G>::NothingToRedo)?;
		self.state = next;
		Ok(())
	}

	/// Candidate actions for `text` at the current focus.
	pub fn query(&self, text: &str) -> Vec<Action<G>> {
		interpret_query(&self.grammar, self.focus().meta(), text)
	}

	/// Interprets `text` and applies the candidate at `index`, wrapping
	/// around the candidate list.
	pub fn submit_query(&mut self, text: &str, index: usize) -> Result<(), RejectionFor<G>> {
		let Some(action) = pick_candidate(self.query(text), index) else {
			debug!(query = text, "query rejected");
			return Err(Rejection::UnrecognizedQuery(text.to_owned()));
		};
		self.apply_action(action)
	}

	#[inline]
	pub fn state(&self) -> &EditorState<G> {
		&self.state
	}

	#[inline]
	pub fn mode(&self) -> &Mode<G> {
		&self.state.mode
	}

	/// The focused subtree.
	pub fn focus(&self) -> &Exp<G> {
		self.state.mode.focus()
	}

	pub fn cursor(&self) -> Option<&Cursor<G>> {
		self.state.mode.as_cursor()
	}

	pub fn select(&self) -> Option<&Select<G>> {
		self.state.mode.as_select()
	}

	pub fn clipboard(&self) -> Option<&Clip<G>> {
		self.state.clipboard.as_ref()
	}

	/// The whole document as currently edited.
	pub fn root_exp(&self) -> Exp<G> {
		self.state.mode.root_exp()
	}

	/// Number of undoable states.
	pub fn history_len(&self) -> usize {
		self.history.past_len()
	}

	/// Number of redoable states.
	pub fn future_len(&self) -> usize {
		self.history.future_len()
	}

	pub fn can_undo(&self) -> bool {
		self.history.can_undo()
	}

	pub fn can_redo(&self) -> bool {
		self.history.can_redo()
	}

	#[inline]
	pub fn grammar(&self) -> &G {
		&self.grammar
	}

	#[inline]
	pub fn config(&self) -> &EditorConfig {
		&self.config
	}
}
