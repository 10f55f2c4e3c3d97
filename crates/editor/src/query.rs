//! Turning typed text into candidate actions.
//!
//! The grammar recognises a query as at most one `(rule, value)` pair. A
//! leaf rule becomes a single [`Action::Replace`]. A rule with children
//! becomes one [`Action::Insert`] per child slot that can hold the current
//! focus, so the focus ends up wrapped in a fresh node with holes in the
//! other slots.

use arbor_primitives::{Exp, Grammar, Step, Zipper};
use tracing::trace;

use crate::action::Action;

/// Interprets `query` at a focus of category `meta`.
///
/// Returns candidates in child-slot order. An unrecognised query yields no
/// candidates.
pub fn interpret_query<G: Grammar>(grammar: &G, meta: &G::Meta, query: &str) -> Vec<Action<G>> {
	let Some((rule, value)) = grammar.parse_query(meta, query) else {
		trace!(query, "query not recognised");
		return Vec::new();
	};

	let slots = grammar.children(&rule);
	if slots.is_empty() {
		return vec![Action::Replace(Exp::template(grammar, meta.clone(), rule, value))];
	}

	slots
		.iter()
		.enumerate()
		.filter(|(_, slot)| *slot == meta)
		.filter_map(|(index, _)| Step::template(grammar, meta.clone(), rule.clone(), value.clone(), index))
		.map(|step| Action::Insert(Zipper::new().push(step)))
		.collect()
}

/// Picks the candidate at `index`, wrapping around the list.
pub fn pick_candidate<T>(candidates: Vec<T>, index: usize) -> Option<T> {
	if candidates.is_empty() {
		return None;
	}
	let index = index % candidates.len();
	candidates.into_iter().nth(index)
}
