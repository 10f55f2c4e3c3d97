//! Cursor and selection movement.
//!
//! Structural moves come straight from [`Cursor`] and [`Select`]. This module
//! adds the grammar-aware layer: validity filtering and the linear traversal.
//!
//! The linear order is depth-first and left-to-right. Its stops are the
//! bottom-left positions reached by [`move_bot_left`]: descending as deep as
//! [`Grammar::is_valid_cursor`] allows, then sliding right at the nearest
//! level that has a right sibling. [`move_prev`] mirrors this with
//! [`move_bot_right`], so the two undo each other on those stops.

use crate::cursor::Cursor;
use crate::direction::Dir;
use crate::grammar::Grammar;
use crate::select::{Between, Select, between_cursors};

#[cfg(test)]
mod tests;

/// Descends along first children while the next position is valid.
///
/// Returns the deepest valid position reached, or `cursor` itself.
pub fn move_bot_left<G: Grammar>(grammar: &G, cursor: &Cursor<G>) -> Cursor<G> {
	let mut cur = cursor.clone();
	while let Some(down) = cur.move_down(0)
		&& grammar.is_valid_cursor(&down)
	{
		cur = down;
	}
	cur
}

/// Descends along last children while the next position is valid.
///
/// Mirror of [`move_bot_left`].
pub fn move_bot_right<G: Grammar>(grammar: &G, cursor: &Cursor<G>) -> Cursor<G> {
	let mut cur = cursor.clone();
	while let Some(down) = cur.move_down_last()
		&& grammar.is_valid_cursor(&down)
	{
		cur = down;
	}
	cur
}

/// Next position in traversal order, or `None` at the end.
///
/// Descends with [`move_bot_left`] when that goes anywhere. Otherwise climbs
/// one level at a time until a right sibling exists, then lands on that
/// sibling's bottom-left position. Siblings whose landing position is
/// invalid are skipped.
pub fn move_next<G: Grammar>(grammar: &G, cursor: &Cursor<G>) -> Option<Cursor<G>> {
	let below = move_bot_left(grammar, cursor);
	if below.depth() > cursor.depth() {
		return Some(below);
	}
	let mut cur = cursor.clone();
	loop {
		while let Some(right) = cur.move_right() {
			let landing = move_bot_left(grammar, &right);
			if grammar.is_valid_cursor(&landing) {
				return Some(landing);
			}
			cur = right;
		}
		cur = cur.move_up()?;
	}
}

/// Previous position in traversal order, or `None` at the start.
///
/// Mirror of [`move_next`]: climbs until a left sibling exists, then lands
/// on that sibling's bottom-right position.
pub fn move_prev<G: Grammar>(grammar: &G, cursor: &Cursor<G>) -> Option<Cursor<G>> {
	let mut cur = cursor.clone();
	loop {
		while let Some(left) = cur.move_left() {
			let landing = move_bot_right(grammar, &left);
			if grammar.is_valid_cursor(&landing) {
				return Some(landing);
			}
			cur = left;
		}
		cur = cur.move_up()?;
	}
}

/// Moves a cursor one step in `dir`.
///
/// Structural moves that land on a position the grammar rejects fail.
pub fn move_cursor<G: Grammar>(grammar: &G, cursor: &Cursor<G>, dir: Dir) -> Option<Cursor<G>> {
	let moved = match dir {
		Dir::Up => cursor.move_up(),
		Dir::Down => cursor.move_down(0),
		Dir::Left => cursor.move_left(),
		Dir::Right => cursor.move_right(),
		Dir::Next => return move_next(grammar, cursor),
		Dir::Prev => return move_prev(grammar, cursor),
	}?;
	grammar.is_valid_cursor(&moved).then_some(moved)
}

/// Moves the movable boundary of a selection one step in `dir`.
///
/// Linear directions move the movable boundary as a cursor and rebuild the
/// range against the fixed boundary; landing on the fixed boundary yields
/// [`Between::Empty`], and landing in another branch fails.
pub fn move_select<G: Grammar>(grammar: &G, select: &Select<G>, dir: Dir) -> Option<Between<G>> {
	if !dir.is_linear() {
		let moved = select.move_boundary(dir)?;
		return grammar.is_valid_select(&moved).then_some(Between::Select(moved));
	}

	let fixed = select.fixed_cursor();
	let movable = select.escape();
	let moved = match dir {
		Dir::Next => move_next(grammar, &movable)?,
		_ => move_prev(grammar, &movable)?,
	};
	match between_cursors(&fixed, &moved)? {
		Between::Select(range) if !grammar.is_valid_select(&range) => None,
		between => Some(between),
	}
}
