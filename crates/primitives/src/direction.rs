//! Directions for cursor and selection movement.

/// One movement step.
///
/// The first four are structural moves through the tree; `Next` and `Prev`
/// follow the linear traversal of [`move_next`](crate::move_next).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
	Up,
	Down,
	Left,
	Right,
	Next,
	Prev,
}

impl Dir {
	/// Whether this direction follows the linear traversal order.
	#[inline]
	pub fn is_linear(self) -> bool {
		matches!(self, Dir::Next | Dir::Prev)
	}
}
