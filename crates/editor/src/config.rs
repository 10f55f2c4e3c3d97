//! Editor configuration.
//!
//! Everything has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! history-limit = 500
//! invariants = "reject"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of undo (and redo) snapshots kept when not configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 500;

/// What to do when an action would build a tree the grammar rejects.
///
/// Only malformed input and self-contradicting grammars reach the policy.
/// Putting a subtree where its category does not fit is always a plain
/// [`Rejection::CategoryMismatch`](crate::Rejection::CategoryMismatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvariantPolicy {
	/// Abort immediately. Default in debug builds.
	Panic,
	/// Reject the action and keep the previous state. Default in release builds.
	Reject,
}

impl Default for InvariantPolicy {
	fn default() -> Self {
		if cfg!(debug_assertions) { Self::Panic } else { Self::Reject }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct EditorConfig {
	/// Maximum depth of both the undo and the redo stack.
	pub history_limit: usize,
	pub invariants: InvariantPolicy,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			history_limit: DEFAULT_HISTORY_LIMIT,
			invariants: InvariantPolicy::default(),
		}
	}
}

impl EditorConfig {
	/// Parses and validates a TOML configuration document.
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.history_limit == 0 {
			return Err(ConfigError::ZeroHistoryLimit);
		}
		Ok(())
	}

	pub fn with_history_limit(mut self, history_limit: usize) -> Self {
		self.history_limit = history_limit;
		self
	}

	pub fn with_invariants(mut self, invariants: InvariantPolicy) -> Self {
		self.invariants = invariants;
		self
	}
}
