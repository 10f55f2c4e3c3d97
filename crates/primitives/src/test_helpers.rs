//! A small lambda-calculus grammar for tests.
//!
//! Two categories: expressions (`var`, `app`, `lam` and a hole) and binders
//! (`name` and a hole). Values are labels; nodes without a label carry the
//! empty string.

use crate::cursor::Cursor;
use crate::expr::Exp;
use crate::grammar::Grammar;
use crate::zipper::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meta {
	Exp,
	Bind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
	Var,
	App,
	Lam,
	Hole,
	Name,
	BindHole,
}

/// The test grammar.
///
/// With `hide_binders` set, binder positions are not valid cursor
/// positions, which exercises validity filtering in the traversal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lambda {
	pub hide_binders: bool,
}

impl Lambda {
	pub fn hiding_binders() -> Self {
		Self { hide_binders: true }
	}
}

impl Grammar for Lambda {
	type Meta = Meta;
	type Rule = Rule;
	type Value = String;

	fn rules(&self, meta: &Meta) -> Vec<Rule> {
		match meta {
			Meta::Exp => vec![Rule::Var, Rule::App, Rule::Lam, Rule::Hole],
			Meta::Bind => vec![Rule::Name, Rule::BindHole],
		}
	}

	fn children(&self, rule: &Rule) -> Vec<Meta> {
		match rule {
			Rule::App => vec![Meta::Exp, Meta::Exp],
			Rule::Lam => vec![Meta::Bind, Meta::Exp],
			Rule::Var | Rule::Hole | Rule::Name | Rule::BindHole => vec![],
		}
	}

	fn default_value(&self, _rule: &Rule) -> String {
		String::new()
	}

	fn hole_rule(&self, meta: &Meta) -> Rule {
		match meta {
			Meta::Exp => Rule::Hole,
			Meta::Bind => Rule::BindHole,
		}
	}

	fn is_valid_cursor(&self, cursor: &Cursor<Self>) -> bool {
		!(self.hide_binders && *cursor.exp.meta() == Meta::Bind)
	}

	fn parse_query(&self, meta: &Meta, query: &str) -> Option<(Rule, String)> {
		match (meta, query) {
			(Meta::Exp, " ") => Some((Rule::App, String::new())),
			(Meta::Exp, "\\") => Some((Rule::Lam, String::new())),
			(_, q) if !q.is_empty() && q.chars().all(|c| c.is_alphanumeric() || c == '_') => {
				let rule = match meta {
					Meta::Exp => Rule::Var,
					Meta::Bind => Rule::Name,
				};
				Some((rule, q.to_owned()))
			}
			_ => None,
		}
	}
}

pub fn var(label: &str) -> Exp<Lambda> {
	Exp::new(Meta::Exp, Rule::Var, label.to_owned(), [])
}

pub fn app(fun: Exp<Lambda>, arg: Exp<Lambda>) -> Exp<Lambda> {
	Exp::new(Meta::Exp, Rule::App, String::new(), [fun, arg])
}

pub fn lam(binder: &str, body: Exp<Lambda>) -> Exp<Lambda> {
	let name = Exp::new(Meta::Bind, Rule::Name, binder.to_owned(), []);
	Exp::new(Meta::Exp, Rule::Lam, String::new(), [name, body])
}

pub fn hole() -> Exp<Lambda> {
	Exp::hole(&Lambda::default(), Meta::Exp)
}

/// `app(app(app(a, b), c), d)`.
pub fn spine() -> Exp<Lambda> {
	app(app(app(var("a"), var("b")), var("c")), var("d"))
}

/// A one-step context `app(□, arg)`.
pub fn app_fun_step(arg: Exp<Lambda>) -> Step<Lambda> {
	Step::new(Meta::Exp, Rule::App, String::new(), [], [arg])
}

/// A one-step context `app(fun, □)`.
pub fn app_arg_step(fun: Exp<Lambda>) -> Step<Lambda> {
	Step::new(Meta::Exp, Rule::App, String::new(), [fun], [])
}
