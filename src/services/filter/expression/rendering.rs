//! Rendering of filter trees into textual predicates.
//!
//! Every branch is wrapped in parentheses; leaves and pass-through nodes are not.
//! A subtree shared by several parents is rendered in full at each of them.

use super::ast::FilterExpression;
use std::fmt;

impl FilterExpression {
	/// Renders the tree as a fully parenthesized infix predicate.
	///
	/// An empty tree renders as the empty string.
	pub fn render(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for FilterExpression {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FilterExpression::Empty => Ok(()),
			FilterExpression::Leaf(node) => write!(f, "{}", node),
			FilterExpression::Single(child) => write!(f, "{}", child),
			FilterExpression::Branch {
				left,
				connective,
				right,
			} => write!(f, "({} {} {})", left, connective, right),
		}
	}
}
