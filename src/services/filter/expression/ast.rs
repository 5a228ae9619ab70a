//! This module defines the tree structure of filter expressions

use crate::{
	models::{FilterValue, PredicateNode},
	services::filter::error::FilterError,
};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, sync::Arc};

/// Connective argument of the general [`FilterExpression::from_parts`] constructor.
///
/// `None` is the neutral value used when a single subtree is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanOperator {
	#[default]
	None,
	And,
	Or,
}

crate::impl_case_insensitive_enum!(BooleanOperator, {
	"none" => None,
	"and" => And,
	"or" => Or,
});

impl fmt::Display for BooleanOperator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BooleanOperator::None => f.write_str("None"),
			BooleanOperator::And => f.write_str("And"),
			BooleanOperator::Or => f.write_str("Or"),
		}
	}
}

/// Boolean combinator joining the two subtrees of a branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Connective {
	And,
	Or,
}

crate::impl_case_insensitive_enum!(Connective, {
	"and" => And,
	"or" => Or,
});

impl fmt::Display for Connective {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Connective::And => f.write_str("And"),
			Connective::Or => f.write_str("Or"),
		}
	}
}

impl From<Connective> for BooleanOperator {
	fn from(connective: Connective) -> Self {
		match connective {
			Connective::And => BooleanOperator::And,
			Connective::Or => BooleanOperator::Or,
		}
	}
}

impl TryFrom<BooleanOperator> for Connective {
	type Error = FilterError;

	fn try_from(operator: BooleanOperator) -> Result<Self, Self::Error> {
		match operator {
			BooleanOperator::And => Ok(Connective::And),
			BooleanOperator::Or => Ok(Connective::Or),
			BooleanOperator::None => Err(FilterError::unsupported_connective(
				format!(
					"The operation {} has not been implemented within the filter tree",
					operator
				),
				None,
				Some(HashMap::from([(
					"connective".to_string(),
					operator.to_string(),
				)])),
			)),
		}
	}
}

/// Immutable boolean filter tree.
///
/// Subtrees are reference counted, so the same instance may appear under several
/// parents. Each use site renders the full subtree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterExpression {
	/// No filter at all
	#[default]
	Empty,
	/// A single comparison
	Leaf(PredicateNode),
	/// One subtree passed through without being combined
	Single(Arc<FilterExpression>),
	/// Two subtrees joined by a connective
	Branch {
		left: Arc<FilterExpression>,
		connective: Connective,
		right: Arc<FilterExpression>,
	},
}

impl FilterExpression {
	pub fn empty() -> Self {
		FilterExpression::Empty
	}

	pub fn leaf(node: PredicateNode) -> Self {
		FilterExpression::Leaf(node)
	}

	/// Shorthand for a leaf wrapping `PredicateNode::new(key, operator, value)`
	pub fn predicate(
		key: impl Into<String>,
		operator: impl Into<String>,
		value: impl Into<FilterValue>,
	) -> Self {
		FilterExpression::Leaf(PredicateNode::new(key, operator, value))
	}

	pub fn single(child: impl Into<Arc<FilterExpression>>) -> Self {
		FilterExpression::Single(child.into())
	}

	pub fn branch(
		left: impl Into<Arc<FilterExpression>>,
		right: impl Into<Arc<FilterExpression>>,
		connective: Connective,
	) -> Self {
		FilterExpression::Branch {
			left: left.into(),
			connective,
			right: right.into(),
		}
	}

	pub fn and(
		left: impl Into<Arc<FilterExpression>>,
		right: impl Into<Arc<FilterExpression>>,
	) -> Self {
		Self::branch(left, right, Connective::And)
	}

	pub fn or(
		left: impl Into<Arc<FilterExpression>>,
		right: impl Into<Arc<FilterExpression>>,
	) -> Self {
		Self::branch(left, right, Connective::Or)
	}

	/// Builds a node from optional children and a connective.
	///
	/// * no children: an empty expression
	/// * left only: a pass-through of `left`, `operator` is ignored
	/// * both: a branch, `operator` must be `And` or `Or`
	///
	/// # Errors
	/// `UnsupportedConnective` when both children are given with `BooleanOperator::None`,
	/// `MissingLeftOperand` when only `right` is given.
	pub fn from_parts(
		left: Option<Arc<FilterExpression>>,
		right: Option<Arc<FilterExpression>>,
		operator: BooleanOperator,
	) -> Result<Self, FilterError> {
		let expression = match (left, right) {
			(None, None) => FilterExpression::Empty,
			(Some(left), None) => FilterExpression::Single(left),
			(Some(left), Some(right)) => FilterExpression::Branch {
				left,
				connective: Connective::try_from(operator)?,
				right,
			},
			(None, Some(_)) => {
				return Err(FilterError::missing_left_operand(
					format!("A right subtree was given without a left one ({})", operator),
					None,
					None,
				));
			}
		};

		tracing::trace!(kind = expression.kind(), "Filter expression assembled");
		Ok(expression)
	}

	/// True when the expression carries neither children nor a predicate
	pub fn is_empty(&self) -> bool {
		matches!(self, FilterExpression::Empty)
	}

	/// True when the expression wraps a predicate node
	pub fn is_leaf(&self) -> bool {
		matches!(self, FilterExpression::Leaf(_))
	}

	pub fn node(&self) -> Option<&PredicateNode> {
		match self {
			FilterExpression::Leaf(node) => Some(node),
			_ => None,
		}
	}

	pub fn left(&self) -> Option<&Arc<FilterExpression>> {
		match self {
			FilterExpression::Single(child) => Some(child),
			FilterExpression::Branch { left, .. } => Some(left),
			_ => None,
		}
	}

	pub fn right(&self) -> Option<&Arc<FilterExpression>> {
		match self {
			FilterExpression::Branch { right, .. } => Some(right),
			_ => None,
		}
	}

	/// The stored connective, `BooleanOperator::None` for anything but a branch
	pub fn connective(&self) -> BooleanOperator {
		match self {
			FilterExpression::Branch { connective, .. } => (*connective).into(),
			_ => BooleanOperator::None,
		}
	}

	/// Decodes a tree from its JSON form.
	///
	/// # Errors
	/// `InvalidDefinition` with the serde error as source.
	pub fn from_json(raw: &str) -> Result<Self, FilterError> {
		serde_json::from_str(raw).map_err(|e| {
			FilterError::invalid_definition(
				"Failed to decode filter tree",
				Some(Box::new(e)),
				None,
			)
		})
	}

	fn kind(&self) -> &'static str {
		match self {
			FilterExpression::Empty => "empty",
			FilterExpression::Leaf(_) => "leaf",
			FilterExpression::Single(_) => "single",
			FilterExpression::Branch { .. } => "branch",
		}
	}
}

impl From<PredicateNode> for FilterExpression {
	fn from(node: PredicateNode) -> Self {
		FilterExpression::Leaf(node)
	}
}
