use data_filter::{
	models::{FilterValue, PredicateNode},
	services::filter::{Connective, FilterExpression},
};
use proptest::prelude::*;
use std::sync::Arc;

const MAX_DEPTH: u32 = 4;
const MAX_NODES: u32 = 32;
const MAX_BRANCH_SIZE: u32 = 2;

pub fn filter_value_strategy() -> impl Strategy<Value = FilterValue> {
	prop_oneof![
		Just(FilterValue::Null),
		any::<bool>().prop_map(FilterValue::Bool),
		any::<i64>().prop_map(FilterValue::Integer),
		(i64::MAX as u64 + 1..=u64::MAX).prop_map(FilterValue::Unsigned),
		(-1.0e6..1.0e6f64).prop_map(FilterValue::Float),
		prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)]
			.prop_map(FilterValue::Float),
		"'[a-zA-Z0-9%_ ]{0,12}'".prop_map(FilterValue::Text),
	]
}

pub fn predicate_strategy() -> impl Strategy<Value = PredicateNode> {
	(
		"[a-zA-Z_][a-zA-Z0-9_]{0,15}",
		prop::sample::select(vec!["=", "!=", "<", "<=", ">", ">=", "like", "in"]),
		filter_value_strategy(),
	)
		.prop_map(|(key, operator, value)| PredicateNode::new(key, operator, value))
}

pub fn connective_strategy() -> impl Strategy<Value = Connective> {
	prop_oneof![Just(Connective::And), Just(Connective::Or)]
}

/// Trees without empty nodes, so every rendered predicate is non-empty
pub fn filter_expression_strategy() -> impl Strategy<Value = FilterExpression> {
	let leaf = predicate_strategy().prop_map(FilterExpression::leaf);
	leaf.prop_recursive(MAX_DEPTH, MAX_NODES, MAX_BRANCH_SIZE, |inner| {
		prop_oneof![
			inner.clone().prop_map(|child| FilterExpression::single(child)),
			(inner.clone(), connective_strategy(), inner).prop_map(
				|(left, connective, right)| FilterExpression::branch(left, right, connective)
			),
			// Shared subtree on both sides
			(any::<bool>(), connective_strategy(), predicate_strategy()).prop_map(
				|(nested, connective, node)| {
					let shared = if nested {
						Arc::new(FilterExpression::single(FilterExpression::leaf(node)))
					} else {
						Arc::new(FilterExpression::leaf(node))
					};
					FilterExpression::branch(shared.clone(), shared, connective)
				}
			),
		]
	})
}

/// Number of branch nodes reached when walking the tree, counting shared subtrees per use
pub fn count_branches(expression: &FilterExpression) -> usize {
	match expression {
		FilterExpression::Branch { left, right, .. } => {
			1 + count_branches(left) + count_branches(right)
		}
		FilterExpression::Single(child) => count_branches(child),
		FilterExpression::Empty | FilterExpression::Leaf(_) => 0,
	}
}

/// Whether any predicate in the tree holds a NaN or infinite float
pub fn has_non_finite_float(expression: &FilterExpression) -> bool {
	match expression {
		FilterExpression::Leaf(node) => {
			matches!(node.value(), FilterValue::Float(n) if !n.is_finite())
		}
		FilterExpression::Single(child) => has_non_finite_float(child),
		FilterExpression::Branch { left, right, .. } => {
			has_non_finite_float(left) || has_non_finite_float(right)
		}
		FilterExpression::Empty => false,
	}
}
