//! Property-based tests for filter tree rendering.
//! Tests cover predicate formatting, pass-through nodes, parenthesization and serialization.

use crate::properties::strategies::{
	connective_strategy, count_branches, filter_expression_strategy, filter_value_strategy,
	has_non_finite_float, predicate_strategy,
};
use data_filter::{
	models::PredicateNode,
	services::filter::{BooleanOperator, FilterError, FilterExpression},
};
use proptest::{prelude::*, test_runner::Config};
use std::sync::Arc;

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn prop_predicate_renders_space_separated(
		key in ".{0,10}",
		operator in ".{0,4}",
		value in filter_value_strategy(),
	) {
		let node = PredicateNode::new(key.clone(), operator.clone(), value.clone());
		prop_assert_eq!(node.render(), format!("{} {} {}", key, operator, value));
	}

	#[test]
	fn prop_single_is_transparent(
		expression in filter_expression_strategy(),
		operator in prop_oneof![
			Just(BooleanOperator::None),
			Just(BooleanOperator::And),
			Just(BooleanOperator::Or),
		],
	) {
		let expected = expression.render();
		let single = FilterExpression::from_parts(Some(Arc::new(expression)), None, operator)
			.unwrap();
		prop_assert_eq!(single.render(), expected);
	}

	#[test]
	fn prop_branch_wraps_children(
		left in filter_expression_strategy(),
		right in filter_expression_strategy(),
		connective in connective_strategy(),
	) {
		let expected = format!("({} {} {})", left.render(), connective, right.render());
		let branch = FilterExpression::branch(left, right, connective);
		prop_assert_eq!(branch.render(), expected);
	}

	#[test]
	fn prop_parentheses_match_branch_count(expression in filter_expression_strategy()) {
		let rendered = expression.render();
		let branches = count_branches(&expression);

		// Generated values never contain parentheses
		prop_assert_eq!(rendered.matches('(').count(), branches);
		prop_assert_eq!(rendered.matches(')').count(), branches);

		let mut depth: i64 = 0;
		for c in rendered.chars() {
			match c {
				'(' => depth += 1,
				')' => depth -= 1,
				_ => {}
			}
			prop_assert!(depth >= 0);
		}
		prop_assert_eq!(depth, 0);
	}

	#[test]
	fn prop_json_round_trip_preserves_rendering(expression in filter_expression_strategy()) {
		match serde_json::to_string(&expression) {
			Ok(json) => {
				prop_assert!(!has_non_finite_float(&expression));
				let reloaded = FilterExpression::from_json(&json).unwrap();
				prop_assert_eq!(reloaded.render(), expression.render());
			}
			// NaN and infinities have no JSON form and must not degrade to null
			Err(_) => prop_assert!(has_non_finite_float(&expression)),
		}
	}

	#[test]
	fn prop_two_children_need_a_connective(
		left in predicate_strategy(),
		right in predicate_strategy(),
	) {
		let result = FilterExpression::from_parts(
			Some(Arc::new(left.into())),
			Some(Arc::new(right.into())),
			BooleanOperator::None,
		);
		prop_assert!(matches!(result, Err(FilterError::UnsupportedConnective(_))));
	}
}
