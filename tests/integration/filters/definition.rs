//! Integration tests for filter trees loaded from their JSON form.

use data_filter::services::filter::{FilterError, FilterExpression};
use std::{fs, io::Write};
use tempfile::NamedTempFile;

const NESTED_DEFINITION: &str = r#"{
	"branch": {
		"left": {
			"branch": {
				"left": {"leaf": {"key": "status", "operator": "=", "value": "'active'"}},
				"connective": "And",
				"right": {"leaf": {"key": "age", "operator": ">=", "value": 18}}
			}
		},
		"connective": "OR",
		"right": {"single": {"leaf": {"key": "vip", "operator": "=", "value": true}}}
	}
}"#;

#[test]
fn test_definition_from_file_renders() {
	let mut file = NamedTempFile::new().unwrap();
	file.write_all(NESTED_DEFINITION.as_bytes()).unwrap();

	let raw = fs::read_to_string(file.path()).unwrap();
	let expression = FilterExpression::from_json(&raw).unwrap();

	assert_eq!(
		expression.render(),
		"((status = 'active' And age >= 18) Or vip = true)"
	);
}

#[test]
fn test_definition_round_trip_keeps_rendering() {
	let expression = FilterExpression::from_json(NESTED_DEFINITION).unwrap();
	let json = serde_json::to_string(&expression).unwrap();
	let reloaded = FilterExpression::from_json(&json).unwrap();

	assert_eq!(reloaded, expression);
	assert_eq!(reloaded.render(), expression.render());
}

#[test]
fn test_empty_definition() {
	let expression = FilterExpression::from_json(r#""empty""#).unwrap();
	assert!(expression.is_empty());
	assert_eq!(expression.render(), "");
}

#[test]
fn test_unknown_connective_is_rejected() {
	let result = FilterExpression::from_json(
		r#"{"branch": {"left": "empty", "connective": "xor", "right": "empty"}}"#,
	);
	assert!(matches!(result, Err(FilterError::InvalidDefinition(_))));
}

#[test]
fn test_unsigned_value_above_i64_keeps_digits() {
	let expression = FilterExpression::from_json(
		r#"{"leaf": {"key": "id", "operator": "=", "value": 18446744073709551615}}"#,
	)
	.unwrap();
	assert_eq!(expression.render(), "id = 18446744073709551615");

	let reloaded = FilterExpression::from_json(&serde_json::to_string(&expression).unwrap())
		.unwrap();
	assert_eq!(reloaded, expression);
}

#[test]
fn test_non_finite_float_is_not_serialized() {
	let expression = FilterExpression::and(
		FilterExpression::predicate("ratio", "<", f64::INFINITY),
		FilterExpression::predicate("score", "=", f64::NAN),
	);
	assert_eq!(expression.render(), "(ratio < inf And score = NaN)");
	assert!(serde_json::to_string(&expression).is_err());
}
