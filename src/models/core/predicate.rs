//! Predicate data structures.
//!
//! A predicate is the atomic comparison at the leaves of a filter tree: a column
//! name, an opaque comparison operator and a scalar value.

use serde::{ser::Error as _, Deserialize, Serialize, Serializer};
use std::fmt;

/// Scalar value compared against a column.
///
/// Values are rendered through their natural textual form. No quoting is
/// applied, so a value meant as a SQL string literal must carry its own quotes.
///
/// Non-finite floats render as `NaN`, `inf` or `-inf` but cannot be serialized,
/// since JSON has no representation for them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
	/// Absent value, rendered as nothing
	#[default]
	Null,
	Bool(bool),
	Integer(i64),
	/// Unsigned integer above `i64::MAX`; smaller values decode as `Integer`
	Unsigned(u64),
	#[serde(serialize_with = "serialize_finite")]
	Float(f64),
	Text(String),
}

fn serialize_finite<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
	if !value.is_finite() {
		return Err(S::Error::custom(format!(
			"non-finite float {} cannot be serialized",
			value
		)));
	}
	serializer.serialize_f64(*value)
}

impl fmt::Display for FilterValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FilterValue::Null => Ok(()),
			FilterValue::Bool(b) => write!(f, "{}", b),
			FilterValue::Integer(i) => write!(f, "{}", i),
			FilterValue::Unsigned(u) => write!(f, "{}", u),
			FilterValue::Float(n) => write!(f, "{}", n),
			FilterValue::Text(s) => f.write_str(s),
		}
	}
}

impl From<&str> for FilterValue {
	fn from(value: &str) -> Self {
		FilterValue::Text(value.to_string())
	}
}

impl From<String> for FilterValue {
	fn from(value: String) -> Self {
		FilterValue::Text(value)
	}
}

impl From<bool> for FilterValue {
	fn from(value: bool) -> Self {
		FilterValue::Bool(value)
	}
}

macro_rules! impl_from_small_integer {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for FilterValue {
				fn from(value: $ty) -> Self {
					FilterValue::Integer(value.into())
				}
			}
		)*
	};
}

impl_from_small_integer!(i8, i16, i32, u8, u16, u32);

impl From<i64> for FilterValue {
	fn from(value: i64) -> Self {
		FilterValue::Integer(value)
	}
}

impl From<u64> for FilterValue {
	fn from(value: u64) -> Self {
		i64::try_from(value).map_or(FilterValue::Unsigned(value), FilterValue::Integer)
	}
}

impl From<f32> for FilterValue {
	fn from(value: f32) -> Self {
		FilterValue::Float(value.into())
	}
}

impl From<f64> for FilterValue {
	fn from(value: f64) -> Self {
		FilterValue::Float(value)
	}
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(FilterValue::Null, Into::into)
	}
}

/// Atomic comparison rendered as `<key> <operator> <value>`.
///
/// Neither the key nor the operator is validated; both are emitted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredicateNode {
	/// Column or field name
	key: String,
	/// Comparison token such as `=`, `>` or `like`
	operator: String,
	/// Right-hand side of the comparison
	#[serde(default)]
	value: FilterValue,
}

impl PredicateNode {
	pub fn new(
		key: impl Into<String>,
		operator: impl Into<String>,
		value: impl Into<FilterValue>,
	) -> Self {
		Self {
			key: key.into(),
			operator: operator.into(),
			value: value.into(),
		}
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn operator(&self) -> &str {
		&self.operator
	}

	pub fn value(&self) -> &FilterValue {
		&self.value
	}

	/// Renders the predicate as `<key> <operator> <value>`
	pub fn render(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for PredicateNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {} {}", self.key, self.operator, self.value)
	}
}
