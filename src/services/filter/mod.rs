//! Filter building functionality.
//!
//! Implements the boolean filter tree used to assemble WHERE clauses:
//! - Predicate combination with AND/OR connectives
//! - Rendering into a fully parenthesized textual predicate
//! - Error types for malformed trees

mod error;
mod expression;

pub use error::FilterError;
pub use expression::{BooleanOperator, Connective, FilterExpression};
