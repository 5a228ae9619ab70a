//! Error types for filter operations.
//!
//! Defines the error cases that can occur while assembling a filter tree
//! and provides helper methods for error creation and formatting.

use crate::utils::logging::error::{ErrorContext, TraceableError};
use std::collections::HashMap;
use thiserror::Error as ThisError;
use uuid::Uuid;

/// Represents errors that can occur during filter operations
#[derive(ThisError, Debug)]
pub enum FilterError {
	/// Two subtrees were joined with a connective that has no rendering
	#[error("Unsupported connective: {0}")]
	UnsupportedConnective(Box<ErrorContext>),

	/// A right subtree was supplied without a left one
	#[error("Missing left operand: {0}")]
	MissingLeftOperand(Box<ErrorContext>),

	/// A serialized filter tree could not be decoded
	#[error("Invalid filter definition: {0}")]
	InvalidDefinition(Box<ErrorContext>),

	/// Other errors that don't fit into the categories above
	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

impl FilterError {
	/// Creates a new `UnsupportedConnective` error.
	/// The `message` should name the offending connective.
	pub fn unsupported_connective(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::UnsupportedConnective(Box::new(ErrorContext::new_with_log(
			msg, source, metadata,
		)))
	}

	/// Creates a new `MissingLeftOperand` error.
	pub fn missing_left_operand(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::MissingLeftOperand(Box::new(ErrorContext::new_with_log(
			msg, source, metadata,
		)))
	}

	/// Creates a new `InvalidDefinition` error.
	pub fn invalid_definition(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::InvalidDefinition(Box::new(ErrorContext::new_with_log(
			msg, source, metadata,
		)))
	}
}

impl TraceableError for FilterError {
	fn trace_id(&self) -> String {
		match self {
			Self::UnsupportedConnective(ctx)
			| Self::MissingLeftOperand(ctx)
			| Self::InvalidDefinition(ctx) => ctx.trace_id.clone(),
			Self::Other(_) => Uuid::new_v4().to_string(),
		}
	}
}
