//! Utility modules for common functionality.
//!
//! This module provides various utility functions and types that are used across
//! the application. Currently includes:
//!
//! - logging: Logging setup and traceable error context
//! - macros: Macros for common functionality
//! - parsing: Parsing utilities

pub mod logging;
pub mod macros;
pub mod parsing;

pub use parsing::*;
