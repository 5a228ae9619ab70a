//! Boolean filter tree builder.
//!
//! This library assembles WHERE-clause style predicates from an immutable binary
//! tree of column comparisons joined by AND/OR, and renders them as text. It includes:
//!
//! - Predicate and value models with serde support
//! - The filter tree and its fully parenthesized rendering
//! - Traceable error types and logging setup
//!
//! # Module Structure
//!
//! - `models`: Predicate data structures
//! - `services`: Filter tree construction and rendering
//! - `utils`: Common utilities and helper functions

pub mod models;
pub mod services;
pub mod utils;
