//! Core domain models for filter building.
//!
//! This module contains the fundamental data structures that represent:
//! - Predicates: Atomic column comparisons at the leaves of a filter tree
//! - Values: Scalars compared against a column

mod predicate;

pub use predicate::{FilterValue, PredicateNode};
