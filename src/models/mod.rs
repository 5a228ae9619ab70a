//! Domain models and data structures for filter building.
//!
//! This module contains the core data structures used throughout the application:
//!
//! - `core`: Core domain models (PredicateNode, FilterValue)

mod core;

// Re-export core types
pub use core::{FilterValue, PredicateNode};
