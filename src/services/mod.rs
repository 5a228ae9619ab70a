//! Core services implementing the business logic.
//!
//! This module contains the main service implementations:
//! - `filter`: Filter tree construction and rendering

pub mod filter;
