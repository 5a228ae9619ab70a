//! Macros for common functionality

mod deserialization;
