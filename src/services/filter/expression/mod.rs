//! Filter expression trees and their textual rendering

mod ast;
mod rendering;

pub use ast::{BooleanOperator, Connective, FilterExpression};
