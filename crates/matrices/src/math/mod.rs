//! The dense `Matrix` type, its shape, and the operations over it.
//!
//! In-place operations are methods on [`Matrix`]; the allocating forms are
//! free functions in [`ops`] and back the operator overloads.
pub mod matrix;
pub mod ops;
pub mod shape;

pub use matrix::{Matrix, LINE_ENDING};
pub use shape::Shape;
