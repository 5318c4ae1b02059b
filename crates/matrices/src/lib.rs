//! matrices: dense `f32` matrices addressed by `(column, row)`.
//!
//! This crate provides a single owned [`Matrix`] type with elementwise
//! scalar and matrix arithmetic, the Hadamard and cross products,
//! transposition and uniform randomization from an injected source.
//! Every binary operation comes in an in-place form (a method) and an
//! allocating form (a function in [`math::ops`]).
//!
//! Shape violations are reported through [`MatrixError`] rather than
//! truncating or padding either operand.
pub mod config;
pub mod error;
pub mod math;

pub use error::{Location, MatrixError, Operation, Result};
pub use math::{ops, Matrix, Shape, LINE_ENDING};
