use std::fmt;

use thiserror::Error;

use crate::math::Shape;

pub type Result<T, E = MatrixError> = std::result::Result<T, E>;

/// Binary operations that carry a shape precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Hadamard,
    Cross,
    SetColumn,
}

impl Operation {
    fn requirement(&self) -> &'static str {
        match self {
            Operation::Add | Operation::Subtract | Operation::Hadamard => {
                "the dimensions of both matrices to be equal"
            }
            Operation::Cross => {
                "the number of columns in the left matrix to equal the number of rows in the right matrix"
            }
            Operation::SetColumn => "the length of the column to match the number of rows",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "sum",
            Operation::Subtract => "difference",
            Operation::Hadamard => "Hadamard product",
            Operation::Cross => "cross product",
            Operation::SetColumn => "column replacement",
        };
        f.write_str(name)
    }
}

/// Where an out-of-bounds access landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Element { column: usize, row: usize },
    Column(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Element { column, row } => write!(f, "element ({}, {})", column, row),
            Location::Column(column) => write!(f, "column {}", column),
        }
    }
}

/// Errors raised by matrix construction, access and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("invalid dimension: {reason}")]
    InvalidDimension { reason: String },

    #[error(
        "the {operation} requires {}; dimensions of left: {left}, dimensions of right: {right}",
        .operation.requirement()
    )]
    DimensionMismatch {
        operation: Operation,
        left: Shape,
        right: Shape,
    },

    #[error("{location} is out of bounds for a {shape} matrix")]
    IndexOutOfBounds { location: Location, shape: Shape },
}

impl MatrixError {
    pub(crate) fn mismatch(operation: Operation, left: Shape, right: Shape) -> Self {
        MatrixError::DimensionMismatch {
            operation,
            left,
            right,
        }
    }
}
