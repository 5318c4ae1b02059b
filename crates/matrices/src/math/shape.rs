use std::fmt;
use std::str::FromStr;

/// Dimensions of a matrix, written `CxR` (columns by rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    pub columns: usize,
    pub rows: usize,
}

impl Shape {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Number of entries, or `None` if it does not fit in `usize`.
    pub fn checked_len(&self) -> Option<usize> {
        self.columns.checked_mul(self.rows)
    }

    /// The shape with columns and rows swapped.
    pub fn transposed(&self) -> Self {
        Self {
            columns: self.rows,
            rows: self.columns,
        }
    }
}

impl From<(usize, usize)> for Shape {
    fn from(value: (usize, usize)) -> Self {
        Shape::new(value.0, value.1)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

impl FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let (columns, rows) = lowered
            .split_once('x')
            .ok_or_else(|| format!("Invalid shape: {}. Expected COLUMNSxROWS, e.g. 3x2", s))?;
        let columns = columns
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("Invalid column count in shape {}: {}", s, e))?;
        let rows = rows
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("Invalid row count in shape {}: {}", s, e))?;
        Ok(Shape { columns, rows })
    }
}
