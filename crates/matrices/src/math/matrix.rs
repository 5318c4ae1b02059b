use std::fmt;
use std::ops::{Index, IndexMut};

use rand::Rng;

use crate::error::{Location, MatrixError, Operation, Result};
use crate::math::ops;
use crate::math::Shape;

/// Separator between the lines written by `Display`.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// A dense, fixed-size grid of `f32` addressed by `(column, row)`.
///
/// Entries live in one flat buffer, column after column, so column `c`
/// is the contiguous run `data[c * rows..(c + 1) * rows]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f32>,
    columns: usize,
    rows: usize,
}

fn checked_len(columns: usize, rows: usize) -> Result<usize> {
    Shape::new(columns, rows)
        .checked_len()
        .ok_or_else(|| MatrixError::InvalidDimension {
            reason: format!(
                "a {}x{} matrix has more entries than can be addressed",
                columns, rows
            ),
        })
}

impl Matrix {
    /// Creates a zero-filled matrix with the given number of columns and rows.
    pub fn new(columns: usize, rows: usize) -> Result<Self> {
        let len = checked_len(columns, rows)?;
        Ok(Self {
            data: vec![0.0; len],
            columns,
            rows,
        })
    }

    /// Builds a vector-shaped matrix.
    ///
    /// With `is_column == false` the result has one column holding every
    /// value (`1 x len`); with `is_column == true` each value gets its own
    /// single-row column (`len x 1`).
    pub fn from_vector(values: &[f32], is_column: bool) -> Self {
        let (columns, rows) = if is_column {
            (values.len(), 1)
        } else {
            (1, values.len())
        };
        // Both orientations share the same flat layout.
        Self {
            data: values.to_vec(),
            columns,
            rows,
        }
    }

    /// Copies a 2-D grid whose outer sequence is the columns.
    ///
    /// Every inner sequence must have the same length; a ragged grid is
    /// rejected with [`MatrixError::InvalidDimension`].
    pub fn from_grid<C>(grid: &[C]) -> Result<Self>
    where
        C: AsRef<[f32]>,
    {
        let columns = grid.len();
        let rows = grid.first().map_or(0, |column| column.as_ref().len());
        let mut data = Vec::with_capacity(checked_len(columns, rows)?);

        for (idx, column) in grid.iter().enumerate() {
            let column = column.as_ref();
            if column.len() != rows {
                return Err(MatrixError::InvalidDimension {
                    reason: format!(
                        "grid is not rectangular: column {} has {} rows, expected {}",
                        idx,
                        column.len(),
                        rows
                    ),
                });
            }
            data.extend_from_slice(column);
        }

        Ok(Self {
            data,
            columns,
            rows,
        })
    }

    /// Builds a matrix by evaluating `f(column, row)` for every entry.
    pub fn from_fn<F>(columns: usize, rows: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f32,
    {
        let mut data = Vec::with_capacity(checked_len(columns, rows)?);
        for column in 0..columns {
            for row in 0..rows {
                data.push(f(column, row));
            }
        }
        Ok(Self {
            data,
            columns,
            rows,
        })
    }

    pub(crate) fn from_parts(columns: usize, rows: usize, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), columns * rows);
        Self {
            data,
            columns,
            rows,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.columns, self.rows)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The flat buffer, column after column.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    fn offset(&self, column: usize, row: usize) -> usize {
        column * self.rows + row
    }

    fn element_offset(&self, column: usize, row: usize) -> Result<usize> {
        if column < self.columns && row < self.rows {
            Ok(self.offset(column, row))
        } else {
            Err(MatrixError::IndexOutOfBounds {
                location: Location::Element { column, row },
                shape: self.shape(),
            })
        }
    }

    fn column_range(&self, column: usize) -> Result<std::ops::Range<usize>> {
        if column < self.columns {
            let start = self.offset(column, 0);
            Ok(start..start + self.rows)
        } else {
            Err(MatrixError::IndexOutOfBounds {
                location: Location::Column(column),
                shape: self.shape(),
            })
        }
    }

    pub fn get(&self, column: usize, row: usize) -> Result<f32> {
        let offset = self.element_offset(column, row)?;
        Ok(self.data[offset])
    }

    pub fn set(&mut self, column: usize, row: usize, value: f32) -> Result<()> {
        let offset = self.element_offset(column, row)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Borrows a whole column.
    pub fn column(&self, column: usize) -> Result<&[f32]> {
        let range = self.column_range(column)?;
        Ok(&self.data[range])
    }

    /// Mutably borrows a whole column. The slice length is fixed, so the
    /// column can be edited but never resized.
    pub fn column_mut(&mut self, column: usize) -> Result<&mut [f32]> {
        let range = self.column_range(column)?;
        Ok(&mut self.data[range])
    }

    /// Replaces a column with `values`, which must hold exactly `rows` entries.
    pub fn set_column(&mut self, column: usize, values: &[f32]) -> Result<()> {
        let range = self.column_range(column)?;
        if values.len() != self.rows {
            return Err(MatrixError::mismatch(
                Operation::SetColumn,
                self.shape(),
                Shape::new(1, values.len()),
            ));
        }
        self.data[range].copy_from_slice(values);
        Ok(())
    }

    pub fn iter_columns(&self) -> impl Iterator<Item = &[f32]> + '_ {
        (0..self.columns).map(move |column| {
            let start = self.offset(column, 0);
            &self.data[start..start + self.rows]
        })
    }

    /// Copies the entries out as one `Vec` per column.
    pub fn to_grid(&self) -> Vec<Vec<f32>> {
        self.iter_columns().map(|column| column.to_vec()).collect()
    }

    pub fn mapv<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f32) -> f32,
    {
        Matrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
            columns: self.columns,
            rows: self.rows,
        }
    }

    pub fn map_in_place<F>(&mut self, mut f: F)
    where
        F: FnMut(f32) -> f32,
    {
        for v in self.data.iter_mut() {
            *v = f(*v);
        }
    }

    pub(crate) fn ensure_same_shape(&self, other: &Matrix, operation: Operation) -> Result<()> {
        if self.columns == other.columns && self.rows == other.rows {
            Ok(())
        } else {
            Err(MatrixError::mismatch(operation, self.shape(), other.shape()))
        }
    }

    pub(crate) fn zip_map<F>(&self, other: &Matrix, operation: Operation, f: F) -> Result<Matrix>
    where
        F: Fn(f32, f32) -> f32,
    {
        self.ensure_same_shape(other, operation)?;
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            columns: self.columns,
            rows: self.rows,
        })
    }

    fn zip_in_place<F>(&mut self, other: &Matrix, operation: Operation, f: F) -> Result<()>
    where
        F: Fn(f32, f32) -> f32,
    {
        self.ensure_same_shape(other, operation)?;
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = f(*a, b);
        }
        Ok(())
    }

    /// Adds `value` to every entry.
    pub fn add_scalar(&mut self, value: f32) {
        self.map_in_place(|v| v + value);
    }

    /// Subtracts `value` from every entry.
    pub fn subtract_scalar(&mut self, value: f32) {
        self.map_in_place(|v| v - value);
    }

    /// Multiplies every entry by `value`.
    pub fn multiply_scalar(&mut self, value: f32) {
        self.map_in_place(|v| v * value);
    }

    /// Adds `other` entry by entry. Both matrices must share a shape.
    pub fn add_matrix(&mut self, other: &Matrix) -> Result<()> {
        self.zip_in_place(other, Operation::Add, |a, b| a + b)
    }

    /// Subtracts `other` entry by entry. Both matrices must share a shape.
    pub fn subtract_matrix(&mut self, other: &Matrix) -> Result<()> {
        self.zip_in_place(other, Operation::Subtract, |a, b| a - b)
    }

    /// Multiplies by `other` entry by entry (Hadamard product).
    pub fn hadamard(&mut self, other: &Matrix) -> Result<()> {
        self.zip_in_place(other, Operation::Hadamard, |a, b| a * b)
    }

    /// Replaces `self` with the product `self x rhs`.
    ///
    /// On a shape mismatch `self` is left untouched.
    pub fn cross(&mut self, rhs: &Matrix) -> Result<()> {
        *self = ops::cross(self, rhs)?;
        Ok(())
    }

    /// Transposes in place, swapping the column and row counts.
    pub fn transpose(&mut self) {
        *self = ops::transpose(self);
    }

    /// Overwrites every entry with a uniform draw from `[-1.0, 1.0)`.
    pub fn randomize<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for v in self.data.iter_mut() {
            *v = rng.gen_range(-1.0f32..1.0);
        }
    }

    /// True when both matrices share a shape and every pair of entries
    /// differs by at most `tolerance`.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f32) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        match self.element_offset(index.0, index.1) {
            Ok(offset) => &self.data[offset],
            Err(e) => panic!("{}", e),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        match self.element_offset(index.0, index.1) {
            Ok(offset) => &mut self.data[offset],
            Err(e) => panic!("{}", e),
        }
    }
}

impl Index<usize> for Matrix {
    type Output = [f32];

    fn index(&self, column: usize) -> &Self::Output {
        match self.column(column) {
            Ok(values) => values,
            Err(e) => panic!("{}", e),
        }
    }
}

impl IndexMut<usize> for Matrix {
    fn index_mut(&mut self, column: usize) -> &mut Self::Output {
        match self.column_range(column) {
            Ok(range) => &mut self.data[range],
            Err(e) => panic!("{}", e),
        }
    }
}

/// One line per column, entries separated by a single space and lines by
/// [`LINE_ENDING`]. A precision
/// on the formatter (`{:.3}`) applies to every entry.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        for (idx, column) in self.iter_columns().enumerate() {
            if idx > 0 {
                f.write_str(LINE_ENDING)?;
            }
            for (row, value) in column.iter().enumerate() {
                if row > 0 {
                    write!(f, " ")?;
                }
                match precision {
                    Some(p) => write!(f, "{:.*}", p, value)?,
                    None => write!(f, "{}", value)?,
                }
            }
        }
        Ok(())
    }
}
