//! Allocating forms of the matrix operations and the operator overloads.
//!
//! Every function here leaves its inputs untouched and returns a freshly
//! owned [`Matrix`]. The in-place counterparts are methods on `Matrix`.
//!
//! Operators are implemented on references. The matrix-matrix operators
//! (`+`, `-`, `^` for the Hadamard product, `*` for the cross product)
//! panic with the [`MatrixError::DimensionMismatch`] message when shapes
//! disagree; use the named functions to get the error back instead.
use std::ops::{Add, AddAssign, BitXor, BitXorAssign, Mul, MulAssign, Sub, SubAssign};

use crate::error::{MatrixError, Operation, Result};
use crate::math::Matrix;

/// Returns `matrix` with `value` added to every entry.
pub fn add_scalar(matrix: &Matrix, value: f32) -> Matrix {
    matrix.mapv(|v| v + value)
}

/// Returns `matrix` with `value` subtracted from every entry.
pub fn subtract_scalar(matrix: &Matrix, value: f32) -> Matrix {
    matrix.mapv(|v| v - value)
}

/// Returns `matrix` with every entry multiplied by `value`.
pub fn multiply_scalar(matrix: &Matrix, value: f32) -> Matrix {
    matrix.mapv(|v| v * value)
}

/// Entrywise sum of two matrices of the same shape.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    a.zip_map(b, Operation::Add, |x, y| x + y)
}

/// Entrywise difference `a - b` of two matrices of the same shape.
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    a.zip_map(b, Operation::Subtract, |x, y| x - y)
}

/// Entrywise (Hadamard) product of two matrices of the same shape.
pub fn hadamard(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    a.zip_map(b, Operation::Hadamard, |x, y| x * y)
}

/// Matrix product `a x b`.
///
/// Requires `a.columns() == b.rows()`. The result has `b.columns()`
/// columns and `a.rows()` rows, and entry `(j, i)` is the sum over `k` of
/// `a[(k, i)] * b[(j, k)]`, accumulated in increasing `k` starting from zero.
pub fn cross(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.columns() != b.rows() {
        return Err(MatrixError::mismatch(Operation::Cross, a.shape(), b.shape()));
    }
    log::trace!("cross product of {} and {}", a.shape(), b.shape());

    let (a_rows, b_rows) = (a.rows(), b.rows());
    let (lhs, rhs) = (a.as_slice(), b.as_slice());
    let len = b
        .columns()
        .checked_mul(a_rows)
        .ok_or_else(|| MatrixError::InvalidDimension {
            reason: format!(
                "the product of {} and {} has more entries than can be addressed",
                a.shape(),
                b.shape()
            ),
        })?;

    let mut data = vec![0.0f32; len];
    for i in 0..a_rows {
        for j in 0..b.columns() {
            let mut acc = 0.0f32;
            for k in 0..a.columns() {
                acc += lhs[k * a_rows + i] * rhs[j * b_rows + k];
            }
            data[j * a_rows + i] = acc;
        }
    }

    Ok(Matrix::from_parts(b.columns(), a_rows, data))
}

/// Returns the transpose of `matrix`: columns become rows.
pub fn transpose(matrix: &Matrix) -> Matrix {
    log::trace!("transpose of {}", matrix.shape());

    let (columns, rows) = (matrix.columns(), matrix.rows());
    let src = matrix.as_slice();
    let mut data = vec![0.0f32; src.len()];
    for i in 0..columns {
        for j in 0..rows {
            data[i + j * columns] = src[i * rows + j];
        }
    }

    Matrix::from_parts(rows, columns, data)
}

fn expect_shape(result: Result<Matrix>) -> Matrix {
    match result {
        Ok(m) => m,
        Err(e) => panic!("{}", e),
    }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: &'b Matrix) -> Self::Output {
        expect_shape(add(self, rhs))
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &'b Matrix) -> Self::Output {
        expect_shape(subtract(self, rhs))
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'b Matrix) -> Self::Output {
        expect_shape(cross(self, rhs))
    }
}

impl<'a, 'b> BitXor<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn bitxor(self, rhs: &'b Matrix) -> Self::Output {
        expect_shape(hadamard(self, rhs))
    }
}

impl<'a> Add<f32> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: f32) -> Self::Output {
        add_scalar(self, rhs)
    }
}

impl<'a> Add<&'a Matrix> for f32 {
    type Output = Matrix;

    fn add(self, rhs: &'a Matrix) -> Self::Output {
        add_scalar(rhs, self)
    }
}

impl<'a> Sub<f32> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: f32) -> Self::Output {
        subtract_scalar(self, rhs)
    }
}

impl<'a> Mul<f32> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f32) -> Self::Output {
        multiply_scalar(self, rhs)
    }
}

impl<'a> Mul<&'a Matrix> for f32 {
    type Output = Matrix;

    fn mul(self, rhs: &'a Matrix) -> Self::Output {
        multiply_scalar(rhs, self)
    }
}

impl<'a> AddAssign<&'a Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &'a Matrix) {
        if let Err(e) = self.add_matrix(rhs) {
            panic!("{}", e);
        }
    }
}

impl<'a> SubAssign<&'a Matrix> for Matrix {
    fn sub_assign(&mut self, rhs: &'a Matrix) {
        if let Err(e) = self.subtract_matrix(rhs) {
            panic!("{}", e);
        }
    }
}

impl<'a> MulAssign<&'a Matrix> for Matrix {
    fn mul_assign(&mut self, rhs: &'a Matrix) {
        if let Err(e) = self.cross(rhs) {
            panic!("{}", e);
        }
    }
}

impl<'a> BitXorAssign<&'a Matrix> for Matrix {
    fn bitxor_assign(&mut self, rhs: &'a Matrix) {
        if let Err(e) = self.hadamard(rhs) {
            panic!("{}", e);
        }
    }
}

impl AddAssign<f32> for Matrix {
    fn add_assign(&mut self, rhs: f32) {
        self.add_scalar(rhs);
    }
}

impl SubAssign<f32> for Matrix {
    fn sub_assign(&mut self, rhs: f32) {
        self.subtract_scalar(rhs);
    }
}

impl MulAssign<f32> for Matrix {
    fn mul_assign(&mut self, rhs: f32) {
        self.multiply_scalar(rhs);
    }
}
