//! Integration tests for building matrices and reading or writing their entries.

use matrices::{Location, Matrix, MatrixError, Operation, Shape};

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

#[test]
fn new_is_zero_filled() {
    let m = Matrix::new(3, 2).unwrap();
    assert_eq!(m.columns(), 3);
    assert_eq!(m.rows(), 2);
    assert_eq!(m.shape(), Shape::new(3, 2));
    assert_eq!(m.len(), 6);
    assert!(m.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn new_with_overflowing_size_is_invalid() {
    let err = Matrix::new(usize::MAX, usize::MAX).unwrap_err();
    assert!(matches!(err, MatrixError::InvalidDimension { .. }));
}

#[test]
fn row_vector_is_one_by_n() {
    let m = Matrix::from_vector(&[1.0, 2.0, 3.0], false);
    assert_eq!(m.shape(), Shape::new(1, 3));
    assert_eq!(m.column(0).unwrap(), &[1.0, 2.0, 3.0]);
}

#[test]
fn column_vector_is_n_by_one() {
    let m = Matrix::from_vector(&[1.0, 2.0, 3.0], true);
    assert_eq!(m.shape(), Shape::new(3, 1));
    assert_eq!(m[(0, 0)], 1.0);
    assert_eq!(m[(1, 0)], 2.0);
    assert_eq!(m[(2, 0)], 3.0);
}

#[test]
fn from_grid_copies_by_position() {
    let m = Matrix::from_grid(&[vec![1.0f32, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    assert_eq!(m.shape(), Shape::new(2, 3));
    assert_eq!(m[(0, 2)], 3.0);
    assert_eq!(m[(1, 0)], 4.0);
    assert_eq!(
        m.to_grid(),
        vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]
    );
}

#[test]
fn from_grid_rejects_ragged_input() {
    let err = Matrix::from_grid(&[vec![1.0f32, 2.0], vec![3.0]]).unwrap_err();
    match err {
        MatrixError::InvalidDimension { reason } => {
            assert!(reason.contains("column 1"), "reason: {}", reason)
        }
        other => panic!("expected InvalidDimension, got {:?}", other),
    }
}

#[test]
fn from_grid_of_nothing_is_empty() {
    let grid: Vec<Vec<f32>> = Vec::new();
    let m = Matrix::from_grid(&grid).unwrap();
    assert_eq!(m.shape(), Shape::new(0, 0));
    assert!(m.is_empty());
}

#[test]
fn from_fn_visits_every_coordinate() {
    let m = Matrix::from_fn(2, 3, |c, r| (c * 10 + r) as f32).unwrap();
    assert_eq!(m[(1, 2)], 12.0);
    assert_eq!(m[(0, 1)], 1.0);
}

// ---------------------------------------------------------------------------
// Element access
// ---------------------------------------------------------------------------

#[test]
fn get_and_set_round_trip() {
    let mut m = Matrix::new(2, 2).unwrap();
    m.set(1, 0, 7.5).unwrap();
    assert_eq!(m.get(1, 0).unwrap(), 7.5);
    m[(0, 1)] = -2.0;
    assert_eq!(m.get(0, 1).unwrap(), -2.0);
}

#[test]
fn get_out_of_bounds_errors() {
    let m = Matrix::new(2, 3).unwrap();
    let err = m.get(2, 0).unwrap_err();
    assert_eq!(
        err,
        MatrixError::IndexOutOfBounds {
            location: Location::Element { column: 2, row: 0 },
            shape: Shape::new(2, 3),
        }
    );
    assert!(m.get(0, 3).is_err());
}

#[test]
fn set_out_of_bounds_leaves_matrix_unchanged() {
    let mut m = Matrix::new(1, 1).unwrap();
    assert!(m.set(0, 1, 4.0).is_err());
    assert_eq!(m.as_slice(), &[0.0]);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn index_out_of_bounds_panics() {
    let m = Matrix::new(2, 2).unwrap();
    let _value: f32 = m[(0, 5)];
}

#[test]
fn zero_column_matrix_accessors_are_guarded() {
    let m = Matrix::new(0, 4).unwrap();
    assert_eq!(m.rows(), 4);
    assert_eq!(m.columns(), 0);
    assert!(m.column(0).is_err());
    assert!(m.get(0, 0).is_err());
}

// ---------------------------------------------------------------------------
// Column access
// ---------------------------------------------------------------------------

#[test]
fn column_view_and_index() {
    let m = Matrix::from_grid(&[[1.0f32, 2.0], [3.0, 4.0]]).unwrap();
    assert_eq!(m.column(1).unwrap(), &[3.0, 4.0]);
    assert_eq!(&m[0], &[1.0, 2.0]);
    let err = m.column(2).unwrap_err();
    assert!(matches!(
        err,
        MatrixError::IndexOutOfBounds {
            location: Location::Column(2),
            ..
        }
    ));
}

#[test]
fn column_mut_edits_in_place() {
    let mut m = Matrix::new(2, 2).unwrap();
    m.column_mut(1).unwrap()[0] = 9.0;
    m[0][1] = 3.0;
    assert_eq!(m.to_grid(), vec![vec![0.0, 3.0], vec![9.0, 0.0]]);
}

#[test]
fn set_column_replaces_values() {
    let mut m = Matrix::new(2, 3).unwrap();
    m.set_column(0, &[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(m.column(0).unwrap(), &[1.0, 2.0, 3.0]);
    assert_eq!(m.column(1).unwrap(), &[0.0, 0.0, 0.0]);
}

#[test]
fn set_column_with_wrong_length_is_a_mismatch() {
    let mut m = Matrix::new(2, 3).unwrap();
    let err = m.set_column(0, &[1.0, 2.0]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DimensionMismatch {
            operation: Operation::SetColumn,
            left: Shape::new(2, 3),
            right: Shape::new(1, 2),
        }
    );
    assert_eq!(m.column(0).unwrap(), &[0.0, 0.0, 0.0]);
}

#[test]
fn set_column_past_the_last_column_is_out_of_bounds() {
    let mut m = Matrix::new(2, 3).unwrap();
    let err = m.set_column(2, &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::IndexOutOfBounds {
            location: Location::Column(2),
            shape: Shape::new(2, 3),
        }
    );
    assert!(m.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
#[should_panic(expected = "column 3 is out of bounds for a 2x2 matrix")]
fn column_index_out_of_bounds_panics() {
    let m = Matrix::new(2, 2).unwrap();
    let _column: &[f32] = &m[3];
}

#[test]
#[should_panic(expected = "column 2 is out of bounds")]
fn column_index_mut_out_of_bounds_panics() {
    let mut m = Matrix::new(2, 2).unwrap();
    m[2][0] = 1.0;
}

// ---------------------------------------------------------------------------
// Clone & equality
// ---------------------------------------------------------------------------

#[test]
fn clone_is_independent() {
    let a = Matrix::from_grid(&[[1.0f32, 2.0], [3.0, 4.0]]).unwrap();
    let mut b = a.clone();
    assert_eq!(a, b);

    b[(0, 0)] = 100.0;
    assert_eq!(a[(0, 0)], 1.0);
    assert_ne!(a, b);
}

#[test]
fn equality_is_structural() {
    let a = Matrix::from_vector(&[1.0, 2.0], false);
    let b = Matrix::from_vector(&[1.0, 2.0], false);
    let c = Matrix::from_vector(&[1.0, 2.0], true);
    assert_eq!(a, b);
    // Same entries, different shape.
    assert_ne!(a, c);
}

#[test]
fn approx_eq_respects_tolerance() {
    let a = Matrix::from_vector(&[1.0, 2.0], false);
    let b = Matrix::from_vector(&[1.0005, 2.0], false);
    assert!(a.approx_eq(&b, 1e-3));
    assert!(!a.approx_eq(&b, 1e-5));
    assert!(!a.approx_eq(&Matrix::from_vector(&[1.0, 2.0], true), 1.0));
}
