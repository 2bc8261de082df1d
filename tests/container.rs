use matricis::{Axis, ComputeMode, Matrix, MatrixError, OverflowPolicy};

fn mode() -> ComputeMode {
    ComputeMode::new(OverflowPolicy::Safe)
}

// ── Round-trips ──────────────────────────────────────────────────────

#[test]
fn set_flatten_rescheme_roundtrip() {
    let rows = vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9, 10, 11, 12]];
    let mut m = Matrix::new(mode());
    m.set(&rows).unwrap();
    let original = m.clone();

    let flat = m.as_flat().unwrap();
    m.rescheme(4, 3).unwrap();
    assert_eq!(m.as_flat().unwrap(), flat);
    m.rescheme(2, 6).unwrap();
    assert_eq!(m.as_flat().unwrap(), flat);

    m.rescheme(3, 4).unwrap();
    assert_eq!(m, original);
}

#[test]
fn transpose_twice_roundtrip() {
    let mut m = Matrix::from_rows(
        vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]],
        mode(),
    )
    .unwrap();
    let original = m.clone();
    m.transpose();
    assert_eq!(m.rows(), 4);
    assert_eq!(m.columns(), 2);
    m.transpose();
    assert_eq!(m, original);
}

#[test]
fn row_get_set_roundtrip_is_noop() {
    let mut m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]], mode()).unwrap();
    let original = m.clone();
    for i in 0..m.rows() {
        let row = m.axis_values(Axis::Rows, i).unwrap();
        m.set_axis(Axis::Rows, &row, i).unwrap();
    }
    assert_eq!(m, original);
}

#[test]
fn column_remove_insert_roundtrip() {
    let mut m = Matrix::from_rows(
        vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]],
        mode(),
    )
    .unwrap();
    let original = m.clone();
    for k in 0..3 {
        let col = m.axis_values(Axis::Columns, k).unwrap();
        m.remove_axis(Axis::Columns, k).unwrap();
        m.insert_axis(Axis::Columns, &col, k).unwrap();
    }
    assert_eq!(m, original);
}

// ── Building a matrix from scratch ───────────────────────────────────

#[test]
fn bootstrap_column_then_grow() {
    let mut m: Matrix<i32> = Matrix::new(mode());
    m.insert_axis(Axis::Columns, &[1, 2, 3], 0).unwrap();
    m.insert_axis(Axis::Columns, &[4, 5, 6], 1).unwrap();
    m.insert_axis(Axis::Rows, &[7, 8], 3).unwrap();
    assert_eq!(m.rows(), 4);
    assert_eq!(m.columns(), 2);
    assert_eq!(m.as_flat().unwrap(), vec![1, 4, 2, 5, 3, 6, 7, 8]);
}

#[test]
fn set_fill_then_rescheme() {
    let mut m: Matrix<i32> = Matrix::new(mode());
    m.set_fill(7, 6);
    assert_eq!(m.rows(), 1);
    m.rescheme(2, 3).unwrap();
    assert_eq!(m.rows(), 2);
    assert_eq!(m.columns(), 3);
    assert!(m.as_flat().unwrap().iter().all(|&v| v == 7));
}

// ── Error surface ────────────────────────────────────────────────────

#[test]
fn empty_matrix_errors() {
    let m: Matrix<i32> = Matrix::new(mode());
    assert_eq!(m.as_flat().unwrap_err(), MatrixError::Uninitialized);
    assert_eq!(
        m.axis_values(Axis::Rows, 0).unwrap_err(),
        MatrixError::RowOutOfRange { index: 0, rows: 0 }
    );
}

#[test]
fn reverse_everything() {
    let mut m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]], mode()).unwrap();
    m.reverse_axis(Axis::Rows, None).unwrap();
    m.reverse_axis(Axis::Columns, None).unwrap();
    // Reversing every row then every column rotates the matrix 180°
    assert_eq!(m.as_flat().unwrap(), vec![6, 5, 4, 3, 2, 1]);
}
