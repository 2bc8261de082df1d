use matricis::{ComputeMode, Matrix, MatrixError, OverflowPolicy, StatKind};

const TOL: f64 = 1e-10;

fn fmat(rows: Vec<Vec<f64>>) -> Matrix<f64> {
    Matrix::from_rows(rows, ComputeMode::new(OverflowPolicy::Safe)).unwrap()
}

fn assert_near(a: f64, b: f64, msg: &str) {
    assert!((a - b).abs() < TOL, "{}: {} vs {}", msg, a, b);
}

// ── Determinant / cofactor ───────────────────────────────────────────

#[test]
fn determinant_2x2_reference() {
    let m = Matrix::from_rows(vec![vec![2, 2], vec![4, 5]], ComputeMode::default()).unwrap();
    assert_eq!(m.determinant().unwrap(), 2 * 5 - 2 * 4);
}

#[test]
fn determinant_matches_known_4x4() {
    let m = fmat(vec![
        vec![1.0, 0.0, 2.0, -1.0],
        vec![3.0, 0.0, 0.0, 5.0],
        vec![2.0, 1.0, 4.0, -3.0],
        vec![1.0, 0.0, 5.0, 0.0],
    ]);
    assert_near(m.determinant().unwrap(), 30.0, "det 4x4");
}

#[test]
fn cofactor_sign_alternation_3x3() {
    let m = fmat(vec![
        vec![3.0, 1.0, 4.0],
        vec![1.0, 5.0, 9.0],
        vec![2.0, 6.0, 5.0],
    ]);
    // cofactor(0, 0) = det([[5, 9], [6, 5]]) = -29
    // cofactor(0, 1) = -det([[1, 9], [2, 5]]) = 13
    assert_near(m.cofactor(0, 0).unwrap(), -29.0, "c00");
    assert_near(m.cofactor(0, 1).unwrap(), 13.0, "c01");
    assert_near(m.cofactor(0, 2).unwrap(), -4.0, "c02");
}

#[test]
fn determinant_equals_cofactor_expansion() {
    let m = fmat(vec![
        vec![3.0, 1.0, 4.0],
        vec![1.0, 5.0, 9.0],
        vec![2.0, 6.0, 5.0],
    ]);
    let mut expansion = 0.0;
    for j in 0..3 {
        expansion += m.get(0, j).unwrap() * m.cofactor(0, j).unwrap();
    }
    assert_near(m.determinant().unwrap(), expansion, "first-row expansion");
}

// ── Inverse ──────────────────────────────────────────────────────────

#[test]
fn inverse_identity_product() {
    let m = fmat(vec![
        vec![4.0, 2.0, 1.0],
        vec![0.0, 3.0, -1.0],
        vec![2.0, 0.0, 5.0],
    ]);
    let inv = m.inverse().unwrap();
    let prod = m.matmul(&inv).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_near(prod.get(i, j).unwrap(), expected, "A * A^-1");
        }
    }
}

#[test]
fn inverse_of_singular_fails() {
    let m = fmat(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
    assert_eq!(m.inverse().unwrap_err(), MatrixError::ZeroDeterminant);
}

#[test]
fn inverse_of_non_square_fails() {
    let m = fmat(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    assert!(matches!(m.inverse(), Err(MatrixError::NonSquare { .. })));
}

// ── Matrix power ─────────────────────────────────────────────────────

#[test]
fn power_chain() {
    let m = fmat(vec![vec![1.0, 1.0], vec![0.0, 1.0]]);
    let m4 = m.pow(4.0).unwrap();
    assert_near(m4.get(0, 1).unwrap(), 4.0, "shear^4");

    let back = m4.pow(-1.0).unwrap().pow(-1.0).unwrap();
    for i in 0..2 {
        for j in 0..2 {
            assert_near(back.get(i, j).unwrap(), m4.get(i, j).unwrap(), "double inverse");
        }
    }
}

// ── Transpose (pure) ─────────────────────────────────────────────────

#[test]
fn transposed_roundtrip_leaves_source_untouched() {
    let m = fmat(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    let t = m.transposed();
    assert_eq!(t.rows(), 3);
    assert_eq!(m.rows(), 2);
    assert_eq!(t.transposed(), m);
}

// ── Statistics over computed results ─────────────────────────────────

#[test]
fn stats_reference_case() {
    let m = Matrix::from_rows(vec![vec![1, 3], vec![2, 4]], ComputeMode::default()).unwrap();
    assert_near(m.stat(StatKind::Med).unwrap(), 2.5, "median");
    assert_near(m.stat(StatKind::Max).unwrap(), 4.0, "max");
    assert_eq!(m.stat_coordinates(StatKind::Max).unwrap(), (1, 1));
}
