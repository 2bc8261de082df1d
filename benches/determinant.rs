use criterion::{criterion_group, criterion_main, Criterion};
use matricis::{ComputeMode, Matrix, OverflowPolicy};

// Well-conditioned test matrix: diagonally dominant, non-singular
fn dense(n: usize) -> Matrix<f64> {
    Matrix::from_fn(
        n,
        n,
        |i, j| ((i + 1) * (j + 2)) as f64 + if i == j { 10.0 } else { 0.0 },
        ComputeMode::new(OverflowPolicy::Fast),
    )
}

fn bench_determinant(c: &mut Criterion) {
    // Cofactor expansion is factorial in n; keep sizes small
    for n in [3, 5, 7] {
        let m = dense(n);
        c.bench_function(&format!("determinant_{}x{}", n, n), |b| {
            b.iter(|| m.determinant().unwrap())
        });
    }
}

fn bench_inverse(c: &mut Criterion) {
    for n in [3, 5] {
        let m = dense(n);
        c.bench_function(&format!("inverse_{}x{}", n, n), |b| {
            b.iter(|| m.inverse().unwrap())
        });
    }
}

fn bench_matmul(c: &mut Criterion) {
    let m = dense(16);
    c.bench_function("matmul_16x16", |b| b.iter(|| m.matmul(&m).unwrap()));
}

criterion_group!(benches, bench_determinant, bench_inverse, bench_matmul);
criterion_main!(benches);
