//! Random test systems for correctness tests and benchmarks.
//!
//! Diagonally dominant matrices are well conditioned and never produce a zero
//! pivot under partial pivoting, which makes them suitable for residual and
//! sequential-vs-parallel equivalence checks. Generation uses a local RNG,
//! never global mutable state, so concurrent callers do not interfere.

use ndarray::{Array1, Array2};
use rand::Rng;

/// Generate a random diagonally dominant n×n system (A, b).
///
/// Off-diagonal entries are drawn from [-1, 1); each diagonal entry exceeds
/// the absolute sum of the rest of its row, which guarantees the matrix is
/// nonsingular.
pub fn diagonally_dominant_system(n: usize) -> (Array2<f64>, Array1<f64>) {
    let mut rng = rand::rng();

    let mut a = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        let mut row_sum = 0.0;
        for j in 0..n {
            if i != j {
                let v = rng.random::<f64>() * 2.0 - 1.0;
                a[[i, j]] = v;
                row_sum += v.abs();
            }
        }
        // Random sign on the diagonal keeps the pivot scan honest.
        let sign = if rng.random::<f64>() < 0.5 { -1.0 } else { 1.0 };
        a[[i, i]] = sign * (row_sum + 1.0 + rng.random::<f64>());
    }

    let b = Array1::from_shape_fn(n, |_| rng.random::<f64>() * 2.0 - 1.0);

    (a, b)
}

/// Generate a random well-conditioned system with a known solution.
///
/// Returns (A, b, x_true) where b = A·x_true, so the error of a computed
/// solution can be measured directly against x_true.
pub fn system_with_solution(n: usize) -> (Array2<f64>, Array1<f64>, Array1<f64>) {
    let (a, _) = diagonally_dominant_system(n);

    let mut rng = rand::rng();
    let x_true = Array1::from_shape_fn(n, |_| rng.random::<f64>() * 2.0 - 1.0);
    let b = a.dot(&x_true);

    (a, b, x_true)
}
