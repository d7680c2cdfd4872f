//! Small vector-norm helpers used by tests and benchmarks.

use ndarray::{Array1, Array2};
use num_traits::{Float, NumAssign};

/// Compute the vector 2-norm: ||x||_2 = sqrt(Σ x_i^2)
#[inline]
pub fn vector_norm<T: Float>(x: &Array1<T>) -> T {
    x.iter()
        .fold(T::zero(), |acc, &v| acc + v * v)
        .sqrt()
}

/// Compute the residual norm ||A·x − b||_2 without materializing A·x.
pub fn residual_norm<T: Float + NumAssign>(a: &Array2<T>, x: &Array1<T>, b: &Array1<T>) -> T {
    assert_eq!(a.ncols(), x.len(), "x length must match matrix columns");
    assert_eq!(a.nrows(), b.len(), "b length must match matrix rows");

    let mut sum = T::zero();
    for (row, &b_i) in a.rows().into_iter().zip(b.iter()) {
        let mut ax = T::zero();
        for (&a_ij, &x_j) in row.iter().zip(x.iter()) {
            ax += a_ij * x_j;
        }
        let d = ax - b_i;
        sum += d * d;
    }
    sum.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_vector_norm() {
        let x = array![3.0_f64, 4.0];
        assert_relative_eq!(vector_norm(&x), 5.0);
    }

    #[test]
    fn test_residual_norm_exact_solution() {
        let a = array![[2.0_f64, 1.0], [-3.0, 4.0]];
        let x = array![1.0_f64, 3.0];
        let b = array![5.0_f64, 9.0];
        assert_relative_eq!(residual_norm(&a, &x, &b), 0.0);
    }

    #[test]
    fn test_residual_norm_offset() {
        let a = array![[1.0_f64, 0.0], [0.0, 1.0]];
        let x = array![1.0_f64, 1.0];
        let b = array![1.0_f64, 2.0];
        assert_relative_eq!(residual_norm(&a, &x, &b), 1.0);
    }
}
