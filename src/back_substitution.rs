//! Back-substitution over an upper-triangular system.
//!
//! Inherently sequential: each unknown depends on all later unknowns, so this
//! stage is never parallelized. Each entry of the solution is written exactly
//! once, from the last index to the first.

use crate::error::{GaussError, Result};
use ndarray::{Array1, Array2};
use num_traits::{Float, NumAssign};

/// Solve the upper-triangular system left behind by elimination.
///
/// Only the strict upper triangle and the diagonal of `a` are read; whatever
/// elimination left below the diagonal is ignored. A diagonal entry with
/// magnitude below `epsilon` returns [`GaussError::SingularMatrix`]. This
/// check also covers the last diagonal entry, which no pivot scan examines.
pub fn back_substitute<T: Float + NumAssign>(
    a: &Array2<T>,
    b: &Array1<T>,
    epsilon: T,
) -> Result<Array1<T>> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(GaussError::NotSquare { rows, cols });
    }
    if b.len() != rows {
        return Err(GaussError::DimensionMismatch {
            expected: rows,
            got: b.len(),
        });
    }

    let n = b.len();
    let mut x = Array1::from_elem(n, T::zero());

    for i in (0..n).rev() {
        let mut sum = b[i];
        for j in (i + 1)..n {
            sum -= a[[i, j]] * x[j];
        }

        let diag = a[[i, i]];
        if diag.abs() < epsilon {
            return Err(GaussError::SingularMatrix { step: i });
        }
        x[i] = sum / diag;
    }

    Ok(x)
}
