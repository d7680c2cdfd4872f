//! Partial pivot selection.
//!
//! At elimination step k the pivot scan inspects column k over the remaining
//! rows and promotes the row of largest magnitude. The scan is always
//! sequential and acts as the synchronization point between steps: all of its
//! effects are visible before any row-reduction work for step k begins.

use crate::error::{GaussError, Result};
use ndarray::{Array1, Array2};
use num_traits::Float;

/// Scan column `k` over rows `k..n` and swap the row of maximum absolute
/// value into position `k`, together with the matching rhs entries.
///
/// Ties are broken by the lowest row index (strict `>` comparison, first
/// occurrence wins). Returns [`GaussError::SingularMatrix`] when the best
/// pivot candidate's magnitude is below `epsilon`.
pub fn select_pivot<T: Float>(
    a: &mut Array2<T>,
    b: &mut Array1<T>,
    k: usize,
    epsilon: T,
) -> Result<()> {
    let n = a.nrows();

    let mut max_val = a[[k, k]].abs();
    let mut max_row = k;
    for i in (k + 1)..n {
        let val = a[[i, k]].abs();
        if val > max_val {
            max_val = val;
            max_row = i;
        }
    }

    if max_val < epsilon {
        return Err(GaussError::SingularMatrix { step: k });
    }

    if max_row != k {
        for j in 0..n {
            a.swap([k, j], [max_row, j]);
        }
        b.swap(k, max_row);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_selects_largest_magnitude() {
        let mut a = array![[1.0_f64, 2.0], [-5.0, 3.0]];
        let mut b = array![10.0_f64, 20.0];

        select_pivot(&mut a, &mut b, 0, 1e-30).expect("pivot should exist");

        assert_relative_eq!(a[[0, 0]], -5.0);
        assert_relative_eq!(a[[0, 1]], 3.0);
        assert_relative_eq!(a[[1, 0]], 1.0);
        assert_relative_eq!(b[0], 20.0);
        assert_relative_eq!(b[1], 10.0);
    }

    #[test]
    fn test_tie_keeps_first_row() {
        // Equal magnitudes: strict comparison keeps row 0 in place.
        let mut a = array![[3.0_f64, 1.0], [-3.0, 2.0]];
        let mut b = array![1.0_f64, 2.0];

        select_pivot(&mut a, &mut b, 0, 1e-30).expect("pivot should exist");

        assert_relative_eq!(a[[0, 0]], 3.0);
        assert_relative_eq!(b[0], 1.0);
    }

    #[test]
    fn test_no_swap_when_pivot_in_place() {
        let mut a = array![[4.0_f64, 1.0], [1.0, 3.0]];
        let mut b = array![1.0_f64, 2.0];
        let a_before = a.clone();

        select_pivot(&mut a, &mut b, 0, 1e-30).expect("pivot should exist");

        assert_eq!(a, a_before);
    }

    #[test]
    fn test_zero_column_is_singular() {
        let mut a = array![[0.0_f64, 1.0], [0.0, 2.0]];
        let mut b = array![1.0_f64, 2.0];

        let err = select_pivot(&mut a, &mut b, 0, 1e-30).unwrap_err();
        assert!(err.is_singular());
        assert!(matches!(err, GaussError::SingularMatrix { step: 0 }));
    }

    #[test]
    fn test_scan_restricted_to_lower_rows() {
        // Row 0 has a huge entry in column 1, but step 1 must only look at
        // rows 1.. when choosing the pivot.
        let mut a = array![[1.0_f64, 100.0, 0.0], [0.0, 2.0, 1.0], [0.0, -3.0, 4.0]];
        let mut b = array![1.0_f64, 2.0, 3.0];

        select_pivot(&mut a, &mut b, 1, 1e-30).expect("pivot should exist");

        assert_relative_eq!(a[[0, 1]], 100.0);
        assert_relative_eq!(a[[1, 1]], -3.0);
        assert_relative_eq!(a[[2, 1]], 2.0);
        assert_relative_eq!(b[1], 3.0);
        assert_relative_eq!(b[2], 2.0);
    }
}
