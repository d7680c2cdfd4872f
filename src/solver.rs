//! Solver orchestration.
//!
//! Composes the pivot scan and the chosen row-reduction variant over all
//! elimination steps, then runs back-substitution. Steps are strictly
//! ordered: step k+1 never starts before every row update of step k has
//! completed, since the reduction call itself is the fork-join barrier.

use crate::back_substitution::back_substitute;
use crate::error::{GaussError, Result};
use crate::pivot::select_pivot;
use crate::reduce::{reduce_rows_parallel, reduce_rows_sequential, PartitionStrategy};
use ndarray::{Array1, Array2};
use num_traits::{Float, NumAssign};

/// Which row-reduction variant a solve uses. Never mixed within one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// All rows reduced on the calling thread.
    Sequential,
    /// Rows reduced concurrently on the rayon global pool, one step at a time.
    Parallel,
}

/// Solver configuration.
#[derive(Debug, Clone)]
pub struct GaussConfig<R> {
    /// Sequential or parallel row reduction
    pub mode: ExecutionMode,
    /// Row partitioning for the parallel variant (ignored when sequential)
    pub partition: PartitionStrategy,
    /// Floor of the singularity threshold. A solve rejects a pivot (or
    /// diagonal) magnitude below `max(pivot_epsilon, n·ε·max|A|)`; the
    /// scale-aware part catches rank deficiency that rounding during
    /// elimination turns into a tiny nonzero residue instead of an exact zero
    pub pivot_epsilon: R,
}

impl Default for GaussConfig<f64> {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::Sequential,
            partition: PartitionStrategy::default(),
            pivot_epsilon: 1e-30,
        }
    }
}

impl GaussConfig<f64> {
    /// Configuration for a sequential solve with default thresholds.
    pub fn sequential() -> Self {
        Self::default()
    }

    /// Configuration for a parallel solve with default thresholds.
    pub fn parallel() -> Self {
        Self {
            mode: ExecutionMode::Parallel,
            ..Self::default()
        }
    }
}

/// Solve A·x = b by Gaussian elimination with partial pivoting.
///
/// The inputs are cloned into an owned working copy before any mutation, so
/// caller state is never aliased or destroyed; a failed solve leaves the
/// caller's data untouched. Validation (squareness, rhs length, finiteness)
/// runs before any elimination work.
///
/// Both execution modes perform the same per-row arithmetic and return
/// numerically equivalent solutions.
pub fn solve<T>(a: &Array2<T>, b: &Array1<T>, config: &GaussConfig<T>) -> Result<Array1<T>>
where
    T: Float + NumAssign + Send + Sync,
{
    validate(a, b)?;

    let mut a = a.clone();
    let mut b = b.clone();
    let n = b.len();
    let epsilon = effective_epsilon(&a, config.pivot_epsilon);

    log::debug!("gauss solve: n={}, mode={:?}", n, config.mode);

    for k in 0..n.saturating_sub(1) {
        select_pivot(&mut a, &mut b, k, epsilon)?;
        match config.mode {
            ExecutionMode::Sequential => reduce_rows_sequential(&mut a, &mut b, k),
            ExecutionMode::Parallel => {
                reduce_rows_parallel(&mut a, &mut b, k, config.partition)
            }
        }
    }

    back_substitute(&a, &b, epsilon)
}

/// Scale-aware singularity threshold: `max(base, n·ε·max|A|)`.
///
/// Row swaps make elimination of a rank-deficient matrix leave cancellation
/// residue of order ε·max|A| on a pivot instead of an exact zero, so an
/// absolute floor alone cannot detect it.
fn effective_epsilon<T: Float>(a: &Array2<T>, base: T) -> T {
    let max_abs = a.iter().fold(T::zero(), |acc, &v| acc.max(v.abs()));
    let n = T::from(a.nrows()).unwrap_or_else(T::max_value);
    base.max(n * T::epsilon() * max_abs)
}

fn validate<T: Float>(a: &Array2<T>, b: &Array1<T>) -> Result<()> {
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

    for ((row, col), v) in a.indexed_iter() {
        if !v.is_finite() {
            return Err(GaussError::NonFiniteMatrixEntry { row, col });
        }
    }
    for (index, v) in b.iter().enumerate() {
        if !v.is_finite() {
            return Err(GaussError::NonFiniteRhsEntry { index });
        }
    }

    Ok(())
}
