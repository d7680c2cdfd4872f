//! Row reduction for one elimination step.
//!
//! Both variants perform the same arithmetic: for each row i below the pivot,
//! subtract `factor = A[i][k] / A[k][k]` times the pivot row from row i and
//! update the rhs entry. Column k itself is left untouched; back-substitution
//! only reads the strict upper triangle.
//!
//! The parallel variant is a fork-join over rows. Each row's update reads
//! only the shared pivot row and writes only its own row and rhs entry, so
//! the decomposition is data-race free without locks, and the result is
//! independent of how rows are partitioned across workers. The call returns
//! only once every row is done, which is the barrier required before the
//! next step's pivot scan.

use ndarray::{Array1, Array2, ArrayView1, ArrayViewMut1, Axis, Zip};
use num_traits::{Float, NumAssign};
use rayon::prelude::*;

/// How rows are assigned to workers in the parallel variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionStrategy {
    /// Rayon's work-stealing scheduler splits the row range adaptively.
    WorkStealing,
    /// Fixed contiguous chunks of the given number of rows per task.
    /// A chunk size of 0 is treated as 1.
    Chunked(usize),
}

impl Default for PartitionStrategy {
    fn default() -> Self {
        PartitionStrategy::WorkStealing
    }
}

/// Eliminate the sub-diagonal entries of column `k`, one row at a time.
pub fn reduce_rows_sequential<T: Float + NumAssign>(
    a: &mut Array2<T>,
    b: &mut Array1<T>,
    k: usize,
) {
    let n = a.nrows();
    let pivot = a[[k, k]];
    let b_k = b[k];

    for i in (k + 1)..n {
        let factor = a[[i, k]] / pivot;
        for j in (k + 1)..n {
            let update = factor * a[[k, j]];
            a[[i, j]] -= update;
        }
        b[i] -= factor * b_k;
    }
}

/// Eliminate the sub-diagonal entries of column `k` with rows processed
/// concurrently on the rayon global pool.
pub fn reduce_rows_parallel<T: Float + NumAssign + Send + Sync>(
    a: &mut Array2<T>,
    b: &mut Array1<T>,
    k: usize,
    partition: PartitionStrategy,
) {
    let b_k = b[k];

    // Splitting below the pivot row gives the workers exclusive access to
    // rows k+1.. while the pivot row stays a shared read-only view.
    let (upper, mut lower) = a.view_mut().split_at(Axis(0), k + 1);
    let pivot_row = upper.row(k);
    let (_, mut b_lower) = b.view_mut().split_at(Axis(0), k + 1);

    match partition {
        PartitionStrategy::WorkStealing => {
            Zip::from(lower.rows_mut())
                .and(&mut b_lower)
                .par_for_each(|row, b_i| reduce_one_row(row, b_i, pivot_row, b_k, k));
        }
        PartitionStrategy::Chunked(chunk) => {
            let chunk = chunk.max(1);
            lower
                .axis_chunks_iter_mut(Axis(0), chunk)
                .into_par_iter()
                .zip(b_lower.axis_chunks_iter_mut(Axis(0), chunk).into_par_iter())
                .for_each(|(mut rows, mut rhs)| {
                    for (row, b_i) in rows.rows_mut().into_iter().zip(rhs.iter_mut()) {
                        reduce_one_row(row, b_i, pivot_row, b_k, k);
                    }
                });
        }
    }
}

#[inline]
fn reduce_one_row<T: Float + NumAssign>(
    mut row: ArrayViewMut1<'_, T>,
    b_i: &mut T,
    pivot_row: ArrayView1<'_, T>,
    b_k: T,
    k: usize,
) {
    let n = row.len();
    let factor = row[k] / pivot_row[k];
    for j in (k + 1)..n {
        row[j] -= factor * pivot_row[j];
    }
    *b_i -= factor * b_k;
}
