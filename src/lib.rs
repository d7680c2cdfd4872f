//! Dense Gaussian elimination with partial pivoting
//!
//! This crate solves dense linear systems A·x = b by classical O(n³)
//! Gaussian elimination, with the row-reduction step available in a
//! sequential and a row-parallel (rayon fork-join) form so their wall-clock
//! behavior can be compared on the same inputs.
//!
//! # Features
//!
//! - **Partial pivoting**: largest-magnitude pivot per column, first
//!   occurrence on ties
//! - **Two execution modes**: sequential, or rows reduced concurrently with a
//!   barrier between elimination steps
//! - **Configurable partitioning**: rayon work-stealing or fixed contiguous
//!   row chunks
//! - **Hardened failure modes**: dimension, finiteness, and epsilon-based
//!   singularity checks instead of silent NaN propagation
//! - **Value semantics**: inputs are cloned into an owned working copy, so
//!   caller data survives a solve (failed or not)
//!
//! # Example
//!
//! ```
//! use math_gauss::{solve, GaussConfig};
//! use ndarray::array;
//!
//! let a = array![[2.0, 1.0], [-3.0, 4.0]];
//! let b = array![5.0, 9.0];
//!
//! let x = solve(&a, &b, &GaussConfig::parallel())?;
//! assert!((x[0] - 1.0).abs() < 1e-9 && (x[1] - 3.0).abs() < 1e-9);
//! # Ok::<(), math_gauss::GaussError>(())
//! ```

pub mod back_substitution;
pub mod error;
pub mod norms;
pub mod pivot;
pub mod reduce;
pub mod solver;
pub mod testdata;

// Re-export main types
pub use error::{GaussError, Result};
pub use reduce::PartitionStrategy;
pub use solver::{solve, ExecutionMode, GaussConfig};

// Re-export step-level operations for callers composing their own pipeline
pub use back_substitution::back_substitute;
pub use norms::{residual_norm, vector_norm};
pub use pivot::select_pivot;
pub use reduce::{reduce_rows_parallel, reduce_rows_sequential};
