//! Sequential vs tiled multi-threaded integer matrix multiplication.
//!
//! Two ways to compute C = A × B for square `i64` matrices:
//!
//! - a plain i-j-k triple loop on one thread, and
//! - a tiled version that cuts A, B and C into s×s tiles and, for each
//!   output tile, runs one worker per shared-dimension tile on its own
//!   thread, waiting for all of them before moving to the next tile.
//!
//! ## Usage
//!
//! ```
//! use mtxmult::{Matrix, multiply, multiply_parallel};
//!
//! let a = Matrix::filled(8, 1);
//! let b = Matrix::filled(8, 1);
//!
//! let c = multiply(&a, &b).unwrap();
//! assert_eq!(c, Matrix::filled(8, 8));
//!
//! // Same product with 2×2 tiles, four workers per output tile.
//! assert_eq!(multiply_parallel(&a, &b, 2).unwrap(), c);
//! ```
//!
//! Overflow wraps in both kernels, so they always agree.

pub mod blocked;
pub mod config;
pub mod error;
pub mod matrix;
pub mod threaded;
pub mod timer;

pub use error::{ConfigError, MatrixError, MultiplyError, TileError};
pub use matrix::buffer::{Element, Matrix};
pub use matrix::generate::{Fill, Generator};
pub use matrix::naive_ijk::matmul_naive_ijk;
pub use threaded::tiled_mt::{Accumulation, multiply_parallel, multiply_parallel_with};

/// Matrix multiply: C = A * B on the calling thread.
///
/// # Errors
///
/// Returns [`MultiplyError::DimensionMismatch`] if the sizes differ.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MultiplyError> {
    matrix::naive_ijk::multiply_sequential(a, b)
}
