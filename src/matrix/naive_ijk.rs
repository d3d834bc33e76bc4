use super::buffer::{Element, Matrix};
use crate::error::MultiplyError;

/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple-loop implementation, accumulating into C
/// (C += A * B). Products and sums wrap on overflow. Both the sequential
/// multiplier and every tile task of the parallel multiplier run this loop.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, accumulated into (C += A * B)
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_naive_ijk(
    a: &[Element],
    b: &[Element],
    c: &mut [Element],
    m: usize,
    n: usize,
    k: usize,
) {
    for i in 0..m {
        for j in 0..n {
            let mut sum = c[i * n + j];
            for p in 0..k {
                sum = sum.wrapping_add(a[i * k + p].wrapping_mul(b[p * n + j]));
            }
            c[i * n + j] = sum;
        }
    }
}

/// Single-threaded product C = A × B of two equally sized square matrices.
///
/// Use this as the correctness baseline for [`multiply_parallel`](crate::multiply_parallel).
pub fn multiply_sequential(a: &Matrix, b: &Matrix) -> Result<Matrix, MultiplyError> {
    let n = a.size();
    if b.size() != n {
        return Err(MultiplyError::DimensionMismatch {
            left: n,
            right: b.size(),
        });
    }

    let mut c = Matrix::zeros(n);
    matmul_naive_ijk(a.as_slice(), b.as_slice(), c.as_mut_slice(), n, n, n);
    Ok(c)
}
