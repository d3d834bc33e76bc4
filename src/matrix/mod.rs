//! Matrix storage, generators and the naive reference kernel.
//!
//! The naive kernel is the correctness baseline for the tiled parallel
//! multiplier and also the inner loop each tile task runs.

pub mod buffer;
pub mod generate;
pub mod naive_ijk;
