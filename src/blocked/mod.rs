//! Tiling of square matrices into fixed-size blocks.
//!
//! The parallel multiplier partitions both operands and the output into
//! tile grids, works tile by tile, then reassembles the output grid.

pub mod tiler;
