//! Multi-threaded tiled multiplication.
//!
//! `tiled_mt` walks the output tile grid block by block. Each block fans out
//! to at most n/s scoped threads and joins them all before moving on.
//! Workers never share a writable cell; see [`tiled_mt::Accumulation`].

pub mod tiled_mt;
