//! Tiled multi-threaded multiplication with a barrier per output block.

use std::thread;

use tracing::{debug, trace};

use crate::blocked::tiler::{TileGrid, check_tile_size, extract_all, reassemble};
use crate::error::MultiplyError;
use crate::matrix::buffer::{Element, Matrix};
use crate::matrix::naive_ijk::matmul_naive_ijk;

/// How the tasks of one output block combine their work.
///
/// Neither strategy lets two threads write the same cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Accumulation {
    /// One task per shared-dimension index k. Each task multiplies
    /// `A[i][k] × B[k][j]` into its own private tile; after the barrier the
    /// partial tiles are added into the output tile in k order.
    #[default]
    PartialSums,
    /// The output tile's rows are split into contiguous bands, one per task.
    /// Each task sums over every k for its own rows only.
    RowBands,
}

/// Multiplies `a × b` tile by tile using [`Accumulation::PartialSums`].
///
/// See [`multiply_parallel_with`].
pub fn multiply_parallel(
    a: &Matrix,
    b: &Matrix,
    tile_size: usize,
) -> Result<Matrix, MultiplyError> {
    multiply_parallel_with(a, b, tile_size, Accumulation::default())
}

/// Multiplies `a × b` tile by tile on scoped worker threads.
///
/// Both operands and a zeroed output are split into `(n/s) × (n/s)` grids.
/// Output blocks are visited in row-major order; for each block at most
/// `n/s` threads are spawned and all of them are joined before the next
/// block starts, so no more than `n/s` workers are ever alive at once.
/// Finally the output grid is reassembled into one matrix.
///
/// # Errors
///
/// - [`MultiplyError::DimensionMismatch`] if the operands differ in size
/// - [`MultiplyError::Tile`] if `tile_size` is zero or does not divide n
/// - [`MultiplyError::WorkerPanicked`] if an accumulation thread panics
pub fn multiply_parallel_with(
    a: &Matrix,
    b: &Matrix,
    tile_size: usize,
    strategy: Accumulation,
) -> Result<Matrix, MultiplyError> {
    let n = a.size();
    if b.size() != n {
        return Err(MultiplyError::DimensionMismatch {
            left: n,
            right: b.size(),
        });
    }
    let blocks = check_tile_size(n, tile_size)?;

    let a_tiles = extract_all(a, tile_size)?;
    let b_tiles = extract_all(b, tile_size)?;
    let mut c_tiles = TileGrid::zeros(n, tile_size)?;
    debug!(n, tile_size, blocks, ?strategy, "partitioned operands");

    for i in 0..blocks {
        for j in 0..blocks {
            let pairs = (0..blocks)
                .map(|k| -> Result<_, MultiplyError> {
                    Ok((a_tiles.tile(i, k)?, b_tiles.tile(k, j)?))
                })
                .collect::<Result<Vec<_>, _>>()?;
            let out = c_tiles.tile_mut(i, j)?;

            let spawned = match strategy {
                Accumulation::PartialSums => accumulate_partial_sums(&pairs, out),
                Accumulation::RowBands => accumulate_row_bands(&pairs, out),
            }
            .map_err(|_| MultiplyError::WorkerPanicked {
                block_row: i,
                block_col: j,
            })?;
            trace!(block_row = i, block_col = j, tasks = spawned, "output block done");
        }
    }

    let mut c = Matrix::zeros(n);
    reassemble(&mut c, &c_tiles)?;
    debug!(n, "reassembled output tiles");
    Ok(c)
}

/// A worker panicked; the caller attaches the block coordinate.
#[derive(Debug)]
struct Panicked;

/// Joins every handle before reporting, so the scope never re-raises a panic.
fn join_all<T>(handles: Vec<thread::ScopedJoinHandle<'_, T>>) -> Result<Vec<T>, Panicked> {
    let results: Vec<_> = handles.into_iter().map(|h| h.join()).collect();
    results.into_iter().map(|r| r.map_err(|_| Panicked)).collect()
}

fn accumulate_partial_sums(
    pairs: &[(&Matrix, &Matrix)],
    out: &mut Matrix,
) -> Result<usize, Panicked> {
    let s = out.size();

    let partials = thread::scope(|scope| {
        let handles: Vec<_> = pairs
            .iter()
            .map(|&(a_tile, b_tile)| {
                scope.spawn(move || {
                    let mut partial = Matrix::zeros(s);
                    matmul_naive_ijk(
                        a_tile.as_slice(),
                        b_tile.as_slice(),
                        partial.as_mut_slice(),
                        s,
                        s,
                        s,
                    );
                    partial
                })
            })
            .collect();
        join_all(handles)
    })?;

    // Barrier passed; fold sequentially.
    for partial in &partials {
        add_into(out.as_mut_slice(), partial.as_slice());
    }
    Ok(partials.len())
}

fn accumulate_row_bands(
    pairs: &[(&Matrix, &Matrix)],
    out: &mut Matrix,
) -> Result<usize, Panicked> {
    let s = out.size();
    let rows_per_band = band_rows(s, pairs.len());

    thread::scope(|scope| {
        let handles: Vec<_> = out
            .as_mut_slice()
            .chunks_mut(rows_per_band * s)
            .enumerate()
            .map(|(band, cells)| {
                scope.spawn(move || {
                    let row_start = band * rows_per_band;
                    let rows = cells.len() / s;
                    for &(a_tile, b_tile) in pairs {
                        let a_rows = &a_tile.as_slice()[row_start * s..(row_start + rows) * s];
                        matmul_naive_ijk(a_rows, b_tile.as_slice(), cells, rows, s, s);
                    }
                })
            })
            .collect();
        join_all(handles).map(|done| done.len())
    })
}

/// Rows per band when an s-row tile is split across at most `tasks` workers.
fn band_rows(tile_size: usize, tasks: usize) -> usize {
    tile_size.div_ceil(tasks.clamp(1, tile_size))
}

fn add_into(dst: &mut [Element], src: &[Element]) {
    for (d, &x) in dst.iter_mut().zip(src) {
        *d = d.wrapping_add(x);
    }
}
