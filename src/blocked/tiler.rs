//! Splits a square matrix into s×s tiles and stitches tiles back together.
//!
//! Tiles are owned copies, not views into the parent. An input grid can be
//! shared read-only across threads, and an output tile can be handed to
//! exactly one writer.

use crate::error::TileError;
use crate::matrix::buffer::Matrix;

/// Checks that `tile_size` is positive and divides `size`.
pub fn check_tile_size(size: usize, tile_size: usize) -> Result<usize, TileError> {
    if tile_size == 0 {
        return Err(TileError::ZeroTileSize);
    }
    if size % tile_size != 0 {
        return Err(TileError::NotDivisor { size, tile_size });
    }
    Ok(size / tile_size)
}

/// A `blocks × blocks` grid of `tile_size × tile_size` tiles, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    tile_size: usize,
    blocks: usize,
    tiles: Vec<Matrix>,
}

impl TileGrid {
    /// Zero-filled grid covering an n×n matrix.
    pub fn zeros(size: usize, tile_size: usize) -> Result<Self, TileError> {
        let blocks = check_tile_size(size, tile_size)?;
        Ok(Self {
            tile_size,
            blocks,
            tiles: vec![Matrix::zeros(tile_size); blocks * blocks],
        })
    }

    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Number of tiles along each edge (n / s).
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// Edge of the matrix this grid covers.
    pub fn covered_size(&self) -> usize {
        self.blocks * self.tile_size
    }

    pub fn tile(&self, block_row: usize, block_col: usize) -> Result<&Matrix, TileError> {
        let idx = self.index(block_row, block_col)?;
        Ok(&self.tiles[idx])
    }

    pub fn tile_mut(
        &mut self,
        block_row: usize,
        block_col: usize,
    ) -> Result<&mut Matrix, TileError> {
        let idx = self.index(block_row, block_col)?;
        Ok(&mut self.tiles[idx])
    }

    fn index(&self, block_row: usize, block_col: usize) -> Result<usize, TileError> {
        if block_row >= self.blocks || block_col >= self.blocks {
            return Err(TileError::BlockOutOfRange {
                block_row,
                block_col,
                blocks: self.blocks,
            });
        }
        Ok(block_row * self.blocks + block_col)
    }
}

/// Copies the s×s region starting at `(block_row * s, block_col * s)`.
pub fn extract_tile(
    matrix: &Matrix,
    block_row: usize,
    block_col: usize,
    tile_size: usize,
) -> Result<Matrix, TileError> {
    let blocks = check_tile_size(matrix.size(), tile_size)?;
    if block_row >= blocks || block_col >= blocks {
        return Err(TileError::BlockOutOfRange {
            block_row,
            block_col,
            blocks,
        });
    }
    Ok(copy_tile(matrix, block_row, block_col, tile_size))
}

fn copy_tile(matrix: &Matrix, block_row: usize, block_col: usize, tile_size: usize) -> Matrix {
    let col_start = block_col * tile_size;
    let mut tile = Matrix::zeros(tile_size);
    for (local_row, dst) in tile.as_mut_slice().chunks_mut(tile_size).enumerate() {
        let src = matrix.row(block_row * tile_size + local_row);
        dst.copy_from_slice(&src[col_start..col_start + tile_size]);
    }
    tile
}

/// Splits `matrix` into its full `(n/s) × (n/s)` tile grid.
pub fn extract_all(matrix: &Matrix, tile_size: usize) -> Result<TileGrid, TileError> {
    let blocks = check_tile_size(matrix.size(), tile_size)?;
    let mut tiles = Vec::with_capacity(blocks * blocks);
    for block_row in 0..blocks {
        for block_col in 0..blocks {
            tiles.push(copy_tile(matrix, block_row, block_col, tile_size));
        }
    }
    Ok(TileGrid {
        tile_size,
        blocks,
        tiles,
    })
}

/// Overwrites `destination` with the contents of `grid`.
///
/// Cell `(row, col)` comes from tile `(row / s, col / s)` at local offset
/// `(row % s, col % s)`. The grid must cover the destination exactly.
pub fn reassemble(destination: &mut Matrix, grid: &TileGrid) -> Result<(), TileError> {
    let size = destination.size();
    if grid.covered_size() != size {
        return Err(TileError::CoverageMismatch {
            size,
            covered: grid.covered_size(),
        });
    }

    let s = grid.tile_size;
    for (row, dst) in destination.as_mut_slice().chunks_mut(size).enumerate() {
        for (block_col, cells) in dst.chunks_mut(s).enumerate() {
            let tile = &grid.tiles[(row / s) * grid.blocks + block_col];
            cells.copy_from_slice(tile.row(row % s));
        }
    }
    Ok(())
}
