//! Error types for matrix construction, tiling and multiplication.

use thiserror::Error;

/// Failures while building or parsing a [`Matrix`](crate::Matrix).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("a matrix needs at least one row and one column")]
    Empty,

    #[error("row {row} has {found} values, expected {expected} (matrices must be square)")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid integer {token:?} at row {row}, column {col}")]
    InvalidNumber {
        row: usize,
        col: usize,
        token: String,
    },

    #[error("parsed matrix is {found}x{found}, requested {expected}x{expected}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("random fill upper bound must be at least 1, got {0}")]
    InvalidBound(i64),
}

/// Violations of the tiling contract. These are caller bugs, reported
/// instead of producing corrupted tiles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    #[error("tile size must be positive")]
    ZeroTileSize,

    #[error("tile size {tile_size} does not divide matrix size {size}")]
    NotDivisor { size: usize, tile_size: usize },

    #[error("block ({block_row}, {block_col}) is outside a {blocks}x{blocks} tile grid")]
    BlockOutOfRange {
        block_row: usize,
        block_col: usize,
        blocks: usize,
    },

    #[error("tile grid covers {covered}x{covered} cells but destination is {size}x{size}")]
    CoverageMismatch { size: usize, covered: usize },
}

/// Failures of the sequential or parallel multipliers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MultiplyError {
    #[error("cannot multiply a {left}x{left} matrix by a {right}x{right} matrix")]
    DimensionMismatch { left: usize, right: usize },

    #[error(transparent)]
    Tile(#[from] TileError),

    #[error("accumulation worker for output block ({block_row}, {block_col}) panicked")]
    WorkerPanicked { block_row: usize, block_col: usize },
}

/// Invalid command-line configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("matrix size must be at least {min}, got {size}")]
    SizeTooSmall { size: usize, min: usize },

    #[error("tile size must be positive")]
    ZeroTileSize,

    #[error("tile size {tile_size} does not divide matrix size {size}")]
    TileNotDivisor { size: usize, tile_size: usize },

    #[error("random fill upper bound must be at least 1, got {0}")]
    InvalidBound(i64),

    #[error("column width must be at least 1")]
    ZeroWidth,
}
