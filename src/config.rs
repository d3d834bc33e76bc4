//! Benchmark run configuration and its validation.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::ConfigError;
use crate::matrix::buffer::{DEFAULT_COLUMN_WIDTH, Element};
use crate::matrix::generate::{DEFAULT_RANDOM_MAX, Fill};
use crate::threaded::tiled_mt::Accumulation;

/// Smallest matrix size the benchmark accepts.
pub const MIN_SIZE: usize = 4;

/// Operand generator selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FillMode {
    /// Uniform integers in [0, max)
    Random,
    /// Every cell is 1
    #[default]
    Ones,
}

/// Accumulation strategy selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StrategyMode {
    /// Private partial tile per task, folded after the barrier
    #[default]
    PartialSums,
    /// Disjoint row bands of the output tile per task
    RowBands,
}

impl From<StrategyMode> for Accumulation {
    fn from(mode: StrategyMode) -> Self {
        match mode {
            StrategyMode::PartialSums => Accumulation::PartialSums,
            StrategyMode::RowBands => Accumulation::RowBands,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub size: usize,
    pub tile_size: usize,
    pub fill: FillMode,
    pub max: Element,
    pub seed: Option<u64>,
    pub display: bool,
    pub width: usize,
    pub strategy: StrategyMode,
    pub left: Option<PathBuf>,
    pub right: Option<PathBuf>,
}

impl RunConfig {
    pub fn new(size: usize, tile_size: usize) -> Self {
        Self {
            size,
            tile_size,
            fill: FillMode::default(),
            max: DEFAULT_RANDOM_MAX,
            seed: None,
            display: false,
            width: DEFAULT_COLUMN_WIDTH,
            strategy: StrategyMode::default(),
            left: None,
            right: None,
        }
    }

    /// Rejects sizes below [`MIN_SIZE`], tile sizes that do not divide the
    /// matrix size, a non-positive random bound (random fill only) and a
    /// zero column width.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_SIZE {
            return Err(ConfigError::SizeTooSmall {
                size: self.size,
                min: MIN_SIZE,
            });
        }
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if self.size % self.tile_size != 0 {
            return Err(ConfigError::TileNotDivisor {
                size: self.size,
                tile_size: self.tile_size,
            });
        }
        if self.fill == FillMode::Random && self.max < 1 {
            return Err(ConfigError::InvalidBound(self.max));
        }
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        Ok(())
    }

    /// Generator fill for operands not loaded from a file.
    pub fn generated_fill(&self) -> Fill {
        match self.fill {
            FillMode::Random => Fill::Random { max: self.max },
            FillMode::Ones => Fill::Ones,
        }
    }

    pub fn accumulation(&self) -> Accumulation {
        self.strategy.into()
    }
}
