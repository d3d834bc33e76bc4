//! Matrix generators: random, constant and parsed-from-text fills.

use rand::SeedableRng;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;

use super::buffer::{Element, Matrix};
use crate::error::MatrixError;

/// Exclusive upper bound for random cells when none is given.
pub const DEFAULT_RANDOM_MAX: Element = 10;

/// How a generated matrix is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fill {
    /// Uniform integers in `[0, max)`.
    Random { max: Element },
    /// Every cell is 1.
    Ones,
    /// Every cell is 0.
    Zeros,
    /// Parsed with [`Matrix::parse`]; the parsed size must equal the requested one.
    Text(String),
}

impl Default for Fill {
    fn default() -> Self {
        Fill::Random {
            max: DEFAULT_RANDOM_MAX,
        }
    }
}

/// Produces matrices from a [`Fill`] strategy.
///
/// Owns its RNG so that a seeded generator yields the same operands on
/// every run.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates an n×n matrix. `n` must be at least 1.
    pub fn generate(&mut self, n: usize, fill: &Fill) -> Result<Matrix, MatrixError> {
        if n == 0 {
            return Err(MatrixError::Empty);
        }

        match fill {
            Fill::Random { max } => {
                if *max < 1 {
                    return Err(MatrixError::InvalidBound(*max));
                }
                let distribution = Uniform::new(0, *max);
                let data: Vec<Element> = distribution
                    .sample_iter(&mut self.rng)
                    .take(n * n)
                    .collect();
                Ok(Matrix::from_flat(n, data))
            }
            Fill::Ones => Matrix::try_filled(n, 1),
            Fill::Zeros => Matrix::try_zeros(n),
            Fill::Text(text) => {
                let m = Matrix::parse(text)?;
                if m.size() != n {
                    return Err(MatrixError::SizeMismatch {
                        expected: n,
                        found: m.size(),
                    });
                }
                Ok(m)
            }
        }
    }
}
