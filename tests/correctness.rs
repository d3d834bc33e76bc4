use mtxmult::blocked::tiler::{extract_all, reassemble};
use mtxmult::{
    Accumulation, Fill, Generator, Matrix, MultiplyError, TileError, multiply, multiply_parallel,
    multiply_parallel_with,
};

const STRATEGIES: [Accumulation; 2] = [Accumulation::PartialSums, Accumulation::RowBands];

fn divisors(n: usize) -> Vec<usize> {
    (1..=n).filter(|s| n % s == 0).collect()
}

fn random_pair(n: usize, seed: u64) -> (Matrix, Matrix) {
    let mut g = Generator::seeded(seed);
    let a = g.generate(n, &Fill::Random { max: 10 }).unwrap();
    let b = g.generate(n, &Fill::Random { max: 10 }).unwrap();
    (a, b)
}

// ============================================================
// Known products
// ============================================================

#[test]
fn test_all_ones_4x4_with_2x2_tiles() {
    let ones = Matrix::filled(4, 1);
    let c = multiply_parallel(&ones, &ones, 2).unwrap();
    assert_eq!(c, Matrix::filled(4, 4));
}

#[test]
fn test_all_ones_every_cell_equals_n() {
    for n in [1, 4, 6, 9, 16] {
        let ones = Matrix::filled(n, 1);
        let expected = Matrix::filled(n, n as i64);
        assert_eq!(multiply(&ones, &ones).unwrap(), expected, "sequential n={}", n);
        for s in divisors(n) {
            assert_eq!(
                multiply_parallel(&ones, &ones, s).unwrap(),
                expected,
                "parallel n={} s={}",
                n,
                s
            );
        }
    }
}

#[test]
fn test_single_element() {
    let a = Matrix::filled(1, 6);
    let b = Matrix::filled(1, 7);
    assert_eq!(multiply(&a, &b).unwrap(), Matrix::filled(1, 42));
    for strategy in STRATEGIES {
        assert_eq!(
            multiply_parallel_with(&a, &b, 1, strategy).unwrap(),
            Matrix::filled(1, 42)
        );
    }
}

#[test]
fn test_3x3_known_product() {
    let a = Matrix::parse("1 2 3\n4 5 6\n7 8 9").unwrap();
    let b = Matrix::parse("9 8 7\n6 5 4\n3 2 1").unwrap();
    let expected = Matrix::parse("30 24 18\n84 69 54\n138 114 90").unwrap();
    assert_eq!(multiply(&a, &b).unwrap(), expected);
    assert_eq!(multiply_parallel(&a, &b, 1).unwrap(), expected);
    assert_eq!(multiply_parallel(&a, &b, 3).unwrap(), expected);
}

// ============================================================
// Parallel vs sequential
// ============================================================

#[test]
fn test_parallel_matches_sequential_every_divisor() {
    for (n, seed) in [(4, 1), (8, 2), (12, 3), (18, 4), (24, 5)] {
        let (a, b) = random_pair(n, seed);
        let expected = multiply(&a, &b).unwrap();
        for s in divisors(n) {
            for strategy in STRATEGIES {
                let c = multiply_parallel_with(&a, &b, s, strategy).unwrap();
                assert_eq!(c, expected, "n={} s={} {:?}", n, s, strategy);
            }
        }
    }
}

#[test]
fn test_boundary_tile_sizes_agree() {
    let (a, b) = random_pair(4, 99);
    let whole = multiply_parallel(&a, &b, 4).unwrap();
    let quarters = multiply_parallel(&a, &b, 2).unwrap();
    let cells = multiply_parallel(&a, &b, 1).unwrap();
    assert_eq!(whole, quarters);
    assert_eq!(quarters, cells);
    assert_eq!(whole, multiply(&a, &b).unwrap());
}

#[test]
fn test_negative_values() {
    let a = Matrix::parse("-1 2\n3 -4").unwrap();
    let b = Matrix::parse("5 -6\n-7 8").unwrap();
    let expected = multiply(&a, &b).unwrap();
    assert_eq!(expected.as_slice(), &[-19, 22, 43, -50]);
    assert_eq!(multiply_parallel(&a, &b, 1).unwrap(), expected);
}

#[test]
fn test_overflow_wraps_identically() {
    let a = Matrix::filled(4, i64::MAX / 3);
    let b = Matrix::filled(4, 7);
    let expected = multiply(&a, &b).unwrap();
    for s in [1, 2, 4] {
        for strategy in STRATEGIES {
            assert_eq!(multiply_parallel_with(&a, &b, s, strategy).unwrap(), expected);
        }
    }
}

// ============================================================
// Repeatability under concurrency
// ============================================================

#[test]
fn test_repeated_runs_are_identical() {
    let (a, b) = random_pair(16, 2024);
    let first = multiply_parallel(&a, &b, 2).unwrap();
    for strategy in STRATEGIES {
        for run in 0..100 {
            let c = multiply_parallel_with(&a, &b, 2, strategy).unwrap();
            assert_eq!(c, first, "run {} {:?}", run, strategy);
        }
    }
}

// ============================================================
// Tiling
// ============================================================

#[test]
fn test_tiling_roundtrip() {
    let (m, _) = random_pair(12, 5);
    for s in divisors(12) {
        let grid = extract_all(&m, s).unwrap();
        assert_eq!(grid.blocks(), 12 / s);
        let mut out = Matrix::zeros(12);
        reassemble(&mut out, &grid).unwrap();
        assert_eq!(out, m, "s={}", s);
    }
}

// ============================================================
// Precondition failures
// ============================================================

#[test]
fn test_non_dividing_tile_size_is_rejected() {
    let (a, b) = random_pair(8, 6);
    for s in [3, 5, 6, 7, 9] {
        assert_eq!(
            multiply_parallel(&a, &b, s).unwrap_err(),
            MultiplyError::Tile(TileError::NotDivisor {
                size: 8,
                tile_size: s
            })
        );
    }
}

#[test]
fn test_zero_tile_size_is_rejected() {
    let m = Matrix::filled(4, 1);
    assert_eq!(
        multiply_parallel(&m, &m, 0).unwrap_err(),
        MultiplyError::Tile(TileError::ZeroTileSize)
    );
}

#[test]
fn test_size_mismatch_is_rejected() {
    let a = Matrix::filled(4, 1);
    let b = Matrix::filled(8, 1);
    let expected = MultiplyError::DimensionMismatch { left: 4, right: 8 };
    assert_eq!(multiply(&a, &b).unwrap_err(), expected);
    assert_eq!(multiply_parallel(&a, &b, 2).unwrap_err(), expected);
}
