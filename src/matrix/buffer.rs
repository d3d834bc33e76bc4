//! Square integer matrix stored row-major in a flat buffer.

use std::fmt;
use std::str::FromStr;

use crate::error::MatrixError;

/// Cell type of every matrix. Products and sums wrap on overflow.
pub type Element = i64;

/// Column width used by [`Display`](fmt::Display).
pub const DEFAULT_COLUMN_WIDTH: usize = 4;

/// An n×n matrix of [`Element`]s, n ≥ 1.
///
/// Storage is a single row-major `Vec`, so `get(i, j)` reads `data[i * n + j]`.
/// The edge length is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    n: usize,
    data: Vec<Element>,
}

impl Matrix {
    /// Zero-filled n×n matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn zeros(n: usize) -> Self {
        Self::filled(n, 0)
    }

    /// n×n matrix with every cell set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn filled(n: usize, value: Element) -> Self {
        assert!(n > 0, "matrix size must be at least 1");
        Self {
            n,
            data: vec![value; n * n],
        }
    }

    /// Fallible [`Matrix::zeros`]: `n == 0` is [`MatrixError::Empty`].
    pub fn try_zeros(n: usize) -> Result<Self, MatrixError> {
        Self::try_filled(n, 0)
    }

    /// Fallible [`Matrix::filled`]: `n == 0` is [`MatrixError::Empty`].
    pub fn try_filled(n: usize, value: Element) -> Result<Self, MatrixError> {
        if n == 0 {
            return Err(MatrixError::Empty);
        }
        Ok(Self {
            n,
            data: vec![value; n * n],
        })
    }

    /// n×n matrix with ones on the diagonal.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m.set(i, i, 1);
        }
        m
    }

    /// Builds a matrix from rows, rejecting empty, jagged or non-square input.
    pub fn from_rows(rows: Vec<Vec<Element>>) -> Result<Self, MatrixError> {
        let n = rows.len();
        if n == 0 {
            return Err(MatrixError::Empty);
        }

        let mut data = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(MatrixError::RowLength {
                    row,
                    expected: n,
                    found: values.len(),
                });
            }
            data.extend(values);
        }

        Ok(Self { n, data })
    }

    /// Wraps an existing row-major buffer of length `n * n`.
    pub(crate) fn from_flat(n: usize, data: Vec<Element>) -> Self {
        debug_assert_eq!(data.len(), n * n);
        Self { n, data }
    }

    /// Parses whitespace-separated integers, one matrix row per line.
    ///
    /// The number of lines (ignoring trailing blank ones) defines n; every
    /// line must hold exactly n values.
    ///
    /// # Example
    ///
    /// ```
    /// use mtxmult::Matrix;
    ///
    /// let m = Matrix::parse("1 2\n3 4").unwrap();
    /// assert_eq!(m.get(1, 0), 3);
    /// ```
    pub fn parse(text: &str) -> Result<Self, MatrixError> {
        let mut lines: Vec<&str> = text.lines().map(str::trim).collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        let n = lines.len();
        if n == 0 {
            return Err(MatrixError::Empty);
        }

        let mut data = Vec::with_capacity(n * n);
        for (row, line) in lines.iter().enumerate() {
            let mut found = 0;
            for (col, token) in line.split_whitespace().enumerate() {
                if col >= n {
                    return Err(MatrixError::RowLength {
                        row,
                        expected: n,
                        found: line.split_whitespace().count(),
                    });
                }
                let value = token.parse::<Element>().map_err(|_| MatrixError::InvalidNumber {
                    row,
                    col,
                    token: token.to_string(),
                })?;
                data.push(value);
                found += 1;
            }
            if found != n {
                return Err(MatrixError::RowLength {
                    row,
                    expected: n,
                    found,
                });
            }
        }

        Ok(Self { n, data })
    }

    /// Edge length n.
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn get(&self, row: usize, col: usize) -> Element {
        self.data[row * self.n + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: Element) {
        self.data[row * self.n + col] = value;
    }

    /// Row `i` as a slice of length n.
    pub fn row(&self, i: usize) -> &[Element] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Element] {
        &mut self.data
    }

    /// Wrapping sum of every cell.
    pub fn checksum(&self) -> Element {
        self.data.iter().fold(0, |acc, &x| acc.wrapping_add(x))
    }

    /// Right-aligned fixed-width grid.
    ///
    /// Each cell is padded to `column_width` and followed by a single space;
    /// rows are joined with `\n` and there is no trailing newline.
    pub fn render(&self, column_width: usize) -> String {
        self.data
            .chunks(self.n)
            .map(|row| {
                row.iter()
                    .map(|x| format!("{:>width$} ", x, width = column_width))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromStr for Matrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_COLUMN_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_row_major() {
        let mut m = Matrix::zeros(3);
        m.set(1, 2, 7);
        assert_eq!(m.get(1, 2), 7);
        assert_eq!(m.as_slice()[5], 7);
        assert_eq!(m.row(1), &[0, 0, 7]);
    }

    #[test]
    fn test_render_right_aligned_no_trailing_newline() {
        let m = Matrix::from_rows(vec![vec![1, 22], vec![333, 4]]).unwrap();
        assert_eq!(m.render(4), "   1   22 \n 333    4 ");
        assert_eq!(m.to_string(), m.render(DEFAULT_COLUMN_WIDTH));
    }

    #[test]
    fn test_render_single_cell() {
        assert_eq!(Matrix::filled(1, 5).render(2), " 5 ");
    }

    #[test]
    fn test_parse_roundtrip_text() {
        let m: Matrix = "1 2 3\n4 5 6\n7 8 9\n".parse().unwrap();
        assert_eq!(m.size(), 3);
        assert_eq!(m.row(2), &[7, 8, 9]);
    }

    #[test]
    fn test_parse_accepts_extra_whitespace() {
        let m = Matrix::parse("  1   -2\n\t3 4  \n\n").unwrap();
        assert_eq!(m.as_slice(), &[1, -2, 3, 4]);
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        let err = Matrix::parse("1 x\n3 4").unwrap_err();
        assert_eq!(
            err,
            MatrixError::InvalidNumber {
                row: 0,
                col: 1,
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_long_row() {
        // Would index past the row in a naive parser.
        let err = Matrix::parse("1 2 3\n4 5").unwrap_err();
        assert_eq!(
            err,
            MatrixError::RowLength {
                row: 0,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_parse_rejects_short_row() {
        let err = Matrix::parse("1 2\n3").unwrap_err();
        assert!(matches!(err, MatrixError::RowLength { row: 1, found: 1, .. }));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Matrix::parse("").unwrap_err(), MatrixError::Empty);
        assert_eq!(Matrix::parse("\n\n").unwrap_err(), MatrixError::Empty);
    }

    #[test]
    fn test_from_rows_rejects_jagged() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, MatrixError::RowLength { row: 1, .. }));
        assert_eq!(Matrix::from_rows(vec![]).unwrap_err(), MatrixError::Empty);
    }

    #[test]
    fn test_checksum_wraps() {
        let m = Matrix::filled(2, Element::MAX);
        assert_eq!(m.checksum(), Element::MAX.wrapping_mul(4));
    }

    #[test]
    fn test_identity() {
        let id = Matrix::identity(3);
        assert_eq!(id.checksum(), 3);
        assert_eq!(id.get(2, 2), 1);
        assert_eq!(id.get(0, 2), 0);
    }

    #[test]
    fn test_try_constructors_reject_zero_size() {
        assert_eq!(Matrix::try_zeros(0).unwrap_err(), MatrixError::Empty);
        assert_eq!(Matrix::try_filled(0, 7).unwrap_err(), MatrixError::Empty);
        assert_eq!(Matrix::try_filled(2, 7).unwrap(), Matrix::filled(2, 7));
        assert_eq!(Matrix::try_zeros(3).unwrap(), Matrix::zeros(3));
    }

    #[test]
    #[should_panic]
    fn test_zero_size_panics() {
        let _ = Matrix::zeros(0);
    }
}
