use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::{BinmatError, ErrorInfo};

/// Dense row-major 0/1 matrix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BinaryMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl BinaryMatrix {
    /// Creates an all-zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Builds a matrix from nested rows of 0/1 values.
    ///
    /// Every row must have the same length and every entry must be 0 or 1.
    /// An empty outer vector yields a 0×0 matrix.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, BinmatError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(BinmatError::InvalidInstance(
                    ErrorInfo::new("ragged-matrix", "matrix rows differ in length")
                        .with_context("row", i)
                        .with_context("expected", cols)
                        .with_context("found", row.len()),
                ));
            }
            for (j, &value) in row.iter().enumerate() {
                if value > 1 {
                    return Err(BinmatError::InvalidInstance(
                        ErrorInfo::new("non-binary-entry", "matrix entries must be 0 or 1")
                            .with_context("row", i)
                            .with_context("col", j)
                            .with_context("value", value),
                    ));
                }
                cells.push(value);
            }
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Returns the matrix as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells.chunks(self.cols).map(<[u8]>::to_vec).collect()
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Returns the entry at `(row, col)`. Panics when out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)] == 1
    }

    /// Writes the entry at `(row, col)`. Panics when out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        let idx = self.index(row, col);
        self.cells[idx] = u8::from(value);
    }

    /// Toggles the entry at `(row, col)` and returns the new value.
    #[inline]
    pub fn flip(&mut self, row: usize, col: usize) -> bool {
        let idx = self.index(row, col);
        self.cells[idx] ^= 1;
        self.cells[idx] == 1
    }

    /// Number of ones in `row`.
    pub fn row_sum(&self, row: usize) -> usize {
        let start = row * self.cols;
        self.cells[start..start + self.cols]
            .iter()
            .map(|&v| v as usize)
            .sum()
    }

    /// Number of ones in `col`.
    pub fn col_sum(&self, col: usize) -> usize {
        (0..self.rows).filter(|&i| self.get(i, col)).count()
    }

    /// Row sums of the whole matrix.
    pub fn row_sums(&self) -> Vec<usize> {
        (0..self.rows).map(|i| self.row_sum(i)).collect()
    }

    /// Column sums of the whole matrix.
    pub fn col_sums(&self) -> Vec<usize> {
        let mut sums = vec![0; self.cols];
        for i in 0..self.rows {
            for (j, sum) in sums.iter_mut().enumerate() {
                *sum += self.cells[i * self.cols + j] as usize;
            }
        }
        sums
    }

    /// Total number of ones.
    pub fn ones(&self) -> usize {
        self.cells.iter().map(|&v| v as usize).sum()
    }

    /// Fraction of cells holding a one. Empty matrices have density zero.
    pub fn density(&self) -> f64 {
        if self.cells.is_empty() {
            0.0
        } else {
            self.ones() as f64 / self.cells.len() as f64
        }
    }

    /// Number of cells in which `self` and `other` differ.
    ///
    /// Returns `None` when the shapes differ.
    pub fn hamming_distance(&self, other: &BinaryMatrix) -> Option<usize> {
        if self.rows != other.rows || self.cols != other.cols {
            return None;
        }
        Some(
            self.cells
                .iter()
                .zip(&other.cells)
                .filter(|(a, b)| a != b)
                .count(),
        )
    }

    /// Columns holding a one in `row`, in ascending order.
    pub fn row_support(&self, row: usize) -> Vec<usize> {
        (0..self.cols).filter(|&j| self.get(row, j)).collect()
    }

    /// Canonical SHA-256 hash of the shape and contents.
    pub fn canonical_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.rows as u64).to_le_bytes());
        hasher.update((self.cols as u64).to_le_bytes());
        for chunk in self.cells.chunks(8) {
            let mut packed = 0u8;
            for (bit, &value) in chunk.iter().enumerate() {
                packed |= value << bit;
            }
            hasher.update([packed]);
        }
        format!("{:x}", hasher.finalize())
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} matrix",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl fmt::Display for BinaryMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            for j in 0..self.cols {
                write!(f, "{}", u8::from(self.get(i, j)))?;
            }
        }
        Ok(())
    }
}
