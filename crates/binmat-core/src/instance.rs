//! Fixed and interval margin instances.

use serde::{Deserialize, Serialize};

use crate::errors::{BinmatError, ErrorInfo};
use crate::matrix::BinaryMatrix;

/// Exact row and column sums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedInstance {
    rowsums: Vec<usize>,
    colsums: Vec<usize>,
}

impl FixedInstance {
    /// Validates and stores the margins.
    ///
    /// Every sum must be non-negative and no row sum may exceed the number of
    /// columns (no column sum the number of rows). Equality of the totals is
    /// left to the realizability check.
    pub fn new(rowsums: Vec<i64>, colsums: Vec<i64>) -> Result<Self, BinmatError> {
        let rowsums = checked_sums("row", &rowsums, colsums.len())?;
        let colsums = checked_sums("column", &colsums, rowsums.len())?;
        Ok(Self { rowsums, colsums })
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rowsums.len()
    }

    /// Number of columns.
    pub fn num_cols(&self) -> usize {
        self.colsums.len()
    }

    /// Target row sums.
    pub fn rowsums(&self) -> &[usize] {
        &self.rowsums
    }

    /// Target column sums.
    pub fn colsums(&self) -> &[usize] {
        &self.colsums
    }

    /// Returns true when `matrix` has this shape and exactly these margins.
    pub fn is_satisfied_by(&self, matrix: &BinaryMatrix) -> bool {
        matrix.num_rows() == self.num_rows()
            && matrix.num_cols() == self.num_cols()
            && matrix.row_sums() == self.rowsums
            && matrix.col_sums() == self.colsums
    }

    /// Views the instance as interval margins with `lower == upper`.
    pub fn to_interval(&self) -> IntervalInstance {
        IntervalInstance {
            rows: self.rowsums.iter().map(|&s| Bound::exact(s)).collect(),
            cols: self.colsums.iter().map(|&s| Bound::exact(s)).collect(),
        }
    }
}

/// Inclusive `[lower, upper]` range for a single row or column sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bound {
    /// Smallest admissible sum.
    pub lower: usize,
    /// Largest admissible sum.
    pub upper: usize,
}

impl Bound {
    /// Degenerate range holding a single value.
    pub const fn exact(value: usize) -> Self {
        Self {
            lower: value,
            upper: value,
        }
    }

    /// Returns true when `value` lies inside the range.
    #[inline]
    pub fn contains(&self, value: usize) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Row and column sums restricted to inclusive ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalInstance {
    rows: Vec<Bound>,
    cols: Vec<Bound>,
}

impl IntervalInstance {
    /// Validates and stores the bounds.
    ///
    /// Lower and upper sequences of one axis must have equal length, every
    /// bound must be non-negative and every lower bound must not exceed its
    /// upper bound. Upper bounds above the opposite dimension are clamped to
    /// it; lower bounds above it are kept and make the instance unrealizable.
    pub fn new(
        rowsums_lower: Vec<i64>,
        rowsums_upper: Vec<i64>,
        colsums_lower: Vec<i64>,
        colsums_upper: Vec<i64>,
    ) -> Result<Self, BinmatError> {
        let rows = checked_bounds("row", &rowsums_lower, &rowsums_upper, colsums_lower.len())?;
        let cols = checked_bounds("column", &colsums_lower, &colsums_upper, rows.len())?;
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn num_cols(&self) -> usize {
        self.cols.len()
    }

    /// Row bounds.
    pub fn row_bounds(&self) -> &[Bound] {
        &self.rows
    }

    /// Column bounds.
    pub fn col_bounds(&self) -> &[Bound] {
        &self.cols
    }

    /// Lower row bounds.
    pub fn rowsums_lower(&self) -> Vec<usize> {
        self.rows.iter().map(|b| b.lower).collect()
    }

    /// Upper row bounds (after clamping).
    pub fn rowsums_upper(&self) -> Vec<usize> {
        self.rows.iter().map(|b| b.upper).collect()
    }

    /// Lower column bounds.
    pub fn colsums_lower(&self) -> Vec<usize> {
        self.cols.iter().map(|b| b.lower).collect()
    }

    /// Upper column bounds (after clamping).
    pub fn colsums_upper(&self) -> Vec<usize> {
        self.cols.iter().map(|b| b.upper).collect()
    }

    /// Returns true when `matrix` has this shape and all sums lie in range.
    pub fn is_satisfied_by(&self, matrix: &BinaryMatrix) -> bool {
        matrix.num_rows() == self.num_rows()
            && matrix.num_cols() == self.num_cols()
            && matrix
                .row_sums()
                .iter()
                .zip(&self.rows)
                .all(|(&s, b)| b.contains(s))
            && matrix
                .col_sums()
                .iter()
                .zip(&self.cols)
                .all(|(&s, b)| b.contains(s))
    }

    /// Returns true when every bound is degenerate (`lower == upper`).
    pub fn is_fixed(&self) -> bool {
        self.rows.iter().chain(&self.cols).all(|b| b.lower == b.upper)
    }
}

impl From<&FixedInstance> for IntervalInstance {
    fn from(instance: &FixedInstance) -> Self {
        instance.to_interval()
    }
}

fn checked_sums(axis: &str, sums: &[i64], limit: usize) -> Result<Vec<usize>, BinmatError> {
    sums.iter()
        .enumerate()
        .map(|(idx, &value)| {
            if value < 0 {
                return Err(negative(axis, idx, value));
            }
            let value = value as usize;
            if value > limit {
                return Err(BinmatError::InvalidInstance(
                    ErrorInfo::new("sum-exceeds-dimension", format!("{axis} sum exceeds the opposite dimension"))
                        .with_context("index", idx)
                        .with_context("value", value)
                        .with_context("limit", limit),
                ));
            }
            Ok(value)
        })
        .collect()
}

fn checked_bounds(
    axis: &str,
    lower: &[i64],
    upper: &[i64],
    limit: usize,
) -> Result<Vec<Bound>, BinmatError> {
    if lower.len() != upper.len() {
        return Err(BinmatError::InvalidInstance(
            ErrorInfo::new("bound-length-mismatch", format!("{axis} lower and upper bounds differ in length"))
                .with_context("lower", lower.len())
                .with_context("upper", upper.len()),
        ));
    }
    lower
        .iter()
        .zip(upper)
        .enumerate()
        .map(|(idx, (&lo, &hi))| {
            if lo < 0 {
                return Err(negative(axis, idx, lo));
            }
            if hi < 0 {
                return Err(negative(axis, idx, hi));
            }
            if lo > hi {
                return Err(BinmatError::InvalidInstance(
                    ErrorInfo::new("lower-exceeds-upper", format!("{axis} lower bound exceeds upper bound"))
                        .with_context("index", idx)
                        .with_context("lower", lo)
                        .with_context("upper", hi),
                ));
            }
            let (lo, hi) = (lo as usize, hi as usize);
            // clamping never drops the upper bound below the lower one
            Ok(Bound {
                lower: lo,
                upper: hi.min(limit.max(lo)),
            })
        })
        .collect()
}

fn negative(axis: &str, idx: usize, value: i64) -> BinmatError {
    BinmatError::InvalidInstance(
        ErrorInfo::new("negative-sum", format!("{axis} sums must be non-negative"))
            .with_context("index", idx)
            .with_context("value", value),
    )
}
