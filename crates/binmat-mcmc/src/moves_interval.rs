//! Moves for interval-margin chains.
//!
//! The state caches row and column sums so that every bound check is O(1).
//! Flip and shift proposals are symmetric; the informed flip carries a
//! Metropolis–Hastings correction, so all kernels leave the uniform
//! distribution over admissible matrices invariant.

use binmat_core::{BinaryMatrix, Bound, IntervalInstance, RngHandle};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::moves_fixed::try_switch;

/// Current matrix of an interval chain with cached margins.
#[derive(Debug, Clone)]
pub struct IntervalState {
    matrix: BinaryMatrix,
    row_sums: Vec<usize>,
    col_sums: Vec<usize>,
    rows: Vec<Bound>,
    cols: Vec<Bound>,
}

impl IntervalState {
    /// Wraps `matrix`, which must satisfy `instance`.
    pub fn new(instance: &IntervalInstance, matrix: BinaryMatrix) -> Self {
        debug_assert!(instance.is_satisfied_by(&matrix));
        Self {
            row_sums: matrix.row_sums(),
            col_sums: matrix.col_sums(),
            matrix,
            rows: instance.row_bounds().to_vec(),
            cols: instance.col_bounds().to_vec(),
        }
    }

    /// Current matrix.
    pub fn matrix(&self) -> &BinaryMatrix {
        &self.matrix
    }

    fn toggle(&mut self, i: usize, j: usize) {
        if self.matrix.flip(i, j) {
            self.row_sums[i] += 1;
            self.col_sums[j] += 1;
        } else {
            self.row_sums[i] -= 1;
            self.col_sums[j] -= 1;
        }
    }

    fn can_add(&self, i: usize, j: usize) -> bool {
        self.row_sums[i] < self.rows[i].upper && self.col_sums[j] < self.cols[j].upper
    }

    fn can_remove(&self, i: usize, j: usize) -> bool {
        self.row_sums[i] > self.rows[i].lower && self.col_sums[j] > self.cols[j].lower
    }
}

/// Toggles a uniformly chosen cell if both of its sums stay within bounds.
pub fn propose_flip(state: &mut IntervalState, rng: &mut RngHandle) -> bool {
    let (rows, cols) = (state.matrix.num_rows(), state.matrix.num_cols());
    if rows == 0 || cols == 0 {
        return false;
    }
    let i = rng.gen_range(0..rows);
    let j = rng.gen_range(0..cols);
    let admissible = if state.matrix.get(i, j) {
        state.can_remove(i, j)
    } else {
        state.can_add(i, j)
    };
    if admissible {
        state.toggle(i, j);
    }
    admissible
}

/// Moves a one from column `j` to column `k` within a uniformly chosen row.
pub fn propose_row_shift(state: &mut IntervalState, rng: &mut RngHandle) -> bool {
    let rows = state.matrix.num_rows();
    if rows == 0 {
        return false;
    }
    let i = rng.gen_range(0..rows);
    let Some((j, k)) = rng.distinct_pair(state.matrix.num_cols()) else {
        return false;
    };
    if !state.matrix.get(i, j) || state.matrix.get(i, k) {
        return false;
    }
    if state.col_sums[j] <= state.cols[j].lower || state.col_sums[k] >= state.cols[k].upper {
        return false;
    }
    state.toggle(i, j);
    state.toggle(i, k);
    true
}

/// Moves a one from row `i` to row `h` within a uniformly chosen column.
pub fn propose_column_shift(state: &mut IntervalState, rng: &mut RngHandle) -> bool {
    let cols = state.matrix.num_cols();
    if cols == 0 {
        return false;
    }
    let j = rng.gen_range(0..cols);
    let Some((i, h)) = rng.distinct_pair(state.matrix.num_rows()) else {
        return false;
    };
    if !state.matrix.get(i, j) || state.matrix.get(h, j) {
        return false;
    }
    if state.row_sums[i] <= state.rows[i].lower || state.row_sums[h] >= state.rows[h].upper {
        return false;
    }
    state.toggle(i, j);
    state.toggle(h, j);
    true
}

/// Checkerboard switch; never changes any sum.
pub fn propose_switch(state: &mut IntervalState, rng: &mut RngHandle) -> bool {
    let Some(rows) = rng.distinct_pair(state.matrix.num_rows()) else {
        return false;
    };
    let Some(cols) = rng.distinct_pair(state.matrix.num_cols()) else {
        return false;
    };
    try_switch(&mut state.matrix, rows, cols)
}

/// Flip proposed only where it can succeed, corrected by Metropolis–Hastings.
///
/// With probability 1/2 an addition is proposed: row and column are drawn
/// uniformly from those below their upper bound. Otherwise a removal is
/// proposed from rows and columns above their lower bound. The reverse move
/// of an addition is a removal and vice versa, so the acceptance ratio is
/// `|candidates(x)| / |candidates(y)|` of the respective proposal sets.
pub fn propose_informed_flip(state: &mut IntervalState, rng: &mut RngHandle) -> bool {
    let below_upper_rows = slack_indices(&state.row_sums, &state.rows, Slack::Upper);
    let below_upper_cols = slack_indices(&state.col_sums, &state.cols, Slack::Upper);
    let above_lower_rows = slack_indices(&state.row_sums, &state.rows, Slack::Lower);
    let above_lower_cols = slack_indices(&state.col_sums, &state.cols, Slack::Lower);

    let add = rng.gen_bool(0.5);
    let (rows, cols) = if add {
        (&below_upper_rows, &below_upper_cols)
    } else {
        (&above_lower_rows, &above_lower_cols)
    };
    let (Some(&i), Some(&j)) = (rows.choose(rng), cols.choose(rng)) else {
        return false;
    };
    if state.matrix.get(i, j) == add {
        return false;
    }

    let forward = (rows.len() * cols.len()) as f64;
    let reverse = if add {
        // i and j join the removal candidates if they sat exactly on their lower bound
        let r = above_lower_rows.len() + usize::from(state.row_sums[i] == state.rows[i].lower);
        let c = above_lower_cols.len() + usize::from(state.col_sums[j] == state.cols[j].lower);
        (r * c) as f64
    } else {
        let r = below_upper_rows.len() + usize::from(state.row_sums[i] == state.rows[i].upper);
        let c = below_upper_cols.len() + usize::from(state.col_sums[j] == state.cols[j].upper);
        (r * c) as f64
    };
    let ratio = forward / reverse;
    if ratio < 1.0 && rng.gen::<f64>() >= ratio {
        return false;
    }
    state.toggle(i, j);
    true
}

#[derive(Clone, Copy)]
enum Slack {
    Upper,
    Lower,
}

fn slack_indices(sums: &[usize], bounds: &[Bound], side: Slack) -> Vec<usize> {
    sums.iter()
        .zip(bounds)
        .enumerate()
        .filter(|(_, (&sum, bound))| match side {
            Slack::Upper => sum < bound.upper,
            Slack::Lower => sum > bound.lower,
        })
        .map(|(idx, _)| idx)
        .collect()
}
