//! Margin-preserving moves for fixed-margin chains.
//!
//! Every function performs one step on the matrix in place and returns
//! whether the matrix changed. A rejected proposal leaves it untouched.

use binmat_core::{BinaryMatrix, RngHandle};
use rand::seq::SliceRandom;

/// Flips the 2x2 submatrix at rows `(i1, i2)` and columns `(j1, j2)` if it is a checkerboard.
pub(crate) fn try_switch(
    matrix: &mut BinaryMatrix,
    (i1, i2): (usize, usize),
    (j1, j2): (usize, usize),
) -> bool {
    let a = matrix.get(i1, j1);
    let b = matrix.get(i1, j2);
    let c = matrix.get(i2, j1);
    let d = matrix.get(i2, j2);
    if a == d && b == c && a != b {
        matrix.flip(i1, j1);
        matrix.flip(i1, j2);
        matrix.flip(i2, j1);
        matrix.flip(i2, j2);
        true
    } else {
        false
    }
}

/// Classical switch: two distinct rows and two distinct columns chosen uniformly.
pub fn propose_switch(matrix: &mut BinaryMatrix, rng: &mut RngHandle) -> bool {
    let Some(rows) = rng.distinct_pair(matrix.num_rows()) else {
        return false;
    };
    let Some(cols) = rng.distinct_pair(matrix.num_cols()) else {
        return false;
    };
    try_switch(matrix, rows, cols)
}

/// Edge switch: two distinct one-entries chosen uniformly from `edges`.
///
/// `edges` must list every one-entry of `matrix` as `(row, col)`; it is kept
/// in sync when the move is accepted.
pub fn propose_edge_switch(
    matrix: &mut BinaryMatrix,
    edges: &mut [(usize, usize)],
    rng: &mut RngHandle,
) -> bool {
    let Some((e1, e2)) = rng.distinct_pair(edges.len()) else {
        return false;
    };
    let (i1, j1) = edges[e1];
    let (i2, j2) = edges[e2];
    if i1 == i2 || j1 == j2 || matrix.get(i1, j2) || matrix.get(i2, j1) {
        return false;
    }
    matrix.set(i1, j1, false);
    matrix.set(i2, j2, false);
    matrix.set(i1, j2, true);
    matrix.set(i2, j1, true);
    edges[e1] = (i1, j2);
    edges[e2] = (i2, j1);
    true
}

/// Curveball: the columns held by exactly one of two rows are dealt out again at random.
pub fn propose_curveball(matrix: &mut BinaryMatrix, rng: &mut RngHandle) -> bool {
    let Some((a, b)) = rng.distinct_pair(matrix.num_rows()) else {
        return false;
    };
    let mut pool = Vec::new();
    let mut only_a = 0usize;
    for j in 0..matrix.num_cols() {
        match (matrix.get(a, j), matrix.get(b, j)) {
            (true, false) => {
                pool.push(j);
                only_a += 1;
            }
            (false, true) => pool.push(j),
            _ => {}
        }
    }
    if only_a == 0 || only_a == pool.len() {
        return false;
    }
    pool.shuffle(rng);
    let (to_a, to_b) = pool.split_at(only_a);
    let changed = to_a.iter().any(|&j| !matrix.get(a, j));
    for &j in to_a {
        matrix.set(a, j, true);
        matrix.set(b, j, false);
    }
    for &j in to_b {
        matrix.set(a, j, false);
        matrix.set(b, j, true);
    }
    changed
}

/// One-entries of `matrix` in row-major order.
pub fn edge_list(matrix: &BinaryMatrix) -> Vec<(usize, usize)> {
    (0..matrix.num_rows())
        .flat_map(|i| matrix.row_support(i).into_iter().map(move |j| (i, j)))
        .collect()
}
