use binmat_core::errors::ErrorInfo;
use binmat_core::{BinaryMatrix, BinmatError, FixedInstance, IntervalInstance};

use crate::flow::{BoundedArcId, BoundedFlow, UNBOUNDED};

/// Builds one matrix with exactly the given margins.
///
/// Rows are laid off greedily against the columns with the largest residual
/// sums (ties broken by column index), which succeeds whenever the margins are
/// realizable.
pub fn realize_fixed(instance: &FixedInstance) -> Result<BinaryMatrix, BinmatError> {
    let rows = instance.num_rows();
    let cols = instance.num_cols();
    let mut matrix = BinaryMatrix::zeros(rows, cols);
    let mut residual = instance.colsums().to_vec();
    let mut order: Vec<usize> = (0..cols).collect();

    for (i, &demand) in instance.rowsums().iter().enumerate() {
        order.sort_by(|&a, &b| residual[b].cmp(&residual[a]).then(a.cmp(&b)));
        for &j in order.iter().take(demand) {
            if residual[j] == 0 {
                return Err(BinmatError::Infeasible(
                    ErrorInfo::new("greedy-exhausted", "row demand exceeds available columns")
                        .with_context("row", i)
                        .with_context("demand", demand),
                ));
            }
            residual[j] -= 1;
            matrix.set(i, j, true);
        }
    }
    if let Some(col) = residual.iter().position(|&r| r > 0) {
        return Err(BinmatError::Infeasible(
            ErrorInfo::new("column-unsatisfied", "column sums left unmatched after all rows")
                .with_context("col", col)
                .with_context("missing", residual[col]),
        ));
    }
    log::debug!("realized fixed margins on a {rows}x{cols} matrix");
    Ok(matrix)
}

struct IntervalNetwork {
    problem: BoundedFlow,
    cells: Vec<BoundedArcId>,
    rows: usize,
    cols: usize,
}

impl IntervalNetwork {
    // node layout: 0 = source, 1 = sink, 2.. rows, then columns
    fn build(instance: &IntervalInstance) -> Self {
        let rows = instance.num_rows();
        let cols = instance.num_cols();
        let source = 0;
        let sink = 1;
        let row_node = |i: usize| 2 + i;
        let col_node = |j: usize| 2 + rows + j;

        let mut problem = BoundedFlow::new(2 + rows + cols);
        for (i, bound) in instance.row_bounds().iter().enumerate() {
            problem.add_arc(source, row_node(i), bound.lower as i64, bound.upper as i64);
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                cells.push(problem.add_arc(row_node(i), col_node(j), 0, 1));
            }
        }
        for (j, bound) in instance.col_bounds().iter().enumerate() {
            problem.add_arc(col_node(j), sink, bound.lower as i64, bound.upper as i64);
        }
        problem.add_arc(sink, source, 0, UNBOUNDED);
        Self {
            problem,
            cells,
            rows,
            cols,
        }
    }

    fn solve(&mut self) -> bool {
        self.problem.solve()
    }

    fn matrix(&self) -> BinaryMatrix {
        let mut matrix = BinaryMatrix::zeros(self.rows, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                if self.problem.flow(self.cells[i * self.cols + j]) > 0 {
                    matrix.set(i, j, true);
                }
            }
        }
        matrix
    }
}

/// Decides whether a 0/1 matrix with sums inside the given ranges exists.
pub fn is_realizable_interval(instance: &IntervalInstance) -> bool {
    IntervalNetwork::build(instance).solve()
}

/// Builds one matrix whose sums lie inside the given ranges.
pub fn realize_interval(instance: &IntervalInstance) -> Result<BinaryMatrix, BinmatError> {
    let mut network = IntervalNetwork::build(instance);
    if !network.solve() {
        return Err(BinmatError::Infeasible(
            ErrorInfo::new("no-feasible-flow", "interval margins admit no binary matrix")
                .with_context("rows", instance.num_rows())
                .with_context("cols", instance.num_cols()),
        ));
    }
    let matrix = network.matrix();
    debug_assert!(instance.is_satisfied_by(&matrix));
    log::debug!(
        "realized interval margins on a {}x{} matrix with {} ones",
        matrix.num_rows(),
        matrix.num_cols(),
        matrix.ones()
    );
    Ok(matrix)
}
