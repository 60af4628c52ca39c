use std::collections::BTreeMap;

use binmat_core::errors::ErrorInfo;
use binmat_core::{
    BinaryMatrix, BinmatError, FixedInstance, IntervalInstance, RandomGenerator, RngHandle,
};
use num_bigint::{BigUint, RandBigInt};
use rand::seq::SliceRandom;

use crate::table::{self, CountTable, Group, RowBudget};

/// Draws matrices exactly uniformly from all matrices satisfying an instance.
///
/// Each draw descends the columns left to right. The bit pattern of a column
/// is chosen with probability proportional to the number of completions it
/// leaves, read from a memoized [`CountTable`] that survives across draws.
#[derive(Debug, Clone)]
pub struct ExactSampler {
    instance: IntervalInstance,
    table: CountTable,
    root: table::Signature,
    total: BigUint,
    rng: RngHandle,
}

impl ExactSampler {
    /// Builds a sampler for interval margins.
    ///
    /// Fails with [`BinmatError::Infeasible`] when no matrix satisfies the instance.
    pub fn new(instance: &IntervalInstance, seed: u64) -> Result<Self, BinmatError> {
        let mut table = CountTable::new(instance.col_bounds(), instance.num_rows());
        let root = table::signature(
            instance.row_bounds().iter().map(RowBudget::new),
            instance.num_cols(),
        );
        let total = table.count(0, &root);
        if total == BigUint::ZERO {
            return Err(BinmatError::Infeasible(
                ErrorInfo::new("empty-state-space", "no binary matrix satisfies the margins")
                    .with_context("rows", instance.num_rows())
                    .with_context("cols", instance.num_cols())
                    .with_hint("check realizability before constructing a sampler"),
            ));
        }
        log::debug!(
            "exact sampler over {}x{} margins: {} matrices, {} table entries",
            instance.num_rows(),
            instance.num_cols(),
            total,
            table.len()
        );
        Ok(Self {
            instance: instance.clone(),
            table,
            root,
            total,
            rng: RngHandle::from_seed(seed),
        })
    }

    /// Builds a sampler for fixed margins.
    pub fn from_fixed(instance: &FixedInstance, seed: u64) -> Result<Self, BinmatError> {
        Self::new(&instance.to_interval(), seed)
    }

    /// Exact number of matrices satisfying the instance.
    pub fn count(&self) -> &BigUint {
        &self.total
    }

    /// Instance this sampler draws from.
    pub fn instance(&self) -> &IntervalInstance {
        &self.instance
    }

    /// Seed the sampler was built with.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Number of memoized signatures currently held.
    pub fn table_size(&self) -> usize {
        self.table.len()
    }

    /// Draws one matrix uniformly at random.
    pub fn sample(&mut self) -> BinaryMatrix {
        let rows = self.instance.num_rows();
        let cols = self.instance.num_cols();
        let mut matrix = BinaryMatrix::zeros(rows, cols);
        let mut budgets: Vec<RowBudget> = self
            .instance
            .row_bounds()
            .iter()
            .map(RowBudget::new)
            .collect();
        debug_assert_eq!(
            table::signature(budgets.iter().copied(), cols),
            self.root
        );

        for col in 0..cols {
            let remaining = cols - col;
            let (groups, members) = group_rows(&budgets, remaining);
            let bound = self.table.column(col);

            let mut weighted = Vec::new();
            let mut total = BigUint::ZERO;
            for take in table::column_choices(&groups, bound.lower, bound.upper) {
                let next = table::advance(&groups, &take, remaining - 1);
                let completions = self.table.count(col + 1, &next);
                if completions == BigUint::ZERO {
                    continue;
                }
                let weight = self.table.weight(&groups, &take) * completions;
                total += &weight;
                weighted.push((take, weight));
            }
            debug_assert!(total > BigUint::ZERO, "reachable state without completions");

            let mut ticket = self.rng.gen_biguint_below(&total);
            let mut chosen = None;
            for (take, weight) in weighted {
                if ticket < weight {
                    chosen = Some(take);
                    break;
                }
                ticket -= weight;
            }
            let Some(take) = chosen else {
                unreachable!("ticket {ticket} not covered by column {col} choices");
            };

            for (rows_in_group, &t) in members.iter().zip(&take) {
                for &row in rows_in_group.choose_multiple(&mut self.rng, t) {
                    matrix.set(row, col, true);
                    budgets[row] = budgets[row].consume();
                }
            }
        }
        log::trace!("exact draw with {} ones", matrix.ones());
        matrix
    }
}

/// Groups live rows by clamped budget, in signature order.
fn group_rows(budgets: &[RowBudget], remaining: usize) -> (Vec<Group>, Vec<Vec<usize>>) {
    let mut classes: BTreeMap<RowBudget, Vec<usize>> = BTreeMap::new();
    for (row, budget) in budgets.iter().enumerate() {
        let clamped = budget.clamped(remaining);
        if !clamped.is_exhausted() {
            classes.entry(clamped).or_default().push(row);
        }
    }
    let groups = classes
        .iter()
        .map(|(&budget, rows)| Group {
            budget,
            size: rows.len(),
        })
        .collect();
    (groups, classes.into_values().collect())
}

impl RandomGenerator for ExactSampler {
    fn draw(&mut self) -> BinaryMatrix {
        self.sample()
    }

    fn shape(&self) -> (usize, usize) {
        (self.instance.num_rows(), self.instance.num_cols())
    }
}
