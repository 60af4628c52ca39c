//! Memoized counting of binary matrices by column descent.
//!
//! A row is summarised by `(need, room)`: ones still required to reach its
//! lower bound and ones still permitted by its upper bound. Rows sharing the
//! same pair are interchangeable, so the number of completions of columns
//! `col..C` only depends on the sorted multiset of pairs, the *signature*.

use std::collections::HashMap;

use binmat_core::Bound;
use num_bigint::BigUint;

/// Residual budget of a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct RowBudget {
    pub need: usize,
    pub room: usize,
}

impl RowBudget {
    pub fn new(bound: &Bound) -> Self {
        Self {
            need: bound.lower,
            room: bound.upper,
        }
    }

    /// Budget after placing a one in this row.
    pub fn consume(self) -> Self {
        Self {
            need: self.need.saturating_sub(1),
            room: self.room - 1,
        }
    }

    /// Room clamped to the columns still to be filled.
    pub fn clamped(self, remaining: usize) -> Self {
        Self {
            need: self.need,
            room: self.room.min(remaining),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.need == 0 && self.room == 0
    }
}

/// Sorted multiset of clamped row budgets, exhausted rows removed.
pub(crate) type Signature = Vec<RowBudget>;

/// Class of interchangeable rows inside a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Group {
    pub budget: RowBudget,
    pub size: usize,
}

pub(crate) fn signature<I>(budgets: I, remaining: usize) -> Signature
where
    I: IntoIterator<Item = RowBudget>,
{
    let mut sig: Signature = budgets
        .into_iter()
        .map(|b| b.clamped(remaining))
        .filter(|b| !b.is_exhausted())
        .collect();
    sig.sort_unstable();
    sig
}

pub(crate) fn groups(sig: &[RowBudget]) -> Vec<Group> {
    let mut out: Vec<Group> = Vec::new();
    for &budget in sig {
        match out.last_mut() {
            Some(last) if last.budget == budget => last.size += 1,
            _ => out.push(Group { budget, size: 1 }),
        }
    }
    out
}

/// Signature reached after placing `take[g]` ones into each group.
pub(crate) fn advance(groups: &[Group], take: &[usize], remaining_after: usize) -> Signature {
    let budgets = groups.iter().zip(take).flat_map(|(group, &t)| {
        let consumed = std::iter::repeat(group.budget.consume()).take(t);
        let untouched = std::iter::repeat(group.budget).take(group.size - t);
        consumed.chain(untouched)
    });
    signature(budgets, remaining_after)
}

/// All vectors `take` with `take[g] <= groups[g].size` and a total inside `[lower, upper]`.
pub(crate) fn column_choices(groups: &[Group], lower: usize, upper: usize) -> Vec<Vec<usize>> {
    let mut suffix = vec![0usize; groups.len() + 1];
    for g in (0..groups.len()).rev() {
        suffix[g] = suffix[g + 1] + groups[g].size;
    }
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(groups.len());
    enumerate(groups, &suffix, 0, 0, lower, upper, &mut current, &mut out);
    out
}

#[allow(clippy::too_many_arguments)]
fn enumerate(
    groups: &[Group],
    suffix: &[usize],
    g: usize,
    placed: usize,
    lower: usize,
    upper: usize,
    current: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if g == groups.len() {
        if placed >= lower {
            out.push(current.clone());
        }
        return;
    }
    let max_take = groups[g].size.min(upper.saturating_sub(placed));
    for t in 0..=max_take {
        if placed + t + suffix[g + 1] < lower {
            continue;
        }
        current.push(t);
        enumerate(groups, suffix, g + 1, placed + t, lower, upper, current, out);
        current.pop();
    }
}

/// Counting table shared by every draw of one sampler.
#[derive(Debug, Clone)]
pub(crate) struct CountTable {
    columns: Vec<Bound>,
    binomial: Vec<Vec<BigUint>>,
    memo: HashMap<(usize, Signature), BigUint>,
}

impl CountTable {
    pub fn new(columns: &[Bound], rows: usize) -> Self {
        let mut binomial: Vec<Vec<BigUint>> = Vec::with_capacity(rows + 1);
        for n in 0..=rows {
            let mut row = Vec::with_capacity(n + 1);
            for k in 0..=n {
                if k == 0 || k == n {
                    row.push(BigUint::from(1u32));
                } else {
                    let value = &binomial[n - 1][k - 1] + &binomial[n - 1][k];
                    row.push(value);
                }
            }
            binomial.push(row);
        }
        Self {
            columns: columns.to_vec(),
            binomial,
            memo: HashMap::new(),
        }
    }

    pub fn num_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, col: usize) -> Bound {
        self.columns[col]
    }

    pub fn binomial(&self, n: usize, k: usize) -> &BigUint {
        &self.binomial[n][k]
    }

    pub fn len(&self) -> usize {
        self.memo.len()
    }

    /// Multiplicity of a column choice: ways to pick the rows inside each group.
    pub fn weight(&self, groups: &[Group], take: &[usize]) -> BigUint {
        groups
            .iter()
            .zip(take)
            .fold(BigUint::from(1u32), |acc, (group, &t)| {
                acc * self.binomial(group.size, t)
            })
    }

    /// Number of ways to fill columns `col..C` starting from `sig`.
    pub fn count(&mut self, col: usize, sig: &[RowBudget]) -> BigUint {
        let remaining = self.num_cols() - col;
        if sig.iter().any(|b| b.need > remaining) {
            return BigUint::ZERO;
        }
        if col == self.num_cols() {
            return BigUint::from(1u32);
        }
        let key = (col, sig.to_vec());
        if let Some(hit) = self.memo.get(&key) {
            return hit.clone();
        }

        let bound = self.columns[col];
        let groups = groups(sig);
        let mut total = BigUint::ZERO;
        for take in column_choices(&groups, bound.lower, bound.upper) {
            let next = advance(&groups, &take, remaining - 1);
            let completions = self.count(col + 1, &next);
            if completions == BigUint::ZERO {
                continue;
            }
            total += self.weight(&groups, &take) * completions;
        }
        self.memo.insert(key, total.clone());
        total
    }
}
