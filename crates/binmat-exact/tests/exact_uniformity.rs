use std::collections::BTreeMap;

use binmat_core::{BinaryMatrix, BinmatError, FixedInstance, IntervalInstance};
use binmat_exact::{BigUint, ExactSampler};
use proptest::prelude::*;

fn fixed(rows: &[i64], cols: &[i64]) -> FixedInstance {
    FixedInstance::new(rows.to_vec(), cols.to_vec()).unwrap()
}

/// Every matrix of the given shape accepted by `accept`.
fn enumerate(rows: usize, cols: usize, accept: impl Fn(&BinaryMatrix) -> bool) -> Vec<BinaryMatrix> {
    let cells = rows * cols;
    (0u32..1 << cells)
        .map(|mask| {
            let mut m = BinaryMatrix::zeros(rows, cols);
            for idx in 0..cells {
                if mask >> idx & 1 == 1 {
                    m.set(idx / cols, idx % cols, true);
                }
            }
            m
        })
        .filter(|m| accept(m))
        .collect()
}

#[test]
fn draws_are_uniform_over_small_state_space() {
    let instance = fixed(&[2, 1, 1], &[1, 2, 1]);
    let support = enumerate(3, 3, |m| instance.is_satisfied_by(m));
    let mut sampler = ExactSampler::from_fixed(&instance, 17).unwrap();
    assert_eq!(sampler.count(), &BigUint::from(support.len()));

    let draws = 6000usize;
    let mut histogram: BTreeMap<BinaryMatrix, usize> = BTreeMap::new();
    for _ in 0..draws {
        let m = sampler.sample();
        assert!(instance.is_satisfied_by(&m));
        *histogram.entry(m).or_insert(0) += 1;
    }
    assert_eq!(histogram.len(), support.len());

    let expected = draws as f64 / support.len() as f64;
    let chi_square: f64 = support
        .iter()
        .map(|m| {
            let observed = *histogram.get(m).unwrap_or(&0) as f64;
            (observed - expected).powi(2) / expected
        })
        .sum();
    // 99.9% quantile of chi-square with support.len() - 1 <= 10 degrees of freedom
    assert!(chi_square < 29.6, "chi-square {chi_square} too large");
}

#[test]
fn lower_bound_beyond_any_machine_word_is_infeasible() {
    let huge = 1i64 << 32;
    let interval = IntervalInstance::new(vec![huge], vec![huge], vec![0], vec![1]).unwrap();
    let err = ExactSampler::new(&interval, 1).unwrap_err();
    assert!(matches!(err, BinmatError::Infeasible(_)));

    let interval =
        IntervalInstance::new(vec![0, huge + 1], vec![1, huge + 1], vec![0, 0], vec![2, 2]).unwrap();
    assert!(ExactSampler::new(&interval, 1).is_err());
}

#[test]
fn counting_table_is_reused_across_draws() {
    let instance = fixed(&[3, 2, 2, 1, 2], &[2, 3, 2, 3]);
    let mut sampler = ExactSampler::from_fixed(&instance, 8).unwrap();
    let built = sampler.table_size();
    assert!(built > 0);
    for _ in 0..50 {
        sampler.sample();
    }
    // every state a draw visits was memoized while counting
    assert_eq!(sampler.table_size(), built);
    assert_eq!(sampler.seed(), 8);
}

#[test]
fn unique_matrix_is_always_returned() {
    let instance = fixed(&[2, 2], &[2, 2]);
    let mut sampler = ExactSampler::from_fixed(&instance, 3).unwrap();
    assert_eq!(sampler.count(), &BigUint::from(1u32));
    for _ in 0..20 {
        assert_eq!(sampler.sample().to_rows(), vec![vec![1, 1], vec![1, 1]]);
    }
}

#[test]
fn both_permutations_appear() {
    let instance = fixed(&[1, 1], &[1, 1]);
    let mut sampler = ExactSampler::from_fixed(&instance, 5).unwrap();
    let seen: std::collections::BTreeSet<_> = (0..64).map(|_| sampler.sample()).collect();
    assert_eq!(seen.len(), 2);
}

#[test]
fn infeasible_instances_fail_at_construction() {
    let err = ExactSampler::from_fixed(&fixed(&[2], &[0, 0]), 1).unwrap_err();
    assert!(matches!(err, BinmatError::Infeasible(_)));

    let interval = IntervalInstance::new(vec![2], vec![2], vec![0], vec![0]).unwrap();
    let err = ExactSampler::new(&interval, 1).unwrap_err();
    assert!(matches!(err, BinmatError::Infeasible(_)));
}

#[test]
fn interval_draws_stay_in_bounds() {
    let instance =
        IntervalInstance::new(vec![0, 1, 1], vec![2, 2, 3], vec![1, 0, 1], vec![2, 2, 3]).unwrap();
    let support = enumerate(3, 3, |m| instance.is_satisfied_by(m));
    let mut sampler = ExactSampler::new(&instance, 99).unwrap();
    assert_eq!(sampler.count(), &BigUint::from(support.len()));
    for _ in 0..200 {
        assert!(instance.is_satisfied_by(&sampler.sample()));
    }
}

#[test]
fn empty_dimensions() {
    let instance = fixed(&[0, 0], &[]);
    let mut sampler = ExactSampler::from_fixed(&instance, 0).unwrap();
    let m = sampler.sample();
    assert_eq!((m.num_rows(), m.num_cols()), (2, 0));
}

#[test]
fn same_seed_same_sequence() {
    let instance = fixed(&[2, 1, 1, 2], &[1, 2, 2, 1]);
    let mut a = ExactSampler::from_fixed(&instance, 2024).unwrap();
    let mut b = ExactSampler::from_fixed(&instance, 2024).unwrap();
    for _ in 0..10 {
        assert_eq!(a.sample(), b.sample());
    }
}

#[test]
fn large_counts_do_not_overflow() {
    // 3x60 with row sums 30 and column sums alternating 1 and 2: well above 2^64 realizations
    let cols: Vec<i64> = (0..60).map(|j| 1 + (j % 2)).collect();
    let instance = fixed(&[30, 30, 30], &cols);
    let mut sampler = ExactSampler::from_fixed(&instance, 8).unwrap();
    assert!(sampler.count() > &BigUint::from(u64::MAX));
    assert!(instance.is_satisfied_by(&sampler.sample()));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn count_matches_enumeration(
        lower in prop::collection::vec(0i64..=2, 3),
        slack in prop::collection::vec(0i64..=1, 3),
        col_lower in prop::collection::vec(0i64..=2, 3),
        col_slack in prop::collection::vec(0i64..=1, 3),
        seed in any::<u64>(),
    ) {
        let upper: Vec<i64> = lower.iter().zip(&slack).map(|(l, s)| l + s).collect();
        let col_upper: Vec<i64> = col_lower.iter().zip(&col_slack).map(|(l, s)| l + s).collect();
        let instance = IntervalInstance::new(lower, upper, col_lower, col_upper).unwrap();
        let support = enumerate(3, 3, |m| instance.is_satisfied_by(m));
        match ExactSampler::new(&instance, seed) {
            Ok(mut sampler) => {
                prop_assert_eq!(sampler.count(), &BigUint::from(support.len()));
                let m = sampler.sample();
                prop_assert!(instance.is_satisfied_by(&m));
            }
            Err(err) => {
                prop_assert!(support.is_empty());
                prop_assert!(matches!(err, BinmatError::Infeasible(_)));
            }
        }
    }
}
