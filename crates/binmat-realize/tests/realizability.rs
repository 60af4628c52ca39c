use binmat_core::{FixedInstance, IntervalInstance};
use binmat_realize::{
    is_realizable_fixed, is_realizable_interval, realize_fixed, realize_interval,
};
use proptest::prelude::*;

fn fixed(rows: &[i64], cols: &[i64]) -> FixedInstance {
    FixedInstance::new(rows.to_vec(), cols.to_vec()).unwrap()
}

/// Exhaustive check over all 2^(r*c) matrices.
fn brute_force_fixed(instance: &FixedInstance) -> bool {
    let (r, c) = (instance.num_rows(), instance.num_cols());
    (0u32..1 << (r * c)).any(|mask| {
        let rows_ok = (0..r).all(|i| {
            (0..c).filter(|&j| mask >> (i * c + j) & 1 == 1).count() == instance.rowsums()[i]
        });
        let cols_ok = (0..c).all(|j| {
            (0..r).filter(|&i| mask >> (i * c + j) & 1 == 1).count() == instance.colsums()[j]
        });
        rows_ok && cols_ok
    })
}

#[test]
fn single_realization_square() {
    let instance = fixed(&[2, 2], &[2, 2]);
    assert!(is_realizable_fixed(&instance));
    let matrix = realize_fixed(&instance).unwrap();
    assert_eq!(matrix.to_rows(), vec![vec![1, 1], vec![1, 1]]);
}

#[test]
fn permutation_margins_are_realizable() {
    let instance = fixed(&[1, 1], &[1, 1]);
    assert!(is_realizable_fixed(&instance));
    assert!(instance.is_satisfied_by(&realize_fixed(&instance).unwrap()));
}

#[test]
fn total_mismatch_is_not_realizable() {
    let instance = fixed(&[2], &[0, 0]);
    assert!(!is_realizable_fixed(&instance));
    assert!(realize_fixed(&instance).is_err());
    assert!(!is_realizable_interval(&instance.to_interval()));
}

#[test]
fn oversized_interval_lower_bound_is_not_realizable() {
    let instance = IntervalInstance::new(vec![2], vec![2], vec![0], vec![0]).unwrap();
    assert!(!is_realizable_interval(&instance));
    assert!(realize_interval(&instance).is_err());
}

#[test]
fn realizability_is_deterministic() {
    let instance = fixed(&[3, 2, 1, 0], &[2, 2, 1, 1]);
    let first = is_realizable_fixed(&instance);
    for _ in 0..10 {
        assert_eq!(is_realizable_fixed(&instance), first);
        assert_eq!(is_realizable_interval(&instance.to_interval()), first);
    }
}

#[test]
fn interval_realization_respects_bounds() {
    let instance =
        IntervalInstance::new(vec![1, 0, 2], vec![2, 3, 3], vec![1, 1, 0, 2], vec![1, 3, 3, 3])
            .unwrap();
    assert!(is_realizable_interval(&instance));
    let matrix = realize_interval(&instance).unwrap();
    assert!(instance.is_satisfied_by(&matrix));
}

proptest! {
    #[test]
    fn gale_ryser_matches_brute_force(
        rows in prop::collection::vec(0i64..=3, 1..=3),
        cols in prop::collection::vec(0i64..=3, 3..=3),
    ) {
        let rows: Vec<i64> = rows.into_iter().map(|r| r.min(3)).collect();
        let cols: Vec<i64> = cols.into_iter().map(|c| c.min(rows.len() as i64)).collect();
        let instance = fixed(&rows, &cols);
        let expected = brute_force_fixed(&instance);
        prop_assert_eq!(is_realizable_fixed(&instance), expected);
        prop_assert_eq!(is_realizable_interval(&instance.to_interval()), expected);
        prop_assert_eq!(realize_fixed(&instance).is_ok(), expected);
        if let Ok(matrix) = realize_fixed(&instance) {
            prop_assert!(instance.is_satisfied_by(&matrix));
        }
    }

    #[test]
    fn interval_realizations_satisfy_bounds(
        lower in prop::collection::vec(0i64..=2, 1..=4),
        slack in prop::collection::vec(0i64..=2, 4),
        col_lower in prop::collection::vec(0i64..=2, 1..=4),
        col_slack in prop::collection::vec(0i64..=2, 4),
    ) {
        let upper: Vec<i64> = lower.iter().zip(&slack).map(|(l, s)| l + s).collect();
        let col_upper: Vec<i64> = col_lower.iter().zip(&col_slack).map(|(l, s)| l + s).collect();
        let instance = IntervalInstance::new(lower, upper, col_lower, col_upper).unwrap();
        match realize_interval(&instance) {
            Ok(matrix) => {
                prop_assert!(is_realizable_interval(&instance));
                prop_assert!(instance.is_satisfied_by(&matrix));
            }
            Err(_) => prop_assert!(!is_realizable_interval(&instance)),
        }
    }
}
