use binmat_core::{BinaryMatrix, BinmatError, FixedInstance, IntervalInstance};
use proptest::prelude::*;

fn code_of(err: BinmatError) -> String {
    match err {
        BinmatError::InvalidInstance(info) => info.code,
        other => panic!("expected invalid instance, got {other}"),
    }
}

#[test]
fn fixed_rejects_negative_sums() {
    let err = FixedInstance::new(vec![1, -1], vec![1, 0]).unwrap_err();
    assert_eq!(code_of(err), "negative-sum");
}

#[test]
fn fixed_rejects_sums_above_dimension() {
    let err = FixedInstance::new(vec![3], vec![1, 1]).unwrap_err();
    assert_eq!(code_of(err), "sum-exceeds-dimension");
    let err = FixedInstance::new(vec![1, 1], vec![3, 0]).unwrap_err();
    assert_eq!(code_of(err), "sum-exceeds-dimension");
}

#[test]
fn fixed_accepts_unequal_totals() {
    let instance = FixedInstance::new(vec![2], vec![0, 0]).unwrap();
    assert_eq!(instance.num_rows(), 1);
    assert_eq!(instance.num_cols(), 2);
    assert_eq!(instance.rowsums(), &[2]);
}

#[test]
fn interval_rejects_inverted_bounds() {
    let err = IntervalInstance::new(vec![2], vec![1], vec![0], vec![1]).unwrap_err();
    assert_eq!(code_of(err), "lower-exceeds-upper");
}

#[test]
fn interval_rejects_length_mismatch() {
    let err = IntervalInstance::new(vec![0, 0], vec![1], vec![0], vec![1]).unwrap_err();
    assert_eq!(code_of(err), "bound-length-mismatch");
}

#[test]
fn interval_rejects_negative_bounds() {
    let err = IntervalInstance::new(vec![0], vec![1], vec![-1], vec![1]).unwrap_err();
    assert_eq!(code_of(err), "negative-sum");
}

#[test]
fn interval_clamps_upper_bounds() {
    let instance = IntervalInstance::new(vec![0, 1], vec![9, 9], vec![0], vec![5]).unwrap();
    assert_eq!(instance.rowsums_upper(), vec![1, 1]);
    assert_eq!(instance.colsums_upper(), vec![2]);
    assert!(!instance.is_fixed());
}

#[test]
fn interval_keeps_oversized_lower_bounds() {
    let instance = IntervalInstance::new(vec![2], vec![2], vec![0], vec![0]).unwrap();
    assert_eq!(instance.rowsums_lower(), vec![2]);
    assert_eq!(instance.rowsums_upper(), vec![2]);
}

#[test]
fn fixed_view_is_degenerate_interval() {
    let fixed = FixedInstance::new(vec![1, 2], vec![2, 1]).unwrap();
    let interval = IntervalInstance::from(&fixed);
    assert!(interval.is_fixed());
    let m = BinaryMatrix::from_rows(&[vec![1, 0], vec![1, 1]]).unwrap();
    assert!(fixed.is_satisfied_by(&m));
    assert!(interval.is_satisfied_by(&m));
}

proptest! {
    #[test]
    fn in_range_sums_always_construct(rows in prop::collection::vec(0i64..4, 0..5), cols in prop::collection::vec(0i64..4, 4..6)) {
        let instance = FixedInstance::new(rows.clone(), cols.clone());
        let ok = cols.iter().all(|&c| c as usize <= rows.len());
        prop_assert_eq!(instance.is_ok(), ok);
    }
}
