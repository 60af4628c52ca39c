use binmat_core::FixedInstance;

/// Decides whether a 0/1 matrix with exactly the given margins exists.
///
/// The totals must agree, and for every `k` in `1..=R` the `k` largest row
/// sums may not exceed `sum_j min(c_j, k)`.
pub fn is_realizable_fixed(instance: &FixedInstance) -> bool {
    let row_total: usize = instance.rowsums().iter().sum();
    let col_total: usize = instance.colsums().iter().sum();
    if row_total != col_total {
        log::debug!("fixed margins: totals differ ({row_total} != {col_total})");
        return false;
    }
    let mut rows = instance.rowsums().to_vec();
    rows.sort_unstable_by(|a, b| b.cmp(a));

    // conjugate[k] = number of columns with sum >= k + 1, so
    // sum_j min(c_j, k) is the running total of conjugate[..k].
    let mut conjugate = vec![0usize; instance.num_rows() + 1];
    for &c in instance.colsums() {
        for slot in conjugate.iter_mut().take(c) {
            *slot += 1;
        }
    }

    let mut lhs = 0usize;
    let mut rhs = 0usize;
    for (k, &r) in rows.iter().enumerate() {
        lhs += r;
        rhs += conjugate[k];
        if lhs > rhs {
            log::debug!("fixed margins: prefix inequality fails at k = {}", k + 1);
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(rows: &[i64], cols: &[i64]) -> FixedInstance {
        FixedInstance::new(rows.to_vec(), cols.to_vec()).unwrap()
    }

    #[test]
    fn total_mismatch_is_rejected() {
        assert!(!is_realizable_fixed(&fixed(&[2], &[0, 0])));
    }

    #[test]
    fn prefix_violation_is_rejected() {
        // totals agree, but row 0 needs three columns and only two are non-empty
        assert!(!is_realizable_fixed(&fixed(&[3, 1], &[2, 2, 0])));
        assert!(is_realizable_fixed(&fixed(&[2, 2], &[2, 1, 1])));
    }

    #[test]
    fn empty_instances() {
        assert!(is_realizable_fixed(&fixed(&[], &[])));
        assert!(is_realizable_fixed(&fixed(&[0, 0], &[])));
        assert!(is_realizable_fixed(&fixed(&[], &[0])));
    }
}
