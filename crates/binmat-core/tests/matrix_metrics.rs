use binmat_core::BinaryMatrix;

fn identity() -> BinaryMatrix {
    BinaryMatrix::from_rows(&[vec![1, 0], vec![0, 1]]).unwrap()
}

fn anti_identity() -> BinaryMatrix {
    BinaryMatrix::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap()
}

#[test]
fn hamming_distance_counts_differing_cells() {
    assert_eq!(identity().hamming_distance(&anti_identity()), Some(4));
    assert_eq!(identity().hamming_distance(&identity()), Some(0));

    let mut one_off = identity();
    one_off.flip(0, 1);
    assert_eq!(identity().hamming_distance(&one_off), Some(1));
}

#[test]
fn hamming_distance_needs_equal_shapes() {
    let wide = BinaryMatrix::zeros(1, 4);
    let tall = BinaryMatrix::zeros(4, 1);
    assert_eq!(wide.hamming_distance(&tall), None);
    assert_eq!(identity().hamming_distance(&BinaryMatrix::zeros(2, 3)), None);
}

#[test]
fn density_is_share_of_ones() {
    assert_eq!(identity().density(), 0.5);
    assert_eq!(BinaryMatrix::zeros(3, 3).density(), 0.0);
    let full = BinaryMatrix::from_rows(&[vec![1, 1, 1]]).unwrap();
    assert_eq!(full.density(), 1.0);
}

#[test]
fn empty_matrices_have_zero_density() {
    assert_eq!(BinaryMatrix::zeros(0, 0).density(), 0.0);
    assert_eq!(BinaryMatrix::zeros(0, 5).density(), 0.0);
    assert_eq!(BinaryMatrix::zeros(3, 0).density(), 0.0);
    assert_eq!(
        BinaryMatrix::zeros(0, 5).hamming_distance(&BinaryMatrix::zeros(0, 5)),
        Some(0)
    );
}
