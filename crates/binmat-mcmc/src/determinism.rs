use binmat_core::derive_substream_seed;

/// Derives the deterministic seed used for a specific replica.
pub fn replica_seed(master_seed: u64, replica_index: usize) -> u64 {
    derive_substream_seed(master_seed, replica_index as u64)
}

/// Seeds for `count` independent sampling sessions sharing one master seed.
pub fn independent_seeds(master_seed: u64, count: usize) -> Vec<u64> {
    (0..count).map(|idx| replica_seed(master_seed, idx)).collect()
}
