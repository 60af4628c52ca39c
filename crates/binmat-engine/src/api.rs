//! One-call entry points taking plain integer sequences.

use binmat_core::{BinaryMatrix, BinmatError, ErrorInfo, FixedInstance, IntervalInstance};
use binmat_mcmc::determinism::independent_seeds;

use crate::config::SamplerConfig;
use crate::engine::SamplingEngine;
use crate::generator::{FixedGenerator, IntervalGenerator};

/// Whether some binary matrix has exactly these row and column sums.
///
/// Malformed sums are reported as [`BinmatError::InvalidInstance`].
pub fn is_realizable_fixed(rowsums: Vec<i64>, colsums: Vec<i64>) -> Result<bool, BinmatError> {
    let instance = FixedInstance::new(rowsums, colsums)?;
    Ok(binmat_realize::is_realizable_fixed(&instance))
}

/// Whether some binary matrix has row and column sums inside these bounds.
pub fn is_realizable_interval(
    rowsums_lower: Vec<i64>,
    rowsums_upper: Vec<i64>,
    colsums_lower: Vec<i64>,
    colsums_upper: Vec<i64>,
) -> Result<bool, BinmatError> {
    let instance =
        IntervalInstance::new(rowsums_lower, rowsums_upper, colsums_lower, colsums_upper)?;
    Ok(binmat_realize::is_realizable_interval(&instance))
}

/// Draws `n` matrices with the fixed margins of `instance`.
///
/// The method is parsed before anything else, so an unknown name fails even
/// on infeasible margins.
pub fn sample_fixed(
    instance: &FixedInstance,
    config: &SamplerConfig,
    n: usize,
) -> Result<Vec<BinaryMatrix>, BinmatError> {
    let method = config.fixed_method()?;
    let mut generator =
        FixedGenerator::new(instance, method, config.steps, config.seed_policy.master_seed)?;
    Ok(SamplingEngine::new(&mut generator).sample(n))
}

/// Draws `n` matrices with sums inside the bounds of `instance`.
pub fn sample_interval(
    instance: &IntervalInstance,
    config: &SamplerConfig,
    n: usize,
) -> Result<Vec<BinaryMatrix>, BinmatError> {
    let method = config.interval_method()?;
    let mut generator =
        IntervalGenerator::new(instance, method, config.steps, config.seed_policy.master_seed)?;
    Ok(SamplingEngine::new(&mut generator).sample(n))
}

/// Runs `replicas` independent sessions of `n` draws on fixed margins.
///
/// Replica `k` is seeded with `replica_seed(master_seed, k)`, so each batch
/// equals a single session run with that seed.
pub fn sample_fixed_replicas(
    instance: &FixedInstance,
    config: &SamplerConfig,
    replicas: usize,
    n: usize,
) -> Result<Vec<Vec<BinaryMatrix>>, BinmatError> {
    let method = config.fixed_method()?;
    independent_seeds(config.seed_policy.master_seed, replicas)
        .into_iter()
        .map(|seed| {
            let mut generator = FixedGenerator::new(instance, method, config.steps, seed)?;
            Ok(SamplingEngine::new(&mut generator).sample(n))
        })
        .collect()
}

/// Runs `replicas` independent sessions of `n` draws on interval margins.
pub fn sample_interval_replicas(
    instance: &IntervalInstance,
    config: &SamplerConfig,
    replicas: usize,
    n: usize,
) -> Result<Vec<Vec<BinaryMatrix>>, BinmatError> {
    let method = config.interval_method()?;
    independent_seeds(config.seed_policy.master_seed, replicas)
        .into_iter()
        .map(|seed| {
            let mut generator = IntervalGenerator::new(instance, method, config.steps, seed)?;
            Ok(SamplingEngine::new(&mut generator).sample(n))
        })
        .collect()
}

/// Renders samples as a JSON array of row lists.
pub fn matrices_to_json(samples: &[BinaryMatrix]) -> Result<String, BinmatError> {
    let rows: Vec<Vec<Vec<u8>>> = samples.iter().map(BinaryMatrix::to_rows).collect();
    serde_json::to_string(&rows)
        .map_err(|err| BinmatError::Config(ErrorInfo::new("json_serialize", err.to_string())))
}
