use binmat_core::{BinaryMatrix, BinmatError, FixedInstance, IntervalInstance, RandomGenerator};
use binmat_exact::ExactSampler;
use binmat_mcmc::{
    ChainStats, FixedChainKind, FixedMarginChain, IntervalChainKind, IntervalMarginChain,
};

use crate::methods::{FixedMethod, IntervalMethod};

/// Generator for a fixed-margin instance, selected by [`FixedMethod`].
#[derive(Debug, Clone)]
pub enum FixedGenerator {
    /// Exact uniform sampler.
    Exact(ExactSampler),
    /// Markov chain sampler.
    Chain(FixedMarginChain),
}

impl FixedGenerator {
    /// Builds the generator for `method`. `steps` is ignored by the exact sampler.
    ///
    /// Fails with [`BinmatError::Infeasible`] when the margins are not realizable.
    pub fn new(
        instance: &FixedInstance,
        method: FixedMethod,
        steps: usize,
        seed: u64,
    ) -> Result<Self, BinmatError> {
        log::debug!(
            "building {method} generator for {}x{} fixed margins",
            instance.num_rows(),
            instance.num_cols()
        );
        match method.chain_kind() {
            None => Ok(FixedGenerator::Exact(ExactSampler::from_fixed(instance, seed)?)),
            Some(kind) => Ok(FixedGenerator::Chain(FixedMarginChain::new(
                instance, kind, steps, seed,
            )?)),
        }
    }

    /// Method this generator was built for.
    pub fn method(&self) -> FixedMethod {
        match self {
            FixedGenerator::Exact(_) => FixedMethod::Exact,
            FixedGenerator::Chain(chain) => match chain.kind() {
                FixedChainKind::KtvSwitch => FixedMethod::KtvSwitch,
                FixedChainKind::EdgeSwitch => FixedMethod::EdgeSwitch,
                FixedChainKind::Curveball => FixedMethod::Curveball,
            },
        }
    }

    /// Chain counters, if this is a chain generator.
    pub fn stats(&self) -> Option<&ChainStats> {
        match self {
            FixedGenerator::Exact(_) => None,
            FixedGenerator::Chain(chain) => Some(chain.stats()),
        }
    }

    /// Seed the underlying sampler was built with.
    pub fn seed(&self) -> u64 {
        match self {
            FixedGenerator::Exact(sampler) => sampler.seed(),
            FixedGenerator::Chain(chain) => chain.seed(),
        }
    }
}

impl RandomGenerator for FixedGenerator {
    fn draw(&mut self) -> BinaryMatrix {
        match self {
            FixedGenerator::Exact(sampler) => sampler.draw(),
            FixedGenerator::Chain(chain) => chain.draw(),
        }
    }

    fn shape(&self) -> (usize, usize) {
        match self {
            FixedGenerator::Exact(sampler) => sampler.shape(),
            FixedGenerator::Chain(chain) => chain.shape(),
        }
    }
}

/// Generator for an interval-margin instance, selected by [`IntervalMethod`].
#[derive(Debug, Clone)]
pub enum IntervalGenerator {
    /// Exact uniform sampler.
    Exact(ExactSampler),
    /// Markov chain sampler.
    Chain(IntervalMarginChain),
}

impl IntervalGenerator {
    /// Builds the generator for `method`. `steps` is ignored by the exact sampler.
    ///
    /// Fails with [`BinmatError::Infeasible`] when the bounds are not realizable.
    pub fn new(
        instance: &IntervalInstance,
        method: IntervalMethod,
        steps: usize,
        seed: u64,
    ) -> Result<Self, BinmatError> {
        log::debug!(
            "building {method} generator for {}x{} interval margins",
            instance.num_rows(),
            instance.num_cols()
        );
        match method.chain_kind() {
            None => Ok(IntervalGenerator::Exact(ExactSampler::new(instance, seed)?)),
            Some(kind) => Ok(IntervalGenerator::Chain(IntervalMarginChain::new(
                instance, kind, steps, seed,
            )?)),
        }
    }

    /// Method this generator was built for.
    pub fn method(&self) -> IntervalMethod {
        match self {
            IntervalGenerator::Exact(_) => IntervalMethod::Exact,
            IntervalGenerator::Chain(chain) => match chain.kind() {
                IntervalChainKind::Simple => IntervalMethod::Simple,
                IntervalChainKind::Informed => IntervalMethod::Informed,
            },
        }
    }

    /// Chain counters, if this is a chain generator.
    pub fn stats(&self) -> Option<&ChainStats> {
        match self {
            IntervalGenerator::Exact(_) => None,
            IntervalGenerator::Chain(chain) => Some(chain.stats()),
        }
    }

    /// Seed the underlying sampler was built with.
    pub fn seed(&self) -> u64 {
        match self {
            IntervalGenerator::Exact(sampler) => sampler.seed(),
            IntervalGenerator::Chain(chain) => chain.seed(),
        }
    }
}

impl RandomGenerator for IntervalGenerator {
    fn draw(&mut self) -> BinaryMatrix {
        match self {
            IntervalGenerator::Exact(sampler) => sampler.draw(),
            IntervalGenerator::Chain(chain) => chain.draw(),
        }
    }

    fn shape(&self) -> (usize, usize) {
        match self {
            IntervalGenerator::Exact(sampler) => sampler.shape(),
            IntervalGenerator::Chain(chain) => chain.shape(),
        }
    }
}
