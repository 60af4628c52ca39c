#![deny(missing_docs)]

//! Markov chain samplers over binary matrices with fixed or interval margins.
//!
//! Fixed margins support the classical (KTV) switch chain, the edge switch
//! chain and the curveball chain. Interval margins support the simple and the
//! informed chain. Every chain starts from a constructive realization and is
//! advanced by a fixed number of elementary moves per sample.

/// Chain kinds and their move mixtures.
pub mod config;
/// Deterministic seed derivation helpers.
pub mod determinism;
/// Chain state machines implementing [`binmat_core::RandomGenerator`].
pub mod kernel;
/// Move kinds and acceptance counters.
pub mod metrics;
/// Moves preserving fixed margins.
pub mod moves_fixed;
/// Moves for interval margins.
pub mod moves_interval;

pub use config::{FixedChainKind, IntervalChainKind};
pub use kernel::{FixedMarginChain, IntervalMarginChain};
pub use metrics::{ChainStats, MoveKind};
