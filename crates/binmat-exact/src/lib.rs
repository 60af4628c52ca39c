#![deny(missing_docs)]

//! Exact uniform sampling of binary matrices with fixed or interval margins.
//!
//! Fixed margins are handled as degenerate intervals, so one counting table
//! serves both kinds of instance. Counts are arbitrary precision.

mod sampler;
mod table;

pub use num_bigint::BigUint;
pub use sampler::ExactSampler;
