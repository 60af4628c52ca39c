#![deny(missing_docs)]

//! Sampling engine for random binary matrices with fixed or interval margins.
//!
//! A caller builds a [`FixedInstance`](binmat_core::FixedInstance) or an
//! [`IntervalInstance`](binmat_core::IntervalInstance), picks a method by
//! name, and draws samples through a [`SamplingEngine`]:
//!
//! ```
//! use binmat_core::FixedInstance;
//! use binmat_engine::{FixedGenerator, FixedMethod, SamplingEngine};
//!
//! let instance = FixedInstance::new(vec![1, 1], vec![1, 1]).unwrap();
//! let method: FixedMethod = "curveball".parse().unwrap();
//! let mut generator = FixedGenerator::new(&instance, method, 100, 7).unwrap();
//! let samples = SamplingEngine::new(&mut generator).sample(3);
//! assert_eq!(samples.len(), 3);
//! ```

pub mod api;
/// YAML/JSON session configuration.
pub mod config;
mod engine;
/// Generators selected by method.
pub mod generator;
/// Method vocabulary.
pub mod methods;

pub use api::{
    is_realizable_fixed, is_realizable_interval, matrices_to_json, sample_fixed,
    sample_fixed_replicas, sample_interval, sample_interval_replicas,
};
pub use config::{SamplerConfig, SeedPolicy};
pub use engine::SamplingEngine;
pub use generator::{FixedGenerator, IntervalGenerator};
pub use methods::{FixedMethod, IntervalMethod};
