#![deny(missing_docs)]

//! Core matrix, margin and error types shared by every binmat crate.

pub mod errors;
pub mod instance;
mod matrix;
pub mod rng;

pub use errors::{BinmatError, ErrorInfo};
pub use instance::{Bound, FixedInstance, IntervalInstance};
pub use matrix::BinaryMatrix;
pub use rng::{derive_substream_seed, RngHandle};

/// Source of random binary matrices bound to a single margin instance.
///
/// Implementations own all of their state (current chain matrix, RNG,
/// counting tables) and may therefore be moved to other threads, but a single
/// generator is never shared: every draw takes `&mut self`.
pub trait RandomGenerator: Send {
    /// Produces the next matrix.
    fn draw(&mut self) -> BinaryMatrix;

    /// Shape `(rows, cols)` of every matrix this generator produces.
    fn shape(&self) -> (usize, usize);
}

impl<G: RandomGenerator + ?Sized> RandomGenerator for Box<G> {
    fn draw(&mut self) -> BinaryMatrix {
        (**self).draw()
    }

    fn shape(&self) -> (usize, usize) {
        (**self).shape()
    }
}
