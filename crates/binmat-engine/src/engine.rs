use binmat_core::{BinaryMatrix, RandomGenerator};

/// Draws batches of matrices from a borrowed generator.
///
/// The engine holds no state of its own; a chain generator keeps advancing
/// across successive calls to [`SamplingEngine::sample`].
pub struct SamplingEngine<'g, G: RandomGenerator + ?Sized> {
    generator: &'g mut G,
}

impl<'g, G: RandomGenerator + ?Sized> SamplingEngine<'g, G> {
    /// Wraps `generator` for the lifetime of the engine.
    pub fn new(generator: &'g mut G) -> Self {
        Self { generator }
    }

    /// Returns exactly `n` matrices in the order they were produced.
    pub fn sample(&mut self, n: usize) -> Vec<BinaryMatrix> {
        let (rows, cols) = self.generator.shape();
        log::debug!("sampling {n} matrices of shape {rows}x{cols}");
        let mut samples = Vec::with_capacity(n);
        for idx in 0..n {
            samples.push(self.generator.draw());
            log::trace!("sample {}/{n} done", idx + 1);
        }
        samples
    }

    /// Underlying generator.
    pub fn generator(&self) -> &G {
        &*self.generator
    }
}
