use rand::Rng;

// Uniform draws consumed while building the lattice tables.
// Every `rand::Rng` is a source; tests plug in their own to pin the tables down.
pub trait RandomSource {
    // Uniform value in [-1, 1]
    fn next_signed(&mut self) -> f64;

    // Uniform index in [0, bound); `bound` is never zero
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    #[inline]
    fn next_signed(&mut self) -> f64 {
        self.random_range(-1.0..=1.0)
    }

    #[inline]
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}
