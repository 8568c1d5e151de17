// gradient_noise holds the seeded gradient-lattice noise field and its helpers
pub mod config;
pub mod error;
pub mod field;
pub mod lattice;
pub mod sample;
pub mod source;

pub use config::{NoiseConfig, ShuffleMode};
pub use error::NoiseError;
pub use field::GradientNoiseField;
pub use sample::{HeightMap2D, flatten2, sample_grid2, sample_line1};
pub use source::RandomSource;

// noise generator that can sample 1D, 2D or 3D points
// Samplers take `&dyn NoiseGenerator` so callers can layer their own generators.
pub trait NoiseGenerator {
    // Sample 1D noise at x.
    fn get1(&self, x: f64) -> f64;

    // Sample 2D noise at (x, y).
    fn get2(&self, x: f64, y: f64) -> f64;

    // Sample 3D noise at (x, y, z).
    fn get3(&self, x: f64, y: f64, z: f64) -> f64;
}
