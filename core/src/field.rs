use log::{debug, warn};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    NoiseGenerator,
    config::{DEFAULT_TABLE_SIZE, NoiseConfig, ShuffleMode},
    error::NoiseError,
    lattice::{lerp, setup, smooth},
    source::RandomSource,
};

// Vectors shorter than this are treated as degenerate draws
const DEGENERATE_NORM: f64 = 1e-4;
// Extra draws attempted before a degenerate gradient is replaced
const MAX_REDRAWS: usize = 8;

// Gradient noise over a periodic lattice, sampled in 1D, 2D or 3D.
// Tables are filled once from a random source and never change afterwards,
// so a field can be shared between threads by reference.
#[derive(Debug, Clone)]
pub struct GradientNoiseField {
    size: usize, // lattice period B, power of two
    mask: usize, // B - 1
    shuffle: ShuffleMode,
    // Every table has 2B + 2 entries; [B, 2B + 2) mirrors [0, B + 2)
    // so `p[p[x] + y]` never needs a modulo.
    permutation: Vec<usize>,
    gradient1: Vec<f64>,
    gradient2: Vec<[f64; 2]>,
    gradient3: Vec<[f64; 3]>,
}

impl Default for GradientNoiseField {
    fn default() -> Self {
        Self::new()
    }
}

impl GradientNoiseField {
    // Field seeded from the thread-local RNG
    pub fn new() -> Self {
        Self::with_source(&mut rand::rng())
    }

    // Reproducible field: same seed, same tables
    pub fn from_seed(seed: u64) -> Self {
        Self::with_source(&mut StdRng::seed_from_u64(seed))
    }

    // Default table size and shuffle, draws taken from `source`
    pub fn with_source<S: RandomSource + ?Sized>(source: &mut S) -> Self {
        Self::build(DEFAULT_TABLE_SIZE, ShuffleMode::default(), source)
    }

    // Validated config; `config.seed` is ignored in favour of `source`
    pub fn with_config<S: RandomSource + ?Sized>(
        config: &NoiseConfig,
        source: &mut S,
    ) -> Result<Self, NoiseError> {
        config.validate()?;
        Ok(Self::build(config.table_size, config.shuffle, source))
    }

    fn build<S: RandomSource + ?Sized>(size: usize, shuffle: ShuffleMode, source: &mut S) -> Self {
        let len = size + size + 2;
        let mut permutation = vec![0usize; len];
        let mut gradient1 = vec![0.0; len];
        let mut gradient2 = vec![[0.0; 2]; len];
        let mut gradient3 = vec![[0.0; 3]; len];
        let mut substituted = 0;

        // Draw order per index: one scalar, then the 2D vector, then the 3D vector
        for i in 0..size {
            permutation[i] = i;
            gradient1[i] = source.next_signed();
            gradient2[i] = unit_gradient(source).unwrap_or_else(|| {
                substituted += 1;
                first_axis()
            });
            gradient3[i] = unit_gradient(source).unwrap_or_else(|| {
                substituted += 1;
                first_axis()
            });
        }

        shuffle_permutation(&mut permutation[..size], shuffle, source);

        // Must run front to back: slots 2B and 2B+1 read entries B and B+1,
        // which this same loop filled from 0 and 1.
        for i in 0..size + 2 {
            permutation[size + i] = permutation[i];
            gradient1[size + i] = gradient1[i];
            gradient2[size + i] = gradient2[i];
            gradient3[size + i] = gradient3[i];
        }

        if substituted > 0 {
            warn!(
                "random source kept producing zero-length gradients; substituted {substituted} with the first axis"
            );
        }
        debug!("built gradient noise tables: size={size}, shuffle={shuffle:?}");

        Self {
            size,
            mask: size - 1,
            shuffle,
            permutation,
            gradient1,
            gradient2,
            gradient3,
        }
    }

    // 1D noise, within [-1, 1]
    pub fn evaluate1(&self, x: f64) -> f64 {
        let cx = setup(x, self.mask);
        let p = &self.permutation;
        let g = &self.gradient1;

        let sx = smooth(cx.r0);
        let u = cx.r0 * g[p[cx.b0]];
        let v = cx.r1 * g[p[cx.b1]];
        lerp(sx, u, v)
    }

    // 2D noise, within [-1, 1]
    pub fn evaluate2(&self, x: f64, y: f64) -> f64 {
        let cx = setup(x, self.mask);
        let cy = setup(y, self.mask);
        let p = &self.permutation;
        let g = &self.gradient2;

        // Hash the four corners of the cell
        let i = p[cx.b0];
        let j = p[cx.b1];
        let b00 = p[i + cy.b0];
        let b10 = p[j + cy.b0];
        let b01 = p[i + cy.b1];
        let b11 = p[j + cy.b1];

        let sx = smooth(cx.r0);
        let sy = smooth(cy.r0);

        // Blend along x on both rows, then between the rows
        let a = lerp(sx, dot2(g[b00], cx.r0, cy.r0), dot2(g[b10], cx.r1, cy.r0));
        let b = lerp(sx, dot2(g[b01], cx.r0, cy.r1), dot2(g[b11], cx.r1, cy.r1));
        lerp(sy, a, b)
    }

    // 3D noise, within [-sqrt(3), sqrt(3)] and usually much closer to zero
    pub fn evaluate3(&self, x: f64, y: f64, z: f64) -> f64 {
        let cx = setup(x, self.mask);
        let cy = setup(y, self.mask);
        let cz = setup(z, self.mask);
        let p = &self.permutation;
        let g = &self.gradient3;

        let i = p[cx.b0];
        let j = p[cx.b1];
        let b00 = p[i + cy.b0];
        let b10 = p[j + cy.b0];
        let b01 = p[i + cy.b1];
        let b11 = p[j + cy.b1];

        let sx = smooth(cx.r0);
        let sy = smooth(cy.r0);
        let sz = smooth(cz.r0);

        // One x/y interpolated slab per z corner
        let layer = |bz: usize, rz: f64| {
            let a = lerp(
                sx,
                dot3(g[b00 + bz], cx.r0, cy.r0, rz),
                dot3(g[b10 + bz], cx.r1, cy.r0, rz),
            );
            let b = lerp(
                sx,
                dot3(g[b01 + bz], cx.r0, cy.r1, rz),
                dot3(g[b11 + bz], cx.r1, cy.r1, rz),
            );
            lerp(sy, a, b)
        };

        lerp(sz, layer(cz.b0, cz.r0), layer(cz.b1, cz.r1))
    }

    pub fn table_size(&self) -> usize {
        self.size
    }

    pub fn shuffle_mode(&self) -> ShuffleMode {
        self.shuffle
    }

    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    pub fn gradient1(&self) -> &[f64] {
        &self.gradient1
    }

    pub fn gradient2(&self) -> &[[f64; 2]] {
        &self.gradient2
    }

    pub fn gradient3(&self) -> &[[f64; 3]] {
        &self.gradient3
    }
}

impl NoiseGenerator for GradientNoiseField {
    fn get1(&self, x: f64) -> f64 {
        self.evaluate1(x)
    }

    fn get2(&self, x: f64, y: f64) -> f64 {
        self.evaluate2(x, y)
    }

    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.evaluate3(x, y, z)
    }
}

#[inline]
fn dot2(g: [f64; 2], rx: f64, ry: f64) -> f64 {
    rx * g[0] + ry * g[1]
}

#[inline]
fn dot3(g: [f64; 3], rx: f64, ry: f64, rz: f64) -> f64 {
    rx * g[0] + ry * g[1] + rz * g[2]
}

fn shuffle_permutation<S: RandomSource + ?Sized>(
    table: &mut [usize],
    mode: ShuffleMode,
    source: &mut S,
) {
    for i in (1..table.len()).rev() {
        let j = match mode {
            // Partner strictly below i; the walk stops before index 0 picks one
            ShuffleMode::Reference => source.next_index(i),
            ShuffleMode::FisherYates => source.next_index(i + 1),
        };
        table.swap(i, j);
    }
}

// Draw components in [-1, 1] and scale to unit length.
// Returns None when every attempt is too short to normalize.
fn unit_gradient<const D: usize, S: RandomSource + ?Sized>(source: &mut S) -> Option<[f64; D]> {
    for _ in 0..=MAX_REDRAWS {
        let mut v = [0.0; D];
        for c in v.iter_mut() {
            *c = source.next_signed();
        }
        if let Some(unit) = normalize(v) {
            return Some(unit);
        }
    }
    None
}

fn normalize<const D: usize>(v: [f64; D]) -> Option<[f64; D]> {
    let norm = v.iter().map(|c| c * c).sum::<f64>().sqrt();
    if norm.is_nan() || norm <= DEGENERATE_NORM {
        return None;
    }
    let unit = v.map(|c| c / norm);
    debug_assert!((unit.iter().map(|c| c * c).sum::<f64>() - 1.0).abs() < 1e-9);
    Some(unit)
}

fn first_axis<const D: usize>() -> [f64; D] {
    let mut v = [0.0; D];
    v[0] = 1.0;
    v
}
