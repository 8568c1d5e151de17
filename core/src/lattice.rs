// Lattice cell lookup and the interpolation kernel shared by every dimension

// Added to each coordinate before flooring so ordinary negative inputs
// land in a positive cell.
pub const LATTICE_OFFSET: f64 = 4096.0;

// One axis of the lattice cell that contains a coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub b0: usize, // lower corner index, already masked
    pub b1: usize, // upper corner index, wraps to 0 after the last cell
    pub r0: f64,   // offset from the lower corner, in [0, 1)
    pub r1: f64,   // offset from the upper corner, r0 - 1
}

// Locate coordinate `v` in a table whose size is `mask + 1` (a power of two)
#[inline]
pub fn setup(v: f64, mask: usize) -> Cell {
    let t = v + LATTICE_OFFSET;
    let base = t.floor();
    // i64 -> usize keeps two's complement bits, so masking is still a modulo
    let b0 = (base as i64 as usize) & mask;
    let b1 = (b0 + 1) & mask;
    let r0 = t - base;
    Cell {
        b0,
        b1,
        r0,
        r1: r0 - 1.0,
    }
}

// Cubic Hermite ease curve 3t^2 - 2t^3
// First derivative is zero at t=0 and t=1, so blended cells meet without creases
#[inline]
pub fn smooth(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

// Linear interpolation, weight first
#[inline]
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}
