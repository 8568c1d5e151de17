use crate::{NoiseGenerator, error::NoiseError};

// 2D height map: row‐major Vec<Vec<f32>> of size N×N
// access as `map[y][x]`.
pub type HeightMap2D = Vec<Vec<f32>>;

// Sample a size×size grid over [0, frequency) on both axes.
// Raw noise values, no octave summing or normalization.
pub fn sample_grid2(
    generator: &dyn NoiseGenerator,
    size: usize,
    frequency: f64,
) -> Result<HeightMap2D, NoiseError> {
    check_grid(size, frequency)?;
    let step = frequency / size as f64;
    let mut map = vec![vec![0.0; size]; size];
    for (y, row) in map.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = generator.get2(x as f64 * step, y as f64 * step) as f32;
        }
    }
    Ok(map)
}

// Sample `len` evenly spaced points over [0, frequency), e.g. an animation curve
pub fn sample_line1(
    generator: &dyn NoiseGenerator,
    len: usize,
    frequency: f64,
) -> Result<Vec<f32>, NoiseError> {
    check_grid(len, frequency)?;
    let step = frequency / len as f64;
    Ok((0..len)
        .map(|i| generator.get1(i as f64 * step) as f32)
        .collect())
}

// flatten a 2D height map (row‐major) into a single Vec<f32>
pub fn flatten2(map: &HeightMap2D) -> Vec<f32> {
    map.iter().flat_map(|row| row.iter().cloned()).collect()
}

fn check_grid(size: usize, frequency: f64) -> Result<(), NoiseError> {
    if size == 0 || !frequency.is_finite() || frequency <= 0.0 {
        return Err(NoiseError::InvalidGrid { size, frequency });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GradientNoiseField;

    #[test]
    fn grid_has_requested_shape() {
        let field = GradientNoiseField::from_seed(2025);
        let map = sample_grid2(&field, 33, 4.0).unwrap();
        assert_eq!(map.len(), 33);
        assert!(map.iter().all(|row| row.len() == 33));
    }

    #[test]
    fn grid_matches_direct_evaluation() {
        let field = GradientNoiseField::from_seed(5);
        let map = sample_grid2(&field, 16, 8.0).unwrap();
        // step = 8 / 16 = 0.5
        assert_eq!(map[3][7], field.evaluate2(3.5, 1.5) as f32);
        // Origin is a lattice point
        assert_eq!(map[0][0], 0.0);
    }

    #[test]
    fn grid_is_not_flat() {
        let field = GradientNoiseField::from_seed(11);
        let flat = flatten2(&sample_grid2(&field, 32, 6.0).unwrap());
        let min = flat.iter().cloned().fold(f32::MAX, f32::min);
        let max = flat.iter().cloned().fold(f32::MIN, f32::max);
        assert!(max - min > 0.1, "range {min}..{max} too narrow");
    }

    #[test]
    fn line_matches_direct_evaluation() {
        let field = GradientNoiseField::from_seed(6);
        let line = sample_line1(&field, 10, 5.0).unwrap();
        assert_eq!(line.len(), 10);
        assert_eq!(line[3], field.evaluate1(1.5) as f32);
    }

    #[test]
    fn flatten_is_row_major() {
        let map: HeightMap2D = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(flatten2(&map), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn rejects_bad_grid_parameters() {
        let field = GradientNoiseField::from_seed(1);
        assert_eq!(
            sample_grid2(&field, 0, 1.0),
            Err(NoiseError::InvalidGrid {
                size: 0,
                frequency: 1.0
            })
        );
        assert!(sample_grid2(&field, 8, 0.0).is_err());
        assert!(sample_line1(&field, 8, f64::NAN).is_err());
        assert!(sample_line1(&field, 8, -1.0).is_err());
    }
}
