use gradient_noise::{NoiseConfig, NoiseError, sample_grid2, sample_line1};

fn main() -> Result<(), NoiseError> {
    env_logger::init();

    // Seeded field with the default 256-entry tables
    let field = NoiseConfig::seeded(2025).build()?;

    // Print the top-left 16×16 corner of a 64×64 grid spanning 8 cells
    let map = sample_grid2(&field, 64, 8.0)?;
    for row in map.iter().take(16) {
        for v in row.iter().take(16) {
            print!("{v:>6.3} ");
        }
        println!();
    }

    // A 1D driver, e.g. for animating a camera wobble
    let line = sample_line1(&field, 8, 2.0)?;
    println!("1D: {line:?}");

    // A single 3D sample
    println!("3D (1.5, 2.5, 3.5): {:.4}", field.evaluate3(1.5, 2.5, 3.5));
    Ok(())
}
