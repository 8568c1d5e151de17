use thiserror::Error;

use crate::config::MAX_TABLE_SIZE;

// Errors produced while configuring or sampling a noise field.
// Evaluation itself never fails.
#[derive(Debug, Error, PartialEq)]
pub enum NoiseError {
    // Table size must be a power of two so lattice lookups can mask instead of taking a modulo
    #[error(
        "invalid table size {0}: must be a power of two between 2 and {max}",
        max = MAX_TABLE_SIZE
    )]
    InvalidTableSize(usize),

    // Grid size was zero or the frequency was not a positive finite number
    #[error("invalid sampling grid: size {size} with frequency {frequency}")]
    InvalidGrid { size: usize, frequency: f64 },
}
