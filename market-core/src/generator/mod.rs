//! Synthetic data generation.
//!
//! - `catalog`: builds the instrument catalog once, at start-up.
//! - `series`: builds historical and predicted price series on demand.
//! - `universe`: the static symbol lists and price ranges.
//!
//! Every generator takes its random source by value, so a seeded `StdRng`
//! reproduces its output exactly.

pub mod catalog;
pub mod series;
pub mod universe;

#[cfg(test)]
mod tests;

pub use catalog::CatalogGenerator;
pub use series::{SeriesGenerator, SymbolDetail};

use crate::config::GeneratorConfig;
use crate::error::ConfigError;
use log::info;
use market::Catalog;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Rounds to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Seeded when `seed` is set, from OS entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generates the catalog for this process.
///
/// Call once at start-up and share the returned handle; it is immutable and
/// cheap to clone. The configuration is validated first, so a batch too small
/// to cover its sector pool is rejected instead of silently dropping sectors.
pub fn initialize(config: &GeneratorConfig) -> Result<Catalog, ConfigError> {
    config.validate()?;
    match config.seed {
        Some(seed) => info!("Initializing catalog with seed {}", seed),
        None => info!("Initializing catalog from entropy"),
    }
    Ok(CatalogGenerator::new(rng_from_seed(config.seed)).build(config))
}
