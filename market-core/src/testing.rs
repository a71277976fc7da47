//! Fixtures for tests of this crate and its dependents.
//!
//! Only compiled with the `test-utils` feature.

use crate::config::GeneratorConfig;
use crate::generator::{rng_from_seed, CatalogGenerator, SeriesGenerator};
use chrono::NaiveDate;
use market::Catalog;
use rand::rngs::StdRng;

pub const FIXTURE_SEED: u64 = 20240301;

/// Default configuration with a fixed seed and small random batches.
pub fn small_config() -> GeneratorConfig {
    GeneratorConfig::default()
        .with_seed(FIXTURE_SEED)
        .with_random_counts(40, 12, 6)
}

pub fn seeded_catalog() -> Catalog {
    let config = small_config();
    CatalogGenerator::new(rng_from_seed(config.seed)).build(&config)
}

pub fn seeded_series(seed: u64) -> SeriesGenerator<StdRng> {
    SeriesGenerator::seeded(seeded_catalog(), seed)
}

/// A fixed "today" so date assertions do not depend on the clock.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default()
}

/// Routes log output through the test harness.
pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
