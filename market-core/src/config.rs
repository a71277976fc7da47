//! Generator configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML or JSON file,
//! then `MOCK_MARKET_*` environment variables. Command-line overrides are
//! applied on top by [`args::CommonArgs`](crate::args::CommonArgs).

use crate::error::ConfigError;
use crate::generator::universe::{RANDOM_FUND_TYPES, RANDOM_GOLD_TYPES, RANDOM_STOCK_SECTORS};
use config::{Config, Environment, File};
use log::debug;
use market::model::query::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix of the environment variables read by [`GeneratorConfig::load`].
pub const ENV_PREFIX: &str = "MOCK_MARKET";

pub const DEFAULT_RANDOM_STOCKS: usize = 800;
pub const DEFAULT_RANDOM_FUNDS: usize = 150;
pub const DEFAULT_RANDOM_GOLD: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed for the random source; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Procedurally named stocks appended after the named lists.
    pub random_stocks: usize,
    pub random_funds: usize,
    pub random_gold: usize,
    /// Rows per page when listing the catalog.
    pub page_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            random_stocks: DEFAULT_RANDOM_STOCKS,
            random_funds: DEFAULT_RANDOM_FUNDS,
            random_gold: DEFAULT_RANDOM_GOLD,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl GeneratorConfig {
    /// Loads the configuration from `path` (if given) and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    /// Same as [`load`](Self::load), reading `<env_prefix>_*` variables.
    pub fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            debug!("Reading configuration from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: GeneratorConfig = builder
            .add_source(Environment::with_prefix(env_prefix).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid(
                "page_size must be greater than 0".to_string(),
            ));
        }

        // Each random batch must be large enough to hand out every entry of its pool.
        let batches = [
            ("random_stocks", self.random_stocks, RANDOM_STOCK_SECTORS.len()),
            ("random_funds", self.random_funds, RANDOM_FUND_TYPES.len()),
            ("random_gold", self.random_gold, RANDOM_GOLD_TYPES.len()),
        ];
        for (field, count, minimum) in batches {
            if count < minimum {
                return Err(ConfigError::Invalid(format!(
                    "{field} must be at least {minimum} so every category appears, got {count}"
                )));
            }
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the sizes of the three random batches.
    pub fn with_random_counts(mut self, stocks: usize, funds: usize, gold: usize) -> Self {
        self.random_stocks = stocks;
        self.random_funds = funds;
        self.random_gold = gold;
        self
    }
}
