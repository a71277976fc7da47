//! Command-line arguments shared by every binary built on this crate.
//!
//! `CommonArgs` is meant to be flattened into a binary's own `clap` parser. It
//! carries the last configuration layer: a `--seed` given here wins over the
//! config file and the environment.

use crate::config::GeneratorConfig;
use crate::error::ConfigError;
use clap::Args;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Path to a TOML or JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible catalogs and series
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<LevelFilter>,
}

impl CommonArgs {
    pub fn get_config(&self) -> Option<&PathBuf> {
        self.config.as_ref()
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_log_level(&self) -> Option<LevelFilter> {
        self.log_level
    }

    /// Loads the layered configuration and applies the command-line overrides.
    pub fn resolve_config(&self) -> Result<GeneratorConfig, ConfigError> {
        let config = GeneratorConfig::load(self.config.as_deref())?;
        Ok(self.apply(config))
    }

    fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config
    }
}
