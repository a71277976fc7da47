//! # Market Core Library
//!
//! Generates the synthetic market behind the mock dashboard.
//!
//! ## Modules
//! - `generator`: Catalog and price-series generation from an injected random source.
//! - `config`: Layered generator configuration (defaults, file, environment).
//! - `args`: Command-line arguments shared by the binaries.
//! - `logging`: `env_logger` set-up.
//! - `error`: Configuration errors.

pub mod args;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;

#[cfg(feature = "test-utils")]
pub mod testing;

pub use config::GeneratorConfig;
pub use error::ConfigError;
pub use generator::{initialize, CatalogGenerator, SeriesGenerator, SymbolDetail};
