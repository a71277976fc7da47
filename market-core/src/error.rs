use thiserror::Error;

/// Errors raised while assembling the generator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source (file or environment) could not be read or deserialized.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The configuration loaded but holds an unusable value.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
