//! Logger set-up for binaries and tests.

use env_logger::Env;
use log::LevelFilter;

/// Installs `env_logger`.
///
/// An explicit `level` wins; otherwise `RUST_LOG` applies, defaulting to
/// `info`. Calling this more than once is harmless.
pub fn init(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}
