//! Configuration module for lesswatch
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LESSWATCH_*)
//! 3. Project config (`<src>/lesswatch.toml`)
//! 4. User config (`<config_dir>/lesswatch/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, CompilerConfig, Config, OutputConfig, SourceConfig, WatchConfig};
