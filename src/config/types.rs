//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LesswatchResult;

use super::loader::{self, ConfigWarning};

/// Source and output file naming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Extension of source stylesheets, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Extension written for compiled output, without the dot
    #[serde(default = "default_output_extension")]
    pub output_extension: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            output_extension: default_output_extension(),
        }
    }
}

fn default_extension() -> String {
    "less".to_string()
}

fn default_output_extension() -> String {
    "css".to_string()
}

/// External compiler invocation
///
/// `{dir}` and `{file}` in `args` are replaced per source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    #[serde(default = "default_compiler")]
    pub command: String,

    #[serde(default = "default_compiler_args")]
    pub args: Vec<String>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            command: default_compiler(),
            args: default_compiler_args(),
        }
    }
}

fn default_compiler() -> String {
    "lessc".to_string()
}

fn default_compiler_args() -> Vec<String> {
    vec!["--include-path={dir}".to_string(), "-".to_string()]
}

/// Watch loop tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Window in which repeated events for the same file are coalesced
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Skip the synthetic `add` event for files found at startup
    #[serde(default)]
    pub ignore_initial: bool,

    /// Directory names whose new files are not tracked
    #[serde(default = "default_ignored_dirs")]
    pub ignored_dirs: Vec<String>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            ignore_initial: false,
            ignored_dirs: default_ignored_dirs(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    100
}

fn default_ignored_dirs() -> Vec<String> {
    vec!["node_modules".to_string()]
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Full configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub compiler: CompilerConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LesswatchResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LesswatchResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply
    /// environment overrides.
    pub fn load_or_default(source_dir: &Path) -> LesswatchResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(source_dir)
    }

    /// Apply environment variable overrides (LESSWATCH_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
