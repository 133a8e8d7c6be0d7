//! Tests for the config module

use super::loader::PROJECT_CONFIG_FILE;
use super::types::*;
use crate::error::LesswatchError;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.source.extension, "less");
    assert_eq!(config.source.output_extension, "css");
    assert_eq!(config.compiler.command, "lessc");
    assert_eq!(config.compiler.args, vec!["--include-path={dir}", "-"]);
    assert_eq!(config.watch.debounce_ms, 100);
    assert!(!config.watch.ignore_initial);
    assert_eq!(config.watch.ignored_dirs, vec!["node_modules"]);
    assert_eq!(config.output.color, ColorMode::Auto);
    assert!(config.output.unicode);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[source]
extension = "less"
output_extension = "min.css"

[compiler]
command = "npx"
args = ["lessc", "--compress", "-"]

[watch]
debounce_ms = 50
ignored_dirs = ["node_modules", "vendor"]

[output]
color = "never"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.source.output_extension, "min.css");
    assert_eq!(config.compiler.command, "npx");
    assert_eq!(config.compiler.args.len(), 3);
    assert_eq!(config.watch.debounce_ms, 50);
    assert_eq!(config.watch.ignored_dirs.len(), 2);
    assert_eq!(config.output.color, ColorMode::Never);
}

#[test]
fn test_config_partial_sections_use_defaults() {
    let config: Config = toml::from_str("[compiler]\ncommand = \"cat\"\n").unwrap();

    assert_eq!(config.compiler.command, "cat");
    assert_eq!(config.compiler.args, vec!["--include-path={dir}", "-"]);
    assert_eq!(config.source, SourceConfig::default());
}

#[test]
fn test_config_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(PROJECT_CONFIG_FILE);
    fs::write(&path, "[watch]\nignore_initial = true\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert!(config.watch.ignore_initial);
}

#[test]
fn test_config_unknown_key_warns_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(PROJECT_CONFIG_FILE);
    fs::write(&path, "[watch]\ndebounce = 10\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.watch.debounce_ms, 100);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "debounce");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion, None);
}

#[test]
fn test_config_unknown_key_typo_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(PROJECT_CONFIG_FILE);
    fs::write(&path, "[compiler]\ncomand = \"lessc\"\n").unwrap();

    let (_, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(warnings[0].suggestion.as_deref(), Some("command"));
}

#[test]
fn test_config_invalid_toml_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(PROJECT_CONFIG_FILE);
    fs::write(&path, "[watch\ndebounce_ms = ").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, LesswatchError::InvalidConfig { .. }));
}

#[test]
fn test_load_or_default_prefers_project_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(PROJECT_CONFIG_FILE),
        "[source]\noutput_extension = \"out\"\n",
    )
    .unwrap();

    let (config, warnings) = Config::load_or_default(dir.path()).unwrap();

    assert_eq!(config.source.output_extension, "out");
    assert!(warnings.is_empty());
}
