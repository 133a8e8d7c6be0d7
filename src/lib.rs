//! lesswatch - incremental LESS stylesheet watcher
//!
//! lesswatch crawls a directory of `.less` sources, records which files import
//! which, and recompiles a changed file together with every file that
//! depends on it, writing a sibling `.css` next to each source.
//!
//! ## Architecture
//!
//! - `domain/` - Dependency graph, import scanning, ports
//! - `application/` - Watch session, event loop, compile-once
//! - `infrastructure/` - Local file system, crawler, `lessc` adapter
//! - `config/` - TOML configuration with environment overrides

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    compile_all, CascadeReport, CompileSummary, FileEvent, FileEventKind, WatchEvent,
    WatchOptions, WatchSession, WatchUseCase,
};
pub use config::{ColorMode, Config, ConfigWarning};
pub use domain::entities::{DependencyGraph, SourceFile};
pub use domain::ports::{FileSystem, StylesheetTransformer, TransformError};
pub use error::{LesswatchError, LesswatchResult};
pub use infrastructure::{LesscTransformer, LocalFs};
