//! Watch Use Case
//!
//! Continuous file watching with incremental recompilation.
//! It orchestrates:
//! - File system monitoring (via `notify` crate)
//! - Debouncing (100ms default)
//! - Import tracking in a reverse dependency map
//! - Recompiling a changed file and everything that imports it
//!
//! ## Architecture
//!
//! - `WatchSession` - Owns the dependency map; parses imports and compiles
//! - `WatchUseCase` - Event loop around a session
//! - `WatchEvent` - Events emitted during watch operation
//!
//! ## Usage
//!
//! ```ignore
//! let session = WatchSession::open(&root, &config, LesscTransformer::from_config(&config.compiler))?;
//! let mut use_case = WatchUseCase::new(options, session);
//! use_case.start(running, |event| { ... })?;
//! ```

mod event;
mod session;
mod use_case;


pub use event::{FileEvent, FileEventKind, WatchEvent, WatchOptions, WatcherState, DEBOUNCE_MS};
pub use session::{CascadeReport, CompileOutcome, SessionState, WatchSession};
pub use use_case::{classify_event, WatchUseCase};
