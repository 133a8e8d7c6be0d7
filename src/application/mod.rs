//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `WatchUseCase` - Startup crawl, file watching and cascade recompilation
//! - `compile_all` - Compile every source once and exit

pub mod compile_all;
pub mod watch;

pub use compile_all::{compile_all, CompileSummary};
pub use watch::{
    classify_event, CascadeReport, CompileOutcome, FileEvent, FileEventKind, SessionState,
    WatchEvent, WatchOptions, WatchSession, WatchUseCase, WatcherState, DEBOUNCE_MS,
};
