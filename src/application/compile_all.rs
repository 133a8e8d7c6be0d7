//! Compile-once use case
//!
//! Backs `--once`: crawl, build the dependency map, compile every source file
//! a single time (no cascades) and report a summary.

use std::path::PathBuf;

use crate::application::watch::{WatchEvent, WatchSession};
use crate::domain::ports::{FileSystem, StylesheetTransformer};
use crate::error::LesswatchResult;

/// Totals for a compile-once run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileSummary {
    /// Outputs written, in compile order
    pub written: Vec<PathBuf>,
    /// Sources that failed to compile
    pub failed: Vec<PathBuf>,
}

impl CompileSummary {
    /// Check if every file compiled
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Compile every source file under the session root once.
///
/// Per-file failures are reported through `on_event` and counted; only a
/// crawl failure is returned as an error. Clearing the session's running
/// flag stops before the next file.
pub fn compile_all<T, F>(
    session: &mut WatchSession<T, F>,
    on_event: impl Fn(WatchEvent),
) -> LesswatchResult<CompileSummary>
where
    T: StylesheetTransformer,
    F: FileSystem,
{
    let files = session.initialize(&on_event)?;

    on_event(WatchEvent::CompileAllStarted {
        source: session.root().display().to_string(),
        files: files.len(),
    });

    let mut summary = CompileSummary::default();
    for file in files {
        if !session.is_running() {
            break;
        }
        let outcome = session.compile_reporting(file, &on_event);
        match outcome.result {
            Ok(output) => summary.written.push(output),
            Err(_) => summary.failed.push(outcome.source),
        }
    }

    on_event(WatchEvent::CompileAllComplete {
        compiled: summary.written.len(),
        failed: summary.failed.len(),
    });

    Ok(summary)
}
