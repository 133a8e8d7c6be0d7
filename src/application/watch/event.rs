//! Watch event types and options

use std::path::PathBuf;
use std::time::{Duration, Instant};

use indexmap::IndexSet;
use serde::Serialize;

use crate::config::WatchConfig;

/// Default debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// Watch loop options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchOptions {
    /// Window in which repeated events are coalesced
    pub debounce: Duration,
    /// Skip the synthetic `add` for files found by the startup crawl
    pub ignore_initial: bool,
}

impl WatchOptions {
    pub fn from_config(config: &WatchConfig) -> Self {
        Self {
            debounce: Duration::from_millis(config.debounce_ms),
            ignore_initial: config.ignore_initial,
        }
    }
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self::from_config(&WatchConfig::default())
    }
}

/// Kind of filesystem notification delivered to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileEventKind {
    /// A source file appeared (created, renamed into place, or found at startup)
    Add,
    /// A source file's content changed
    Change,
}

/// A single filesystem notification for a source file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileEvent {
    pub kind: FileEventKind,
    pub path: PathBuf,
}

impl FileEvent {
    pub fn add(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: FileEventKind::Add,
            path: path.into(),
        }
    }

    pub fn change(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: FileEventKind::Change,
            path: path.into(),
        }
    }
}

/// Watch event types for NDJSON output
///
/// Paths are relative to the source root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    WatchStarted {
        source: String,
        files: usize,
    },
    CompileAllStarted {
        source: String,
        files: usize,
    },
    FileAdded {
        path: String,
    },
    FileChanged {
        path: String,
    },
    DependenciesParsed {
        path: String,
        imports: usize,
    },
    IgnoredDirectory {
        path: String,
        dir: String,
    },
    CompileStarted {
        path: String,
    },
    Compiled {
        path: String,
        output: String,
    },
    CompileFailed {
        path: String,
        message: String,
    },
    CascadeComplete {
        trigger: String,
        compiled: usize,
        failed: usize,
    },
    CompileAllComplete {
        compiled: usize,
        failed: usize,
    },
    Error {
        message: String,
    },
    Shutdown,
}

impl WatchEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Whether this event reports a failure (rendered on stderr)
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            WatchEvent::CompileFailed { .. } | WatchEvent::Error { .. }
        )
    }
}

/// Watcher state for debouncing
///
/// Identical `(kind, path)` events inside one window collapse into one;
/// distinct events keep their arrival order.
pub struct WatcherState {
    pending: IndexSet<FileEvent>,
    last_change: Option<Instant>,
    debounce: Duration,
}

impl WatcherState {
    pub fn new(debounce: Duration) -> Self {
        Self {
            pending: IndexSet::new(),
            last_change: None,
            debounce,
        }
    }

    pub fn add_event(&mut self, event: FileEvent) {
        self.pending.insert(event);
        self.last_change = Some(Instant::now());
    }

    pub fn should_flush(&self) -> bool {
        if let Some(last) = self.last_change {
            !self.pending.is_empty() && last.elapsed() >= self.debounce
        } else {
            false
        }
    }

    pub fn take_events(&mut self) -> Vec<FileEvent> {
        let events: Vec<_> = self.pending.drain(..).collect();
        self.last_change = None;
        events
    }
}

impl Default for WatcherState {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEBOUNCE_MS))
    }
}
