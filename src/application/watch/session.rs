//! Watch session - dependency tracking and incremental compilation
//!
//! A `WatchSession` owns the reverse dependency map for one run of the tool.
//! It is the context passed between crawling, import tracking and cascade
//! compilation, so independent sessions can coexist (one per test, say).

use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use indexmap::IndexSet;

use crate::config::{Config, SourceConfig};
use crate::domain::entities::{DependencyGraph, SourceFile};
use crate::domain::ports::{FileSystem, StylesheetTransformer};
use crate::domain::services::scan_imports;
use crate::domain::value_objects::display_relative;
use crate::error::{LesswatchError, LesswatchResult};
use crate::infrastructure::fs::{collect_sources, LocalFs};

use super::event::{FileEvent, FileEventKind, WatchEvent};

/// Lifecycle of a watch session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Crawling,
    Watching,
    Compiling,
}

/// Result of compiling one source file
#[derive(Debug)]
pub struct CompileOutcome {
    pub source: PathBuf,
    /// Output path on success
    pub result: LesswatchResult<PathBuf>,
}

impl CompileOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Every compilation triggered by one change event, in compile order
#[derive(Debug)]
pub struct CascadeReport {
    pub trigger: PathBuf,
    pub outcomes: Vec<CompileOutcome>,
}

impl CascadeReport {
    /// Source files in the order they were compiled
    pub fn compiled_files(&self) -> Vec<&Path> {
        self.outcomes.iter().map(|o| o.source.as_path()).collect()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// State for one watch session
pub struct WatchSession<T, F = LocalFs> {
    root: PathBuf,
    source: SourceConfig,
    ignored_dirs: Vec<String>,
    graph: DependencyGraph,
    known: IndexSet<PathBuf>,
    transformer: T,
    fs: F,
    state: SessionState,
    warned_ignored: bool,
    running: Arc<AtomicBool>,
}

impl<T: StylesheetTransformer> WatchSession<T, LocalFs> {
    /// Open a session on `root`, which must be an existing directory.
    ///
    /// The root is canonicalized so paths reported by the file watcher line
    /// up with crawled paths.
    pub fn open(root: &Path, config: &Config, transformer: T) -> LesswatchResult<Self> {
        if !root.is_dir() {
            return Err(LesswatchError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }
        let root = root.canonicalize()?;
        Ok(Self::with_fs(root, config, transformer, LocalFs::new()))
    }
}

impl<T: StylesheetTransformer, F: FileSystem> WatchSession<T, F> {
    /// Create a session with an explicit file system; `root` is used as given.
    pub fn with_fs(root: PathBuf, config: &Config, transformer: T, fs: F) -> Self {
        Self {
            root,
            source: config.source.clone(),
            ignored_dirs: config.watch.ignored_dirs.clone(),
            graph: DependencyGraph::new(),
            known: IndexSet::new(),
            transformer,
            fs,
            state: SessionState::Idle,
            warned_ignored: false,
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn transformer(&self) -> &T {
        &self.transformer
    }

    pub fn extension(&self) -> &str {
        &self.source.extension
    }

    /// Share a shutdown flag; once it is cleared, cascades stop before
    /// their next file.
    pub fn set_running_flag(&mut self, running: Arc<AtomicBool>) {
        self.running = running;
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Whether `path` has been parsed during this session
    pub fn is_known(&self, path: &Path) -> bool {
        self.known.contains(path)
    }

    /// Crawl the root and parse every source file's imports.
    ///
    /// Unreadable files are reported and skipped; an unreadable directory
    /// aborts with `LesswatchError::Crawl`.
    pub fn initialize(&mut self, on_event: &impl Fn(WatchEvent)) -> LesswatchResult<Vec<PathBuf>> {
        self.state = SessionState::Crawling;
        let files = collect_sources(&self.root, &self.source.extension)?;

        for file in &files {
            self.track(file, on_event);
        }

        self.state = SessionState::Watching;
        Ok(files)
    }

    /// Read `file`, resolve its import directives and register it as a
    /// dependent of each target.
    ///
    /// Never removes edges registered by an earlier parse.
    pub fn parse_dependencies(&mut self, file: &Path) -> LesswatchResult<SourceFile> {
        let content = self.fs.read(file).map_err(|source| LesswatchError::Read {
            path: file.to_path_buf(),
            source,
        })?;

        let source_file = SourceFile::new(file)
            .with_imports(scan_imports(&content, file, &self.source.extension));
        self.graph.register_file(&source_file);
        self.known.insert(file.to_path_buf());

        Ok(source_file)
    }

    /// Compile a single file to its sibling output path.
    pub fn compile_file(&self, file: &Path) -> LesswatchResult<PathBuf> {
        let content = self.fs.read(file).map_err(|source| LesswatchError::Read {
            path: file.to_path_buf(),
            source,
        })?;

        let output = self
            .transformer
            .transform(&content, file)
            .map_err(|e| LesswatchError::Transform {
                path: file.to_path_buf(),
                message: e.message,
            })?;

        let out_path = SourceFile::new(file).output_path(&self.source.output_extension);
        self.fs
            .write(&out_path, &output)
            .map_err(|source| LesswatchError::Write {
                path: out_path.clone(),
                source,
            })?;

        Ok(out_path)
    }

    /// Compile `file`, then every file that imports it directly or
    /// transitively, each at most once.
    ///
    /// Stops before the next file once the running flag is cleared.
    pub fn compile_with_dependents(
        &mut self,
        file: &Path,
        on_event: &impl Fn(WatchEvent),
    ) -> CascadeReport {
        let previous = self.state;
        self.state = SessionState::Compiling;

        let mut outcomes = Vec::new();
        for source in self.graph.cascade(file) {
            if !self.is_running() {
                break;
            }
            outcomes.push(self.compile_reporting(source, on_event));
        }

        self.state = previous;
        CascadeReport {
            trigger: file.to_path_buf(),
            outcomes,
        }
    }

    /// Compile one file, emitting start and result events.
    pub fn compile_reporting(&self, source: PathBuf, on_event: &impl Fn(WatchEvent)) -> CompileOutcome {
        on_event(WatchEvent::CompileStarted {
            path: self.relative(&source),
        });

        let result = self.compile_file(&source);
        match &result {
            Ok(output) => on_event(WatchEvent::Compiled {
                path: self.relative(&source),
                output: self.relative(output),
            }),
            Err(err) => on_event(WatchEvent::CompileFailed {
                path: self.relative(&source),
                message: self.failure_detail(err),
            }),
        }

        CompileOutcome { source, result }
    }

    /// Dispatch one filesystem event.
    ///
    /// `change` runs a compile cascade; `add` re-parses the file's imports
    /// unless it lives under an ignored directory.
    pub fn handle(&mut self, event: FileEvent, on_event: &impl Fn(WatchEvent)) -> Option<CascadeReport> {
        match event.kind {
            FileEventKind::Change => {
                on_event(WatchEvent::FileChanged {
                    path: self.relative(&event.path),
                });
                let report = self.compile_with_dependents(&event.path, on_event);
                on_event(WatchEvent::CascadeComplete {
                    trigger: self.relative(&event.path),
                    compiled: report.succeeded(),
                    failed: report.failed(),
                });
                Some(report)
            }
            FileEventKind::Add => {
                // temp files from atomic saves can vanish before we get here
                if !self.fs.exists(&event.path) {
                    return None;
                }

                if let Some(dir) = self.ignored_dir(&event.path) {
                    if !self.warned_ignored {
                        self.warned_ignored = true;
                        on_event(WatchEvent::IgnoredDirectory {
                            path: self.relative(&event.path),
                            dir,
                        });
                    }
                    return None;
                }

                on_event(WatchEvent::FileAdded {
                    path: self.relative(&event.path),
                });
                self.track(&event.path, on_event);
                None
            }
        }
    }

    /// Path relative to the session root, for display
    pub fn relative(&self, path: &Path) -> String {
        display_relative(path, &self.root)
    }

    fn track(&mut self, file: &Path, on_event: &impl Fn(WatchEvent)) {
        match self.parse_dependencies(file) {
            Ok(source_file) => on_event(WatchEvent::DependenciesParsed {
                path: self.relative(file),
                imports: source_file.imports().len(),
            }),
            Err(err) => on_event(WatchEvent::Error {
                message: format!("{}: {}", self.relative(file), self.failure_detail(&err)),
            }),
        }
    }

    /// First ignored directory name among the path's components below root
    fn ignored_dir(&self, path: &Path) -> Option<String> {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        rel.components().find_map(|c| match c {
            Component::Normal(name) => {
                let name = name.to_string_lossy();
                self.ignored_dirs
                    .iter()
                    .find(|dir| dir.as_str() == name)
                    .cloned()
            }
            _ => None,
        })
    }

    /// Error text without the absolute source path
    fn failure_detail(&self, err: &LesswatchError) -> String {
        match err {
            LesswatchError::Read { source, .. } => format!("cannot read file: {source}"),
            LesswatchError::Transform { message, .. } => message.clone(),
            LesswatchError::Write { path, source } => {
                format!("cannot write {}: {}", self.relative(path), source)
            }
            other => other.to_string(),
        }
    }
}
