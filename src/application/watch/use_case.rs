//! Watch Use Case implementation

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::time::Duration;

use notify::event::{CreateKind, ModifyKind, RenameMode};
use notify::{Config as NotifyConfig, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::domain::ports::{FileSystem, StylesheetTransformer};
use crate::domain::value_objects::{has_extension, normalize_path};
use crate::error::LesswatchResult;

use super::event::{FileEvent, FileEventKind, WatchEvent, WatchOptions, WatcherState};
use super::session::WatchSession;

/// How long the loop blocks on the event channel before re-checking the
/// shutdown flag
const POLL_INTERVAL_MS: u64 = 50;

/// Watch Use Case
///
/// Orchestrates the startup crawl, the file watcher and the event loop.
/// This is the main entry point for watch mode.
pub struct WatchUseCase<T, F> {
    options: WatchOptions,
    session: WatchSession<T, F>,
}

impl<T: StylesheetTransformer, F: FileSystem> WatchUseCase<T, F> {
    pub fn new(options: WatchOptions, session: WatchSession<T, F>) -> Self {
        Self { options, session }
    }

    pub fn session(&self) -> &WatchSession<T, F> {
        &self.session
    }

    /// Start watching (blocking)
    ///
    /// This method blocks until the running flag is set to false. Events are
    /// handled one at a time; raw notifications keep queueing in the channel
    /// while a cascade compiles. Clearing the flag also stops a running
    /// cascade before its next file.
    pub fn start<C>(&mut self, running: Arc<AtomicBool>, on_event: C) -> LesswatchResult<()>
    where
        C: Fn(WatchEvent),
    {
        self.session.set_running_flag(running.clone());
        let files = self.session.initialize(&on_event)?;

        on_event(WatchEvent::WatchStarted {
            source: self.session.root().display().to_string(),
            files: files.len(),
        });

        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    let _ = tx.send(event);
                }
            },
            NotifyConfig::default(),
        )?;

        watcher.watch(self.session.root(), RecursiveMode::Recursive)?;

        if !self.options.ignore_initial {
            for file in files {
                self.session.handle(FileEvent::add(file), &on_event);
            }
        }

        self.run_loop(&rx, &running, &on_event);

        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    fn run_loop(&mut self, rx: &Receiver<Event>, running: &AtomicBool, on_event: &impl Fn(WatchEvent)) {
        let mut state = WatcherState::new(self.options.debounce);

        while running.load(Ordering::SeqCst) {
            if let Ok(event) = rx.recv_timeout(Duration::from_millis(POLL_INTERVAL_MS)) {
                for file_event in classify_event(&event, self.session.extension()) {
                    state.add_event(self.reclassify(file_event));
                }
            }

            if state.should_flush() {
                for event in state.take_events() {
                    if !running.load(Ordering::SeqCst) {
                        break;
                    }
                    self.session.handle(event, on_event);
                }
            }
        }
    }

    /// Editors that save by writing a temp file and renaming it over the
    /// original produce a create event for a file we already track; treat
    /// it as a change.
    fn reclassify(&self, event: FileEvent) -> FileEvent {
        if event.kind == FileEventKind::Add && self.session.is_known(&event.path) {
            FileEvent::change(event.path)
        } else {
            event
        }
    }
}

/// Map a raw notify event to source-file events.
///
/// Creations and renames into place become `add`; content modifications
/// become `change`; removals, metadata and access events are dropped.
pub fn classify_event(event: &Event, extension: &str) -> Vec<FileEvent> {
    let kind = match event.kind {
        EventKind::Create(CreateKind::Folder) => return Vec::new(),
        EventKind::Create(_) => FileEventKind::Add,
        EventKind::Modify(ModifyKind::Name(RenameMode::To)) => FileEventKind::Add,
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => {
            // paths = [from, to]
            return event
                .paths
                .last()
                .filter(|p| has_extension(p, extension))
                .map(|p| vec![FileEvent::add(normalize_path(p))])
                .unwrap_or_default();
        }
        EventKind::Modify(ModifyKind::Name(RenameMode::Any)) => {
            return source_paths(&event.paths, extension)
                .filter(|p| p.is_file())
                .map(FileEvent::add)
                .collect();
        }
        EventKind::Modify(ModifyKind::Name(_)) | EventKind::Modify(ModifyKind::Metadata(_)) => {
            return Vec::new()
        }
        EventKind::Modify(_) => FileEventKind::Change,
        _ => return Vec::new(),
    };

    source_paths(&event.paths, extension)
        .map(|path| FileEvent { kind, path })
        .collect()
}

fn source_paths<'a>(paths: &'a [PathBuf], extension: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
    paths
        .iter()
        .filter(move |p| has_extension(p, extension))
        .map(|p| normalize_path(p))
}
