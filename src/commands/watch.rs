use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::Result;
use lesswatch::application::{WatchOptions, WatchUseCase};

use crate::cli::ColorWhen;

/// Watch until interrupted. Ctrl+C is handled in `prepare`, which exits the
/// process, so the loop's own flag is never cleared here.
pub fn cmd_watch(source: &Path, json: bool, color: Option<ColorWhen>, verbose: u8) -> Result<()> {
    let prepared = super::prepare(source, json, color, verbose, false)?;
    let ui = prepared.ui;

    let options = WatchOptions::from_config(&prepared.config.watch);
    let running = Arc::new(AtomicBool::new(true));

    let mut use_case = WatchUseCase::new(options, prepared.session);
    use_case.start(running, |event| super::emit(&ui, &event))?;

    Ok(())
}
