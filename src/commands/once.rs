use std::path::Path;

use anyhow::Result;
use lesswatch::application::compile_all;

use crate::cli::ColorWhen;

/// Compile every source once. Per-file failures are reported but do not
/// change the exit status.
pub fn cmd_once(source: &Path, json: bool, color: Option<ColorWhen>, verbose: u8) -> Result<()> {
    let mut prepared = super::prepare(source, json, color, verbose, true)?;
    let ui = prepared.ui;

    compile_all(&mut prepared.session, |event| super::emit(&ui, &event))?;

    Ok(())
}
