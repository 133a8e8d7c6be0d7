//! Command implementations for the lesswatch binary

pub mod once;
pub mod watch;

use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use lesswatch::application::{WatchEvent, WatchSession};
use lesswatch::config::Config;
use lesswatch::infrastructure::LesscTransformer;

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

/// Everything a command needs before it starts emitting events
pub(crate) struct Prepared {
    pub config: Config,
    pub ui: UiContext,
    pub session: WatchSession<LesscTransformer>,
}

/// Load config, resolve output settings and open a session on `source`.
pub(crate) fn prepare(
    source: &Path,
    json: bool,
    color: Option<ColorWhen>,
    verbose: u8,
    once: bool,
) -> Result<Prepared> {
    let (config, warnings) = Config::load_or_default(source)?;
    let ui = UiContext::new(json, verbose, color, &config);
    install_interrupt_handler(ui)?;

    if !warnings.is_empty() {
        eprint!(
            "{}",
            crate::ui::output::render_config_warnings(&warnings, ui.unicode)
        );
    }

    let transformer = LesscTransformer::from_config(&config.compiler);
    let session = WatchSession::open(source, &config, transformer)?;

    if !json {
        print!(
            "{}",
            crate::ui::views::watch::render_watch_header(
                &source.display().to_string(),
                &config.compiler.command,
                once,
                ui.color,
                ui.unicode,
            )
        );

        if !session.transformer().is_available() {
            eprintln!(
                "{} Compiler `{}` could not be started; files will fail to compile until it is installed",
                Icon::Warning.colored(ui.color, ui.unicode),
                config.compiler.command
            );
        }
    }

    Ok(Prepared {
        config,
        ui,
        session,
    })
}

/// Ctrl+C prints the goodbye and exits at once, in both modes.
///
/// In-flight compilations are not awaited and queued events are dropped.
fn install_interrupt_handler(ui: UiContext) -> Result<()> {
    ctrlc::set_handler(move || {
        emit(&ui, &WatchEvent::Shutdown);
        let _ = std::io::stdout().flush();
        std::process::exit(0);
    })
    .context("failed to install the Ctrl+C handler")
}

/// Print one event the way the UI context asks for
pub(crate) fn emit(ui: &UiContext, event: &WatchEvent) {
    if ui.json {
        println!("{}", event.to_json());
        return;
    }

    if !crate::ui::views::watch::is_visible(event, ui.verbose) {
        return;
    }

    let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
    let rendered =
        crate::ui::views::watch::render_watch_event(&timestamp, event, ui.color, ui.unicode);

    if event.is_error() {
        eprint!("{rendered}");
    } else {
        print!("{rendered}");
    }
}
