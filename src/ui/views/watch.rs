use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use lesswatch::application::WatchEvent;

pub const GOODBYE: &str = "Stopping LESS watcher. Bye!";

pub fn render_watch_header(
    source: &str,
    compiler: &str,
    once: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (icon, mode) = if once {
        (Icon::Compile, "Compiling once")
    } else {
        (Icon::Watch, "Watching")
    };

    let mut header = CommandHeader::new(icon, "lesswatch");
    header.add("Source", source);
    header.add("Compiler", compiler);
    header.add("Mode", mode);
    if !once {
        header.add("Hint", "Press Ctrl+C to stop");
    }
    header.render(supports_color, supports_unicode)
}

/// Whether `event` is shown at the given verbosity in human mode
pub fn is_visible(event: &WatchEvent, verbose: u8) -> bool {
    match event {
        WatchEvent::FileAdded { .. } | WatchEvent::DependenciesParsed { .. } => verbose >= 1,
        WatchEvent::CompileStarted { .. } => verbose >= 2,
        // a lone success is already covered by the compiled line
        WatchEvent::CascadeComplete {
            compiled, failed, ..
        } => *failed > 0 || *compiled > 1,
        _ => true,
    }
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = ColoredText::dim(format!("[{}]", timestamp)).render(supports_color);
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    match event {
        WatchEvent::WatchStarted { source, files } => format!(
            "{} {} Watching {} ({} files)\n",
            prefix,
            icon(Icon::Watch),
            source,
            files
        ),
        WatchEvent::CompileAllStarted { files, .. } => format!(
            "{} {} Found {} files to compile\n",
            prefix,
            icon(Icon::Compile),
            files
        ),
        WatchEvent::FileAdded { path } => {
            format!("{} {} Added: {}\n", prefix, icon(Icon::Added), path)
        }
        WatchEvent::FileChanged { path } => {
            format!("{} {} Changed: {}\n", prefix, icon(Icon::Arrow), path)
        }
        WatchEvent::DependenciesParsed { path, imports } => format!(
            "{} {} Parsed {} ({} imports)\n",
            prefix,
            icon(Icon::Arrow),
            path,
            imports
        ),
        WatchEvent::IgnoredDirectory { path, dir } => format!(
            "{} {} Ignoring new files under {} ({})\n",
            prefix,
            icon(Icon::Warning),
            ColoredText::warning(format!("{dir}/")).render(supports_color),
            path
        ),
        WatchEvent::CompileStarted { path } => {
            format!("{} {} Compiling {}\n", prefix, icon(Icon::Progress), path)
        }
        WatchEvent::Compiled { path, output } => format!(
            "{} {} {} {} {}\n",
            prefix,
            icon(Icon::Success),
            path,
            ColoredText::dim("->").render(supports_color),
            ColoredText::success(output.as_str()).render(supports_color)
        ),
        WatchEvent::CompileFailed { path, message } => format!(
            "{} {} {}: {}\n",
            prefix,
            icon(Icon::Error),
            ColoredText::error(path.as_str()).bold().render(supports_color),
            message
        ),
        WatchEvent::CascadeComplete {
            trigger,
            compiled,
            failed,
        } => {
            if *failed > 0 {
                format!(
                    "{} {} {}: {} compiled, {} failed\n",
                    prefix,
                    icon(Icon::Warning),
                    trigger,
                    compiled,
                    failed
                )
            } else {
                format!(
                    "{} {} {}: {} compiled\n",
                    prefix,
                    icon(Icon::Success),
                    trigger,
                    compiled
                )
            }
        }
        WatchEvent::CompileAllComplete { compiled, failed } => {
            if *failed > 0 {
                format!(
                    "{} {} Done: {} compiled, {} failed\n",
                    prefix,
                    icon(Icon::Warning),
                    compiled,
                    failed
                )
            } else {
                format!("{} {} Done: {} compiled\n", prefix, icon(Icon::Success), compiled)
            }
        }
        WatchEvent::Error { message } => {
            format!("{} {} Error: {}\n", prefix, icon(Icon::Error), message)
        }
        WatchEvent::Shutdown => format!("\n{} {} {}\n", prefix, icon(Icon::Watch), GOODBYE),
    }
}
