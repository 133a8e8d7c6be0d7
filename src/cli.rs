//! CLI Argument Parsing
//!
//! lesswatch is a single command; `--once` switches from watch mode to a
//! one-shot compile of the whole tree.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// lesswatch - recompile LESS stylesheets and their dependents on change
#[derive(Parser, Debug)]
#[command(name = "lesswatch")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Press Ctrl+C to stop watching.")]
pub struct Cli {
    /// Directory containing the .less sources
    #[arg(short, long, default_value = "./")]
    pub src: PathBuf,

    /// Compile every source file once, then exit
    #[arg(short, long)]
    pub once: bool,

    /// Output events as NDJSON
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v shows dependency parsing, -vv every compile start)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["lesswatch"]).unwrap();
        assert_eq!(cli.src, PathBuf::from("./"));
        assert!(!cli.once);
        assert!(!cli.json);
        assert_eq!(cli.color, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::try_parse_from(["lesswatch", "-s", "styles", "-o"]).unwrap();
        assert_eq!(cli.src, PathBuf::from("styles"));
        assert!(cli.once);
    }

    #[test]
    fn test_cli_long_flags() {
        let cli = Cli::try_parse_from(["lesswatch", "--src", "assets/less", "--once", "--json"])
            .unwrap();
        assert_eq!(cli.src, PathBuf::from("assets/less"));
        assert!(cli.once);
        assert!(cli.json);
    }

    #[test]
    fn test_cli_color_flag() {
        let cli = Cli::try_parse_from(["lesswatch", "--color", "never"]).unwrap();
        assert!(matches!(cli.color, Some(ColorWhen::Never)));
    }

    #[test]
    fn test_cli_verbose_count() {
        let cli = Cli::try_parse_from(["lesswatch", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_rejects_unknown_color() {
        assert!(Cli::try_parse_from(["lesswatch", "--color", "sometimes"]).is_err());
    }
}
