//! External `lessc` compiler
//!
//! Runs the configured compiler executable once per file, feeding the
//! source text on stdin and collecting CSS from stdout. Argument templates
//! may reference `{dir}` (the source file's directory, so relative imports
//! resolve) and `{file}` (the source file itself).

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::CompilerConfig;
use crate::domain::ports::{StylesheetTransformer, TransformError};

/// Transformer backed by an external compiler process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LesscTransformer {
    command: String,
    args: Vec<String>,
}

impl LesscTransformer {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    pub fn from_config(config: &CompilerConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone())
    }

    /// Check if the compiler executable can be started.
    ///
    /// Only spawning matters: wrappers such as `sh -c` reject `--version`
    /// with a non-zero exit yet compile fine.
    pub fn is_available(&self) -> bool {
        Command::new(&self.command)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    /// Expand `{dir}` and `{file}` in the argument templates
    fn expand_args(&self, filename: &Path) -> Vec<String> {
        let dir = filename
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let file = filename.display().to_string();

        self.args
            .iter()
            .map(|arg| arg.replace("{dir}", &dir).replace("{file}", &file))
            .collect()
    }
}

impl StylesheetTransformer for LesscTransformer {
    fn name(&self) -> &str {
        &self.command
    }

    fn transform(&self, source: &str, filename: &Path) -> Result<String, TransformError> {
        let mut child = Command::new(&self.command)
            .args(self.expand_args(filename))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| TransformError::new(format!("failed to start `{}`: {}", self.command, e)))?;

        // Feed stdin from another thread so a large output cannot fill the
        // stdout pipe while we are still writing.
        let writer = child.stdin.take().map(|mut stdin| {
            let source = source.to_string();
            std::thread::spawn(move || stdin.write_all(source.as_bytes()))
        });

        let output = child
            .wait_with_output()
            .map_err(|e| TransformError::new(format!("`{}` did not finish: {}", self.command, e)))?;

        if let Some(writer) = writer {
            // A compiler that exits early closes stdin; its stderr explains why.
            let _ = writer.join();
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("`{}` exited with {}", self.command, output.status)
            } else {
                stderr
            };
            return Err(TransformError::new(message));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| TransformError::new(format!("`{}` produced invalid UTF-8: {}", self.command, e)))
    }
}
