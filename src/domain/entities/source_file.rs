//! SourceFile entity - a stylesheet in the watched tree
//!
//! Content is never cached here: it is read on demand each time the file is
//! parsed or compiled.

use std::path::{Path, PathBuf};

/// A source stylesheet and the import targets found in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Absolute path of the stylesheet
    path: PathBuf,
    /// Resolved absolute import targets, in directive order
    imports: Vec<PathBuf>,
}

impl SourceFile {
    /// Create a SourceFile with no known imports
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            imports: Vec::new(),
        }
    }

    /// Attach the resolved import targets
    pub fn with_imports(mut self, imports: Vec<PathBuf>) -> Self {
        self.imports = imports;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn imports(&self) -> &[PathBuf] {
        &self.imports
    }

    /// Sibling path where the compiled output is written: same base name,
    /// extension replaced by `output_extension`.
    pub fn output_path(&self, output_extension: &str) -> PathBuf {
        output_path_for(&self.path, output_extension)
    }
}

/// Sibling output path for `source` with its extension replaced.
pub(crate) fn output_path_for(source: &Path, output_extension: &str) -> PathBuf {
    source.with_extension(output_extension)
}
