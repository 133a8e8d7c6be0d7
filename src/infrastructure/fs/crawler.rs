//! Source directory crawler
//!
//! Recursively walks the source root and reports every regular file whose
//! name ends in the source extension. Hidden directories and ignore files are
//! not filtered. Symbolic links are not followed, so link cycles cannot
//! recurse forever.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::value_objects::has_extension;
use crate::error::{LesswatchError, LesswatchResult};

/// Walk `root`, calling `on_file_found` with the absolute path of each source
/// file, in file-name order within each directory.
///
/// The first unreadable entry aborts the crawl with `LesswatchError::Crawl`.
pub fn crawl(
    root: &Path,
    extension: &str,
    mut on_file_found: impl FnMut(&Path),
) -> LesswatchResult<()> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = entry.map_err(|e| LesswatchError::Crawl {
            path: error_path(&e)
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            message: e.to_string(),
        })?;

        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if is_file && has_extension(entry.path(), extension) {
            on_file_found(entry.path());
        }
    }

    Ok(())
}

/// Collect every source file under `root`.
pub fn collect_sources(root: &Path, extension: &str) -> LesswatchResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    crawl(root, extension, |path| files.push(path.to_path_buf()))?;
    Ok(files)
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child),
        _ => None,
    }
}
