//! Path helpers
//!
//! Source files are identified by absolute paths. Import targets may not
//! exist on disk, so normalization is purely lexical and never touches the
//! file system.

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` segments and fold `..` into the
/// preceding segment.
///
/// `..` at the root is discarded (`/..` is `/`); leading `..` on a relative
/// path is preserved.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Whether the file name of `path` ends in `.{extension}`.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .map(|name| {
            let name = name.to_string_lossy();
            name.len() > extension.len()
                && name.ends_with(extension)
                && name[..name.len() - extension.len()].ends_with('.')
        })
        .unwrap_or(false)
}

/// Render `path` relative to `root` for console output, falling back to the
/// full path when it lies outside the root.
pub fn display_relative(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}
