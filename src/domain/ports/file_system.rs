//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the watch session read sources and write outputs without depending
//! on a concrete implementation, so tests can substitute an in-memory one.

use std::io;
use std::path::Path;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Write content to file, replacing any existing file
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read(&self, path: &Path) -> io::Result<String> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        (**self).write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
