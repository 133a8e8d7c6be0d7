//! File System Implementations
//!
//! Concrete implementation of the FileSystem port, plus the crawler used to
//! find source files at startup.

mod crawler;
mod local;

pub use crawler::{collect_sources, crawl};
pub use local::LocalFs;
