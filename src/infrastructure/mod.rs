//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and the source directory crawler
//! - `transformer/` - Stylesheet compilers (external `lessc` process)

pub mod fs;
pub mod transformer;

// Re-export for convenience
pub use fs::{collect_sources, crawl, LocalFs};
pub use transformer::LesscTransformer;
