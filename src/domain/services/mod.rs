//! Domain Services
//!
//! Pure business logic with no I/O dependencies.

mod import_scanner;

pub use import_scanner::{resolve_import, scan_imports};
