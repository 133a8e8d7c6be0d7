//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod stylesheet_transformer;

pub use file_system::FileSystem;
pub use stylesheet_transformer::{StylesheetTransformer, TransformError};
