//! Value Objects
//!
//! Immutable helper types shared across layers.

mod path;

pub use path::{display_relative, has_extension, normalize_path};
