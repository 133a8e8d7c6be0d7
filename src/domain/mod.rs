//! Domain Layer
//!
//! The core of lesswatch - the dependency graph and import scanning, free of
//! I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - `SourceFile` and the reverse `DependencyGraph`
//! - `value_objects/` - Path normalization helpers
//! - `services/` - Import directive scanning
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - File access and compilation go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
