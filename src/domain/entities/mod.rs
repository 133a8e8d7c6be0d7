//! Domain Entities
//!
//! - `SourceFile` - A stylesheet in the watched tree and its resolved imports
//! - `DependencyGraph` - Reverse map from imported file to importing files

mod dependency_graph;
mod source_file;

pub use dependency_graph::DependencyGraph;
pub use source_file::SourceFile;
