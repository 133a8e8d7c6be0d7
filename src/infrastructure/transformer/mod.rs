//! Stylesheet Transformers
//!
//! Implementations of the `StylesheetTransformer` port.

mod lessc;

pub use lessc::LesscTransformer;
