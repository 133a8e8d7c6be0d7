//! StylesheetTransformer port - the external stylesheet compiler
//!
//! The compiler is an opaque collaborator: it takes raw source text plus the
//! file it came from (so relative imports can be resolved) and returns the
//! compiled output or an error message.

use std::path::Path;

use thiserror::Error;

/// Rejection from the stylesheet compiler
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransformError {
    pub message: String,
}

impl TransformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Compiles stylesheet source into output text
pub trait StylesheetTransformer {
    /// Short name for diagnostics (e.g. "lessc")
    fn name(&self) -> &str;

    /// Compile `source`, read from `filename`
    fn transform(&self, source: &str, filename: &Path) -> Result<String, TransformError>;
}

impl<T: StylesheetTransformer + ?Sized> StylesheetTransformer for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn transform(&self, source: &str, filename: &Path) -> Result<String, TransformError> {
        (**self).transform(source, filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_error_displays_message() {
        let err = TransformError::new("Unrecognised input. Possibly missing '(' in mixin call.");
        assert_eq!(
            err.to_string(),
            "Unrecognised input. Possibly missing '(' in mixin call."
        );
    }
}
