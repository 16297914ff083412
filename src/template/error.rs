//! Resolution error types

use thiserror::Error;

/// Errors that can occur while resolving a template
///
/// All of these recover locally: resolution aborts, the user sees the
/// message, and no URI is opened.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("{token} requires {needs}")]
    MissingContext { token: String, needs: &'static str },

    #[error("{token} only works on markdown files")]
    UnsupportedFileType { token: String },

    #[error("metadata fields require the metadata plugin")]
    MissingCapability,

    #[error("metadata field '{field}' is not set on the active file")]
    MissingField { field: String },

    #[error("failed to read file text: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_context_message() {
        let err = ResolveError::MissingContext {
            token: "{{selection}}".to_string(),
            needs: "an active editor",
        };
        assert_eq!(err.to_string(), "{{selection}} requires an active editor");
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let err = ResolveError::MissingField {
            field: "author".to_string(),
        };
        assert!(err.to_string().contains("author"));
    }
}
