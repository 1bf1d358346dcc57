//! Generation error types.
//!
//! Failures of the long-running AI operations. These transition the workflow
//! to `Failed` and are recoverable only by the user re-issuing a
//! Rewrite/Redraw action; nothing is retried automatically.

/// Error kinds for narrative and image generation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Narrative generation failed: {0}
    #[display("Narrative generation failed: {}", _0)]
    Narrative(String),

    /// Image generation failed: {0}
    #[display("Image generation failed: {}", _0)]
    Images(String),

    /// HTTP request failed: {0}
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// Failed to deserialize response: {0}
    #[display("Failed to deserialize response: {}", _0)]
    Deserialization(String),
}

/// Error wrapper for generation failures with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The error kind
    pub kind: GenerationErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
