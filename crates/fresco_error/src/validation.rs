//! Validation error types.
//!
//! Validation errors are precondition failures raised before any network
//! call. They are always recoverable by the user correcting input, and are
//! never logged as system faults.

/// Specific precondition failures for workflow operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// No story is loaded in the workflow
    #[display("No story is loaded")]
    NoStoryLoaded,
    /// Background premise text is empty
    #[display("Write a background story before generating the narrative")]
    EmptyBackground,
    /// One or more character slots are missing name, description, or image
    #[display(
        "Provide complete information (name, description, and image) for all {required} characters; {missing} still incomplete"
    )]
    IncompleteCharacters {
        /// Number of characters the story requires
        required: u32,
        /// Number of slots still missing a field
        missing: u32,
    },
    /// Image generation requested before narrative generation has completed
    #[display("Generate the narrative before drawing scene images")]
    NarrativeNotReady,
    /// Requested character count is outside the allowed bounds
    #[display("Character count {requested} is out of bounds (1 to {max})")]
    TargetOutOfBounds {
        /// The requested character count
        requested: u32,
        /// Maximum allowed, twice the scene count
        max: u32,
    },
    /// Edit addressed to a character slot that does not exist
    #[display("Character slot {index} is out of range ({count} slots)")]
    SlotOutOfRange {
        /// The requested slot index
        index: usize,
        /// Number of slots in the roster
        count: usize,
    },
    /// Scene count cannot change once a narrative has been generated
    #[display("Scene count is locked once a narrative has been generated")]
    SceneCountLocked,
    /// Story title is required
    #[display("Enter a story title")]
    EmptyTitle,
}

/// Error type for precondition failures.
///
/// # Examples
///
/// ```
/// use fresco_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::EmptyBackground);
/// assert!(format!("{}", err).contains("background"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific precondition that failed
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
