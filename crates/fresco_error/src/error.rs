//! Top-level error wrapper types.

use crate::{ConfigError, GenerationError, PersistenceError, UploadError, ValidationError};

/// The foundation error enum for the Fresco workspace.
///
/// # Examples
///
/// ```
/// use fresco_error::{FrescoError, ValidationError, ValidationErrorKind};
///
/// let validation = ValidationError::new(ValidationErrorKind::EmptyBackground);
/// let err: FrescoError = validation.into();
/// assert!(format!("{}", err).contains("Validation Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FrescoErrorKind {
    /// Precondition not met; raised before any network call
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Story or character CRUD failure
    #[from(PersistenceError)]
    Persistence(PersistenceError),
    /// Narrative or image generation failure
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Image upload collaborator failure
    #[from(UploadError)]
    Upload(UploadError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Fresco error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fresco_error::{FrescoResult, ConfigError, ConfigErrorKind};
///
/// fn might_fail() -> FrescoResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::Parse(
///         "missing field `base_url`".to_string(),
///     )))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fresco Error: {}", _0)]
pub struct FrescoError(Box<FrescoErrorKind>);

impl FrescoError {
    /// Create a new error from a kind.
    pub fn new(kind: FrescoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FrescoErrorKind {
        &self.0
    }

    /// True when the error is a precondition failure the user can correct.
    pub fn is_validation(&self) -> bool {
        matches!(*self.0, FrescoErrorKind::Validation(_))
    }
}

// Generic From implementation for any type that converts to FrescoErrorKind
impl<T> From<T> for FrescoError
where
    T: Into<FrescoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fresco operations.
///
/// # Examples
///
/// ```
/// use fresco_error::{FrescoResult, PersistenceError, PersistenceErrorKind};
///
/// fn fetch_story() -> FrescoResult<String> {
///     Err(PersistenceError::new(PersistenceErrorKind::NotFound(
///         "abc123".to_string(),
///     )))?
/// }
/// ```
pub type FrescoResult<T> = std::result::Result<T, FrescoError>;
