//! Configuration error types.

/// Error kinds for loading the backend connection configuration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Could not read the configuration file: {0}
    #[display("Could not read the configuration file: {}", _0)]
    Read(String),

    /// Configuration file is not valid TOML: {0}
    #[display("Configuration file is not valid TOML: {}", _0)]
    Parse(String),
}

/// Error wrapper for configuration failures with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The error kind
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use fresco_error::{ConfigError, ConfigErrorKind};
    ///
    /// let err = ConfigError::new(ConfigErrorKind::Parse(
    ///     "missing field `base_url`".to_string(),
    /// ));
    /// assert!(format!("{}", err).contains("base_url"));
    /// ```
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
