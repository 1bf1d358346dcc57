//! Error types for the Fresco story workflow library.
//!
//! This crate provides the foundation error types used throughout the Fresco
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fresco_error::{FrescoResult, PersistenceError, PersistenceErrorKind};
//!
//! fn fetch_story() -> FrescoResult<String> {
//!     Err(PersistenceError::new(PersistenceErrorKind::Http(
//!         "Connection refused".to_string(),
//!     )))?
//! }
//!
//! match fetch_story() {
//!     Ok(story) => println!("Got: {}", story),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod persistence;
mod upload;
mod validation;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{FrescoError, FrescoErrorKind, FrescoResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use persistence::{PersistenceError, PersistenceErrorKind};
pub use upload::{UploadError, UploadErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
