//! Opaque story identifier.

use serde::{Deserialize, Serialize};

/// Opaque identifier for a story, assigned by the backend at creation and
/// immutable thereafter.
///
/// # Examples
///
/// ```
/// use fresco_core::StoryId;
///
/// let id = StoryId::from("abc123");
/// assert_eq!(id.as_str(), "abc123");
/// assert_eq!(format!("{}", id), "abc123");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[from(String, &str)]
pub struct StoryId(String);

impl StoryId {
    /// View the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&String> for StoryId {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}
