//! Author identity reference.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The authenticated actor on whose behalf stories are created and updated.
///
/// Supplied by an external identity provider; Fresco embeds the reference on
/// create/update calls and does not implement authentication itself.
///
/// # Examples
///
/// ```
/// use fresco_core::Author;
///
/// let author = Author::new("test@example.com", "user-1");
/// assert_eq!(author.email(), "test@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Author {
    /// Email address used as the author reference on backend calls
    email: String,
    /// Identity-provider id
    id: String,
}

impl Author {
    /// Create a new author reference.
    pub fn new(email: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            id: id.into(),
        }
    }
}
