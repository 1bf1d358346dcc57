//! Character slots and their persistence identity.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Persistence identity of a character slot.
///
/// A slot created locally has no backend identifier until the roster has
/// been saved; once the backend assigns one, edits to the slot become
/// updates instead of creates. Modeling this as an enum makes the
/// create-vs-update dispatch in the batched save exhaustive.
///
/// # Examples
///
/// ```
/// use fresco_core::SlotId;
///
/// let local = SlotId::Unpersisted;
/// assert!(local.as_persisted().is_none());
///
/// let saved = SlotId::Persisted("char-7".to_string());
/// assert_eq!(saved.as_persisted(), Some("char-7"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SlotId {
    /// Created locally, not yet known to the backend
    #[default]
    Unpersisted,
    /// Assigned by the backend on a previous save
    Persisted(String),
}

impl SlotId {
    /// The backend identifier, when one has been assigned.
    pub fn as_persisted(&self) -> Option<&str> {
        match self {
            SlotId::Unpersisted => None,
            SlotId::Persisted(id) => Some(id.as_str()),
        }
    }
}

/// One character in the story's roster.
///
/// # Examples
///
/// ```
/// use fresco_core::CharacterSlot;
///
/// let mut slot = CharacterSlot::default();
/// assert!(!slot.is_complete());
///
/// slot.set_name("Aria");
/// slot.set_description("A young adventurer");
/// slot.set_image_ref(Some("/assets/aria.png".to_string()));
/// assert!(slot.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
pub struct CharacterSlot {
    /// Persistence identity
    id: SlotId,
    /// Character name
    name: String,
    /// Appearance, personality, and background description
    description: String,
    /// Uploaded reference image URL
    image_ref: Option<String>,
}

impl CharacterSlot {
    /// Create a slot from backend record fields.
    pub fn persisted(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        image_ref: Option<String>,
    ) -> Self {
        Self {
            id: SlotId::Persisted(id.into()),
            name: name.into(),
            description: description.into(),
            image_ref,
        }
    }

    /// Set the character name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the character description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Set or clear the reference image URL.
    pub fn set_image_ref(&mut self, image_ref: Option<String>) {
        self.image_ref = image_ref;
    }

    /// Record the backend identifier assigned on save.
    pub fn assign_id(&mut self, id: impl Into<String>) {
        self.id = SlotId::Persisted(id.into());
    }

    /// Whether name, description, and image are all present.
    ///
    /// Narrative generation requires every slot in the roster to be complete.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.description.trim().is_empty()
            && self
                .image_ref
                .as_deref()
                .is_some_and(|url| !url.trim().is_empty())
    }

    /// Whether the slot carries no user input at all.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.description.trim().is_empty()
            && self.image_ref.is_none()
    }
}
