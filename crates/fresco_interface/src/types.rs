//! Exchange types spoken across the gateway traits.

use chrono::{DateTime, Utc};
use fresco_core::{Scene, Story, StoryId, StoryStatus};
use serde::{Deserialize, Serialize};

/// Parameters for creating a new story draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftParams {
    /// Story title
    pub title: String,
    /// Number of scenes to render
    pub scene_count: u32,
    /// Number of character slots
    pub character_target: u32,
    /// Genre or custom mode string
    pub mode: String,
    /// Author reference embedded on the create call
    pub author_email: String,
    /// Optional cover image URL
    pub cover_ref: Option<String>,
}

/// Partial update of a story draft.
///
/// The backend's update endpoint takes the full field set on every call, so
/// the workflow assembles this from the current aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftUpdate {
    /// Story title
    pub title: String,
    /// Number of scenes to render
    pub scene_count: u32,
    /// Number of character slots
    pub character_target: u32,
    /// Genre or custom mode string
    pub mode: String,
    /// Author reference embedded on the update call
    pub author_email: String,
    /// Optional cover image URL
    pub cover_ref: Option<String>,
    /// Background premise text
    pub background: String,
}

/// A character record as the backend knows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// Backend-assigned identifier
    pub id: String,
    /// Character name
    pub name: String,
    /// Character description
    pub description: String,
    /// Reference image URL
    pub image_ref: Option<String>,
}

/// One entry in the batched character save.
///
/// A write with an `id` is an update; without one it is a create. The save
/// response returns the full record set so freshly created slots acquire
/// their identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterWrite {
    /// Backend identifier when updating an existing record
    pub id: Option<String>,
    /// Character name
    pub name: String,
    /// Character description
    pub description: String,
    /// Reference image URL
    pub image_ref: Option<String>,
}

/// A story snapshot as returned by the fetch endpoint: the aggregate fields
/// plus the backend's character records.
#[derive(Debug, Clone, PartialEq)]
pub struct StorySnapshot {
    /// The story aggregate, scenes included
    pub story: Story,
    /// Character records in backend order
    pub characters: Vec<CharacterRecord>,
}

/// Summary row for the history listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryListing {
    /// Story identifier
    pub id: StoryId,
    /// Story title
    pub title: String,
    /// Genre or custom mode string
    pub mode: String,
    /// Number of scenes
    pub scene_count: u32,
    /// Number of character slots
    pub character_target: u32,
    /// Workflow status as parsed from the backend
    pub status: StoryStatus,
    /// Creation time
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    pub updated_at: Option<DateTime<Utc>>,
}

/// Output of a completed narrative generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeOutput {
    /// The generated narrative text
    pub narrative: String,
    /// Auxiliary analysis output, opaque to the workflow
    pub analysis: String,
}

/// Output of a completed image generation: one scene per rendered image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneSet {
    /// Rendered scenes in backend order
    pub scenes: Vec<Scene>,
}
