//! The story aggregate.

use crate::{Scene, StoryId, StoryStatus};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use derive_getters::Getters;
use fresco_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// The in-memory representation of one story plus its derived display state.
///
/// A story is created as a draft by an explicit user action, mutated only by
/// the workflow controller in response to user actions and generation
/// responses, and discarded when the user navigates away. Timestamps are
/// server-authoritative.
///
/// # Examples
///
/// ```
/// use fresco_core::{Story, StoryId};
///
/// let story = Story::builder()
///     .id(StoryId::from("abc123"))
///     .title("The Enchanted Quest")
///     .scene_count(4u32)
///     .character_target(2u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(story.max_character_target(), 8);
/// assert!(!story.has_narrative());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
pub struct Story {
    /// Backend-assigned identifier, immutable after creation
    id: StoryId,
    /// Story title
    #[builder(default)]
    title: String,
    /// Genre or custom mode string
    #[builder(default)]
    mode: String,
    /// Number of scenes to render; drives the expected image-set size
    scene_count: u32,
    /// Number of character slots the roster is sized to
    character_target: u32,
    /// Background premise text
    #[builder(default)]
    background: String,
    /// Generated narrative text; empty until the narrative stage completes
    #[builder(default)]
    narrative: String,
    /// Auxiliary generation output, opaque to the workflow
    #[builder(default)]
    analysis: String,
    /// Optional cover image URL from the upload collaborator
    #[builder(default)]
    cover_ref: Option<String>,
    /// Generated scenes, populated only after image generation
    #[builder(default)]
    scenes: Vec<Scene>,
    /// Workflow status
    #[builder(default)]
    status: StoryStatus,
    /// Creation time, server-authoritative
    #[builder(default)]
    created_at: Option<DateTime<Utc>>,
    /// Last update time, server-authoritative
    #[builder(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl Story {
    /// Start building a story.
    pub fn builder() -> StoryBuilder {
        StoryBuilder::default()
    }

    /// Maximum allowed character count, twice the scene count.
    pub fn max_character_target(&self) -> u32 {
        self.scene_count.saturating_mul(2)
    }

    /// Whether narrative generation has produced text.
    pub fn has_narrative(&self) -> bool {
        !self.narrative.trim().is_empty()
    }

    /// Whether the background premise has content.
    pub fn has_background(&self) -> bool {
        !self.background.trim().is_empty()
    }

    /// Set the story title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Set the story mode.
    pub fn set_mode(&mut self, mode: impl Into<String>) {
        self.mode = mode.into();
    }

    /// Set the background premise text.
    pub fn set_background(&mut self, background: impl Into<String>) {
        self.background = background.into();
    }

    /// Set the cover image reference.
    pub fn set_cover_ref(&mut self, cover_ref: Option<String>) {
        self.cover_ref = cover_ref;
    }

    /// Store a completed narrative and its analysis output.
    pub fn set_narrative(&mut self, narrative: impl Into<String>, analysis: impl Into<String>) {
        self.narrative = narrative.into();
        self.analysis = analysis.into();
    }

    /// Replace the scene set.
    pub fn set_scenes(&mut self, scenes: Vec<Scene>) {
        self.scenes = scenes;
    }

    /// Set the workflow status.
    pub fn set_status(&mut self, status: StoryStatus) {
        self.status = status;
    }

    /// Change the scene count.
    ///
    /// Only legal while no narrative has been generated; the image-set size
    /// is fixed once text exists for it. Lowering the scene count clamps the
    /// character target to the new maximum.
    pub fn set_scene_count(&mut self, scene_count: u32) -> Result<(), ValidationError> {
        if self.has_narrative() {
            return Err(ValidationError::new(ValidationErrorKind::SceneCountLocked));
        }
        self.scene_count = scene_count.max(1);
        self.character_target = self.character_target.min(self.max_character_target());
        Ok(())
    }

    /// Change the character target, bounded by `1..=2 × scene_count`.
    pub fn set_character_target(&mut self, target: u32) -> Result<(), ValidationError> {
        let max = self.max_character_target();
        if target < 1 || target > max {
            return Err(ValidationError::new(ValidationErrorKind::TargetOutOfBounds {
                requested: target,
                max,
            }));
        }
        self.character_target = target;
        Ok(())
    }
}
