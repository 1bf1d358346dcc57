//! The workflow status machine.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a story within the workflow.
///
/// The machine is cyclic by design: `ImagesReady` and `Failed` are terminal
/// for a given generation attempt, but both accept re-entry into the
/// generating states via explicit Rewrite/Redraw actions.
///
/// # Examples
///
/// ```
/// use fresco_core::StoryStatus;
///
/// assert!(StoryStatus::ReadyToGenerateNarrative
///     .can_transition(StoryStatus::NarrativeGenerating));
/// assert!(!StoryStatus::Draft.can_transition(StoryStatus::ImagesGenerating));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum StoryStatus {
    /// Freshly created; background premise not yet written
    Draft,
    /// Background present but one or more character slots incomplete
    CharactersIncomplete,
    /// Background and roster complete; narrative generation may start
    ReadyToGenerateNarrative,
    /// Narrative generation request outstanding
    NarrativeGenerating,
    /// Narrative text available; image generation may start
    NarrativeReady,
    /// Image generation request outstanding
    ImagesGenerating,
    /// All scene images available
    ImagesReady,
    /// The most recent generation attempt failed
    Failed,
}

impl StoryStatus {
    /// Whether moving from `self` to `to` is a legal transition.
    pub fn can_transition(self, to: StoryStatus) -> bool {
        use StoryStatus::*;
        match (self, to) {
            // Editing refines the pre-generation statuses in any direction.
            (Draft | CharactersIncomplete | ReadyToGenerateNarrative, Draft) => true,
            (Draft | CharactersIncomplete | ReadyToGenerateNarrative, CharactersIncomplete) => true,
            (Draft | CharactersIncomplete | ReadyToGenerateNarrative, ReadyToGenerateNarrative) => {
                true
            }
            // Write, and Rewrite/Redraw re-entry.
            (ReadyToGenerateNarrative | NarrativeReady | ImagesReady | Failed, NarrativeGenerating) => {
                true
            }
            (NarrativeReady | ImagesReady | Failed, ImagesGenerating) => true,
            // Generation outcomes.
            (NarrativeGenerating, NarrativeReady | Failed) => true,
            (ImagesGenerating, ImagesReady | Failed) => true,
            _ => false,
        }
    }

    /// Whether a generation request of either kind is outstanding.
    pub fn is_generating(self) -> bool {
        matches!(
            self,
            StoryStatus::NarrativeGenerating | StoryStatus::ImagesGenerating
        )
    }

    /// Parse the status string stored by the backend.
    ///
    /// The backend only distinguishes draft, generating, completed, and
    /// failed; the workflow refines the parsed value from story content.
    pub fn from_server(value: &str) -> Self {
        match value {
            "generating" => StoryStatus::NarrativeGenerating,
            "completed" => StoryStatus::NarrativeReady,
            "failed" => StoryStatus::Failed,
            _ => StoryStatus::Draft,
        }
    }
}

impl Default for StoryStatus {
    fn default() -> Self {
        StoryStatus::Draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_requires_ready() {
        assert!(StoryStatus::ReadyToGenerateNarrative
            .can_transition(StoryStatus::NarrativeGenerating));
        assert!(!StoryStatus::Draft.can_transition(StoryStatus::NarrativeGenerating));
        assert!(!StoryStatus::CharactersIncomplete
            .can_transition(StoryStatus::NarrativeGenerating));
    }

    #[test]
    fn test_draw_requires_narrative() {
        assert!(StoryStatus::NarrativeReady.can_transition(StoryStatus::ImagesGenerating));
        assert!(!StoryStatus::Draft.can_transition(StoryStatus::ImagesGenerating));
        assert!(!StoryStatus::ReadyToGenerateNarrative
            .can_transition(StoryStatus::ImagesGenerating));
    }

    #[test]
    fn test_cyclic_reentry() {
        assert!(StoryStatus::ImagesReady.can_transition(StoryStatus::NarrativeGenerating));
        assert!(StoryStatus::ImagesReady.can_transition(StoryStatus::ImagesGenerating));
        assert!(StoryStatus::Failed.can_transition(StoryStatus::NarrativeGenerating));
        assert!(StoryStatus::Failed.can_transition(StoryStatus::ImagesGenerating));
    }

    #[test]
    fn test_generation_outcomes() {
        assert!(StoryStatus::NarrativeGenerating.can_transition(StoryStatus::NarrativeReady));
        assert!(StoryStatus::NarrativeGenerating.can_transition(StoryStatus::Failed));
        assert!(StoryStatus::ImagesGenerating.can_transition(StoryStatus::ImagesReady));
        assert!(!StoryStatus::NarrativeGenerating.can_transition(StoryStatus::ImagesReady));
    }

    #[test]
    fn test_from_server() {
        assert_eq!(
            StoryStatus::from_server("generating"),
            StoryStatus::NarrativeGenerating
        );
        assert_eq!(
            StoryStatus::from_server("completed"),
            StoryStatus::NarrativeReady
        );
        assert_eq!(StoryStatus::from_server("failed"), StoryStatus::Failed);
        assert_eq!(StoryStatus::from_server("draft"), StoryStatus::Draft);
        assert_eq!(StoryStatus::from_server("unknown"), StoryStatus::Draft);
    }
}
