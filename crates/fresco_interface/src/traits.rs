//! Trait definitions for the external collaborators.

use crate::{
    CharacterRecord, CharacterWrite, DraftParams, DraftUpdate, NarrativeOutput, SceneSet,
    StoryListing, StorySnapshot,
};
use async_trait::async_trait;
use fresco_core::{Author, CharacterSlot, StoryId};
use fresco_error::FrescoResult;

/// Client for the backend's story and character CRUD endpoints.
///
/// The workflow controller is the only caller; it relies on each method
/// being an independent request with no client-side caching, so that the
/// happens-before ordering inside a generation attempt (persist draft, sync
/// roster, then generate) is the ordering the backend observes.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Create a new story draft, returning its backend-assigned id.
    async fn create_draft(&self, params: &DraftParams) -> FrescoResult<StoryId>;

    /// Fetch a story snapshot with its character records.
    async fn fetch_story(&self, id: &StoryId) -> FrescoResult<StorySnapshot>;

    /// Update the draft fields of a story.
    async fn update_draft(&self, id: &StoryId, update: &DraftUpdate) -> FrescoResult<()>;

    /// Save the character roster in one batched create-or-update call.
    ///
    /// Returns the backend's record set after the save, including ids for
    /// freshly created characters.
    async fn replace_characters(
        &self,
        id: &StoryId,
        writes: &[CharacterWrite],
    ) -> FrescoResult<Vec<CharacterRecord>>;

    /// List the author's stories for the history view.
    async fn list_stories(&self, author: &Author) -> FrescoResult<Vec<StoryListing>>;

    /// Fetch the downloadable story package as opaque bytes.
    async fn fetch_download_package(&self, id: &StoryId) -> FrescoResult<Vec<u8>>;
}

/// Client wrapping the two long-running AI operations.
///
/// Both calls are long-running; callers must not assume synchronous
/// completion time bounds, and no partial or streaming results are modeled.
#[async_trait]
pub trait GenerationGateway: Send + Sync {
    /// Generate the narrative from the background premise and roster.
    async fn generate_narrative(
        &self,
        id: &StoryId,
        background: &str,
        characters: &[CharacterSlot],
    ) -> FrescoResult<NarrativeOutput>;

    /// Generate the per-scene image set.
    ///
    /// The backend requires the narrative to already be persisted
    /// server-side; the workflow mirrors that precondition client-side.
    async fn generate_images(&self, id: &StoryId) -> FrescoResult<SceneSet>;
}

/// Upload collaborator for character and cover images.
///
/// The returned URL is opaque to the workflow.
#[async_trait]
pub trait AssetUploader: Send + Sync {
    /// Upload image bytes, returning the asset URL.
    async fn upload_image(
        &self,
        name: &str,
        description: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> FrescoResult<String>;
}
