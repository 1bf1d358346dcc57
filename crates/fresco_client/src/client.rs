//! HTTP client for the story backend.

use crate::{convert, dto, ApiConfig};
use async_trait::async_trait;
use fresco_core::{Author, CharacterSlot, StoryId};
use fresco_error::{
    FrescoResult, GenerationError, GenerationErrorKind, PersistenceError, PersistenceErrorKind,
    UploadError, UploadErrorKind,
};
use fresco_interface::{
    AssetUploader, CharacterRecord, CharacterWrite, DraftParams, DraftUpdate, GenerationGateway,
    NarrativeOutput, PersistenceGateway, SceneSet, StoryListing, StorySnapshot,
};
use tracing::instrument;

/// Client for the story backend's JSON envelope API.
///
/// Implements all three gateway traits; the workflow controller holds it
/// behind the trait objects and never sees the wire shapes.
///
/// # Examples
///
/// ```no_run
/// use fresco_client::{ApiConfig, StoryApiClient};
///
/// let client = StoryApiClient::new(ApiConfig::from_env());
/// ```
#[derive(Debug, Clone)]
pub struct StoryApiClient {
    config: ApiConfig,
    client: reqwest::Client,
}

impl StoryApiClient {
    /// Create a new client for the given configuration.
    #[instrument(skip(config), fields(base_url = %config.base_url))]
    pub fn new(config: ApiConfig) -> Self {
        tracing::debug!("Creating story API client");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(api_key) => request.header("Authorization", format!("Bearer {}", api_key)),
            None => request,
        }
    }
}

#[async_trait]
impl PersistenceGateway for StoryApiClient {
    #[instrument(skip(self, params), fields(title = %params.title))]
    async fn create_draft(&self, params: &DraftParams) -> FrescoResult<StoryId> {
        let url = self.url("/stories/generate");
        tracing::debug!("Creating story draft at {}", url);

        let body = dto::CreateStoryBody {
            title: params.title.clone(),
            nb_scenes: params.scene_count,
            nb_chars: params.character_target,
            story_mode: Some(params.mode.clone()),
            user_email: params.author_email.clone(),
            cover_image_url: params.cover_ref.clone(),
        };

        let response = self
            .authorize(self.client.post(&url).json(&body))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Create draft request failed: {}", e);
                PersistenceError::new(PersistenceErrorKind::Http(format!(
                    "Create draft failed: {}",
                    e
                )))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Create draft returned error: {}", status);
            return Err(PersistenceError::new(PersistenceErrorKind::Api(format!(
                "Server returned: {}",
                status
            )))
            .into());
        }

        let parsed: dto::CreateStoryResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse create response: {}", e);
            PersistenceError::new(PersistenceErrorKind::Deserialization(format!(
                "Failed to parse create response: {}",
                e
            )))
        })?;

        match (parsed.success, parsed.story_id) {
            (true, Some(story_id)) => {
                tracing::debug!("Created story {}", story_id);
                Ok(StoryId::from(story_id))
            }
            _ => Err(PersistenceError::new(PersistenceErrorKind::Api(
                parsed
                    .message
                    .unwrap_or_else(|| "Create draft rejected".to_string()),
            ))
            .into()),
        }
    }

    #[instrument(skip(self), fields(story_id = %id))]
    async fn fetch_story(&self, id: &StoryId) -> FrescoResult<StorySnapshot> {
        let url = self.url(&format!("/stories/{}", id));
        tracing::debug!("Fetching story from {}", url);

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Fetch story request failed: {}", e);
                PersistenceError::new(PersistenceErrorKind::Http(format!(
                    "Fetch story failed: {}",
                    e
                )))
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::warn!("Story {} not found", id);
            return Err(
                PersistenceError::new(PersistenceErrorKind::NotFound(id.to_string())).into(),
            );
        }

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Fetch story returned error: {}", status);
            return Err(PersistenceError::new(PersistenceErrorKind::Api(format!(
                "Server returned: {}",
                status
            )))
            .into());
        }

        let parsed: dto::StoryEnvelope = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse story response: {}", e);
            PersistenceError::new(PersistenceErrorKind::Deserialization(format!(
                "Failed to parse story response: {}",
                e
            )))
        })?;

        match (parsed.success, parsed.story) {
            (true, Some(story)) => convert::snapshot_from_dto(story).map_err(Into::into),
            _ => Err(PersistenceError::new(PersistenceErrorKind::NotFound(
                parsed.message.unwrap_or_else(|| id.to_string()),
            ))
            .into()),
        }
    }

    #[instrument(skip(self, update), fields(story_id = %id))]
    async fn update_draft(&self, id: &StoryId, update: &DraftUpdate) -> FrescoResult<()> {
        let url = self.url(&format!("/stories/{}", id));
        tracing::debug!("Updating story draft at {}", url);

        let body = dto::UpdateStoryBody {
            title: update.title.clone(),
            nb_scenes: update.scene_count,
            nb_chars: update.character_target,
            story_mode: Some(update.mode.clone()),
            user_email: update.author_email.clone(),
            cover_image_url: update.cover_ref.clone(),
            background_story: update.background.clone(),
        };

        let response = self
            .authorize(self.client.put(&url).json(&body))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Update draft request failed: {}", e);
                PersistenceError::new(PersistenceErrorKind::Http(format!(
                    "Update draft failed: {}",
                    e
                )))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Update draft returned error: {}", status);
            return Err(PersistenceError::new(PersistenceErrorKind::Api(format!(
                "Server returned: {}",
                status
            )))
            .into());
        }

        let parsed: dto::AckResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse update response: {}", e);
            PersistenceError::new(PersistenceErrorKind::Deserialization(format!(
                "Failed to parse update response: {}",
                e
            )))
        })?;

        if parsed.success {
            tracing::debug!("Story draft updated");
            Ok(())
        } else {
            Err(PersistenceError::new(PersistenceErrorKind::Api(
                parsed
                    .message
                    .unwrap_or_else(|| "Update rejected".to_string()),
            ))
            .into())
        }
    }

    #[instrument(skip(self, writes), fields(story_id = %id, count = writes.len()))]
    async fn replace_characters(
        &self,
        id: &StoryId,
        writes: &[CharacterWrite],
    ) -> FrescoResult<Vec<CharacterRecord>> {
        let url = self.url(&format!("/stories/{}/characters", id));
        tracing::debug!("Saving {} characters at {}", writes.len(), url);

        let body = dto::ReplaceCharactersBody {
            story_id: id.to_string(),
            characters: writes.iter().map(convert::write_to_dto).collect(),
        };

        let response = self
            .authorize(self.client.put(&url).json(&body))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Character save request failed: {}", e);
                PersistenceError::new(PersistenceErrorKind::Http(format!(
                    "Character save failed: {}",
                    e
                )))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Character save returned error: {}", status);
            return Err(PersistenceError::new(PersistenceErrorKind::Api(format!(
                "Server returned: {}",
                status
            )))
            .into());
        }

        let parsed: dto::ReplaceCharactersResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse character save response: {}", e);
            PersistenceError::new(PersistenceErrorKind::Deserialization(format!(
                "Failed to parse character save response: {}",
                e
            )))
        })?;

        if parsed.success {
            tracing::debug!("Saved {} characters", parsed.characters.len());
            Ok(parsed
                .characters
                .into_iter()
                .map(convert::record_from_dto)
                .collect())
        } else {
            Err(PersistenceError::new(PersistenceErrorKind::Api(
                parsed
                    .message
                    .unwrap_or_else(|| "Character save rejected".to_string()),
            ))
            .into())
        }
    }

    #[instrument(skip(self, author), fields(author = %author.email()))]
    async fn list_stories(&self, author: &Author) -> FrescoResult<Vec<StoryListing>> {
        let url = self.url("/user/stories");
        tracing::debug!("Listing stories from {}", url);

        let response = self
            .authorize(
                self.client
                    .get(&url)
                    .query(&[("user_email", author.email())]),
            )
            .send()
            .await
            .map_err(|e| {
                tracing::error!("List stories request failed: {}", e);
                PersistenceError::new(PersistenceErrorKind::Http(format!(
                    "List stories failed: {}",
                    e
                )))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("List stories returned error: {}", status);
            return Err(PersistenceError::new(PersistenceErrorKind::Api(format!(
                "Server returned: {}",
                status
            )))
            .into());
        }

        let parsed: dto::ListStoriesResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse listing response: {}", e);
            PersistenceError::new(PersistenceErrorKind::Deserialization(format!(
                "Failed to parse listing response: {}",
                e
            )))
        })?;

        if parsed.success {
            tracing::debug!("Listed {} stories", parsed.stories.len());
            Ok(parsed
                .stories
                .into_iter()
                .map(convert::listing_from_dto)
                .collect())
        } else {
            Err(PersistenceError::new(PersistenceErrorKind::Api(
                parsed
                    .message
                    .unwrap_or_else(|| "Listing rejected".to_string()),
            ))
            .into())
        }
    }

    #[instrument(skip(self), fields(story_id = %id))]
    async fn fetch_download_package(&self, id: &StoryId) -> FrescoResult<Vec<u8>> {
        let url = self.url(&format!("/stories/{}/download", id));
        tracing::debug!("Downloading story package from {}", url);

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Download request failed: {}", e);
                PersistenceError::new(PersistenceErrorKind::Http(format!(
                    "Download failed: {}",
                    e
                )))
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(
                PersistenceError::new(PersistenceErrorKind::NotFound(id.to_string())).into(),
            );
        }

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Download returned error: {}", status);
            return Err(PersistenceError::new(PersistenceErrorKind::Api(format!(
                "Server returned: {}",
                status
            )))
            .into());
        }

        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read package bytes: {}", e);
            PersistenceError::new(PersistenceErrorKind::Http(format!(
                "Failed to read package bytes: {}",
                e
            )))
        })?;

        tracing::debug!("Downloaded {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl GenerationGateway for StoryApiClient {
    #[instrument(skip(self, background, characters), fields(story_id = %id))]
    async fn generate_narrative(
        &self,
        id: &StoryId,
        background: &str,
        characters: &[CharacterSlot],
    ) -> FrescoResult<NarrativeOutput> {
        let url = self.url("/stories/generate-story");
        tracing::info!("Requesting narrative generation for story {}", id);

        let body = dto::GenerateStoryBody {
            story_id: id.to_string(),
            background_story: background.to_string(),
            characters: characters.iter().map(convert::slot_to_dto).collect(),
        };

        let response = self
            .authorize(self.client.post(&url).json(&body))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Narrative generation request failed: {}", e);
                GenerationError::new(GenerationErrorKind::Http(format!(
                    "Narrative generation failed: {}",
                    e
                )))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Narrative generation returned error: {}", status);
            return Err(GenerationError::new(GenerationErrorKind::Narrative(format!(
                "Server returned: {}",
                status
            )))
            .into());
        }

        let parsed: dto::GenerateStoryResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse narrative response: {}", e);
            GenerationError::new(GenerationErrorKind::Deserialization(format!(
                "Failed to parse narrative response: {}",
                e
            )))
        })?;

        match (parsed.success, parsed.scenes_paragraph) {
            (true, Some(narrative)) => {
                tracing::info!("Narrative generation completed for story {}", id);
                Ok(NarrativeOutput {
                    narrative,
                    analysis: parsed.analysis.unwrap_or_default(),
                })
            }
            _ => Err(GenerationError::new(GenerationErrorKind::Narrative(
                parsed
                    .message
                    .unwrap_or_else(|| "Narrative generation rejected".to_string()),
            ))
            .into()),
        }
    }

    #[instrument(skip(self), fields(story_id = %id))]
    async fn generate_images(&self, id: &StoryId) -> FrescoResult<SceneSet> {
        let url = self.url("/stories/generate-images");
        tracing::info!("Requesting image generation for story {}", id);

        let body = dto::GenerateImagesBody {
            story_id: id.to_string(),
        };

        let response = self
            .authorize(self.client.post(&url).json(&body))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Image generation request failed: {}", e);
                GenerationError::new(GenerationErrorKind::Http(format!(
                    "Image generation failed: {}",
                    e
                )))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Image generation returned error: {}", status);
            return Err(GenerationError::new(GenerationErrorKind::Images(format!(
                "Server returned: {}",
                status
            )))
            .into());
        }

        let parsed: dto::GenerateImagesResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse image response: {}", e);
            GenerationError::new(GenerationErrorKind::Deserialization(format!(
                "Failed to parse image response: {}",
                e
            )))
        })?;

        if parsed.success {
            tracing::info!(
                "Image generation completed for story {} ({} scenes)",
                id,
                parsed.scenes.len()
            );
            Ok(SceneSet {
                scenes: parsed.scenes.into_iter().map(convert::scene_from_dto).collect(),
            })
        } else {
            Err(GenerationError::new(GenerationErrorKind::Images(
                parsed
                    .message
                    .unwrap_or_else(|| "Image generation rejected".to_string()),
            ))
            .into())
        }
    }
}

#[async_trait]
impl AssetUploader for StoryApiClient {
    #[instrument(skip(self, description, bytes), fields(name = %name, filename = %filename, size = bytes.len()))]
    async fn upload_image(
        &self,
        name: &str,
        description: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> FrescoResult<String> {
        let url = self.url("/characters/upload");
        tracing::debug!("Uploading image to {}", url);

        let file_part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("application/octet-stream")
            .map_err(|e| {
                UploadError::new(UploadErrorKind::Http(format!("Invalid upload part: {}", e)))
            })?;
        let form = reqwest::multipart::Form::new()
            .text("name", name.to_string())
            .text("description", description.to_string())
            .part("file", file_part);

        let response = self
            .authorize(self.client.post(&url).multipart(form))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Upload request failed: {}", e);
                UploadError::new(UploadErrorKind::Http(format!("Upload failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Upload returned error: {}", status);
            return Err(UploadError::new(UploadErrorKind::Rejected(format!(
                "Server returned: {}",
                status
            )))
            .into());
        }

        let parsed: dto::UploadResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse upload response: {}", e);
            UploadError::new(UploadErrorKind::Deserialization(format!(
                "Failed to parse upload response: {}",
                e
            )))
        })?;

        match (parsed.success, parsed.image_url) {
            (true, Some(image_url)) => {
                tracing::debug!("Uploaded image: {}", image_url);
                Ok(image_url)
            }
            _ => Err(UploadError::new(UploadErrorKind::Rejected(
                parsed
                    .message
                    .unwrap_or_else(|| "Upload rejected".to_string()),
            ))
            .into()),
        }
    }
}
