//! Wire DTOs matching the backend's JSON surface.
//!
//! Field names here are the backend's, not the domain's; conversion to and
//! from `fresco_core` types happens in `convert`.

use serde::{Deserialize, Serialize};

/// Story payload as returned by `GET /stories/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryDto {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub nb_scenes: u32,
    #[serde(default)]
    pub nb_chars: u32,
    #[serde(default)]
    pub story_mode: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub background_story: Option<String>,
    #[serde(default)]
    pub future_story: Option<String>,
    #[serde(default)]
    pub analysis: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub characters: Vec<CharacterRecordDto>,
    #[serde(default)]
    pub scenes: Vec<SceneDto>,
}

/// Character record as the backend returns it.
///
/// The fetch endpoint historically keys the image URL as `image_path` while
/// the character-save response uses `image_url`; both are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterRecordDto {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "image_path", alias = "image_url")]
    pub image_url: Option<String>,
}

/// Scene entry returned by fetch and image generation.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneDto {
    #[serde(default)]
    pub scene_number: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image_url: String,
}

/// Envelope for `GET /stories/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryEnvelope {
    pub success: bool,
    #[serde(default)]
    pub story: Option<StoryDto>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body for `POST /stories/generate` (draft creation).
#[derive(Debug, Clone, Serialize)]
pub struct CreateStoryBody {
    pub title: String,
    pub nb_scenes: u32,
    pub nb_chars: u32,
    pub story_mode: Option<String>,
    pub user_email: String,
    pub cover_image_url: Option<String>,
}

/// Response for draft creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStoryResponse {
    pub success: bool,
    #[serde(default)]
    pub story_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body for `PUT /stories/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStoryBody {
    pub title: String,
    pub nb_scenes: u32,
    pub nb_chars: u32,
    pub story_mode: Option<String>,
    pub user_email: String,
    pub cover_image_url: Option<String>,
    pub background_story: String,
}

/// Generic success envelope for write endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// One character in the batched save body.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterWriteDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
}

/// Body for `PUT /stories/{id}/characters`.
#[derive(Debug, Clone, Serialize)]
pub struct ReplaceCharactersBody {
    pub story_id: String,
    pub characters: Vec<CharacterWriteDto>,
}

/// Response for the batched character save.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceCharactersResponse {
    pub success: bool,
    #[serde(default)]
    pub characters: Vec<CharacterRecordDto>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body for `POST /stories/generate-story`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateStoryBody {
    pub story_id: String,
    pub background_story: String,
    pub characters: Vec<CharacterWriteDto>,
}

/// Response for narrative generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateStoryResponse {
    pub success: bool,
    #[serde(default)]
    pub scenes_paragraph: Option<String>,
    #[serde(default)]
    pub analysis: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body for `POST /stories/generate-images`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateImagesBody {
    pub story_id: String,
}

/// Response for image generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateImagesResponse {
    pub success: bool,
    #[serde(default)]
    pub total_scenes: Option<u32>,
    #[serde(default)]
    pub scenes: Vec<SceneDto>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response for the history listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListStoriesResponse {
    pub success: bool,
    #[serde(default)]
    pub stories: Vec<StoryDto>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response for the multipart image upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, alias = "error")]
    pub message: Option<String>,
}
