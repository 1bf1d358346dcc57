//! Conversions between wire DTOs and domain types.

use crate::dto;
use chrono::{DateTime, Utc};
use fresco_core::{Scene, Story, StoryId, StoryStatus, split_cover_marker};
use fresco_error::{PersistenceError, PersistenceErrorKind};
use fresco_interface::{CharacterRecord, CharacterWrite, StoryListing, StorySnapshot};

/// Lenient timestamp parse; the backend's format has drifted over time, and
/// a missing timestamp is not worth failing a fetch over.
fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            raw.parse::<DateTime<Utc>>().ok()
        })
}

pub fn snapshot_from_dto(dto: dto::StoryDto) -> Result<StorySnapshot, PersistenceError> {
    let raw_background = dto.background_story.unwrap_or_default();
    let (background, marker_cover) = split_cover_marker(&raw_background);
    let cover_ref = dto.cover_image_url.filter(|url| !url.trim().is_empty()).or(marker_cover);

    let scenes: Vec<Scene> = dto.scenes.into_iter().map(scene_from_dto).collect();

    let story = Story::builder()
        .id(StoryId::from(dto.id))
        .title(dto.title)
        .mode(dto.story_mode.unwrap_or_default())
        .scene_count(dto.nb_scenes.max(1))
        .character_target(dto.nb_chars.max(1))
        .background(background)
        .narrative(dto.future_story.unwrap_or_default())
        .analysis(dto.analysis.unwrap_or_default())
        .cover_ref(cover_ref)
        .scenes(scenes)
        .status(StoryStatus::from_server(dto.status.as_deref().unwrap_or("draft")))
        .created_at(parse_timestamp(dto.created_at.as_deref()))
        .updated_at(parse_timestamp(dto.updated_at.as_deref()))
        .build()
        .map_err(|e| {
            PersistenceError::new(PersistenceErrorKind::Deserialization(format!(
                "Incomplete story payload: {}",
                e
            )))
        })?;

    let characters = dto.characters.into_iter().map(record_from_dto).collect();

    Ok(StorySnapshot { story, characters })
}

pub fn record_from_dto(dto: dto::CharacterRecordDto) -> CharacterRecord {
    CharacterRecord {
        id: dto.id,
        name: dto.name,
        description: dto.description,
        image_ref: dto.image_url.filter(|url| !url.trim().is_empty()),
    }
}

pub fn scene_from_dto(dto: dto::SceneDto) -> Scene {
    Scene::new(dto.scene_number, dto.title, dto.image_url)
}

pub fn slot_to_dto(slot: &fresco_core::CharacterSlot) -> dto::CharacterWriteDto {
    dto::CharacterWriteDto {
        id: slot.id().as_persisted().map(str::to_string),
        name: slot.name().clone(),
        description: slot.description().clone(),
        image_url: slot.image_ref().clone(),
    }
}

pub fn write_to_dto(write: &CharacterWrite) -> dto::CharacterWriteDto {
    dto::CharacterWriteDto {
        id: write.id.clone(),
        name: write.name.clone(),
        description: write.description.clone(),
        image_url: write.image_ref.clone(),
    }
}

pub fn listing_from_dto(dto: dto::StoryDto) -> StoryListing {
    StoryListing {
        id: StoryId::from(dto.id),
        title: dto.title,
        mode: dto.story_mode.unwrap_or_default(),
        scene_count: dto.nb_scenes,
        character_target: dto.nb_chars,
        status: StoryStatus::from_server(dto.status.as_deref().unwrap_or("draft")),
        created_at: parse_timestamp(dto.created_at.as_deref()),
        updated_at: parse_timestamp(dto.updated_at.as_deref()),
    }
}
