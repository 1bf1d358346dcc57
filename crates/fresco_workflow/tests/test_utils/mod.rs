//! Mock gateways for controller testing.

use async_trait::async_trait;
use fresco_core::{Author, CharacterSlot, Scene, Story, StoryId, StoryStatus};
use fresco_error::{
    FrescoResult, GenerationError, GenerationErrorKind, PersistenceError, PersistenceErrorKind,
};
use fresco_interface::{
    CharacterRecord, CharacterWrite, DraftParams, DraftUpdate, GenerationGateway, NarrativeOutput,
    PersistenceGateway, SceneSet, StoryListing, StorySnapshot,
};
use std::sync::Mutex;

/// Mock persistence gateway with scripted failures and call counting.
pub struct MockPersistence {
    snapshot: StorySnapshot,
    fail_update: bool,
    fail_characters: bool,
    create_count: Mutex<usize>,
    fetch_count: Mutex<usize>,
    update_count: Mutex<usize>,
    characters_count: Mutex<usize>,
}

impl MockPersistence {
    /// A gateway where every call succeeds, serving the given snapshot.
    pub fn new(snapshot: StorySnapshot) -> Self {
        Self {
            snapshot,
            fail_update: false,
            fail_characters: false,
            create_count: Mutex::new(0),
            fetch_count: Mutex::new(0),
            update_count: Mutex::new(0),
            characters_count: Mutex::new(0),
        }
    }

    /// Make every `update_draft` call fail.
    #[allow(dead_code)]
    pub fn with_update_failure(mut self) -> Self {
        self.fail_update = true;
        self
    }

    /// Make every `replace_characters` call fail.
    #[allow(dead_code)]
    pub fn with_character_failure(mut self) -> Self {
        self.fail_characters = true;
        self
    }

    #[allow(dead_code)]
    pub fn create_count(&self) -> usize {
        *self.create_count.lock().unwrap()
    }

    #[allow(dead_code)]
    pub fn fetch_count(&self) -> usize {
        *self.fetch_count.lock().unwrap()
    }

    pub fn update_count(&self) -> usize {
        *self.update_count.lock().unwrap()
    }

    pub fn characters_count(&self) -> usize {
        *self.characters_count.lock().unwrap()
    }
}

#[async_trait]
impl PersistenceGateway for MockPersistence {
    async fn create_draft(&self, _params: &DraftParams) -> FrescoResult<StoryId> {
        *self.create_count.lock().unwrap() += 1;
        Ok(self.snapshot.story.id().clone())
    }

    async fn fetch_story(&self, _id: &StoryId) -> FrescoResult<StorySnapshot> {
        *self.fetch_count.lock().unwrap() += 1;
        Ok(self.snapshot.clone())
    }

    async fn update_draft(&self, _id: &StoryId, _update: &DraftUpdate) -> FrescoResult<()> {
        *self.update_count.lock().unwrap() += 1;
        if self.fail_update {
            return Err(PersistenceError::new(PersistenceErrorKind::Api(
                "Update rejected".to_string(),
            ))
            .into());
        }
        Ok(())
    }

    async fn replace_characters(
        &self,
        _id: &StoryId,
        writes: &[CharacterWrite],
    ) -> FrescoResult<Vec<CharacterRecord>> {
        *self.characters_count.lock().unwrap() += 1;
        if self.fail_characters {
            return Err(PersistenceError::new(PersistenceErrorKind::Http(
                "Connection reset".to_string(),
            ))
            .into());
        }
        // Echo the writes back, assigning ids to the creates.
        Ok(writes
            .iter()
            .enumerate()
            .map(|(index, write)| CharacterRecord {
                id: write
                    .id
                    .clone()
                    .unwrap_or_else(|| format!("assigned-{}", index)),
                name: write.name.clone(),
                description: write.description.clone(),
                image_ref: write.image_ref.clone(),
            })
            .collect())
    }

    async fn list_stories(&self, _author: &Author) -> FrescoResult<Vec<StoryListing>> {
        Ok(Vec::new())
    }

    async fn fetch_download_package(&self, _id: &StoryId) -> FrescoResult<Vec<u8>> {
        Ok(b"package bytes".to_vec())
    }
}

/// Mock generation gateway with scripted outcomes and call counting.
pub struct MockGeneration {
    narrative_error: Option<String>,
    images_error: Option<String>,
    scenes: Vec<Scene>,
    narrative_count: Mutex<usize>,
    images_count: Mutex<usize>,
}

impl MockGeneration {
    /// A gateway where both operations succeed.
    pub fn new() -> Self {
        Self {
            narrative_error: None,
            images_error: None,
            scenes: vec![
                Scene::new(1, "Opening", "/assets/scene-1.png"),
                Scene::new(2, "Climax", "/assets/scene-2.png"),
            ],
            narrative_count: Mutex::new(0),
            images_count: Mutex::new(0),
        }
    }

    /// Make narrative generation fail with the given message.
    #[allow(dead_code)]
    pub fn with_narrative_failure(mut self, message: impl Into<String>) -> Self {
        self.narrative_error = Some(message.into());
        self
    }

    /// Make image generation fail with the given message.
    #[allow(dead_code)]
    pub fn with_images_failure(mut self, message: impl Into<String>) -> Self {
        self.images_error = Some(message.into());
        self
    }

    pub fn narrative_count(&self) -> usize {
        *self.narrative_count.lock().unwrap()
    }

    pub fn images_count(&self) -> usize {
        *self.images_count.lock().unwrap()
    }
}

#[async_trait]
impl GenerationGateway for MockGeneration {
    async fn generate_narrative(
        &self,
        _id: &StoryId,
        _background: &str,
        _characters: &[CharacterSlot],
    ) -> FrescoResult<NarrativeOutput> {
        *self.narrative_count.lock().unwrap() += 1;
        match &self.narrative_error {
            Some(message) => Err(GenerationError::new(GenerationErrorKind::Narrative(
                message.clone(),
            ))
            .into()),
            None => Ok(NarrativeOutput {
                narrative: "Scene 1: The journey begins.".to_string(),
                analysis: "Two characters, four scenes.".to_string(),
            }),
        }
    }

    async fn generate_images(&self, _id: &StoryId) -> FrescoResult<SceneSet> {
        *self.images_count.lock().unwrap() += 1;
        match &self.images_error {
            Some(message) => Err(GenerationError::new(GenerationErrorKind::Images(
                message.clone(),
            ))
            .into()),
            None => Ok(SceneSet {
                scenes: self.scenes.clone(),
            }),
        }
    }
}

/// A character record whose slot will pass completeness validation.
pub fn complete_record(id: &str, name: &str) -> CharacterRecord {
    CharacterRecord {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} description", name),
        image_ref: Some(format!("/assets/{}.png", id)),
    }
}

/// Build a snapshot for a story in the given state.
pub fn snapshot(
    id: &str,
    background: &str,
    narrative: &str,
    characters: Vec<CharacterRecord>,
) -> StorySnapshot {
    let story = Story::builder()
        .id(StoryId::from(id))
        .title("Test Story")
        .mode("Adventure")
        .scene_count(4u32)
        .character_target(characters.len().max(1) as u32)
        .background(background)
        .narrative(narrative)
        .status(StoryStatus::Draft)
        .build()
        .expect("valid test story");
    StorySnapshot { story, characters }
}

/// The author every controller test acts as.
pub fn author() -> Author {
    Author::new("test@example.com", "user-1")
}
