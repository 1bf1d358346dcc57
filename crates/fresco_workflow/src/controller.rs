//! The workflow controller.

use crate::{AssetCache, CharacterRoster};
use fresco_core::{with_cover_marker, Author, CharacterSlot, Story, StoryId, StoryStatus};
use fresco_error::{FrescoResult, ValidationError, ValidationErrorKind};
use fresco_interface::{
    CharacterRecord, DraftParams, DraftUpdate, GenerationGateway, NarrativeOutput,
    PersistenceGateway, SceneSet, StoryListing,
};
use std::sync::Arc;
use tracing::instrument;

/// Outcome of a generation request or a completion application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Progress {
    /// The attempt ran to completion and mutated the aggregate
    Completed,
    /// A request of the same kind was already outstanding; nothing was done
    AlreadyInFlight,
    /// The completion arrived for a superseded view; nothing was done
    Discarded,
}

/// Proof that a generation attempt was admitted.
///
/// Minted when an attempt transitions the story into a generating status,
/// and presented back with the gateway's result. A ticket whose story id or
/// session epoch no longer matches the active aggregate identifies a
/// completion for a superseded view, which is discarded without touching
/// the aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptTicket {
    story_id: StoryId,
    epoch: u64,
    prior_status: StoryStatus,
}

impl AttemptTicket {
    /// The story this attempt was admitted for.
    pub fn story_id(&self) -> &StoryId {
        &self.story_id
    }
}

/// Orchestrator for one story view session.
///
/// Owns the story aggregate, the character roster, and the asset cache, and
/// is the only mutator of all three. Generic over the gateway traits so the
/// generation and persistence collaborators can be mocked in tests.
///
/// Concurrency model: one logical thread of control per story view, no
/// locks. At-most-one-in-flight per generation kind and the stale-response
/// guard are ordering discipline enforced here, not mutual exclusion.
pub struct WorkflowController<P, G> {
    persistence: Arc<P>,
    generation: Arc<G>,
    author: Author,
    story: Option<Story>,
    roster: CharacterRoster,
    server_records: Vec<CharacterRecord>,
    assets: AssetCache,
    epoch: u64,
}

impl<P, G> WorkflowController<P, G>
where
    P: PersistenceGateway,
    G: GenerationGateway,
{
    /// Create a controller for the given author and gateways.
    pub fn new(persistence: Arc<P>, generation: Arc<G>, author: Author) -> Self {
        Self {
            persistence,
            generation,
            author,
            story: None,
            roster: CharacterRoster::default(),
            server_records: Vec::new(),
            assets: AssetCache::default(),
            epoch: 0,
        }
    }

    /// The loaded story, when one is present.
    pub fn story(&self) -> Option<&Story> {
        self.story.as_ref()
    }

    /// The character roster.
    pub fn roster(&self) -> &CharacterRoster {
        &self.roster
    }

    /// The acting author.
    pub fn author(&self) -> &Author {
        &self.author
    }

    fn current(&self) -> Result<&Story, ValidationError> {
        self.story
            .as_ref()
            .ok_or_else(|| ValidationError::new(ValidationErrorKind::NoStoryLoaded))
    }

    /// Move the story along a generation edge of the status machine.
    ///
    /// Admission and completion transitions must be legal per
    /// `StoryStatus::can_transition`. Content-derived refinement and the
    /// abort rollback restore state rather than advance it, and do not go
    /// through here.
    fn transition(story: &mut Story, to: StoryStatus) {
        debug_assert!(
            story.status().can_transition(to),
            "illegal status transition: {} -> {}",
            story.status(),
            to
        );
        story.set_status(to);
    }

    /// Create a new draft on the backend and load it.
    #[instrument(skip(self, params), fields(title = %params.title))]
    pub async fn create_story(&mut self, mut params: DraftParams) -> FrescoResult<StoryId> {
        if params.title.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyTitle).into());
        }
        params.scene_count = params.scene_count.max(1);
        let max = params.scene_count.saturating_mul(2);
        if params.character_target < 1 || params.character_target > max {
            return Err(ValidationError::new(ValidationErrorKind::TargetOutOfBounds {
                requested: params.character_target,
                max,
            })
            .into());
        }
        params.author_email = self.author.email().clone();
        let id = self.persistence.create_draft(&params).await?;
        tracing::info!(story_id = %id, "Created story draft");
        self.load(&id).await?;
        Ok(id)
    }

    /// Fetch the story snapshot and reconcile local state against it.
    ///
    /// Bumps the session epoch, so completions minted before the load are
    /// discarded when they arrive. Local slot edits survive the reconcile;
    /// switching to a different story discards them.
    #[instrument(skip(self), fields(story_id = %id))]
    pub async fn load(&mut self, id: &StoryId) -> FrescoResult<()> {
        let snapshot = self.persistence.fetch_story(id).await?;
        self.epoch += 1;

        let same_story = self
            .story
            .as_ref()
            .is_some_and(|story| story.id() == snapshot.story.id());
        if !same_story {
            self.roster = CharacterRoster::default();
            self.assets = AssetCache::default();
        }

        let target = *snapshot.story.character_target();
        self.roster = CharacterRoster::reconcile(&snapshot.characters, &self.roster, target);
        self.server_records = snapshot.characters;
        self.story = Some(snapshot.story);
        self.refine_status();

        tracing::debug!(epoch = self.epoch, "Story loaded");
        Ok(())
    }

    /// List the author's stories for the history view.
    #[instrument(skip(self))]
    pub async fn list_stories(&self) -> FrescoResult<Vec<StoryListing>> {
        self.persistence.list_stories(&self.author).await
    }

    /// Persist the current draft fields and the roster.
    ///
    /// Ids assigned to freshly created characters are absorbed back into
    /// the roster.
    #[instrument(skip(self))]
    pub async fn save_draft(&mut self) -> FrescoResult<()> {
        let story = self.current()?;
        let id = story.id().clone();
        let update = self.draft_update()?;
        self.persistence.update_draft(&id, &update).await?;

        let records = self
            .persistence
            .replace_characters(&id, &self.roster.writes())
            .await?;
        self.roster.absorb_ids(&records);
        self.server_records = records;
        tracing::info!(story_id = %id, "Draft saved");
        Ok(())
    }

    /// Set the background premise text.
    pub fn set_background(&mut self, background: impl Into<String>) -> FrescoResult<()> {
        self.current()?;
        if let Some(story) = self.story.as_mut() {
            story.set_background(background);
        }
        self.refine_status();
        Ok(())
    }

    /// Set or clear the cover image reference.
    pub fn set_cover_ref(&mut self, cover_ref: Option<String>) -> FrescoResult<()> {
        self.current()?;
        if let Some(story) = self.story.as_mut() {
            story.set_cover_ref(cover_ref);
        }
        Ok(())
    }

    /// Apply an edit to one character slot.
    pub fn edit_slot(
        &mut self,
        index: usize,
        edit: impl FnOnce(&mut CharacterSlot),
    ) -> FrescoResult<()> {
        self.current()?;
        if !self.roster.update(index, edit) {
            return Err(ValidationError::new(ValidationErrorKind::SlotOutOfRange {
                index,
                count: self.roster.len(),
            })
            .into());
        }
        self.refine_status();
        Ok(())
    }

    /// Change the character target and resize the roster to match.
    pub fn set_character_target(&mut self, target: u32) -> FrescoResult<()> {
        self.current()?;
        if let Some(story) = self.story.as_mut() {
            story.set_character_target(target)?;
        }
        self.roster = CharacterRoster::reconcile(&self.server_records, &self.roster, target);
        self.refine_status();
        Ok(())
    }

    /// Edit the draft details: title, mode, and scene count.
    ///
    /// The scene count is locked once a narrative exists; lowering it clamps
    /// the character target, and the roster is resized to the clamped value.
    pub fn edit_details(
        &mut self,
        title: impl Into<String>,
        mode: impl Into<String>,
        scene_count: u32,
    ) -> FrescoResult<()> {
        self.current()?;
        let target = if let Some(story) = self.story.as_mut() {
            // The scene count can be rejected; change it before touching
            // title and mode so a failed edit leaves the draft untouched.
            story.set_scene_count(scene_count)?;
            story.set_title(title);
            story.set_mode(mode);
            *story.character_target()
        } else {
            return Err(ValidationError::new(ValidationErrorKind::NoStoryLoaded).into());
        };
        self.roster = CharacterRoster::reconcile(&self.server_records, &self.roster, target);
        self.refine_status();
        Ok(())
    }

    /// Admit a narrative generation attempt.
    ///
    /// Validates the preconditions before any side effect: a non-empty
    /// background and a fully complete roster. Returns `None` when an
    /// attempt of either kind is already outstanding.
    pub fn begin_narrative(&mut self) -> FrescoResult<Option<AttemptTicket>> {
        let story = self.current()?;
        if story.status().is_generating() {
            tracing::debug!(status = %story.status(), "Generation already in flight; ignoring");
            return Ok(None);
        }
        if !story.has_background() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyBackground).into());
        }
        if !self.roster.is_complete() {
            return Err(ValidationError::new(ValidationErrorKind::IncompleteCharacters {
                required: *story.character_target(),
                missing: self.roster.incomplete_count(),
            })
            .into());
        }

        let ticket = AttemptTicket {
            story_id: story.id().clone(),
            epoch: self.epoch,
            prior_status: *story.status(),
        };
        if let Some(story) = self.story.as_mut() {
            Self::transition(story, StoryStatus::NarrativeGenerating);
        }
        Ok(Some(ticket))
    }

    /// Write or Rewrite: generate the narrative from the premise and roster.
    ///
    /// The draft is persisted first; a persistence failure aborts the
    /// attempt and restores the prior status. The roster sync that follows
    /// is best-effort and never blocks generation.
    #[instrument(skip(self))]
    pub async fn request_narrative(&mut self) -> FrescoResult<Progress> {
        let Some(ticket) = self.begin_narrative()? else {
            return Ok(Progress::AlreadyInFlight);
        };
        tracing::info!(story_id = %ticket.story_id, "Starting narrative generation");

        let update = self.draft_update()?;
        if let Err(e) = self
            .persistence
            .update_draft(&ticket.story_id, &update)
            .await
        {
            tracing::error!("Draft persistence failed; aborting generation: {}", e);
            if let Some(story) = self.story.as_mut() {
                story.set_status(ticket.prior_status);
            }
            return Err(e);
        }

        match self
            .persistence
            .replace_characters(&ticket.story_id, &self.roster.writes())
            .await
        {
            Ok(records) => {
                self.roster.absorb_ids(&records);
                self.server_records = records;
            }
            Err(e) => {
                tracing::warn!("Character sync failed; generating anyway: {}", e);
            }
        }

        let background = self.current()?.background().clone();
        let result = self
            .generation
            .generate_narrative(&ticket.story_id, &background, self.roster.slots())
            .await;
        self.apply_narrative(ticket, result)
    }

    /// Apply a narrative generation outcome.
    ///
    /// Stale tickets are dropped silently. Success stores the narrative and
    /// analysis; failure transitions to `Failed`, preserving any previously
    /// generated narrative text.
    pub fn apply_narrative(
        &mut self,
        ticket: AttemptTicket,
        result: FrescoResult<NarrativeOutput>,
    ) -> FrescoResult<Progress> {
        if self.is_stale(&ticket) {
            tracing::debug!(story_id = %ticket.story_id, "Discarding stale narrative completion");
            return Ok(Progress::Discarded);
        }
        let Some(story) = self.story.as_mut() else {
            return Ok(Progress::Discarded);
        };
        match result {
            Ok(output) => {
                story.set_narrative(output.narrative, output.analysis);
                Self::transition(story, StoryStatus::NarrativeReady);
                tracing::info!(story_id = %ticket.story_id, "Narrative ready");
                Ok(Progress::Completed)
            }
            Err(e) => {
                Self::transition(story, StoryStatus::Failed);
                tracing::error!(story_id = %ticket.story_id, "Narrative generation failed: {}", e);
                Err(e)
            }
        }
    }

    /// Admit an image generation attempt.
    ///
    /// Requires a narrative; returns `None` when an attempt of either kind
    /// is already outstanding.
    pub fn begin_images(&mut self) -> FrescoResult<Option<AttemptTicket>> {
        let story = self.current()?;
        if story.status().is_generating() {
            tracing::debug!(status = %story.status(), "Generation already in flight; ignoring");
            return Ok(None);
        }
        if !story.has_narrative() {
            return Err(ValidationError::new(ValidationErrorKind::NarrativeNotReady).into());
        }

        let ticket = AttemptTicket {
            story_id: story.id().clone(),
            epoch: self.epoch,
            prior_status: *story.status(),
        };
        if let Some(story) = self.story.as_mut() {
            Self::transition(story, StoryStatus::ImagesGenerating);
        }
        Ok(Some(ticket))
    }

    /// Draw or Redraw: generate the per-scene image set.
    #[instrument(skip(self))]
    pub async fn request_images(&mut self) -> FrescoResult<Progress> {
        let Some(ticket) = self.begin_images()? else {
            return Ok(Progress::AlreadyInFlight);
        };
        tracing::info!(story_id = %ticket.story_id, "Starting image generation");

        let result = self.generation.generate_images(&ticket.story_id).await;
        self.apply_images(ticket, result)
    }

    /// Apply an image generation outcome.
    ///
    /// Stale tickets are dropped silently. Success replaces the scene set
    /// and bumps the asset token exactly once; failure transitions to
    /// `Failed`, leaving scenes and token untouched.
    pub fn apply_images(
        &mut self,
        ticket: AttemptTicket,
        result: FrescoResult<SceneSet>,
    ) -> FrescoResult<Progress> {
        if self.is_stale(&ticket) {
            tracing::debug!(story_id = %ticket.story_id, "Discarding stale image completion");
            return Ok(Progress::Discarded);
        }
        let Some(story) = self.story.as_mut() else {
            return Ok(Progress::Discarded);
        };
        match result {
            Ok(set) => {
                let expected = *story.scene_count() as usize;
                if set.scenes.len() != expected {
                    // The server is authoritative for what it rendered.
                    tracing::warn!(
                        expected,
                        returned = set.scenes.len(),
                        "Scene count mismatch in image set"
                    );
                }
                story.set_scenes(set.scenes);
                Self::transition(story, StoryStatus::ImagesReady);
                self.assets.bump();
                tracing::info!(story_id = %ticket.story_id, "Images ready");
                Ok(Progress::Completed)
            }
            Err(e) => {
                Self::transition(story, StoryStatus::Failed);
                tracing::error!(story_id = %ticket.story_id, "Image generation failed: {}", e);
                Err(e)
            }
        }
    }

    /// Manually invalidate cached asset URLs.
    pub fn refresh_assets(&mut self) {
        self.assets.bump();
    }

    /// Decorate an asset URL with the current invalidation token.
    pub fn asset_url(&self, url: &str) -> String {
        self.assets.decorate(url)
    }

    /// Fetch the downloadable story package.
    #[instrument(skip(self))]
    pub async fn download_package(&self) -> FrescoResult<Vec<u8>> {
        let story = self.current()?;
        self.persistence.fetch_download_package(story.id()).await
    }

    fn is_stale(&self, ticket: &AttemptTicket) -> bool {
        if ticket.epoch != self.epoch {
            return true;
        }
        match &self.story {
            Some(story) => story.id() != &ticket.story_id,
            None => true,
        }
    }

    fn draft_update(&self) -> FrescoResult<DraftUpdate> {
        let story = self.current()?;
        Ok(DraftUpdate {
            title: story.title().clone(),
            scene_count: *story.scene_count(),
            character_target: *story.character_target(),
            mode: story.mode().clone(),
            author_email: self.author.email().clone(),
            cover_ref: story.cover_ref().clone(),
            background: with_cover_marker(story.background(), story.cover_ref().as_deref()),
        })
    }

    /// Refine the status from content: scenes, narrative, background, and
    /// roster completeness, in that order. Generating and failed statuses
    /// are preserved; only user actions and completions move past them.
    fn refine_status(&mut self) {
        let roster_complete = self.roster.is_complete();
        let Some(story) = self.story.as_mut() else {
            return;
        };
        if story.status().is_generating() || *story.status() == StoryStatus::Failed {
            return;
        }
        let refined = if !story.scenes().is_empty() {
            StoryStatus::ImagesReady
        } else if story.has_narrative() {
            StoryStatus::NarrativeReady
        } else if !story.has_background() {
            StoryStatus::Draft
        } else if roster_complete {
            StoryStatus::ReadyToGenerateNarrative
        } else {
            StoryStatus::CharactersIncomplete
        };
        story.set_status(refined);
    }
}
