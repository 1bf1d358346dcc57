// Controller tests against scripted mock gateways.
//
// These validate ordering, validation short-circuits, single-flight, and
// the stale-response guard without any real backend.

mod test_utils;

use fresco_core::{StoryId, StoryStatus};
use fresco_error::{FrescoErrorKind, ValidationErrorKind};
use fresco_interface::{DraftParams, GenerationGateway};
use fresco_workflow::{Progress, WorkflowController};
use std::sync::Arc;
use test_utils::{author, complete_record, snapshot, MockGeneration, MockPersistence};

fn controller(
    persistence: Arc<MockPersistence>,
    generation: Arc<MockGeneration>,
) -> WorkflowController<MockPersistence, MockGeneration> {
    WorkflowController::new(persistence, generation, author())
}

#[tokio::test]
async fn test_write_happy_path() -> anyhow::Result<()> {
    let persistence = Arc::new(MockPersistence::new(snapshot(
        "s-1",
        "A mystical realm.",
        "",
        vec![complete_record("c-1", "Aria"), complete_record("c-2", "Bram")],
    )));
    let generation = Arc::new(MockGeneration::new());
    let mut controller = controller(persistence.clone(), generation.clone());

    controller.load(&StoryId::from("s-1")).await?;
    assert_eq!(
        *controller.story().unwrap().status(),
        StoryStatus::ReadyToGenerateNarrative
    );

    let progress = controller.request_narrative().await?;
    assert_eq!(progress, Progress::Completed);

    let story = controller.story().unwrap();
    assert_eq!(*story.status(), StoryStatus::NarrativeReady);
    assert!(story.has_narrative());
    assert_eq!(persistence.update_count(), 1);
    assert_eq!(persistence.characters_count(), 1);
    assert_eq!(generation.narrative_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_empty_background_blocks_write_before_any_call() -> anyhow::Result<()> {
    let persistence = Arc::new(MockPersistence::new(snapshot(
        "s-1",
        "",
        "",
        vec![complete_record("c-1", "Aria")],
    )));
    let generation = Arc::new(MockGeneration::new());
    let mut controller = controller(persistence.clone(), generation.clone());

    controller.load(&StoryId::from("s-1")).await?;
    let err = controller.request_narrative().await.unwrap_err();

    assert!(err.is_validation());
    match err.kind() {
        FrescoErrorKind::Validation(v) => {
            assert_eq!(v.kind, ValidationErrorKind::EmptyBackground)
        }
        other => panic!("expected validation error, got {}", other),
    }
    assert_eq!(persistence.update_count(), 0);
    assert_eq!(persistence.characters_count(), 0);
    assert_eq!(generation.narrative_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_incomplete_slot_blocks_write_naming_count() -> anyhow::Result<()> {
    let mut incomplete = complete_record("c-2", "Bram");
    incomplete.image_ref = None;
    let persistence = Arc::new(MockPersistence::new(snapshot(
        "s-1",
        "A mystical realm.",
        "",
        vec![complete_record("c-1", "Aria"), incomplete],
    )));
    let generation = Arc::new(MockGeneration::new());
    let mut controller = controller(persistence.clone(), generation.clone());

    controller.load(&StoryId::from("s-1")).await?;
    assert_eq!(
        *controller.story().unwrap().status(),
        StoryStatus::CharactersIncomplete
    );

    let err = controller.request_narrative().await.unwrap_err();
    match err.kind() {
        FrescoErrorKind::Validation(v) => assert_eq!(
            v.kind,
            ValidationErrorKind::IncompleteCharacters {
                required: 2,
                missing: 1
            }
        ),
        other => panic!("expected validation error, got {}", other),
    }
    assert_eq!(generation.narrative_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_draw_before_narrative_is_rejected() -> anyhow::Result<()> {
    let persistence = Arc::new(MockPersistence::new(snapshot(
        "s-1",
        "A mystical realm.",
        "",
        vec![complete_record("c-1", "Aria")],
    )));
    let generation = Arc::new(MockGeneration::new());
    let mut controller = controller(persistence, generation.clone());

    controller.load(&StoryId::from("s-1")).await?;
    let err = controller.request_images().await.unwrap_err();

    match err.kind() {
        FrescoErrorKind::Validation(v) => {
            assert_eq!(v.kind, ValidationErrorKind::NarrativeNotReady)
        }
        other => panic!("expected validation error, got {}", other),
    }
    assert_eq!(generation.images_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_second_write_while_generating_is_a_no_op() -> anyhow::Result<()> {
    let persistence = Arc::new(MockPersistence::new(snapshot(
        "s-1",
        "A mystical realm.",
        "",
        vec![complete_record("c-1", "Aria")],
    )));
    let generation = Arc::new(MockGeneration::new());
    let mut controller = controller(persistence.clone(), generation.clone());

    controller.load(&StoryId::from("s-1")).await?;
    let ticket = controller.begin_narrative()?.expect("attempt admitted");
    assert_eq!(
        *controller.story().unwrap().status(),
        StoryStatus::NarrativeGenerating
    );

    // A second request while the first is outstanding does nothing.
    let progress = controller.request_narrative().await?;
    assert_eq!(progress, Progress::AlreadyInFlight);
    assert_eq!(persistence.update_count(), 0);
    assert_eq!(generation.narrative_count(), 0);

    let result = generation
        .generate_narrative(ticket.story_id(), "A mystical realm.", &[])
        .await;
    let progress = controller.apply_narrative(ticket, result)?;
    assert_eq!(progress, Progress::Completed);
    assert_eq!(
        *controller.story().unwrap().status(),
        StoryStatus::NarrativeReady
    );
    Ok(())
}

#[tokio::test]
async fn test_draft_persistence_failure_aborts_write() -> anyhow::Result<()> {
    let persistence = Arc::new(
        MockPersistence::new(snapshot(
            "s-1",
            "A mystical realm.",
            "",
            vec![complete_record("c-1", "Aria")],
        ))
        .with_update_failure(),
    );
    let generation = Arc::new(MockGeneration::new());
    let mut controller = controller(persistence.clone(), generation.clone());

    controller.load(&StoryId::from("s-1")).await?;
    let err = controller.request_narrative().await.unwrap_err();

    assert!(matches!(err.kind(), FrescoErrorKind::Persistence(_)));
    // Prior status restored; no generation or roster call was made.
    assert_eq!(
        *controller.story().unwrap().status(),
        StoryStatus::ReadyToGenerateNarrative
    );
    assert_eq!(persistence.characters_count(), 0);
    assert_eq!(generation.narrative_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_character_sync_failure_is_swallowed() -> anyhow::Result<()> {
    let persistence = Arc::new(
        MockPersistence::new(snapshot(
            "s-1",
            "A mystical realm.",
            "",
            vec![complete_record("c-1", "Aria")],
        ))
        .with_character_failure(),
    );
    let generation = Arc::new(MockGeneration::new());
    let mut controller = controller(persistence.clone(), generation.clone());

    controller.load(&StoryId::from("s-1")).await?;
    let progress = controller.request_narrative().await?;

    assert_eq!(progress, Progress::Completed);
    assert_eq!(persistence.characters_count(), 1);
    assert_eq!(generation.narrative_count(), 1);
    assert_eq!(
        *controller.story().unwrap().status(),
        StoryStatus::NarrativeReady
    );
    Ok(())
}

#[tokio::test]
async fn test_narrative_failure_preserves_previous_text() -> anyhow::Result<()> {
    let persistence = Arc::new(MockPersistence::new(snapshot(
        "s-1",
        "A mystical realm.",
        "The first draft narrative.",
        vec![complete_record("c-1", "Aria")],
    )));
    let generation = Arc::new(MockGeneration::new().with_narrative_failure("model overloaded"));
    let mut controller = controller(persistence, generation);

    controller.load(&StoryId::from("s-1")).await?;
    let err = controller.request_narrative().await.unwrap_err();

    assert!(matches!(err.kind(), FrescoErrorKind::Generation(_)));
    let story = controller.story().unwrap();
    assert_eq!(*story.status(), StoryStatus::Failed);
    assert_eq!(story.narrative(), "The first draft narrative.");
    Ok(())
}

#[tokio::test]
async fn test_image_success_bumps_token_exactly_once() -> anyhow::Result<()> {
    let persistence = Arc::new(MockPersistence::new(snapshot(
        "s-1",
        "A mystical realm.",
        "A narrative.",
        vec![complete_record("c-1", "Aria")],
    )));
    let generation = Arc::new(MockGeneration::new());
    let mut controller = controller(persistence, generation);

    controller.load(&StoryId::from("s-1")).await?;
    let before = controller.asset_url("/assets/scene-1.png");

    let progress = controller.request_images().await?;
    assert_eq!(progress, Progress::Completed);

    let story = controller.story().unwrap();
    assert_eq!(*story.status(), StoryStatus::ImagesReady);
    assert_eq!(story.scenes().len(), 2);

    let after = controller.asset_url("/assets/scene-1.png");
    assert_ne!(before, after);
    Ok(())
}

#[tokio::test]
async fn test_image_failure_leaves_scenes_and_token() -> anyhow::Result<()> {
    let persistence = Arc::new(MockPersistence::new(snapshot(
        "s-1",
        "A mystical realm.",
        "A narrative.",
        vec![complete_record("c-1", "Aria")],
    )));
    let generation = Arc::new(MockGeneration::new().with_images_failure("render farm down"));
    let mut controller = controller(persistence, generation);

    controller.load(&StoryId::from("s-1")).await?;
    let before = controller.asset_url("/assets/scene-1.png");

    let err = controller.request_images().await.unwrap_err();
    assert!(matches!(err.kind(), FrescoErrorKind::Generation(_)));

    let story = controller.story().unwrap();
    assert_eq!(*story.status(), StoryStatus::Failed);
    assert!(story.scenes().is_empty());
    assert_eq!(controller.asset_url("/assets/scene-1.png"), before);
    Ok(())
}

#[tokio::test]
async fn test_stale_ticket_is_discarded() -> anyhow::Result<()> {
    let persistence = Arc::new(MockPersistence::new(snapshot(
        "s-1",
        "A mystical realm.",
        "A narrative.",
        vec![complete_record("c-1", "Aria")],
    )));
    let generation = Arc::new(MockGeneration::new());
    let mut controller = controller(persistence, generation.clone());

    controller.load(&StoryId::from("s-1")).await?;
    let ticket = controller.begin_images()?.expect("attempt admitted");

    // Reloading supersedes the outstanding attempt.
    controller.load(&StoryId::from("s-1")).await?;

    let result = generation.generate_images(ticket.story_id()).await;
    let progress = controller.apply_images(ticket, result)?;
    assert_eq!(progress, Progress::Discarded);

    let story = controller.story().unwrap();
    assert!(story.scenes().is_empty());
    assert_ne!(*story.status(), StoryStatus::ImagesReady);
    Ok(())
}

#[tokio::test]
async fn test_local_edits_survive_reload() -> anyhow::Result<()> {
    let persistence = Arc::new(MockPersistence::new(snapshot(
        "s-1",
        "A mystical realm.",
        "",
        vec![complete_record("c-1", "Aria")],
    )));
    let generation = Arc::new(MockGeneration::new());
    let mut controller = controller(persistence, generation);

    controller.load(&StoryId::from("s-1")).await?;
    controller.edit_slot(0, |slot| slot.set_name("Aria Renamed"))?;

    controller.load(&StoryId::from("s-1")).await?;
    assert_eq!(controller.roster().slots()[0].name(), "Aria Renamed");
    Ok(())
}

#[tokio::test]
async fn test_save_draft_absorbs_assigned_ids() -> anyhow::Result<()> {
    let persistence = Arc::new(MockPersistence::new(snapshot(
        "s-1",
        "A mystical realm.",
        "",
        vec![],
    )));
    let generation = Arc::new(MockGeneration::new());
    let mut controller = controller(persistence.clone(), generation);

    controller.load(&StoryId::from("s-1")).await?;
    controller.edit_slot(0, |slot| {
        slot.set_name("Fresh Face");
        slot.set_description("Created locally");
        slot.set_image_ref(Some("/assets/fresh.png".to_string()));
    })?;

    controller.save_draft().await?;
    assert_eq!(persistence.update_count(), 1);
    assert_eq!(persistence.characters_count(), 1);
    assert_eq!(
        controller.roster().slots()[0].id().as_persisted(),
        Some("assigned-0")
    );
    Ok(())
}

#[tokio::test]
async fn test_target_change_resizes_roster() -> anyhow::Result<()> {
    let persistence = Arc::new(MockPersistence::new(snapshot(
        "s-1",
        "A mystical realm.",
        "",
        vec![complete_record("c-1", "Aria")],
    )));
    let generation = Arc::new(MockGeneration::new());
    let mut controller = controller(persistence, generation);

    controller.load(&StoryId::from("s-1")).await?;
    assert_eq!(controller.roster().len(), 1);

    controller.set_character_target(3)?;
    assert_eq!(controller.roster().len(), 3);
    assert_eq!(controller.roster().slots()[0].name(), "Aria");

    // Bounded by twice the scene count.
    let err = controller.set_character_target(9).unwrap_err();
    assert!(err.is_validation());
    Ok(())
}

#[tokio::test]
async fn test_create_rejects_out_of_bounds_target() -> anyhow::Result<()> {
    let persistence = Arc::new(MockPersistence::new(snapshot(
        "s-1",
        "",
        "",
        vec![],
    )));
    let generation = Arc::new(MockGeneration::new());
    let mut controller = controller(persistence.clone(), generation);

    let params = DraftParams {
        title: "The Enchanted Quest".to_string(),
        scene_count: 4,
        character_target: 20,
        mode: "fantasy".to_string(),
        author_email: String::new(),
        cover_ref: None,
    };
    let err = controller.create_story(params).await.unwrap_err();

    match err.kind() {
        FrescoErrorKind::Validation(v) => assert_eq!(
            v.kind,
            ValidationErrorKind::TargetOutOfBounds {
                requested: 20,
                max: 8
            }
        ),
        other => panic!("expected validation error, got {}", other),
    }
    assert_eq!(persistence.create_count(), 0);

    let params = DraftParams {
        title: "The Enchanted Quest".to_string(),
        scene_count: 4,
        character_target: 8,
        mode: "fantasy".to_string(),
        author_email: String::new(),
        cover_ref: None,
    };
    controller.create_story(params).await?;
    assert_eq!(persistence.create_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_failed_details_edit_leaves_draft_untouched() -> anyhow::Result<()> {
    let persistence = Arc::new(MockPersistence::new(snapshot(
        "s-1",
        "A mystical realm.",
        "A narrative.",
        vec![complete_record("c-1", "Aria")],
    )));
    let generation = Arc::new(MockGeneration::new());
    let mut controller = controller(persistence, generation);

    controller.load(&StoryId::from("s-1")).await?;
    let err = controller
        .edit_details("New Title", "mystery", 6)
        .unwrap_err();

    assert!(err.is_validation());
    let story = controller.story().unwrap();
    assert_eq!(story.title(), "Test Story");
    assert_eq!(story.mode(), "Adventure");
    assert_eq!(*story.scene_count(), 4);
    Ok(())
}

#[tokio::test]
async fn test_edit_out_of_range_slot_is_rejected() -> anyhow::Result<()> {
    let persistence = Arc::new(MockPersistence::new(snapshot(
        "s-1",
        "A mystical realm.",
        "",
        vec![complete_record("c-1", "Aria")],
    )));
    let generation = Arc::new(MockGeneration::new());
    let mut controller = controller(persistence, generation);

    controller.load(&StoryId::from("s-1")).await?;
    let err = controller
        .edit_slot(3, |slot| slot.set_name("Nobody"))
        .unwrap_err();

    match err.kind() {
        FrescoErrorKind::Validation(v) => {
            assert_eq!(
                v.kind,
                ValidationErrorKind::SlotOutOfRange { index: 3, count: 1 }
            )
        }
        other => panic!("expected validation error, got {}", other),
    }
    assert_eq!(controller.roster().slots()[0].name(), "Aria");
    Ok(())
}

#[tokio::test]
async fn test_download_package_requires_loaded_story() -> anyhow::Result<()> {
    let persistence = Arc::new(MockPersistence::new(snapshot(
        "s-1",
        "A mystical realm.",
        "",
        vec![],
    )));
    let generation = Arc::new(MockGeneration::new());
    let mut controller = controller(persistence, generation);

    let err = controller.download_package().await.unwrap_err();
    assert!(err.is_validation());

    controller.load(&StoryId::from("s-1")).await?;
    let bytes = controller.download_package().await?;
    assert_eq!(bytes, b"package bytes");
    Ok(())
}
